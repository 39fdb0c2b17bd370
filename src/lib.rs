pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::OutputFormat;

pub use adapters::pkg_a::{self, PackageA};
pub use config::toml_config::TomlConfig;
pub use core::helpers::{create_config, create_user, hello_from, hello_from_b};
pub use domain::model::{Config, User};
pub use domain::ports::Sibling;
pub use utils::error::{PkgError, Result};
