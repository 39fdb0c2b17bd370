pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl OutputFormat {
    /// TOML output needs a table at the top level.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Toml => Ok(toml::to_string(value)?),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hello-pkgs")]
#[command(about = "Greetings, users and configs from package B")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the combined greeting from packages A and B
    Hello,
    /// Build a user from an id and a display name
    User {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Print the default config, or one loaded from a TOML file
    Config {
        #[arg(long)]
        file: Option<std::path::PathBuf>,
    },
}

#[cfg(feature = "cli")]
impl Command {
    /// Text printed to stdout for this subcommand.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        use crate::adapters::pkg_a;
        use crate::config::toml_config::TomlConfig;
        use crate::core::helpers::{create_config, create_user, hello_from_b};

        match self {
            Command::Hello => {
                tracing::debug!("Using package A version {}", pkg_a::VERSION);
                Ok(hello_from_b())
            }
            Command::User { id, name } => format.render(&create_user(id.as_str(), name.as_str())),
            Command::Config { file } => {
                let config = match file {
                    Some(path) => TomlConfig::from_file(path)?.into_config()?,
                    None => create_config(),
                };
                tracing::info!("Config: {} (timeout {}ms)", config.api_url, config.timeout);
                match format {
                    OutputFormat::Json => format.render(&config),
                    OutputFormat::Toml => TomlConfig::from(config).to_toml_string(),
                }
            }
        }
    }
}
