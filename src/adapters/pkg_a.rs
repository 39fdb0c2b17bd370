use crate::domain::ports::Sibling;

pub use crate::domain::model::{Config, User};

pub const VERSION: &str = "1.0.0";

pub fn hello_from_a() -> String {
    "Hello from A".to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PackageA;

impl Sibling for PackageA {
    fn hello(&self) -> String {
        hello_from_a()
    }

    fn version(&self) -> &str {
        VERSION
    }
}
