use crate::adapters::pkg_a::PackageA;
use crate::domain::model::{Config, User};
use crate::domain::ports::Sibling;

pub const DEFAULT_API_URL: &str = "https://api.example.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

pub fn hello_from_b() -> String {
    hello_from(&PackageA)
}

/// Greeting built from any sibling package's exports.
pub fn hello_from<S: Sibling + ?Sized>(sibling: &S) -> String {
    format!(
        "{} and Hello from package B (version: {})",
        sibling.hello(),
        sibling.version()
    )
}

pub fn create_user(id: impl Into<String>, name: impl Into<String>) -> User {
    User {
        id: id.into(),
        name: name.into(),
    }
}

pub fn create_config() -> Config {
    Config {
        api_url: DEFAULT_API_URL.to_string(),
        timeout: DEFAULT_TIMEOUT_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSibling {
        hello: &'static str,
        version: &'static str,
    }

    impl Sibling for StubSibling {
        fn hello(&self) -> String {
            self.hello.to_string()
        }

        fn version(&self) -> &str {
            self.version
        }
    }

    #[test]
    fn test_hello_from_stubbed_sibling() {
        let stub = StubSibling {
            hello: "Hello from A",
            version: "1.0.0",
        };
        assert_eq!(
            hello_from(&stub),
            "Hello from A and Hello from package B (version: 1.0.0)"
        );
    }

    #[test]
    fn test_hello_from_echoes_sibling_values_verbatim() {
        let stub = StubSibling {
            hello: "",
            version: "2.3.4-beta",
        };
        assert_eq!(
            hello_from(&stub),
            " and Hello from package B (version: 2.3.4-beta)"
        );
    }

    #[test]
    fn test_hello_from_b_uses_package_a() {
        assert_eq!(
            hello_from_b(),
            "Hello from A and Hello from package B (version: 1.0.0)"
        );
    }

    #[test]
    fn test_create_user() {
        let user = create_user("u1", "Alice");
        assert_eq!(
            user,
            User {
                id: "u1".to_string(),
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_create_user_keeps_empty_strings() {
        let user = create_user("", "");
        assert_eq!(user.id, "");
        assert_eq!(user.name, "");
    }

    #[test]
    fn test_create_config_is_idempotent() {
        let first = create_config();
        let second = create_config();
        assert_eq!(first, second);
        assert_eq!(first.api_url, "https://api.example.com");
        assert_eq!(first.timeout, 5000);
    }
}
