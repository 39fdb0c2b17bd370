use crate::domain::model::Config;
use crate::utils::error::{PkgError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of a [`Config`]: a `[config]` table.
///
/// The table may be absent when parsing; [`TomlConfig::into_config`] and
/// [`Validate::validate`] report that as [`PkgError::MissingConfigError`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub config: Option<Config>,
}

impl TomlConfig {
    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a TOML document after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PkgError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the escaped value of the environment variable.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PkgError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => escape_basic_string(&value),
                Err(_) => format!("${{{}}}", var_name),
            }
        });

        Ok(result.into_owned())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The validated [`Config`].
    pub fn into_config(self) -> Result<Config> {
        let config = self.config.ok_or_else(|| PkgError::MissingConfigError {
            field: "config".to_string(),
        })?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Substituted values land inside TOML basic strings (`"..."`).
fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn validate_config(config: &Config) -> Result<()> {
    validation::validate_url("config.apiUrl", &config.api_url)?;
    validation::validate_positive_number("config.timeout", config.timeout, 1)?;
    Ok(())
}

impl From<Config> for TomlConfig {
    fn from(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let config = validation::validate_required_field("config", &self.config)?;
        validate_config(config)
    }
}
