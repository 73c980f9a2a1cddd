//! Configuration parsing and validation for pwexpiry
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - A global expiration switch (disabled, default age, or explicit age)
//! - An overridable default max age
//! - Validation with clear error messages

mod policy;
mod schema;
mod validation;

pub use policy::*;
pub use schema::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<ExpirationConfig> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Loading expiration config");
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<ExpirationConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        tracing::warn!(error_count = errors.len(), "Expiration config rejected");
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(ExpirationConfig::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwexpiry_util::days;
    use std::io::Write;

    #[test]
    fn parse_minimal_config() {
        let config = parse_config("config_version = 1").unwrap();
        assert_eq!(config, ExpirationConfig::default());
        assert_eq!(config.max_age(), Some(days(90)));
    }

    #[test]
    fn parse_disabled_config() {
        let config = parse_config(
            r#"
            config_version = 1

            [expiration]
            expire_password_after = false
        "#,
        )
        .unwrap();
        assert_eq!(config.expire_after, ExpireAfter::Disabled);
        assert_eq!(config.max_age(), None);
    }

    #[test]
    fn parse_explicit_age() {
        let config = parse_config(
            r#"
            config_version = 1

            [expiration]
            expire_password_after = "60d"
        "#,
        )
        .unwrap();
        assert_eq!(config.max_age(), Some(days(60)));
    }

    #[test]
    fn reject_wrong_version() {
        let result = parse_config("config_version = 99");
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn reject_invalid_durations() {
        let result = parse_config(
            r#"
            config_version = 1

            [expiration]
            expire_password_after = "forever"
            default_max_age = 0
        "#,
        );
        match result {
            Err(ConfigError::ValidationFailed { errors }) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_age_is_rejected_not_defaulted() {
        for value in ["\"ninety days\"", "\"90 fortnights\"", "\"\""] {
            let config = format!(
                "config_version = 1\n[expiration]\nexpire_password_after = {}",
                value
            );
            assert!(
                matches!(
                    parse_config(&config),
                    Err(ConfigError::ValidationFailed { .. })
                ),
                "{} should fail validation",
                value
            );
        }
    }

    #[test]
    fn reject_malformed_toml() {
        let result = parse_config("config_version = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "config_version = 1\n\n[expiration]\nexpire_password_after = true\ndefault_max_age = \"2w\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.expire_after, ExpireAfter::Default);
        assert_eq!(config.max_age(), Some(days(14)));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
