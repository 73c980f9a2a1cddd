//! Configuration validation

use crate::schema::{RawConfig, RawDuration, RawExpireAfter};
use pwexpiry_util::parse_duration;
use std::time::Duration;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid duration '{value}' for {field}: {message}")]
    InvalidDuration {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let expiration = &config.expiration;

    match &expiration.expire_password_after {
        Some(RawExpireAfter::Seconds(secs)) => {
            errors.extend(check_duration(
                "expire_password_after",
                &RawDuration::Seconds(*secs),
            ));
        }
        Some(RawExpireAfter::Text(text)) => {
            errors.extend(check_duration(
                "expire_password_after",
                &RawDuration::Text(text.clone()),
            ));
        }
        Some(RawExpireAfter::Switch(_)) | None => {}
    }

    if let Some(default_max_age) = &expiration.default_max_age {
        errors.extend(check_duration("default_max_age", default_max_age));
    }

    errors
}

fn check_duration(field: &'static str, raw: &RawDuration) -> Option<ValidationError> {
    match resolve_duration(raw) {
        Ok(d) if d.is_zero() => Some(ValidationError::ZeroDuration { field }),
        Ok(_) => None,
        Err(message) => Some(ValidationError::InvalidDuration {
            field,
            value: match raw {
                RawDuration::Seconds(secs) => secs.to_string(),
                RawDuration::Text(text) => text.clone(),
            },
            message,
        }),
    }
}

/// Turn a raw duration into a `Duration`
pub fn resolve_duration(raw: &RawDuration) -> Result<Duration, String> {
    match raw {
        RawDuration::Seconds(secs) => Ok(Duration::from_secs(*secs)),
        RawDuration::Text(text) => parse_duration(text),
    }
}
