//! Validated expiration settings

use crate::schema::{RawConfig, RawDuration, RawExpireAfter};
use crate::validation::resolve_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Built-in max age used when expiration is switched on without a value
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(90 * 24 * 60 * 60);

/// How long a password may go unchanged.
///
/// The same three-way shape is used for the global setting and for a
/// per-record override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpireAfter {
    /// Passwords never expire
    Disabled,
    /// Passwords expire after the configured default max age
    #[default]
    Default,
    /// Passwords expire after the given age
    After(Duration),
}

impl ExpireAfter {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, ExpireAfter::Disabled)
    }

    /// Max age under this setting. None means expiration is disabled.
    pub fn max_age(&self, default_max_age: Duration) -> Option<Duration> {
        match self {
            ExpireAfter::Disabled => None,
            ExpireAfter::Default => Some(default_max_age),
            ExpireAfter::After(age) => Some(*age),
        }
    }
}

impl From<bool> for ExpireAfter {
    fn from(enabled: bool) -> Self {
        if enabled {
            ExpireAfter::Default
        } else {
            ExpireAfter::Disabled
        }
    }
}

impl From<Duration> for ExpireAfter {
    fn from(age: Duration) -> Self {
        ExpireAfter::After(age)
    }
}

/// Global expiration configuration, injected into the core engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationConfig {
    /// Global switch
    pub expire_after: ExpireAfter,

    /// Age used for `ExpireAfter::Default`
    pub default_max_age: Duration,
}

impl ExpirationConfig {
    pub fn new(expire_after: impl Into<ExpireAfter>) -> Self {
        Self {
            expire_after: expire_after.into(),
            default_max_age: DEFAULT_MAX_AGE,
        }
    }

    pub fn disabled() -> Self {
        Self::new(ExpireAfter::Disabled)
    }

    /// Convert from raw config.
    ///
    /// Expects input that passed `validate_config`; unparseable durations are
    /// not reported here.
    pub(crate) fn from_raw(raw: RawConfig) -> Self {
        let expiration = raw.expiration;

        let default_max_age = expiration
            .default_max_age
            .as_ref()
            .and_then(|d| resolve_duration(d).ok())
            .unwrap_or(DEFAULT_MAX_AGE);

        let expire_after = match expiration.expire_password_after {
            None => ExpireAfter::Default,
            Some(RawExpireAfter::Switch(enabled)) => enabled.into(),
            Some(RawExpireAfter::Seconds(secs)) => ExpireAfter::After(Duration::from_secs(secs)),
            Some(RawExpireAfter::Text(text)) => resolve_duration(&RawDuration::Text(text))
                .map(ExpireAfter::After)
                .unwrap_or_default(),
        };

        Self {
            expire_after,
            default_max_age,
        }
    }

    /// Max age under the global setting alone
    pub fn max_age(&self) -> Option<Duration> {
        self.expire_after.max_age(self.default_max_age)
    }
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        Self::new(ExpireAfter::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawExpirationConfig;
    use pwexpiry_util::{days, months};

    #[test]
    fn test_default_max_age_is_ninety_days() {
        assert_eq!(DEFAULT_MAX_AGE, days(90));
        assert_eq!(ExpirationConfig::default().max_age(), Some(days(90)));
    }

    #[test]
    fn test_expire_after_max_age() {
        assert_eq!(ExpireAfter::Disabled.max_age(days(90)), None);
        assert_eq!(ExpireAfter::Default.max_age(days(30)), Some(days(30)));
        assert_eq!(ExpireAfter::After(months(2)).max_age(days(30)), Some(months(2)));

        assert!(!ExpireAfter::from(false).is_enabled());
        assert!(ExpireAfter::from(true).is_enabled());
    }

    #[test]
    fn test_from_raw() {
        let raw = RawConfig {
            config_version: 1,
            expiration: RawExpirationConfig {
                expire_password_after: Some(RawExpireAfter::Switch(true)),
                default_max_age: Some(RawDuration::Text("30d".into())),
            },
        };
        let config = ExpirationConfig::from_raw(raw);
        assert_eq!(config.expire_after, ExpireAfter::Default);
        assert_eq!(config.max_age(), Some(days(30)));

        let raw = RawConfig {
            config_version: 1,
            expiration: RawExpirationConfig {
                expire_password_after: Some(RawExpireAfter::Text("2mo".into())),
                default_max_age: None,
            },
        };
        let config = ExpirationConfig::from_raw(raw);
        assert_eq!(config.expire_after, ExpireAfter::After(months(2)));
        assert_eq!(config.default_max_age, DEFAULT_MAX_AGE);
    }

    #[test]
    fn test_expire_after_serde() {
        let json = serde_json::to_string(&ExpireAfter::Disabled).unwrap();
        assert_eq!(json, "\"disabled\"");

        let after = ExpireAfter::After(days(1));
        let json = serde_json::to_string(&after).unwrap();
        let parsed: ExpireAfter = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, after);
    }
}
