//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Password expiration settings
    #[serde(default)]
    pub expiration: RawExpirationConfig,
}

/// Password expiration settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawExpirationConfig {
    /// `false` disables expiration, `true` uses `default_max_age`,
    /// anything else is an explicit max age. Absent means `true`.
    pub expire_password_after: Option<RawExpireAfter>,

    /// Age used when expiration is switched on without an explicit value
    pub default_max_age: Option<RawDuration>,
}

/// Global expiration switch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawExpireAfter {
    Switch(bool),
    Seconds(u64),
    Text(String),
}

/// A duration written either as integer seconds or as "90d"-style text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(u64),
    Text(String),
}
