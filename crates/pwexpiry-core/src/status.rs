//! Serializable password status for authentication flows

use chrono::{DateTime, Utc};
use pwexpiry_util::UserId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why a password needs to be changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReasonCode {
    /// Older than the resolved max age
    TooOld {
        changed_at: DateTime<Utc>,
        max_age: Duration,
    },
    /// An administrator flagged the password
    ChangeRequested,
}

/// Snapshot of a record's expiration state at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStatus {
    pub user_id: UserId,
    /// Whether expiration applies to this record at all
    pub enabled: bool,
    /// Resolved max age. None when disabled.
    pub max_age: Option<Duration>,
    pub expired: bool,
    pub change_requested: bool,
    pub needs_change: bool,
    /// When the password stops being acceptable. None if unknown or disabled.
    pub expires_at: Option<DateTime<Utc>>,
    /// Empty unless `needs_change`
    pub reasons: Vec<ReasonCode>,
}
