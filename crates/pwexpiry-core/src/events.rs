//! Events returned by mutating policy operations

use chrono::{DateTime, Utc};
use pwexpiry_config::ExpireAfter;
use pwexpiry_util::UserId;
use serde::{Deserialize, Serialize};

/// Events a host can forward to its own audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpirationEvent {
    /// An administrator asked for the password to be changed
    ChangeRequested { user_id: UserId },

    /// A password change was stamped by the save hook
    PasswordChanged {
        user_id: UserId,
        changed_at: DateTime<Utc>,
        cleared_request: bool,
    },

    /// The global expiration setting was replaced
    ConfigReloaded { expire_after: ExpireAfter },
}
