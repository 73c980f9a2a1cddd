//! Credential record fields used by the expiration policy

use chrono::{DateTime, Utc};
use pwexpiry_config::ExpireAfter;
use pwexpiry_util::UserId;
use serde::{Deserialize, Serialize};

/// Record fields a host schema must provide for password expiration
pub fn required_fields() -> &'static [&'static str] {
    &["password_changed_at"]
}

/// The part of a user record the expiration policy works with.
///
/// The host owns persistence. The password digest is opaque here; only the
/// fact that it changed matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: UserId,

    encrypted_password: String,

    /// When the password was last changed. None until the first save.
    pub password_changed_at: Option<DateTime<Utc>>,

    /// Administrative request to change the password regardless of age
    #[serde(default)]
    pub force_change_requested: bool,

    /// Per-record override of the global expiration setting
    #[serde(default)]
    pub expire_after: Option<ExpireAfter>,

    /// Set when the digest changed since the last save hook ran
    #[serde(skip)]
    password_pending: bool,
}

impl CredentialRecord {
    /// A record with no password yet
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            encrypted_password: String::new(),
            password_changed_at: None,
            force_change_requested: false,
            expire_after: None,
            password_pending: false,
        }
    }

    /// A new record whose first save will stamp `password_changed_at`
    pub fn with_password(id: impl Into<UserId>, encrypted_password: impl Into<String>) -> Self {
        let mut record = Self::new(id);
        record.set_encrypted_password(encrypted_password);
        record
    }

    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    /// Assign a new password digest. Assigning the current digest is not a change.
    pub fn set_encrypted_password(&mut self, encrypted_password: impl Into<String>) {
        let encrypted_password = encrypted_password.into();
        if encrypted_password != self.encrypted_password {
            self.encrypted_password = encrypted_password;
            self.password_pending = true;
        }
    }

    /// Whether the next save carries a password change
    pub fn password_change_pending(&self) -> bool {
        self.password_pending
    }

    pub(crate) fn take_password_change(&mut self) -> bool {
        std::mem::take(&mut self.password_pending)
    }
}
