//! Password expiration policy engine

use chrono::{DateTime, Utc};
use pwexpiry_config::{ExpirationConfig, ExpireAfter};
use std::time::Duration;
use tracing::{debug, info};

use crate::{CredentialRecord, ExpirationEvent, PasswordStatus, ReasonCode};

/// Evaluates records against the injected expiration configuration.
///
/// Nothing is cached: every query resolves the max age from the record's
/// override and the current configuration, so reconfiguration takes effect
/// on the next call.
#[derive(Debug, Clone, Default)]
pub struct PasswordExpiration {
    config: ExpirationConfig,
}

impl PasswordExpiration {
    pub fn new(config: ExpirationConfig) -> Self {
        info!(
            expire_after = ?config.expire_after,
            default_max_age_secs = config.default_max_age.as_secs(),
            "Password expiration policy initialized"
        );

        Self { config }
    }

    pub fn config(&self) -> &ExpirationConfig {
        &self.config
    }

    /// Replace the whole configuration
    pub fn reload_config(&mut self, config: ExpirationConfig) -> ExpirationEvent {
        self.config = config;

        info!(
            expire_after = ?config.expire_after,
            default_max_age_secs = config.default_max_age.as_secs(),
            "Expiration config reloaded"
        );

        ExpirationEvent::ConfigReloaded {
            expire_after: config.expire_after,
        }
    }

    /// Change only the global switch
    pub fn set_expire_after(&mut self, expire_after: impl Into<ExpireAfter>) -> ExpirationEvent {
        let config = ExpirationConfig {
            expire_after: expire_after.into(),
            ..self.config
        };
        self.reload_config(config)
    }

    /// Effective setting for a record: its override, else the global one
    pub fn effective_setting(&self, record: &CredentialRecord) -> ExpireAfter {
        record.expire_after.unwrap_or(self.config.expire_after)
    }

    /// Resolved max age for a record. None means expiration is disabled.
    pub fn resolve_max_age(&self, record: &CredentialRecord) -> Option<Duration> {
        self.effective_setting(record)
            .max_age(self.config.default_max_age)
    }

    pub fn is_enabled(&self, record: &CredentialRecord) -> bool {
        self.effective_setting(record).is_enabled()
    }

    /// True when the password was stamped and is strictly older than the max age.
    ///
    /// A record that has never been stamped is not too old.
    pub fn is_too_old(&self, record: &CredentialRecord, now: DateTime<Utc>) -> bool {
        let Some(max_age) = self.resolve_max_age(record) else {
            return false;
        };
        let Some(changed_at) = record.password_changed_at else {
            return false;
        };
        // Ages beyond chrono's range can never be exceeded
        let Ok(max_age) = chrono::Duration::from_std(max_age) else {
            return false;
        };

        now.signed_duration_since(changed_at) > max_age
    }

    /// Age-based expiry only; see [`Self::needs_change`] for the full check
    pub fn is_expired(&self, record: &CredentialRecord, now: DateTime<Utc>) -> bool {
        self.is_too_old(record, now)
    }

    /// The administrative flag. Always false while expiration is disabled.
    pub fn change_requested(&self, record: &CredentialRecord) -> bool {
        self.is_enabled(record) && record.force_change_requested
    }

    pub fn needs_change(&self, record: &CredentialRecord, now: DateTime<Utc>) -> bool {
        self.is_too_old(record, now) || self.change_requested(record)
    }

    /// Flag the password for a forced change. The host persists the record.
    pub fn request_change(&self, record: &mut CredentialRecord) -> ExpirationEvent {
        record.force_change_requested = true;

        info!(
            user_id = %record.id,
            enabled = self.is_enabled(record),
            "Password change requested"
        );

        ExpirationEvent::ChangeRequested {
            user_id: record.id.clone(),
        }
    }

    /// Same as [`Self::request_change`]
    pub fn expire_password(&self, record: &mut CredentialRecord) -> ExpirationEvent {
        self.request_change(record)
    }

    /// The instant after which the password counts as too old
    pub fn expires_at(&self, record: &CredentialRecord) -> Option<DateTime<Utc>> {
        let max_age = chrono::Duration::from_std(self.resolve_max_age(record)?).ok()?;
        record.password_changed_at?.checked_add_signed(max_age)
    }

    /// Time left before the password expires, saturating at zero
    pub fn time_remaining(&self, record: &CredentialRecord, now: DateTime<Utc>) -> Option<Duration> {
        let expires_at = self.expires_at(record)?;
        Some(
            expires_at
                .signed_duration_since(now)
                .to_std()
                .unwrap_or(Duration::ZERO),
        )
    }

    /// Full evaluation of a record
    pub fn status(&self, record: &CredentialRecord, now: DateTime<Utc>) -> PasswordStatus {
        let max_age = self.resolve_max_age(record);
        let expired = self.is_too_old(record, now);
        let change_requested = self.change_requested(record);

        let mut reasons = Vec::new();
        if expired
            && let (Some(changed_at), Some(max_age)) = (record.password_changed_at, max_age)
        {
            reasons.push(ReasonCode::TooOld { changed_at, max_age });
        }
        if change_requested {
            reasons.push(ReasonCode::ChangeRequested);
        }

        debug!(
            user_id = %record.id,
            max_age_secs = max_age.map(|d| d.as_secs()),
            expired,
            change_requested,
            "Password status evaluated"
        );

        PasswordStatus {
            user_id: record.id.clone(),
            enabled: max_age.is_some(),
            max_age,
            expired,
            change_requested,
            needs_change: expired || change_requested,
            expires_at: self.expires_at(record),
            reasons,
        }
    }
}
