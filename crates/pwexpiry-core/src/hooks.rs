//! Persistence hooks
//!
//! The host calls [`before_save`] immediately before committing a record.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{CredentialRecord, ExpirationEvent};

/// Stamp a password change on the record.
///
/// If the password digest changed since the last save, `password_changed_at`
/// becomes `now` and any pending change request is cleared. Otherwise the
/// record is left untouched and `None` is returned.
pub fn before_save(record: &mut CredentialRecord, now: DateTime<Utc>) -> Option<ExpirationEvent> {
    if !record.take_password_change() {
        return None;
    }

    let cleared_request = std::mem::take(&mut record.force_change_requested);
    record.password_changed_at = Some(now);

    info!(
        user_id = %record.id,
        changed_at = %now,
        cleared_request,
        "Password change recorded"
    );

    Some(ExpirationEvent::PasswordChanged {
        user_id: record.id.clone(),
        changed_at: now,
        cleared_request,
    })
}
