//! Password expiration policy for pwexpiry
//!
//! This crate is the heart of pwexpiry, containing:
//! - The credential fields the policy reads and writes
//! - Policy evaluation (too old, change requested, needs change)
//! - The save hook a host calls before persisting a record
//! - A serializable status report for authentication flows

mod engine;
mod events;
mod hooks;
mod record;
mod status;

pub use engine::*;
pub use events::*;
pub use hooks::*;
pub use record::*;
pub use status::*;
