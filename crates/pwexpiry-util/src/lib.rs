//! Shared utilities for pwexpiry
//!
//! This crate provides:
//! - User ID type
//! - Wall-clock time with mock time support for development
//! - Human-readable duration parsing and formatting

mod duration;
mod ids;
mod time;

pub use duration::*;
pub use ids::*;
pub use time::*;
