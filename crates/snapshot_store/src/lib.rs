//! # Snapshot Store
//!
//! Durable storage for the previous poll's availability snapshot: one flat
//! JSON file of short-form date strings per site. Read failures degrade to
//! an empty snapshot so a polluted or missing file never stops a poll.

/// Flat-file snapshot persistence
mod store;
pub use store::*;
