//! # Availability
//!
//! The availability-diffing core: normalizes raw per-campsite availability
//! payloads into snapshots of bookable dates and computes which contiguous
//! stay intervals opened up since the previous snapshot. Pure in-memory
//! computation; fetching, persistence, and notification live in the
//! surrounding crates.

/// Errors for availability normalization
mod error;
pub use error::*;

/// Year-free calendar dates and their source representations
mod date;
pub use date::*;

/// Wire contract for the reservation site's month endpoint
mod payload;
pub use payload::*;

/// Snapshot construction from raw payloads
mod snapshot;
pub use snapshot::*;

/// Interval grouping and snapshot diffing
mod diff;
pub use diff::*;
