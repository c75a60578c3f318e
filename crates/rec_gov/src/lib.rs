//! # Rec Gov
//!
//! Thin client for the recreation.gov internal availability API: one GET
//! per campground-month, returning the typed payload consumed by the
//! availability core. No retries and no interpretation of the data here.

/// Errors for recreation.gov API access
mod error;
pub use error::*;

/// HTTP client for the internal month-availability endpoint
mod client;
pub use client::*;
