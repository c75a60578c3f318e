//! # Booking
//!
//! A timed booking bot for the recreation.gov reservation flow. It waits
//! until a configured wall-clock instant, when site inventory opens, and
//! then submits the booking form, retrying a configured number of times.
//! The submission is unauthenticated and success is judged from the HTTP
//! status alone.

/// Reservation endpoint client and the submission loop.
mod client;
/// Site-number to internal-id directory.
mod directory;
/// Scheduling and submission errors.
mod error;
/// The booking request and its form encoding.
mod request;
/// Target-time parsing and waiting.
mod schedule;

pub use client::*;
pub use directory::*;
pub use error::*;
pub use request::*;
pub use schedule::*;
