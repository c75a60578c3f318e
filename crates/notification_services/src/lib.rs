//! # Notification Services
//!
//! Delivery channels for availability reports: email through AWS SES, SMS
//! through AWS SNS, and push messages through Pushover, all dispatched by a
//! single [`NotificationService`] that keeps recipient failures isolated.

/// Channel trait and the concrete channel implementations.
pub mod channels;
/// Fan-out dispatcher over the configured channels.
pub mod service;
/// Errors and delivery bookkeeping types.
pub mod types;

pub use channels::{
    LogChannel, NotificationChannel, PushoverChannel, SesEmailChannel, SnsSmsChannel,
};
pub use service::NotificationService;
pub use types::{DeliveryFailure, DeliverySummary, NotificationError};
