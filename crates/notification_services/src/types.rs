/// Custom error type for notification delivery
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// Simple email service (SES) errors.
    #[error("AWS SES error: {0}")]
    Ses(String),

    /// Simple notification service (SNS) errors.
    #[error("AWS SNS error: {0}")]
    Sns(String),

    /// Push provider errors.
    #[error("Push error: {0}")]
    Push(String),

    /// Phone number that cannot be normalized to E.164.
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),
}

/// One failed delivery attempt within a broadcast.
#[derive(Debug)]
pub struct DeliveryFailure {
    /// Channel that made the attempt.
    pub channel: &'static str,
    /// Recipient the attempt targeted.
    pub recipient: String,
    /// What went wrong.
    pub error: NotificationError,
}

/// Outcome of one broadcast across every route.
///
/// Failures are collected here instead of raised: one unreachable phone
/// must never cost the remaining recipients their notification.
#[derive(Debug, Default)]
pub struct DeliverySummary {
    /// Number of successful deliveries.
    pub sent: usize,
    /// Every failed attempt, in attempt order.
    pub failures: Vec<DeliveryFailure>,
}

impl DeliverySummary {
    /// Total delivery attempts made.
    pub fn attempted(&self) -> usize {
        self.sent + self.failures.len()
    }

    /// True when every attempted delivery succeeded.
    pub fn all_sent(&self) -> bool {
        self.failures.is_empty()
    }
}
