use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ses::Client as SesClient;
use aws_sdk_sns::Client as SnsClient;

use crate::types::NotificationError;

const PUSHOVER_MESSAGES_URL: &str = "https://api.pushover.net/1/messages.json";

/// A delivery channel that can carry a report message to one recipient.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Short channel label used in logs and delivery summaries.
    fn name(&self) -> &'static str;

    /// Delivers the message to a single recipient address.
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError>;
}

/// Email channel backed by AWS SES.
pub struct SesEmailChannel {
    client: SesClient,
    from_address: String,
    subject: String,
}

impl SesEmailChannel {
    /// Creates the channel using the AWS SDK's default credential chain.
    pub async fn new(from_address: String, subject: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: SesClient::new(&config),
            from_address,
            subject,
        }
    }
}

#[async_trait]
impl NotificationChannel for SesEmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError> {
        let subject = aws_sdk_ses::types::Content::builder()
            .data(&self.subject)
            .build()
            .map_err(|e| NotificationError::Ses(format!("Failed to build subject: {}", e)))?;

        let text = aws_sdk_ses::types::Content::builder()
            .data(message)
            .build()
            .map_err(|e| NotificationError::Ses(format!("Failed to build body: {}", e)))?;

        let body = aws_sdk_ses::types::Body::builder().text(text).build();
        let mail = aws_sdk_ses::types::Message::builder()
            .subject(subject)
            .body(body)
            .build();
        let destination = aws_sdk_ses::types::Destination::builder()
            .to_addresses(recipient)
            .build();

        let result = self
            .client
            .send_email()
            .source(&self.from_address)
            .destination(destination)
            .message(mail)
            .send()
            .await;

        match result {
            Ok(output) => {
                log::info!(
                    "📧 Availability email sent to {} (SES message {})",
                    recipient,
                    output.message_id()
                );
                Ok(())
            }
            Err(e) => {
                let error_msg = if let Some(service_error) = e.as_service_error() {
                    format!("AWS SES service error: {:?}", service_error)
                } else {
                    format!("AWS SES error: {}", e)
                };
                Err(NotificationError::Ses(error_msg))
            }
        }
    }
}

/// SMS channel backed by AWS SNS.
pub struct SnsSmsChannel {
    client: SnsClient,
}

impl SnsSmsChannel {
    /// Creates the channel using the AWS SDK's default credential chain.
    pub async fn new() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: SnsClient::new(&config),
        }
    }
}

#[async_trait]
impl NotificationChannel for SnsSmsChannel {
    fn name(&self) -> &'static str {
        "sms"
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError> {
        let phone = format_phone_number(recipient)?;

        self.client
            .publish()
            .phone_number(&phone)
            .message(message)
            .send()
            .await
            .map_err(|e| NotificationError::Sns(e.to_string()))?;

        log::info!("📱 Availability SMS sent to {}", phone);
        Ok(())
    }
}

/// Push channel backed by the Pushover message API.
///
/// Recipients are Pushover user keys; the application token identifies
/// this poller.
pub struct PushoverChannel {
    client: reqwest::Client,
    app_token: String,
}

impl PushoverChannel {
    /// Creates the channel with the given application token.
    pub fn new(app_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_token,
        }
    }
}

#[async_trait]
impl NotificationChannel for PushoverChannel {
    fn name(&self) -> &'static str {
        "push"
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError> {
        let params = [
            ("token", self.app_token.as_str()),
            ("user", recipient),
            ("message", message),
        ];

        let response = self
            .client
            .post(PUSHOVER_MESSAGES_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| NotificationError::Push(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotificationError::Push(format!(
                "HTTP {}",
                response.status()
            )));
        }

        log::info!("📲 Availability push sent to {}", recipient);
        Ok(())
    }
}

/// Channel that writes messages to the log instead of sending them.
/// Used for dry runs and in tests.
pub struct LogChannel;

#[async_trait]
impl NotificationChannel for LogChannel {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError> {
        log::info!("📝 [DRY RUN] To {}:\n{}", recipient, message);
        Ok(())
    }
}

/// Normalizes a phone number to E.164.
///
/// Numbers already carrying a `+` prefix pass through untouched. Otherwise
/// formatting characters are stripped: ten digits are taken as a US number
/// and prefixed `+1`, eleven digits starting with `1` get a bare `+`, and
/// anything else is rejected.
fn format_phone_number(raw: &str) -> Result<String, NotificationError> {
    if raw.starts_with('+') {
        return Ok(raw.to_string());
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        10 => Ok(format!("+1{}", digits)),
        11 if digits.starts_with('1') => Ok(format!("+{}", digits)),
        _ => Err(NotificationError::InvalidPhoneNumber(raw.to_string())),
    }
}
