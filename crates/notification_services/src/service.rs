use std::sync::Arc;

use crate::channels::NotificationChannel;
use crate::types::{DeliveryFailure, DeliverySummary};

struct Route {
    channel: Arc<dyn NotificationChannel>,
    recipients: Vec<String>,
}

/// Fans a report message out to every configured channel and recipient.
///
/// Deliveries are isolated from each other: one failed recipient never
/// prevents the rest from being attempted. The outcome of a broadcast is
/// reported through [`DeliverySummary`] rather than an error.
#[derive(Default)]
pub struct NotificationService {
    routes: Vec<Route>,
}

impl NotificationService {
    /// Creates a service with no routes.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a channel with its recipient list. Routes with no
    /// recipients are dropped.
    pub fn add_route(&mut self, channel: Arc<dyn NotificationChannel>, recipients: Vec<String>) {
        if recipients.is_empty() {
            return;
        }
        self.routes.push(Route {
            channel,
            recipients,
        });
    }

    /// True when no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Sends the message to every recipient on every route.
    pub async fn broadcast(&self, message: &str) -> DeliverySummary {
        let mut summary = DeliverySummary::default();

        for route in &self.routes {
            for recipient in &route.recipients {
                match route.channel.send(recipient, message).await {
                    Ok(()) => summary.sent += 1,
                    Err(error) => {
                        log::error!(
                            "❌ {} delivery to {} failed: {}",
                            route.channel.name(),
                            recipient,
                            error
                        );
                        summary.failures.push(DeliveryFailure {
                            channel: route.channel.name(),
                            recipient: recipient.clone(),
                            error,
                        });
                    }
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use crate::types::NotificationError;

    use super::*;
    use async_trait::async_trait;

    struct RecordingChannel {
        label: &'static str,
        delivered: Arc<Mutex<Vec<String>>>,
        failing: HashSet<String>,
    }

    impl RecordingChannel {
        fn new(label: &'static str, delivered: Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                label,
                delivered,
                failing: HashSet::new(),
            }
        }

        fn failing_for(mut self, recipient: &str) -> Self {
            self.failing.insert(recipient.to_string());
            self
        }
    }

    #[async_trait]
    impl NotificationChannel for RecordingChannel {
        fn name(&self) -> &'static str {
            self.label
        }

        async fn send(&self, recipient: &str, _message: &str) -> Result<(), NotificationError> {
            if self.failing.contains(recipient) {
                return Err(NotificationError::Push("simulated outage".to_string()));
            }
            self.delivered
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, recipient));
            Ok(())
        }
    }

    #[tokio::test]
    async fn broadcast_reaches_every_recipient_on_every_route() {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let mut service = NotificationService::new();
        service.add_route(
            Arc::new(RecordingChannel::new("email", delivered.clone())),
            vec!["a@example.com".to_string(), "b@example.com".to_string()],
        );
        service.add_route(
            Arc::new(RecordingChannel::new("sms", delivered.clone())),
            vec!["+12085551234".to_string()],
        );

        let summary = service.broadcast("site 22 opened up").await;

        assert_eq!(summary.sent, 3);
        assert!(summary.all_sent());
        assert_eq!(summary.attempted(), 3);
        assert_eq!(
            *delivered.lock().unwrap(),
            vec![
                "email:a@example.com".to_string(),
                "email:b@example.com".to_string(),
                "sms:+12085551234".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn one_failed_recipient_does_not_stop_the_rest() {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let mut service = NotificationService::new();
        service.add_route(
            Arc::new(
                RecordingChannel::new("email", delivered.clone()).failing_for("down@example.com"),
            ),
            vec![
                "first@example.com".to_string(),
                "down@example.com".to_string(),
                "last@example.com".to_string(),
            ],
        );

        let summary = service.broadcast("report").await;

        assert_eq!(summary.sent, 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].channel, "email");
        assert_eq!(summary.failures[0].recipient, "down@example.com");
        assert_eq!(summary.attempted(), 3);
        assert!(!summary.all_sent());
        assert_eq!(
            *delivered.lock().unwrap(),
            vec![
                "email:first@example.com".to_string(),
                "email:last@example.com".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn failing_channel_does_not_block_other_channels() {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let mut service = NotificationService::new();
        service.add_route(
            Arc::new(RecordingChannel::new("email", delivered.clone()).failing_for("x")),
            vec!["x".to_string()],
        );
        service.add_route(
            Arc::new(RecordingChannel::new("push", delivered.clone())),
            vec!["user-key".to_string()],
        );

        let summary = service.broadcast("report").await;

        assert_eq!(summary.sent, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(*delivered.lock().unwrap(), vec!["push:user-key".to_string()]);
    }

    #[tokio::test]
    async fn empty_service_attempts_nothing() {
        let service = NotificationService::new();
        assert!(service.is_empty());

        let summary = service.broadcast("report").await;

        assert_eq!(summary.attempted(), 0);
        assert!(summary.all_sent());
    }

    #[tokio::test]
    async fn routes_without_recipients_are_dropped() {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let mut service = NotificationService::new();
        service.add_route(
            Arc::new(RecordingChannel::new("email", delivered.clone())),
            Vec::new(),
        );

        assert!(service.is_empty());
        let summary = service.broadcast("report").await;
        assert_eq!(summary.attempted(), 0);
    }
}
