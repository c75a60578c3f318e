use anyhow::{Context, Result};
use availability::{SiteFilter, build_snapshot, diff_snapshots};
use notification_services::NotificationService;
use rec_gov::RecGovClient;
use snapshot_store::SnapshotStore;

use crate::report::{format_latest, format_report};

/// Settings for one polling pass.
pub struct CycleConfig {
    /// Campground to watch.
    pub campground_id: u32,
    /// Year the tracked months fall in; also the reference year for
    /// consecutiveness.
    pub year: i32,
    /// Months to fetch, 1-12.
    pub months: Vec<u32>,
    /// Which sites to track.
    pub filter: SiteFilter,
    /// Smallest stay length worth reporting.
    pub min_stay_length: usize,
}

/// Runs fetch, snapshot, diff, notify, and persist, in that order.
pub struct Tracker {
    client: RecGovClient,
    store: SnapshotStore,
    notifier: NotificationService,
    config: CycleConfig,
}

impl Tracker {
    /// Wires a tracker from its collaborators.
    pub fn new(
        client: RecGovClient,
        store: SnapshotStore,
        notifier: NotificationService,
        config: CycleConfig,
    ) -> Self {
        Self {
            client,
            store,
            notifier,
            config,
        }
    }

    /// One polling cycle.
    ///
    /// The current snapshot is saved even when nothing new was found, and
    /// after notifications go out, so a delivery hiccup never loses the
    /// baseline for the next run. Delivery failures are logged, not fatal;
    /// fetch, build, and save errors are.
    pub async fn run_cycle(&self) -> Result<()> {
        let fragments = self
            .client
            .fetch_months(self.config.campground_id, self.config.year, &self.config.months)
            .await?;
        let latest = build_snapshot(&fragments, &self.config.filter)?;
        log::info!("{}", format_latest(&latest));

        let previous = self.store.load().await;
        let fresh = diff_snapshots(
            &previous,
            &latest,
            self.config.min_stay_length,
            self.config.year,
        );

        if fresh.is_empty() {
            log::info!("No new availability.");
        } else {
            let message = format_report(&fresh, self.config.min_stay_length);
            log::info!("{}", message);

            if self.notifier.is_empty() {
                log::warn!("⚠️ No notification recipients configured");
            } else {
                let summary = self.notifier.broadcast(&message).await;
                if summary.all_sent() {
                    log::info!("📣 Report delivered to {} recipient(s)", summary.sent);
                } else {
                    log::warn!(
                        "⚠️ Report delivered to {} of {} recipient(s)",
                        summary.sent,
                        summary.attempted()
                    );
                }
            }
        }

        self.store
            .save(&latest)
            .await
            .context("Failed to save the latest snapshot")?;
        Ok(())
    }
}
