//! Campground availability tracker: polls recreation.gov, diffs against the
//! previous snapshot, and notifies subscribers of newly-open stays.

mod cycle;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use availability::SiteFilter;
use chrono::Datelike;
use clap::Parser;
use notification_services::{
    LogChannel, NotificationService, PushoverChannel, SesEmailChannel, SnsSmsChannel,
};
use rec_gov::RecGovClient;
use snapshot_store::SnapshotStore;

use crate::cycle::{CycleConfig, Tracker};

const EMAIL_SUBJECT: &str = "New campsite availability";

#[derive(Debug, Parser)]
#[command(name = "tracker")]
#[command(about = "Watches campground availability and reports newly-open stays")]
struct Cli {
    /// Campground id to watch.
    #[arg(long, default_value_t = 232199)]
    campground: u32,

    /// Year to check; defaults to the current year.
    #[arg(long)]
    year: Option<i32>,

    /// Month to check, 1-12 (repeatable).
    #[arg(long = "months", default_values_t = vec![7, 8])]
    months: Vec<u32>,

    /// Smallest stay length worth reporting, in days.
    #[arg(long, default_value_t = 2)]
    min_stay: usize,

    /// Highest site number to track; 0 tracks every numbered site.
    #[arg(long, default_value_t = 24)]
    max_site: u32,

    /// Snapshot file compared against between runs.
    #[arg(long, default_value = "available.json")]
    snapshot: PathBuf,

    /// Email recipient (repeatable).
    #[arg(long = "email")]
    emails: Vec<String>,

    /// SMS recipient (repeatable).
    #[arg(long = "sms")]
    sms: Vec<String>,

    /// Pushover user key (repeatable).
    #[arg(long = "push")]
    push: Vec<String>,

    /// Route the report to the log instead of real providers.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    let filter = if cli.max_site == 0 {
        SiteFilter::all()
    } else {
        SiteFilter::up_to(cli.max_site)
    };

    log::info!(
        "🏕️ Checking campground {} for {}+ day stays in {} (months {:?})",
        cli.campground,
        cli.min_stay,
        year,
        cli.months
    );

    let notifier = build_notifier(&cli).await?;

    let tracker = Tracker::new(
        RecGovClient::new()?,
        SnapshotStore::new(&cli.snapshot),
        notifier,
        CycleConfig {
            campground_id: cli.campground,
            year,
            months: cli.months.clone(),
            filter,
            min_stay_length: cli.min_stay,
        },
    );

    tracker.run_cycle().await
}

async fn build_notifier(cli: &Cli) -> Result<NotificationService> {
    let mut service = NotificationService::new();

    if cli.dry_run {
        let mut recipients: Vec<String> = Vec::new();
        recipients.extend(cli.emails.iter().cloned());
        recipients.extend(cli.sms.iter().cloned());
        recipients.extend(cli.push.iter().cloned());
        if recipients.is_empty() {
            recipients.push("console".to_string());
        }
        service.add_route(Arc::new(LogChannel), recipients);
        return Ok(service);
    }

    if !cli.emails.is_empty() {
        let from_address = std::env::var("SES_FROM_ADDRESS")
            .context("SES_FROM_ADDRESS must be set to send email")?;
        let channel = SesEmailChannel::new(from_address, EMAIL_SUBJECT.to_string()).await;
        service.add_route(Arc::new(channel), cli.emails.clone());
    }

    if !cli.sms.is_empty() {
        service.add_route(Arc::new(SnsSmsChannel::new().await), cli.sms.clone());
    }

    if !cli.push.is_empty() {
        let app_token = std::env::var("PUSHOVER_APP_TOKEN")
            .context("PUSHOVER_APP_TOKEN must be set to send push notifications")?;
        service.add_route(Arc::new(PushoverChannel::new(app_token)), cli.push.clone());
    }

    Ok(service)
}
