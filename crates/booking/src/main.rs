//! Command-line booking bot: fires a reservation request at a target time.

use std::path::PathBuf;

use anyhow::Result;
use booking::{BookingClient, BookingRequest, SiteDirectory, TargetTime};
use chrono::{Local, NaiveDate};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "booking")]
#[command(about = "Submits a campsite booking request at a target time")]
struct Cli {
    /// Campsite number to book.
    #[arg(long)]
    site: u32,

    /// Arrival date, YYYY-MM-DD.
    #[arg(long)]
    date: NaiveDate,

    /// Length of stay in nights.
    #[arg(long, default_value_t = 14)]
    nights: u32,

    /// How many times to submit before giving up.
    #[arg(long, default_value_t = 1)]
    attempts: u32,

    /// Firing time (HH:MM, HH:MM:SS, or HH:MM:SS.mmm). Submits
    /// immediately when omitted.
    #[arg(long)]
    at: Option<TargetTime>,

    /// Path to the site-directory JSON file.
    #[arg(long)]
    site_map: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let directory = SiteDirectory::load(&cli.site_map)?;
    let request = BookingRequest {
        site: cli.site,
        arrival: cli.date,
        nights: cli.nights,
        attempts: cli.attempts,
    };

    log::info!(
        "🏕️ Attempting to book site {} starting {} for {} nights",
        request.site,
        request.arrival,
        request.nights
    );

    if let Some(target) = cli.at {
        let wait = target.wait_from(Local::now())?;
        log::info!("⏳ Waiting {:.3}s until {}", wait.as_secs_f64(), target);
        tokio::time::sleep(wait).await;
    }

    let client = BookingClient::new()?;
    let attempt = client.submit(&request, &directory).await?;
    log::info!("✅ Booking request accepted on attempt {}", attempt);

    Ok(())
}
