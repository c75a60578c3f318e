use availability::{NewAvailability, SiteDate, Snapshot};

/// Renders the summary of everything currently available, logged on every
/// run whether or not the diff found news.
pub fn format_latest(snapshot: &Snapshot) -> String {
    let mut out = String::from("Latest availability:");
    for (site, dates) in snapshot {
        out.push_str(&format!(
            "\nSite {} is available on {}",
            site,
            join_dates(dates)
        ));
    }
    out
}

/// Renders the message broadcast to subscribers when the diff found
/// newly-open stays.
pub fn format_report(report: &NewAvailability, min_stay_length: usize) -> String {
    let mut out = format!("New availability with {} days or more:", min_stay_length);
    for (site, dates) in report {
        out.push_str(&format!("\n\tSite {} on {}", site, join_dates(dates)));
    }
    out
}

fn join_dates(dates: &[SiteDate]) -> String {
    dates
        .iter()
        .map(SiteDate::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
