use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::SiteDate;
use crate::error::AvailabilityError;
use crate::payload::{CampgroundMonth, STATUS_AVAILABLE};

/// Per-site available dates at one point in time, sorted ascending.
///
/// Keys are the sites' original identifier strings (`"001"` stays `"001"`).
/// Sites with no available dates are omitted entirely. Serializes to the
/// durable form, a flat JSON object of short-form date lists.
pub type Snapshot = BTreeMap<String, Vec<SiteDate>>;

/// Restricts which sites are tracked.
///
/// Campgrounds number their sites per loop, so "the first two loops" is a
/// cap on the site number. Sites without a numeric identifier are always
/// excluded, filter or no filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFilter {
    /// Highest site number to track; `None` tracks every numbered site.
    pub max_site: Option<u32>,
}

impl SiteFilter {
    /// Tracks sites numbered up to and including `max_site`.
    pub fn up_to(max_site: u32) -> Self {
        SiteFilter {
            max_site: Some(max_site),
        }
    }

    /// Tracks every numbered site.
    pub fn all() -> Self {
        SiteFilter { max_site: None }
    }

    /// Whether a site number passes the filter.
    pub fn accepts(&self, site_number: u32) -> bool {
        match self.max_site {
            Some(max) => site_number <= max,
            None => true,
        }
    }
}

/// Builds the current [`Snapshot`] from one raw payload per fetched month.
///
/// Keeps exactly the days whose status is [`STATUS_AVAILABLE`] on sites the
/// filter accepts, normalized to short-form dates and sorted ascending per
/// site. Dates for a site accumulate across months before the final sort;
/// months never overlap, so no deduplication is done.
///
/// An availability key that is not a web-format timestamp is a malformed
/// payload and fails the whole build.
pub fn build_snapshot(
    fragments: &[CampgroundMonth],
    filter: &SiteFilter,
) -> Result<Snapshot, AvailabilityError> {
    let mut snapshot = Snapshot::new();

    for fragment in fragments {
        for record in fragment.campsites.values() {
            let Ok(site_number) = record.site.parse::<u32>() else {
                debug!(site = %record.site, "skipping unnumbered site");
                continue;
            };
            if !filter.accepts(site_number) {
                continue;
            }

            let mut dates = Vec::new();
            for (stamp, status) in &record.availabilities {
                if status == STATUS_AVAILABLE {
                    dates.push(SiteDate::from_web_timestamp(stamp)?);
                }
            }
            if dates.is_empty() {
                continue;
            }
            snapshot.entry(record.site.clone()).or_default().extend(dates);
        }
    }

    for dates in snapshot.values_mut() {
        dates.sort_unstable();
    }
    Ok(snapshot)
}
