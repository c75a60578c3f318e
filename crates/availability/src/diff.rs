use std::collections::{BTreeMap, HashSet};

use crate::date::SiteDate;
use crate::snapshot::Snapshot;

/// Dates newly worth reporting, per site. Same shape as a [`Snapshot`] but
/// holds only members of qualifying intervals (see [`diff_snapshots`]).
pub type NewAvailability = BTreeMap<String, Vec<SiteDate>>;

/// Partitions sorted dates into maximal runs of calendar-consecutive days.
///
/// Adjacent dates chain when their day-of-year offsets in the reference year
/// differ by exactly one, which crosses month boundaries (`07/31` chains to
/// `08/01`) but never the year boundary: `12/31` and `01/01` sit 364 days
/// apart by this measure. A date with no offset in the reference year (Feb
/// 29 outside a leap year) never chains with a neighbor.
///
/// Every input date lands in exactly one run and runs are maximal, so the
/// concatenation of all runs is the input sequence.
pub fn consecutive_runs(sorted_dates: &[SiteDate], reference_year: i32) -> Vec<Vec<SiteDate>> {
    let mut runs: Vec<Vec<SiteDate>> = Vec::new();
    let mut previous_offset: Option<i64> = None;

    for &date in sorted_dates {
        let offset = date.day_of_year(reference_year);
        let extends_run = match (previous_offset, offset) {
            (Some(previous), Some(current)) => current - previous == 1,
            _ => false,
        };
        if extends_run {
            if let Some(run) = runs.last_mut() {
                run.push(date);
            }
        } else {
            runs.push(vec![date]);
        }
        previous_offset = offset;
    }
    runs
}

/// Computes one site's newly-reportable dates.
///
/// Sorts `current_dates`, partitions them into consecutive runs, drops runs
/// shorter than `min_stay_length`, then keeps a surviving run only when at
/// least one of its dates is absent from `previous_dates` (the novelty
/// gate). A kept run is returned whole: once a run qualifies, its
/// previously-known dates are part of the stay being reported.
///
/// Pure function of its inputs; neither argument is assumed sorted or
/// duplicate-free.
pub fn new_intervals(
    previous_dates: &[SiteDate],
    current_dates: &[SiteDate],
    min_stay_length: usize,
    reference_year: i32,
) -> Vec<SiteDate> {
    let known: HashSet<SiteDate> = previous_dates.iter().copied().collect();
    let mut sorted = current_dates.to_vec();
    sorted.sort_unstable();

    let mut new_dates = Vec::new();
    for run in consecutive_runs(&sorted, reference_year) {
        if run.len() < min_stay_length {
            continue;
        }
        if run.iter().any(|date| !known.contains(date)) {
            new_dates.extend(run);
        }
    }
    new_dates
}

/// Diffs two snapshots into the new-availability report.
///
/// Runs [`new_intervals`] for every site in `current`, using that site's
/// previous dates (empty when the site was absent before). Sites with
/// nothing to report are left out, as are sites present only in `previous`:
/// this reports what opened up, not what closed.
pub fn diff_snapshots(
    previous: &Snapshot,
    current: &Snapshot,
    min_stay_length: usize,
    reference_year: i32,
) -> NewAvailability {
    let mut report = NewAvailability::new();
    for (site, current_dates) in current {
        let previous_dates = previous.get(site).map(Vec::as_slice).unwrap_or_default();
        let fresh = new_intervals(
            previous_dates,
            current_dates,
            min_stay_length,
            reference_year,
        );
        if !fresh.is_empty() {
            report.insert(site.clone(), fresh);
        }
    }
    report
}
