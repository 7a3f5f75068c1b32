use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::Track;

pub fn parse_added_date(added_at: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(added_at, "%Y-%m-%dT%H:%M:%SZ")
        .ok()
        .map(|dt| dt.date())
}

// Release dates come with day, month or year precision. A bare year can
// never match a month window, so only the first two forms parse.
pub fn parse_release_month(release_date: &str) -> Option<(i32, u32)> {
    let mut parts = release_date.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
