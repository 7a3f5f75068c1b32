use chrono::NaiveDate;
use replaylist::types::{Token, TimeWindow, Track, TrackAlbum, TrackArtist};
use replaylist::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, release_date: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: "Test Artist".to_string(),
        }],
        album: TrackAlbum {
            name: format!("{} Album", name),
            release_date: release_date.to_string(),
            release_date_precision: "day".to_string(),
        },
    }
}

#[test]
fn test_parse_added_date() {
    // Standard saved-track timestamp
    let date = parse_added_date("2024-03-15T08:30:00Z").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    // Midnight on the first of the month
    let date = parse_added_date("2024-03-01T00:00:00Z").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

    // Malformed timestamps yield None instead of panicking
    assert!(parse_added_date("2024-03-15").is_none());
    assert!(parse_added_date("not a date").is_none());
    assert!(parse_added_date("").is_none());
}

#[test]
fn test_parse_release_month() {
    // Day precision
    assert_eq!(parse_release_month("2024-03-15"), Some((2024, 3)));

    // Month precision
    assert_eq!(parse_release_month("2024-03"), Some((2024, 3)));

    // Year precision carries no month and cannot match a month window
    assert_eq!(parse_release_month("2024"), None);

    // Invalid values
    assert_eq!(parse_release_month("2024-13"), None);
    assert_eq!(parse_release_month("2024-00-01"), None);
    assert_eq!(parse_release_month("garbage"), None);
    assert_eq!(parse_release_month(""), None);
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track("id1", "Track 1", "2024-03-01"),
        create_test_track("id2", "Track 2", "2024-03-02"),
        create_test_track("id1", "Track 1 Duplicate", "2024-03-01"), // Duplicate
        create_test_track("id3", "Track 3", "2024-03-03"),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should contain the first occurrence of each unique ID
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_remove_duplicate_ids() {
    let mut ids = vec![
        "a".to_string(),
        "b".to_string(),
        "a".to_string(),
        "c".to_string(),
        "b".to_string(),
    ];

    remove_duplicate_ids(&mut ids);

    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_time_window_validation() {
    assert!(TimeWindow::new(2024, 3).is_some());
    assert!(TimeWindow::new(2024, 12).is_some());

    // Month must be within 1..=12
    assert!(TimeWindow::new(2024, 0).is_none());
    assert!(TimeWindow::new(2024, 13).is_none());
}

#[test]
fn test_time_window_contains_month_boundaries() {
    let window = TimeWindow::new(2024, 3).unwrap();

    // First and last day of the month are part of the window
    assert!(window.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    assert!(window.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));

    // Neighboring days are not
    assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));

    // Same month of a different year is not
    assert!(!window.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
}

#[test]
fn test_previous_month() {
    // Mid-year
    let today = NaiveDate::from_ymd_opt(2024, 4, 12).unwrap();
    assert_eq!(
        TimeWindow::previous_month(today),
        TimeWindow::new(2024, 3).unwrap()
    );

    // January wraps to December of the previous year
    let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(
        TimeWindow::previous_month(today),
        TimeWindow::new(2023, 12).unwrap()
    );
}

#[test]
fn test_is_previous_month() {
    let today = NaiveDate::from_ymd_opt(2024, 4, 12).unwrap();

    assert!(TimeWindow::new(2024, 3).unwrap().is_previous_month(today));
    assert!(!TimeWindow::new(2024, 4).unwrap().is_previous_month(today));
    assert!(!TimeWindow::new(2023, 3).unwrap().is_previous_month(today));
}

#[test]
fn test_time_window_title() {
    assert_eq!(TimeWindow::new(2024, 3).unwrap().title(), "March 2024");
    assert_eq!(TimeWindow::new(2024, 6).unwrap().title(), "June 2024");
    assert_eq!(TimeWindow::new(2023, 12).unwrap().title(), "December 2023");
}

#[test]
fn test_token_staleness_boundary() {
    let now: u64 = 1_700_000_000;

    let token = |obtained_at: u64| Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "scope".to_string(),
        expires_in: 3600,
        obtained_at,
    };

    // Expires exactly 60 seconds from now: must refresh
    assert!(token(now - 3540).is_stale(now));

    // Expires 61 seconds from now: still usable
    assert!(!token(now - 3539).is_stale(now));

    // Already expired
    assert!(token(now - 7200).is_stale(now));
}
