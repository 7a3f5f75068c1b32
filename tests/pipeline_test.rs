use std::collections::BTreeSet;

use rand::{SeedableRng, rngs::StdRng};
use replaylist::pipeline::{
    MIN_UNIQUE_TRACKS, PipelineError, merge_unique, resolve_unique_name, sample_seed_artists,
    sample_seed_genres, sample_seed_tracks, saved_in_window, track_released_in_window,
};
use replaylist::types::{
    Artist, AudioFeatures, RecommendationSeeds, SavedTrackItem, TimeWindow, Track, TrackAlbum,
    TrackArtist,
};

// Helper function to create a test track
fn create_test_track(id: &str, release_date: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: "Test Artist".to_string(),
        }],
        album: TrackAlbum {
            name: format!("Album {}", id),
            release_date: release_date.to_string(),
            release_date_precision: "day".to_string(),
        },
    }
}

// Helper function to create a saved-track item
fn create_saved_item(id: &str, added_at: &str) -> SavedTrackItem {
    SavedTrackItem {
        added_at: added_at.to_string(),
        track: create_test_track(id, "2020-01-01"),
    }
}

// Helper function to create a followed artist
fn create_test_artist(id: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("Artist {}", id),
        genres: vec![],
    }
}

fn id_set(tracks: &[Track]) -> BTreeSet<String> {
    tracks.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn test_saved_in_window_exact() {
    let window = TimeWindow::new(2024, 3).unwrap();

    let saved = vec![
        // In window, including both month boundaries
        create_saved_item("in1", "2024-03-01T00:00:00Z"),
        create_saved_item("in2", "2024-03-15T12:30:00Z"),
        create_saved_item("in3", "2024-03-31T23:59:59Z"),
        // Outside the window
        create_saved_item("out1", "2024-02-29T23:59:59Z"),
        create_saved_item("out2", "2024-04-01T00:00:00Z"),
        create_saved_item("out3", "2023-03-15T12:00:00Z"),
    ];

    let filtered = saved_in_window(&saved, window);

    let ids = id_set(&filtered);
    assert_eq!(
        ids,
        BTreeSet::from(["in1".to_string(), "in2".to_string(), "in3".to_string()])
    );
}

#[test]
fn test_saved_in_window_unparsable_timestamps_dropped() {
    let window = TimeWindow::new(2024, 3).unwrap();
    let saved = vec![
        create_saved_item("ok", "2024-03-10T10:00:00Z"),
        create_saved_item("bad", "2024-03-10"),
    ];

    let filtered = saved_in_window(&saved, window);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "ok");
}

#[test]
fn test_track_released_in_window() {
    let window = TimeWindow::new(2024, 3).unwrap();

    // Day precision
    assert!(track_released_in_window(
        &create_test_track("a", "2024-03-22"),
        window
    ));

    // Month precision still matches
    assert!(track_released_in_window(
        &create_test_track("b", "2024-03"),
        window
    ));

    // Different month, and year-only precision never matches
    assert!(!track_released_in_window(
        &create_test_track("c", "2024-02-22"),
        window
    ));
    assert!(!track_released_in_window(
        &create_test_track("d", "2024"),
        window
    ));
}

#[test]
fn test_merge_unique_is_set_reduction() {
    let mut rng = StdRng::seed_from_u64(7);

    // 12 candidates across sources, 2 of them duplicated ids
    let saved: Vec<Track> = (0..8)
        .map(|i| create_test_track(&format!("s{}", i), "2024-03-01"))
        .collect();
    let releases = vec![
        create_test_track("r0", "2024-03-08"),
        create_test_track("s0", "2024-03-01"), // duplicate of a saved track
    ];
    let recommended = vec![
        create_test_track("x0", "2024-01-01"),
        create_test_track("x1", "2024-01-01"),
        create_test_track("r0", "2024-03-08"), // duplicate of a release
    ];

    let unique = merge_unique(vec![saved, vec![], releases, recommended], &mut rng).unwrap();

    // 11 distinct ids in, 11 tracks out
    assert_eq!(unique.len(), 11);
    assert_eq!(id_set(&unique).len(), unique.len());
}

#[test]
fn test_merge_unique_order_invariant() {
    // Different shuffle orders must never change the resulting id set
    let sources = || {
        vec![
            (0..6)
                .map(|i| create_test_track(&format!("a{}", i), "2024-03-01"))
                .collect::<Vec<_>>(),
            (0..6)
                .map(|i| create_test_track(&format!("b{}", i), "2024-03-01"))
                .collect::<Vec<_>>(),
        ]
    };

    let mut rng1 = StdRng::seed_from_u64(1);
    let mut rng2 = StdRng::seed_from_u64(99);

    let unique1 = merge_unique(sources(), &mut rng1).unwrap();
    let unique2 = merge_unique(sources(), &mut rng2).unwrap();

    assert_eq!(id_set(&unique1), id_set(&unique2));
}

#[test]
fn test_merge_unique_insufficient_data() {
    let mut rng = StdRng::seed_from_u64(7);

    // 12 candidates but only 9 unique ids
    let saved: Vec<Track> = (0..9)
        .map(|i| create_test_track(&format!("s{}", i), "2024-03-01"))
        .collect();
    let duplicates: Vec<Track> = (0..3)
        .map(|i| create_test_track(&format!("s{}", i), "2024-03-01"))
        .collect();

    let result = merge_unique(vec![saved, duplicates], &mut rng);

    match result {
        Err(PipelineError::InsufficientData { found }) => assert_eq!(found, 9),
        other => panic!("expected InsufficientData, got {:?}", other),
    }
}

#[test]
fn test_merge_unique_at_threshold() {
    let mut rng = StdRng::seed_from_u64(7);

    let saved: Vec<Track> = (0..MIN_UNIQUE_TRACKS)
        .map(|i| create_test_track(&format!("s{}", i), "2024-03-01"))
        .collect();

    // Exactly the minimum passes
    let unique = merge_unique(vec![saved], &mut rng).unwrap();
    assert_eq!(unique.len(), MIN_UNIQUE_TRACKS);
}

#[test]
fn test_resolve_unique_name() {
    // Free name is used as-is
    let existing = vec!["May 2024".to_string()];
    assert_eq!(resolve_unique_name("June 2024", &existing), "June 2024");

    // Taken name gets the first free suffix
    let existing = vec!["June 2024".to_string()];
    assert_eq!(resolve_unique_name("June 2024", &existing), "June 2024 (1)");

    // Suffixes keep incrementing past existing ones
    let existing = vec!["June 2024".to_string(), "June 2024 (1)".to_string()];
    assert_eq!(resolve_unique_name("June 2024", &existing), "June 2024 (2)");

    // A gap in the suffixes is reused
    let existing = vec!["June 2024".to_string(), "June 2024 (2)".to_string()];
    assert_eq!(resolve_unique_name("June 2024", &existing), "June 2024 (1)");
}

#[test]
fn test_resolve_unique_name_terminates() {
    // Pathological set: desired name plus suffixes 1..=50 all taken
    let mut existing = vec!["June 2024".to_string()];
    for i in 1..=50 {
        existing.push(format!("June 2024 ({})", i));
    }

    assert_eq!(resolve_unique_name("June 2024", &existing), "June 2024 (51)");
}

#[test]
fn test_sample_seed_artists_bounds() {
    let mut rng = StdRng::seed_from_u64(7);

    let artists: Vec<Artist> = (0..8).map(|i| create_test_artist(&format!("a{}", i))).collect();
    let seeds = sample_seed_artists(&artists, &mut rng);

    // At most 2 seeds, sampled only from the first 5 artists
    assert!(seeds.len() <= 2);
    let pool: BTreeSet<String> = artists.iter().take(5).map(|a| a.id.clone()).collect();
    assert!(seeds.iter().all(|id| pool.contains(id)));

    // Empty input yields no seeds
    assert!(sample_seed_artists(&[], &mut rng).is_empty());
}

#[test]
fn test_sample_seed_tracks_bounds() {
    let mut rng = StdRng::seed_from_u64(7);

    let saved: Vec<SavedTrackItem> = (0..8)
        .map(|i| create_saved_item(&format!("t{}", i), "2024-03-01T00:00:00Z"))
        .collect();
    let seeds = sample_seed_tracks(&saved, &mut rng);

    // At most 2 seeds, sampled only from the five most recent saves
    assert!(seeds.len() <= 2);
    let pool: BTreeSet<String> = saved.iter().take(5).map(|s| s.track.id.clone()).collect();
    assert!(seeds.iter().all(|id| pool.contains(id)));

    assert!(sample_seed_tracks(&[], &mut rng).is_empty());
}

#[test]
fn test_sample_seed_genres() {
    let mut rng = StdRng::seed_from_u64(7);

    // Features usually carry no genres; tolerated
    let bare = vec![AudioFeatures {
        id: "t1".to_string(),
        genres: vec![],
    }];
    assert!(sample_seed_genres(&bare, &mut rng).is_empty());
    assert!(sample_seed_genres(&[], &mut rng).is_empty());

    // At most one genre survives, drawn from the deduplicated union
    let features = vec![
        AudioFeatures {
            id: "t1".to_string(),
            genres: vec!["indie".to_string(), "rock".to_string()],
        },
        AudioFeatures {
            id: "t2".to_string(),
            genres: vec!["rock".to_string()],
        },
    ];
    let seeds = sample_seed_genres(&features, &mut rng);
    assert_eq!(seeds.len(), 1);
    assert!(seeds[0] == "indie" || seeds[0] == "rock");
}

#[test]
fn test_empty_seed_categories_skip_recommendations() {
    // With no followed artists and no saved tracks there are no seeds, and
    // the pipeline must not call the recommendation endpoint at all.
    let mut rng = StdRng::seed_from_u64(7);

    let seeds = RecommendationSeeds {
        artists: sample_seed_artists(&[], &mut rng),
        tracks: sample_seed_tracks(&[], &mut rng),
        genres: sample_seed_genres(&[], &mut rng),
    };

    assert!(seeds.is_empty());
}

#[test]
fn test_march_2024_scenario() {
    // 12 saved tracks, 8 of them added in March 2024; two followed artists
    // with one March release each; 3 recommended tracks; no top tracks.
    let window = TimeWindow::new(2024, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let mut saved = Vec::new();
    for i in 0..8 {
        saved.push(create_saved_item(
            &format!("saved{}", i),
            "2024-03-10T09:00:00Z",
        ));
    }
    for i in 8..12 {
        saved.push(create_saved_item(
            &format!("saved{}", i),
            "2024-01-02T09:00:00Z",
        ));
    }

    let saved_tracks = saved_in_window(&saved, window);
    assert_eq!(saved_tracks.len(), 8);

    let releases = vec![
        create_test_track("release1", "2024-03-01"),
        create_test_track("release2", "2024-03-29"),
    ];
    assert!(releases.iter().all(|t| track_released_in_window(t, window)));

    let recommended = vec![
        create_test_track("rec1", "2023-11-11"),
        create_test_track("rec2", "2023-05-05"),
        create_test_track("rec3", "2024-02-02"),
    ];

    // 8 + 0 + 2 + 3 = 13 unique candidates, above the threshold
    let unique = merge_unique(vec![saved_tracks, vec![], releases, recommended], &mut rng).unwrap();
    assert_eq!(unique.len(), 13);

    // The draft title defaults to the window's long form
    assert_eq!(window.title(), "March 2024");
}
