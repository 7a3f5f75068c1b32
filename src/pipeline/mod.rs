//! # Playlist Pipeline Module
//!
//! This module implements the core of the service: collecting candidate
//! tracks for a selected month from four sources, merging them into a
//! unique, shuffled set, resolving a free playlist name and publishing the
//! user-approved result.
//!
//! The stages and their order:
//!
//! 1. [`collector`] - saved tracks, top tracks and followed-artist new
//!    releases, filtered to the selected month
//! 2. [`seeds`] - randomized seed sampling for the recommendation request
//! 3. [`aggregate`] - shuffle, dedup by track id and enforce the minimum
//!    candidate threshold
//! 4. [`namer`] - collision-free playlist name against the user's existing
//!    playlists
//! 5. [`publisher`] - two-phase publish: create, optional cover, populate
//!
//! Every remote failure aborts the run with [`PipelineError::Upstream`],
//! carrying the operation name for logging and a distinct user-facing
//! message. A candidate pool below [`MIN_UNIQUE_TRACKS`] yields
//! [`PipelineError::InsufficientData`], which is non-fatal and invites the
//! user to pick a different month.

use std::fmt;

use chrono::NaiveDate;
use rand::Rng;

use crate::{
    management::TokenManager,
    spotify,
    types::{PlaylistDraft, RecommendationSeeds, TimeWindow},
};

mod aggregate;
mod collector;
mod namer;
mod publisher;
mod seeds;

pub use aggregate::merge_unique;
pub use collector::{new_releases_in_window, saved_in_window, track_released_in_window};
pub use namer::resolve_unique_name;
pub use publisher::{MAX_COVER_IMAGE_BYTES, publish};
pub use seeds::{sample_seed_artists, sample_seed_genres, sample_seed_tracks};

/// A playlist is never published with fewer unique tracks than this.
pub const MIN_UNIQUE_TRACKS: usize = 10;

pub const RECOMMENDATION_LIMIT: u32 = 10;

pub const DEFAULT_DESCRIPTION: &str = "Replay the month with a curated selection of your favourite songs, recent discoveries, plus new releases and recommended tracks based on your listening habits.";

pub const OP_TOKEN_REFRESH: &str = "token refresh";
pub const OP_USER_PROFILE: &str = "user profile";
pub const OP_SAVED_TRACKS: &str = "saved tracks";
pub const OP_TOP_TRACKS: &str = "top tracks";
pub const OP_FOLLOWED_ARTISTS: &str = "followed artists";
pub const OP_NEW_RELEASES: &str = "new releases";
pub const OP_AUDIO_FEATURES: &str = "audio features";
pub const OP_RECOMMENDATIONS: &str = "recommendations";
pub const OP_PLAYLIST_LISTING: &str = "playlist listing";
pub const OP_PLAYLIST_CREATION: &str = "playlist creation";
pub const OP_PLAYLIST_TRACKS: &str = "adding playlist tracks";

#[derive(Debug)]
pub enum PipelineError {
    /// A remote call failed. Aborts the run; never retried.
    Upstream {
        operation: &'static str,
        source: reqwest::Error,
    },
    /// Fewer than [`MIN_UNIQUE_TRACKS`] unique candidates were found for
    /// the selected month. Non-fatal.
    InsufficientData { found: usize },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Upstream { operation, .. } => f.write_str(user_message(operation)),
            PipelineError::InsufficientData { .. } => f.write_str(
                "There is not enough data for the selected month/year combination. Please select a different one.",
            ),
        }
    }
}

fn user_message(operation: &str) -> &'static str {
    match operation {
        OP_USER_PROFILE => {
            "An error occurred while retrieving your user information. Please try again later."
        }
        OP_SAVED_TRACKS => {
            "An error occurred while retrieving your saved tracks. Please try again later."
        }
        OP_TOP_TRACKS => {
            "An error occurred while retrieving your top tracks. Please try again later."
        }
        OP_FOLLOWED_ARTISTS => {
            "An error occurred while retrieving your followed artists. Please try again later."
        }
        OP_NEW_RELEASES => "An error occurred while retrieving new releases. Please try again later.",
        OP_RECOMMENDATIONS => {
            "An error has occurred while generating your recommendations. Please try again later."
        }
        _ => "An error has occurred. Please try again later.",
    }
}

pub(crate) async fn valid_token(token_mgr: &mut TokenManager) -> Result<String, PipelineError> {
    token_mgr
        .get_valid_token()
        .await
        .map_err(|source| PipelineError::Upstream {
            operation: OP_TOKEN_REFRESH,
            source,
        })
}

/// Runs the aggregation pipeline for a month and returns the reviewable
/// draft: a free playlist name, the default description and the shuffled
/// unique candidate set.
///
/// `today` anchors the "previous calendar month" check for the top-tracks
/// source and `rng` drives all sampling and shuffling, so both are injected
/// for testability. The token manager refreshes the session token before
/// any call that needs it; the caller persists the possibly-refreshed token
/// afterwards.
pub async fn generate(
    window: TimeWindow,
    today: NaiveDate,
    token_mgr: &mut TokenManager,
    rng: &mut impl Rng,
) -> Result<PlaylistDraft, PipelineError> {
    let token = valid_token(token_mgr).await?;
    let user = spotify::user::get_current_user(&token)
        .await
        .map_err(|source| PipelineError::Upstream {
            operation: OP_USER_PROFILE,
            source,
        })?;

    let saved = collector::fetch_saved_tracks(token_mgr).await?;
    let saved_tracks = collector::saved_in_window(&saved, window);
    let top_tracks = collector::top_tracks_in_window(token_mgr, window, today).await?;
    let artists = collector::fetch_followed_artists(token_mgr).await?;
    let releases =
        collector::new_releases_in_window(token_mgr, &artists, &user.country, window).await?;

    let seed_artists = seeds::sample_seed_artists(&artists, rng);
    let seed_tracks = seeds::sample_seed_tracks(&saved, rng);
    let seed_genres = if seed_tracks.is_empty() {
        Vec::new()
    } else {
        let token = valid_token(token_mgr).await?;
        let features = spotify::tracks::get_audio_features(&token, &seed_tracks)
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_AUDIO_FEATURES,
                source,
            })?;
        seeds::sample_seed_genres(&features, rng)
    };

    let seed_set = RecommendationSeeds {
        artists: seed_artists,
        tracks: seed_tracks,
        genres: seed_genres,
    };

    // Calling the recommendation endpoint with zero seeds is invalid, so an
    // empty seed set yields an empty recommendation list instead.
    let recommended = if seed_set.is_empty() {
        Vec::new()
    } else {
        let token = valid_token(token_mgr).await?;
        spotify::recommendations::get_recommendations(&token, &seed_set, RECOMMENDATION_LIMIT)
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_RECOMMENDATIONS,
                source,
            })?
    };

    let unique = aggregate::merge_unique(
        vec![saved_tracks, top_tracks, releases, recommended],
        rng,
    )?;

    let existing_names = namer::fetch_existing_playlist_names(token_mgr).await?;
    let name = namer::resolve_unique_name(&window.title(), &existing_names);

    Ok(PlaylistDraft {
        name,
        description: DEFAULT_DESCRIPTION.to_string(),
        tracks: unique,
    })
}
