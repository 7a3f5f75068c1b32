use crate::{
    management::TokenManager,
    pipeline::{
        OP_FOLLOWED_ARTISTS, OP_NEW_RELEASES, OP_SAVED_TRACKS, OP_TOP_TRACKS, PipelineError,
        valid_token,
    },
    spotify,
    types::{Artist, SavedTrackItem, TimeWindow, Track},
    utils,
};
use chrono::NaiveDate;

/// Fetches the user's complete saved-tracks history, page by page.
pub async fn fetch_saved_tracks(
    token_mgr: &mut TokenManager,
) -> Result<Vec<SavedTrackItem>, PipelineError> {
    let mut saved = Vec::new();
    let mut page_url: Option<String> = None;

    loop {
        let token = valid_token(token_mgr).await?;
        let page = spotify::tracks::get_saved_tracks_page(&token, page_url.as_deref())
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_SAVED_TRACKS,
                source,
            })?;

        saved.extend(page.items);

        match page.next {
            Some(next) => page_url = Some(next),
            None => break,
        }
    }

    Ok(saved)
}

/// Keeps the tracks whose saved timestamp falls in the window's month.
/// First and last day of the month are included; items with unparsable
/// timestamps are dropped.
pub fn saved_in_window(saved: &[SavedTrackItem], window: TimeWindow) -> Vec<Track> {
    saved
        .iter()
        .filter(|item| {
            utils::parse_added_date(&item.added_at).is_some_and(|date| window.contains(date))
        })
        .map(|item| item.track.clone())
        .collect()
}

/// Fetches short-term top tracks, but only when the window is the previous
/// calendar month relative to `today`.
///
/// The API has no historical top tracks, so for any other window this
/// source is empty rather than fabricated.
pub async fn top_tracks_in_window(
    token_mgr: &mut TokenManager,
    window: TimeWindow,
    today: NaiveDate,
) -> Result<Vec<Track>, PipelineError> {
    if !window.is_previous_month(today) {
        return Ok(Vec::new());
    }

    let token = valid_token(token_mgr).await?;
    spotify::tracks::get_top_tracks(&token, "short_term")
        .await
        .map_err(|source| PipelineError::Upstream {
            operation: OP_TOP_TRACKS,
            source,
        })
}

/// Fetches every artist the user follows, following the pagination cursor
/// until it runs out.
pub async fn fetch_followed_artists(
    token_mgr: &mut TokenManager,
) -> Result<Vec<Artist>, PipelineError> {
    let mut all_artists = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let token = valid_token(token_mgr).await?;
        let (artists, next_after) = spotify::artists::get_followed_artists(&token, 50, after)
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_FOLLOWED_ARTISTS,
                source,
            })?;

        if artists.is_empty() {
            break;
        }

        all_artists.extend(artists);
        after = next_after;

        if after.is_none() {
            break;
        }
    }

    Ok(all_artists)
}

/// Collects tracks released in the window by any followed artist.
///
/// One remote call per artist; the first failure short-circuits the whole
/// run.
pub async fn new_releases_in_window(
    token_mgr: &mut TokenManager,
    artists: &[Artist],
    market: &str,
    window: TimeWindow,
) -> Result<Vec<Track>, PipelineError> {
    let mut releases = Vec::new();

    for artist in artists {
        let token = valid_token(token_mgr).await?;
        let top_tracks = spotify::artists::get_artist_top_tracks(&token, &artist.id, market)
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_NEW_RELEASES,
                source,
            })?;

        releases.extend(
            top_tracks
                .into_iter()
                .filter(|track| track_released_in_window(track, window)),
        );
    }

    Ok(releases)
}

pub fn track_released_in_window(track: &Track, window: TimeWindow) -> bool {
    utils::parse_release_month(&track.album.release_date)
        .is_some_and(|(year, month)| year == window.year() && month == window.month())
}
