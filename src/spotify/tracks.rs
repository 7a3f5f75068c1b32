use reqwest::Client;

use crate::{
    config,
    types::{AudioFeatures, AudioFeaturesResponse, SavedTracksPage, TopTracksResponse, Track},
};

/// Retrieves one page of the user's saved tracks.
///
/// The first page is requested with a limit of 50; subsequent pages are
/// fetched through the absolute `next` URL returned by the API. The caller
/// drives the pagination until `next` is exhausted, so the full library
/// history is traversed.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `page_url` - `None` for the first page, or the previous page's `next`
///   URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SavedTracksPage)` - Saved track items and the next page URL, if any
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_saved_tracks_page(
    token: &str,
    page_url: Option<&str>,
) -> Result<SavedTracksPage, reqwest::Error> {
    let api_url = match page_url {
        Some(url) => url.to_string(),
        None => format!("{uri}/me/tracks?limit=50", uri = &config::spotify_apiurl()),
    };

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SavedTracksPage>().await?;
    Ok(res)
}

/// Retrieves the user's top tracks for the given time range.
///
/// The API exposes no historical top tracks; `short_term` is the only range
/// the pipeline uses, as an approximation of the previous calendar month.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `time_range` - One of `short_term`, `medium_term`, `long_term`
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - The top tracks for the range
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_top_tracks(token: &str, time_range: &str) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/top/tracks?time_range={time_range}&limit=50",
        uri = &config::spotify_apiurl(),
        time_range = time_range
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>().await?;
    Ok(res.items)
}

/// Retrieves audio features for a batch of tracks.
///
/// Entries the API cannot resolve come back as `null` and are dropped. An
/// empty id list short-circuits without a request.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `track_ids` - Track ids to look up, at most 100 per call
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<AudioFeatures>)` - Features for the resolvable tracks
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_audio_features(
    token: &str,
    track_ids: &[String],
) -> Result<Vec<AudioFeatures>, reqwest::Error> {
    if track_ids.is_empty() {
        return Ok(Vec::new());
    }

    let api_url = format!(
        "{uri}/audio-features?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = track_ids.join(",")
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<AudioFeaturesResponse>().await?;
    Ok(res.audio_features.into_iter().flatten().collect())
}
