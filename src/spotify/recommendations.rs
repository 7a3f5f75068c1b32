use reqwest::Client;

use crate::{
    config,
    types::{RecommendationSeeds, RecommendationsResponse, Track},
};

/// Requests algorithmic track recommendations for a set of seeds.
///
/// Only non-empty seed categories are put on the query string. Callers must
/// not invoke this with an entirely empty seed set; the endpoint rejects
/// requests without any seeds, which is why the pipeline skips the call in
/// that case.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `seeds` - Seed artists, tracks and genres biasing the recommendation
/// * `limit` - Maximum number of recommended tracks to return
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Up to `limit` recommended tracks
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_recommendations(
    token: &str,
    seeds: &RecommendationSeeds,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    let mut api_url = format!(
        "{uri}/recommendations?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );
    if !seeds.artists.is_empty() {
        api_url.push_str(&format!("&seed_artists={}", seeds.artists.join(",")));
    }
    if !seeds.tracks.is_empty() {
        api_url.push_str(&format!("&seed_tracks={}", seeds.tracks.join(",")));
    }
    if !seeds.genres.is_empty() {
        api_url.push_str(&format!("&seed_genres={}", seeds.genres.join(",")));
    }

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<RecommendationsResponse>().await?;
    Ok(res.tracks)
}
