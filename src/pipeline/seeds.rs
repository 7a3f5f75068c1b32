use rand::{Rng, seq::SliceRandom};

use crate::types::{Artist, AudioFeatures, SavedTrackItem};

// Seeds are sampled from a small pool of the first followed artists and the
// most recently saved tracks, then cut down. Randomizing avoids feeding the
// recommender the same seeds on every run.
const SEED_POOL_SIZE: usize = 5;
const MAX_SEED_ARTISTS: usize = 2;
const MAX_SEED_TRACKS: usize = 2;
const MAX_SEED_GENRES: usize = 1;

pub fn sample_seed_artists(artists: &[Artist], rng: &mut impl Rng) -> Vec<String> {
    let mut ids: Vec<String> = artists
        .iter()
        .take(SEED_POOL_SIZE)
        .map(|artist| artist.id.clone())
        .collect();

    ids.shuffle(rng);
    ids.truncate(MAX_SEED_ARTISTS);
    ids
}

/// Saved tracks come newest first from the API, so the pool is the five
/// most recent saves.
pub fn sample_seed_tracks(saved: &[SavedTrackItem], rng: &mut impl Rng) -> Vec<String> {
    let mut ids: Vec<String> = saved
        .iter()
        .take(SEED_POOL_SIZE)
        .map(|item| item.track.id.clone())
        .collect();

    ids.shuffle(rng);
    ids.truncate(MAX_SEED_TRACKS);
    ids
}

/// Derives at most one seed genre from the audio features of the seed
/// tracks. Most features carry no genres at all, so an empty result is the
/// common case and fine.
pub fn sample_seed_genres(features: &[AudioFeatures], rng: &mut impl Rng) -> Vec<String> {
    let mut genres: Vec<String> = features
        .iter()
        .flat_map(|feature| feature.genres.iter().cloned())
        .collect();

    genres.sort();
    genres.dedup();
    genres.shuffle(rng);
    genres.truncate(MAX_SEED_GENRES);
    genres
}
