use rand::{Rng, seq::SliceRandom};

use crate::{
    pipeline::{MIN_UNIQUE_TRACKS, PipelineError},
    types::Track,
    utils,
};

/// Merges the candidate lists into one unique set.
///
/// The concatenation is shuffled before deduplication so no source
/// dominates the presentation order; which duplicate survives is therefore
/// random, but the resulting id set is the same for any order. Fails with
/// `InsufficientData` when fewer than [`MIN_UNIQUE_TRACKS`] unique tracks
/// remain.
pub fn merge_unique(
    sources: Vec<Vec<Track>>,
    rng: &mut impl Rng,
) -> Result<Vec<Track>, PipelineError> {
    let mut candidates: Vec<Track> = sources.into_iter().flatten().collect();
    candidates.shuffle(rng);
    utils::remove_duplicate_tracks(&mut candidates);

    if candidates.len() < MIN_UNIQUE_TRACKS {
        return Err(PipelineError::InsufficientData {
            found: candidates.len(),
        });
    }

    Ok(candidates)
}
