use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    management::TokenManager,
    pipeline::{
        MIN_UNIQUE_TRACKS, OP_PLAYLIST_CREATION, OP_PLAYLIST_TRACKS, OP_USER_PROFILE,
        PipelineError, valid_token,
    },
    spotify, success,
    types::{CreatePlaylistRequest, CreatePlaylistResponse, PublishRequest},
    utils, warning,
};

/// Upper bound for the decoded cover image, in bytes. Larger uploads are
/// rejected by the API anyway, so they are skipped up front.
pub const MAX_COVER_IMAGE_BYTES: usize = 256_000;

const ADD_TRACKS_CHUNK_SIZE: usize = 100;

/// Publishes a reviewed draft as a private playlist.
///
/// Runs the two mandatory phases, create and populate, with the optional
/// cover upload in between. A failing cover upload is logged and tolerated;
/// a failure in either mandatory phase aborts with an upstream error. The
/// curated track ids are deduplicated first and must still meet the minimum
/// count, otherwise nothing is created.
pub async fn publish(
    token_mgr: &mut TokenManager,
    request: &PublishRequest,
) -> Result<CreatePlaylistResponse, PipelineError> {
    let mut track_ids = request.track_ids.clone();
    utils::remove_duplicate_ids(&mut track_ids);

    if track_ids.len() < MIN_UNIQUE_TRACKS {
        return Err(PipelineError::InsufficientData {
            found: track_ids.len(),
        });
    }

    let token = valid_token(token_mgr).await?;
    let user = spotify::user::get_current_user(&token)
        .await
        .map_err(|source| PipelineError::Upstream {
            operation: OP_USER_PROFILE,
            source,
        })?;

    let create_request = CreatePlaylistRequest {
        name: request.title.clone(),
        description: request.description.clone(),
        public: false,
        collaborative: false,
    };

    let token = valid_token(token_mgr).await?;
    let playlist = spotify::playlist::create(&token, &user.id, &create_request)
        .await
        .map_err(|source| PipelineError::Upstream {
            operation: OP_PLAYLIST_CREATION,
            source,
        })?;

    success!("Created playlist \"{}\"", playlist.name);

    // The cover is the only optional phase. The playlist still goes out
    // without a custom cover when anything here fails.
    if let Some(image_base64) = &request.cover_image {
        attach_cover(token_mgr, &playlist.id, image_base64).await;
    }

    for chunk in track_ids.chunks(ADD_TRACKS_CHUNK_SIZE) {
        let uris = chunk
            .iter()
            .map(|id| format!("spotify:track:{}", id))
            .collect();

        let token = valid_token(token_mgr).await?;
        spotify::playlist::add_tracks(&token, &playlist.id, uris)
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_PLAYLIST_TRACKS,
                source,
            })?;
    }

    success!(
        "Added {} tracks to playlist \"{}\"",
        track_ids.len(),
        playlist.name
    );

    Ok(playlist)
}

async fn attach_cover(token_mgr: &mut TokenManager, playlist_id: &str, image_base64: &str) {
    let decoded_len = match STANDARD.decode(image_base64) {
        Ok(bytes) => bytes.len(),
        Err(e) => {
            warning!("Cover image is not valid base64, skipping upload: {}", e);
            return;
        }
    };

    if decoded_len > MAX_COVER_IMAGE_BYTES {
        warning!(
            "Cover image is {} bytes, over the {} byte limit, skipping upload",
            decoded_len,
            MAX_COVER_IMAGE_BYTES
        );
        return;
    }

    let token = match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token refresh failed before cover upload, skipping: {}", e);
            return;
        }
    };

    if let Err(e) = spotify::playlist::upload_cover(&token, playlist_id, image_base64).await {
        warning!("Failed to upload playlist cover: {}", e);
    }
}
