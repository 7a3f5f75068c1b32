use crate::{
    management::TokenManager,
    pipeline::{OP_PLAYLIST_LISTING, PipelineError, valid_token},
    spotify,
};

/// Fetches the names of all of the user's playlists, across every page.
pub async fn fetch_existing_playlist_names(
    token_mgr: &mut TokenManager,
) -> Result<Vec<String>, PipelineError> {
    let mut names = Vec::new();
    let mut page_url: Option<String> = None;

    loop {
        let token = valid_token(token_mgr).await?;
        let page = spotify::playlist::get_user_playlists_page(&token, page_url.as_deref())
            .await
            .map_err(|source| PipelineError::Upstream {
                operation: OP_PLAYLIST_LISTING,
                source,
            })?;

        names.extend(page.items.into_iter().map(|playlist| playlist.name));

        match page.next {
            Some(next) => page_url = Some(next),
            None => break,
        }
    }

    Ok(names)
}

/// Resolves a playlist name that does not collide with any existing one by
/// appending " (1)", " (2)", ... to the desired name.
///
/// Terminates after at most `existing.len() + 1` candidates, since that
/// many distinct names cannot all be taken.
pub fn resolve_unique_name(desired: &str, existing: &[String]) -> String {
    if !existing.iter().any(|name| name == desired) {
        return desired.to_string();
    }

    let mut suffix = 1;
    loop {
        let candidate = format!("{} ({})", desired, suffix);
        if !existing.iter().any(|name| name == &candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
