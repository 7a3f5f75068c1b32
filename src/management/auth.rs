use chrono::Utc;

use crate::{spotify, types::Token};

/// Holds the current session's token and refreshes it on demand. Callers
/// write the possibly-refreshed token back to the session store when the
/// request is done.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Returns an access token valid for at least the next minute,
    /// refreshing through the token endpoint first when the current one is
    /// within 60 seconds of expiry.
    pub async fn get_valid_token(&mut self) -> Result<String, reqwest::Error> {
        let now = Utc::now().timestamp() as u64;
        if self.token.is_stale(now) {
            self.token = spotify::auth::refresh_token(&self.token.refresh_token).await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn into_token(self) -> Token {
        self.token
    }
}
