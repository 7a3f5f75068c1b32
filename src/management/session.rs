use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use rand::{Rng, distr::Alphanumeric};

use crate::{server::ServerState, types::Token};

pub const COOKIE_SESSION_ID_KEY: &str = "session_id";

const SESSION_ID_LENGTH: usize = 64;

/// In-memory, per-process session store mapping opaque cookie values to
/// tokens. The only state shared across requests.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Token>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh session holding the token and returns the cookie
    /// value identifying it.
    pub fn start(&self, token: Token) -> String {
        let session_id: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LENGTH)
            .map(char::from)
            .collect();

        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.clone(), token);
        session_id
    }

    pub fn token(&self, session_id: &str) -> Option<Token> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }

    /// Stores a token back under an existing session id, e.g. after a
    /// refresh during a pipeline run.
    pub fn update(&self, session_id: &str, token: Token) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.to_string(), token);
    }
}

#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub token: Token,
}

/// Rejection for handlers that require a session: the browser is sent back
/// through the login flow.
pub struct AuthRequired;

impl IntoResponse for AuthRequired {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

async fn extract_session(parts: &mut Parts, state: &ServerState) -> Option<Session> {
    let session_id = CookieJar::from_request_parts(parts, state)
        .await
        .ok()?
        .get(COOKIE_SESSION_ID_KEY)
        .map(|cookie| cookie.value().to_string())?;

    state.sessions.token(&session_id).map(|token| Session {
        id: session_id,
        token,
    })
}

impl FromRequestParts<ServerState> for Session {
    type Rejection = AuthRequired;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        extract_session(parts, state).await.ok_or(AuthRequired)
    }
}

impl OptionalFromRequestParts<ServerState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(extract_session(parts, state).await)
    }
}
