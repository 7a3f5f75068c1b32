use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    management::COOKIE_SESSION_ID_KEY, server::ServerState, spotify, success, warning,
};

pub async fn login() -> Redirect {
    Redirect::to(&spotify::auth::authorize_url())
}

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Response {
    let Some(code) = params.get("code") else {
        warning!(
            "Authorization callback without a code (error: {:?})",
            params.get("error")
        );
        return Redirect::to("/").into_response();
    };

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            // A login always starts a fresh session; nothing is carried
            // over from a previous one.
            let session_id = state.sessions.start(token);
            let cookie = Cookie::build((COOKIE_SESSION_ID_KEY, session_id))
                .path("/")
                .http_only(true)
                .build();

            success!("Authentication successful, session started");
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Redirect::to("/").into_response()
        }
    }
}
