use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{
    management::{Session, TokenManager},
    pipeline::{self, PipelineError},
    server::ServerState,
    types::{PublishRequest, TimeWindow},
    warning,
};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateForm {
    pub year: i32,
    pub month: u32,
}

/// Runs the aggregation pipeline for the selected month and returns the
/// review draft. The session token is written back afterwards because the
/// pipeline may have refreshed it.
pub async fn generate(
    session: Session,
    State(state): State<ServerState>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let Some(window) = TimeWindow::new(form.year, form.month) else {
        return (StatusCode::BAD_REQUEST, "Please select a valid year and month.").into_response();
    };

    let mut token_mgr = TokenManager::new(session.token);
    let today = Utc::now().date_naive();
    let mut rng = StdRng::from_os_rng();
    let result = pipeline::generate(window, today, &mut token_mgr, &mut rng).await;
    state.sessions.update(&session.id, token_mgr.into_token());

    match result {
        Ok(draft) => Json(draft).into_response(),
        Err(e) => pipeline_error_response(e),
    }
}

/// Publishes the reviewed draft with the user's final title, description,
/// curated track ids and optional cover image.
pub async fn publish(
    session: Session,
    State(state): State<ServerState>,
    Json(request): Json<PublishRequest>,
) -> Response {
    let mut token_mgr = TokenManager::new(session.token);
    let result = pipeline::publish(&mut token_mgr, &request).await;
    state.sessions.update(&session.id, token_mgr.into_token());

    match result {
        Ok(playlist) => Json(playlist).into_response(),
        Err(e) => pipeline_error_response(e),
    }
}

fn pipeline_error_response(error: PipelineError) -> Response {
    match &error {
        PipelineError::Upstream { operation, source } => {
            warning!("Remote call failed during {}: {}", operation, source);
            (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
        }
        PipelineError::InsufficientData { found } => {
            warning!("Only {} unique candidate tracks, nothing published", found);
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
        }
    }
}
