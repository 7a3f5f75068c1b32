use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, error, info, management::SessionStore};

/// Shared state for all routes, constructed once at process start.
#[derive(Clone)]
pub struct ServerState {
    pub sessions: SessionStore,
}

pub async fn start_server() {
    let state = ServerState {
        sessions: SessionStore::new(),
    };

    let app = Router::new()
        .route("/", get(api::index))
        .route("/about", get(api::about))
        .route("/contact", get(api::contact))
        .route("/privacy", get(api::privacy))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/playlist", post(api::generate))
        .route("/playlist/publish", post(api::publish))
        .with_state(state);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
