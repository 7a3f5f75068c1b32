//! # API Module
//!
//! This module provides the HTTP endpoints of the monthly replay service.
//! Handlers stay thin: session extraction, input validation and response
//! shaping live here, while all decision logic sits in [`crate::pipeline`].
//!
//! ## Endpoints
//!
//! - [`index`], [`about`], [`contact`], [`privacy`] - static pages; the
//!   index shows the month picker once a session exists
//! - [`login`] - redirect to the Spotify authorization URL
//! - [`callback`] - OAuth callback: exchanges the code, starts a session
//!   and sets the session cookie
//! - [`generate`] - runs the aggregation pipeline for a month and returns
//!   the review draft as JSON
//! - [`publish`] - publishes the user-approved draft as a private playlist
//! - [`health`] - status and version for monitoring
//!
//! Handlers that require a session take the [`crate::management::Session`]
//! extractor; a missing or unknown session cookie redirects to `/login`.

mod auth;
mod health;
mod pages;
mod playlist;

pub use auth::callback;
pub use auth::login;
pub use health::health;
pub use pages::{about, contact, index, privacy};
pub use playlist::generate;
pub use playlist::publish;
