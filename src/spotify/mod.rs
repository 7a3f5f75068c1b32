//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! monthly replay pipeline. It handles the OAuth authorization-code flow,
//! library and profile reads, recommendations and playlist management,
//! keeping all HTTP communication in one layer beneath the application
//! logic.
//!
//! ## Core Modules
//!
//! - [`auth`] - Authorization URL construction, code exchange and token
//!   refresh for the server-side authorization-code flow
//! - [`user`] - Current user profile (id and market country)
//! - [`tracks`] - Saved tracks with full pagination, short-term top tracks
//!   and audio features
//! - [`artists`] - Followed artists with cursor pagination and per-artist
//!   top tracks
//! - [`recommendations`] - Seed-based track recommendations
//! - [`playlist`] - Playlist listing, creation, cover upload and track
//!   population
//!
//! ## Error Handling
//!
//! Every function propagates `reqwest::Error` directly; non-success status
//! codes are turned into errors with `error_for_status`. There is no retry
//! or backoff layer: the pipeline aborts the current request on the first
//! upstream failure and reports a user-facing message.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - token exchange and refresh
//! - `GET /me` - current user profile
//! - `GET /me/tracks` - saved tracks (paginated)
//! - `GET /me/top/tracks` - short-term top tracks
//! - `GET /me/following` - followed artists (cursor paginated)
//! - `GET /artists/{id}/top-tracks` - artist top tracks per market
//! - `GET /audio-features` - batch audio features
//! - `GET /recommendations` - seeded recommendations
//! - `GET /me/playlists` - user playlists (paginated)
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `PUT /playlists/{playlist_id}/images` - cover upload
//! - `POST /playlists/{playlist_id}/tracks` - track population

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod recommendations;
pub mod tracks;
pub mod user;
