//! Monthly Replay Playlist Service Library
//!
//! This library implements a small web service that rebuilds a month of a
//! user's Spotify listening as a private playlist. It aggregates candidate
//! tracks from saved tracks, top tracks, new releases of followed artists and
//! algorithmic recommendations, reduces them to a unique set and publishes
//! the result after user review.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the application
//! - `config` - Configuration management and environment variables
//! - `management` - Session store and per-session token management
//! - `pipeline` - The playlist aggregation and publishing pipeline
//! - `server` - The HTTP server and its shared state
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod config;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the
/// application. Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm that an operation completed. Accepts the same arguments
/// as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable startup errors where continuing makes no sense;
/// request handlers report failures to the client instead of terminating.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues and for logging remote failures with their
/// operation name and underlying cause. Accepts the same arguments as
/// `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
