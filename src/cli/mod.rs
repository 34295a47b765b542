//! # CLI Module
//!
//! This module provides the command-line interface layer for mikocli, a
//! client for self-hosted miko music servers. It implements all user-facing
//! CLI commands and coordinates between the HTTP client, the session and
//! preference stores, and user interaction.
//!
//! ## Command Categories
//!
//! ### Session
//!
//! - [`login`] - Exchange credentials for a bearer token and persist it
//! - [`logout`] - Clear the session and the stored token
//! - [`me`] - Show the profile of the logged-in user
//!
//! ### Browsing
//!
//! - [`dashboard`] - Library counts, server resource usage, music folders
//! - [`library`] - Scope listings (tracks, albums, artists, genres) with
//!   persisted per-scope view modes
//! - [`album`] / [`artist`] / [`directory`] - Drill-down views
//! - [`search`] - Library-wide search across all sections
//!
//! ### Administration
//!
//! - [`users`] / [`user`] - User listing and detail (admin)
//! - [`folders`] - Subsonic music folders
//! - [`scan`] - Scan status and trigger
//! - [`cover`] - Cover-art download
//!
//! ### Preferences
//!
//! - [`theme`] - Persisted theme preference
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session/Preference Stores)
//!     ↓
//! Client Layer (miko REST + Subsonic API)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command constructs its own client and session explicitly; there is
//! no hidden process-wide state. Request failures are funneled through
//! `Session::absorb` so a 401 ends the session before the failure is shown,
//! and are presented exactly once - no retries happen at this layer.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod auth;
mod dashboard;
mod library;
mod system;
mod theme;
mod users;

pub use auth::login;
pub use auth::logout;
pub use auth::me;
pub use dashboard::dashboard;
pub use library::LibraryScope;
pub use library::album;
pub use library::artist;
pub use library::directory;
pub use library::library;
pub use library::parse_library_scope;
pub use library::parse_view_mode;
pub use library::search;
pub use system::cover;
pub use system::folders;
pub use system::scan;
pub use theme::parse_theme;
pub use theme::theme;
pub use users::user;
pub use users::users;

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
