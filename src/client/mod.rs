//! # Miko API Client Module
//!
//! This module provides the HTTP integration layer between mikocli and a
//! self-hosted miko music server. It handles all request/response plumbing:
//! bearer-token injection, Subsonic envelope translation, and the mapping of
//! transport failures into a single error type the rest of the application
//! can reason about.
//!
//! ## Overview
//!
//! The miko server exposes two families of endpoints under a shared `/api`
//! base path:
//!
//! - **REST endpoints** (`/login`, `/me`, `/stats`, `/system`, `/folders`)
//!   returning plain JSON bodies.
//! - **Subsonic-compatible endpoints** (`/getUser`, `/search3`,
//!   `/getAlbumList2`, ...) returning bodies wrapped in a
//!   `subsonic-response` envelope that carries its own application-level
//!   status, independent of the HTTP status code.
//!
//! The [`ApiClient`](http::ApiClient) hides that difference: every response
//! that carries an envelope is unwrapped before it reaches a caller, and an
//! envelope with `status: "failed"` is rejected exactly like a transport
//! failure would be.
//!
//! ## Request Pipeline
//!
//! Each request passes through a fixed sequence of stages:
//!
//! ```text
//! build request
//!     → attach bearer token from the persisted token store   (outgoing)
//!     → attach Subsonic protocol params (Subsonic family only)
//!     → send
//!     → map non-success HTTP status to ApiError              (incoming)
//!     → unwrap subsonic-response envelope or reject          (incoming)
//! ```
//!
//! The stages that carry the contract (header construction and envelope
//! translation) are pure functions ([`http::auth_headers`],
//! [`envelope::unwrap_envelope`]) so their behavior is testable without a
//! network.
//!
//! ## Error Handling
//!
//! All operations return [`http::ApiError`]. A 401 response becomes
//! [`http::ApiError::Unauthorized`] carrying the request path; whether that
//! must end the session is a separate decision ([`http::should_logout`])
//! applied by the session layer, so that profile-fetch endpoints can probe
//! the token without triggering a recursive logout. The client itself never
//! retries and never swallows an error: every failure is surfaced once to
//! the immediate caller.
//!
//! ## Core Modules
//!
//! - [`http`] - The shared client, header stage, and error taxonomy
//! - [`envelope`] - Subsonic envelope inspection and unwrapping
//! - [`user`] - Login and user/profile endpoints
//! - [`browsing`] - Library browsing and search endpoints
//! - [`system`] - Dashboard, folder, and scan endpoints
//! - [`media`] - Binary media retrieval (cover art)
//!
//! ## Usage Patterns
//!
//! ```rust,ignore
//! let client = ApiClient::from_env();
//! let result = browsing::search3(&client, "daft punk").await?;
//! for album in result.album {
//!     println!("{}", album.name);
//! }
//! ```

pub mod browsing;
pub mod envelope;
pub mod http;
pub mod media;
pub mod system;
pub mod user;

pub use http::{ApiClient, ApiError, should_logout};
