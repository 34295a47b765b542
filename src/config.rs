//! Configuration management for the miko server CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration, most importantly the address of the
//! miko server the client talks to.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Subsonic protocol version sent with every Subsonic-compatible request.
pub const SUBSONIC_VERSION: &str = "1.16.1";

/// Client name reported to the server via the `c` query parameter.
pub const SUBSONIC_CLIENT: &str = "mikocli";

/// Response format requested from the Subsonic-compatible endpoints.
pub const SUBSONIC_FORMAT: &str = "json";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `mikocli/.env`. This allows users to store
/// configuration without hardcoding values into shell profiles.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/mikocli/.env`
/// - macOS: `~/Library/Application Support/mikocli/.env`
/// - Windows: `%LOCALAPPDATA%/mikocli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use mikocli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mikocli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // variables may also come from the process environment directly
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the base URL of the miko server.
///
/// Retrieves the `MIKO_SERVER_URL` environment variable which specifies
/// where the miko server is reachable, without a trailing path. All API
/// requests are issued against this address.
///
/// # Panics
///
/// Panics if the `MIKO_SERVER_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let url = server_url(); // e.g., "http://localhost:4000"
/// ```
pub fn server_url() -> String {
    let url = env::var("MIKO_SERVER_URL").expect("MIKO_SERVER_URL must be set");
    url.trim_end_matches('/').to_string()
}

/// Returns the API base path of the miko server.
///
/// All endpoints consumed by this client, including the Subsonic-compatible
/// family, are mounted under `/api`. The server also exposes a `/rest` mount
/// for third-party Subsonic clients, which this client does not use.
///
/// # Example
///
/// ```
/// let base = api_base(); // e.g., "http://localhost:4000/api"
/// ```
pub fn api_base() -> String {
    format!("{}/api", server_url())
}
