use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;

use crate::{client::envelope, config, management::TokenStore};

/// Request paths that must not end the session on a 401.
///
/// Profile lookups are issued while deciding whether a stored token is still
/// good; letting them trigger the logout side effect would loop straight
/// back into another profile lookup.
pub const AUTH_EXEMPT_PATHS: &[&str] = &["/getUser", "/me"];

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Status { status: StatusCode, path: String },
    Unauthorized { path: String },
    Subsonic { code: i64, message: String },
    Decode(serde_json::Error),
    Cancelled,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(err) => write!(f, "request failed: {}", err),
            ApiError::Status { status, path } => {
                write!(f, "server returned {} for {}", status, path)
            }
            ApiError::Unauthorized { path } => write!(f, "authentication required for {}", path),
            ApiError::Subsonic { code, message } => write!(f, "{} (code {})", message, code),
            ApiError::Decode(err) => write!(f, "unexpected response shape: {}", err),
            ApiError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(err) => Some(err),
            ApiError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// Builds the outgoing auth headers for a request.
///
/// With a token present the result carries exactly one
/// `Authorization: Bearer <token>` header; without one the map is empty and
/// the request proceeds unmodified.
pub fn auth_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
            headers.insert(AUTHORIZATION, value);
        }
    }
    headers
}

/// Decides whether an error must end the current session.
///
/// Only a 401 on a path outside [`AUTH_EXEMPT_PATHS`] does; every other
/// failure is the caller's to handle locally.
pub fn should_logout(err: &ApiError) -> bool {
    match err {
        ApiError::Unauthorized { path } => !AUTH_EXEMPT_PATHS.contains(&path.as_str()),
        _ => false,
    }
}

/// Shared request-issuing client for the miko server API.
///
/// Configured with the `/api` base path and an explicitly injected
/// [`TokenStore`]; the bearer token is re-read from persistent storage for
/// every request, so a login or logout in the same process is picked up
/// without rebuilding the client.
///
/// Responses flow through a fixed interception order: transport status
/// mapping first, then Subsonic envelope translation
/// ([`envelope::unwrap_envelope`]). The client never retries; callers see
/// every failure exactly once as an [`ApiError`].
pub struct ApiClient {
    http: Client,
    base: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(base: String, tokens: TokenStore) -> Self {
        Self {
            http: Client::new(),
            base,
            tokens,
        }
    }

    /// Creates a client for the server configured via `MIKO_SERVER_URL`,
    /// backed by the default on-disk token store.
    pub fn from_env() -> Self {
        Self::new(config::api_base(), TokenStore::new())
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Issues a GET against a REST endpoint and returns the decoded body.
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.dispatch(request, path).await?;
        Self::json_body(response).await
    }

    /// Issues a GET against a Subsonic-compatible endpoint. The protocol
    /// parameters (`f`, `v`, `c`) are attached on top of the caller's query.
    pub async fn get_subsonic(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let request = self
            .http
            .get(self.url(path))
            .query(&subsonic_params())
            .query(query);
        let response = self.dispatch(request, path).await?;
        Self::json_body(response).await
    }

    /// Issues a POST with a JSON body against a REST endpoint.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.dispatch(request, path).await?;
        Self::json_body(response).await
    }

    /// Issues a GET and returns the raw response bytes. Used for binary
    /// media endpoints, which never carry a Subsonic envelope.
    pub async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.dispatch(request, path).await?;
        let bytes = response.bytes().await.map_err(ApiError::Http)?;
        Ok(bytes.to_vec())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<reqwest::Response, ApiError> {
        // outgoing stage: the token is read from persistent storage per request
        let token = self.tokens.load().await.ok().map(|t| t.token);
        let request = request.headers(auth_headers(token.as_deref()));

        let response = request.send().await.map_err(ApiError::Http)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }

        Ok(response)
    }

    async fn json_body(response: reqwest::Response) -> Result<Value, ApiError> {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        let body = response.json::<Value>().await.map_err(ApiError::Http)?;

        // envelope translation only applies to JSON bodies
        if is_json {
            envelope::unwrap_envelope(body)
        } else {
            Ok(body)
        }
    }
}

fn subsonic_params() -> Vec<(&'static str, String)> {
    vec![
        ("f", config::SUBSONIC_FORMAT.to_string()),
        ("v", config::SUBSONIC_VERSION.to_string()),
        ("c", config::SUBSONIC_CLIENT.to_string()),
    ]
}
