use crate::{
    client::http::{ApiClient, ApiError},
    types::{GetUserResponse, GetUsersResponse, LoginRequest, LoginResponse, SubsonicUser, UserProfile},
};

/// Exchanges a username and password for a bearer token.
///
/// Issues `POST /login` against the miko REST API. The returned token is not
/// persisted here; the caller decides whether to store it. Invalid
/// credentials surface as a 401, which for this path never carries the
/// logout side effect (there is no session to end yet).
///
/// # Example
///
/// ```rust,ignore
/// let resp = user::login(&client, "admin", "secret").await?;
/// client.token_store().persist(&AuthToken { token: resp.token }).await?;
/// ```
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let value = client.post_json("/login", &body).await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetches the profile of the authenticated user from the REST API.
///
/// The server derives the identity from the bearer token, so no parameters
/// are needed. The path is on the 401 allow-list: an expired token makes
/// this call fail without tearing the session down as a side effect.
pub async fn get_me(client: &ApiClient) -> Result<UserProfile, ApiError> {
    let value = client.get_json("/me", &[]).await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetches a single user by name via the Subsonic `getUser` operation.
///
/// Used by the session manager for profile loading; like `/me` the path is
/// allow-listed against the logout side effect. Non-admin users can only
/// look up themselves.
pub async fn get_user(client: &ApiClient, username: &str) -> Result<SubsonicUser, ApiError> {
    let value = client
        .get_subsonic("/getUser", &[("username", username.to_string())])
        .await?;
    let response: GetUserResponse = serde_json::from_value(value)?;
    Ok(response.user)
}

/// Fetches all users via the Subsonic `getUsers` operation. Admin only; the
/// server answers with a failed envelope for everyone else.
pub async fn get_users(client: &ApiClient) -> Result<Vec<SubsonicUser>, ApiError> {
    let value = client.get_subsonic("/getUsers", &[]).await?;
    let response: GetUsersResponse = serde_json::from_value(value)?;
    Ok(response.users.user)
}
