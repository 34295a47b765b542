use crate::{
    client::{self, ApiClient, ApiError},
    management::TokenStore,
    routes::{self, Nav},
    types::SubsonicUser,
    utils, warning,
};

/// Owns the current-user state of the client.
///
/// The session is an explicitly constructed object, not a process-wide
/// singleton; every command builds one from a token store and a navigation
/// handle. State machine over unauthenticated / loading / authenticated,
/// driven by [`Session::fetch_profile`] and [`Session::logout`].
pub struct Session {
    user: Option<SubsonicUser>,
    loading: bool,
    tokens: TokenStore,
    nav: Nav,
}

impl Session {
    pub fn new(tokens: TokenStore, nav: Nav) -> Self {
        Self {
            user: None,
            loading: false,
            tokens,
            nav,
        }
    }

    /// Creates a session that already holds a profile, for callers that
    /// obtained one out of band.
    pub fn with_profile(tokens: TokenStore, nav: Nav, user: SubsonicUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
            tokens,
            nav,
        }
    }

    pub fn user(&self) -> Option<&SubsonicUser> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn nav(&self) -> &Nav {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut Nav {
        &mut self.nav
    }

    /// Loads the profile of the logged-in user, if any.
    ///
    /// Idempotent: with a profile already present this performs no request
    /// and no state change. The identity is the `sub` claim of the stored
    /// token; a missing token or an undecodable payload means "not logged
    /// in" and returns silently. A 401 on the profile request ends the
    /// session. The loading flag is cleared on every path out.
    pub async fn fetch_profile(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        if self.user.is_some() {
            return Ok(());
        }

        let Ok(stored) = self.tokens.load().await else {
            return Ok(());
        };
        let Some(username) = utils::token_subject(&stored.token) else {
            return Ok(());
        };

        self.loading = true;
        let outcome = match client::user::get_user(client, &username).await {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(err) => {
                if matches!(err, ApiError::Unauthorized { .. }) {
                    self.logout().await;
                }
                Err(err)
            }
        };
        self.loading = false;

        outcome
    }

    /// Ends the session: clears the profile, removes the persisted token,
    /// and navigates to the login screen. Safe to call any number of times.
    pub async fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.tokens.clear().await {
            warning!("Failed to clear stored token: {:?}", err);
        }
        self.nav.navigate(routes::LOGIN_PATH);
    }

    /// Applies the global 401 side effect for an error surfaced by any
    /// request: a 401 outside the allow-listed profile endpoints ends the
    /// session. The error itself stays with the caller.
    pub async fn absorb(&mut self, err: &ApiError) {
        if client::should_logout(err) {
            self.logout().await;
        }
    }
}
