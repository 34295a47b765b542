use std::io::{self, Write};

use crate::{
    client::{self, ApiClient},
    error, info,
    management::{Session, TokenStore},
    routes::{self, Nav},
    success,
    types::AuthToken,
    utils, warning,
};

/// Logs in against the configured miko server and stores the bearer token.
///
/// The password is taken from the command line when given, otherwise read
/// from standard input. On success the token is persisted to the local
/// token store; every subsequent request picks it up from there.
pub async fn login(username: String, password: Option<String>) {
    let password = match password {
        Some(password) => password,
        None => prompt_password(),
    };

    let client = ApiClient::from_env();
    match client::user::login(&client, &username, &password).await {
        Ok(response) => {
            let store = TokenStore::new();
            if let Err(e) = store
                .persist(&AuthToken {
                    token: response.token,
                })
                .await
            {
                error!("Failed to save token: {:?}", e);
            }

            // greet with the server-side view of the fresh session
            match client::user::get_me(&client).await {
                Ok(profile) => success!("Logged in as {}.", profile.username),
                Err(_) => success!("Logged in as {}.", username),
            }
        }
        Err(e) => error!("Login failed: {}", e),
    }
}

/// Ends the current session. Idempotent, also fine when nobody is logged in.
pub async fn logout() {
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));
    session.logout().await;
    success!("Logged out.");
    info!("Back to {}.", session.nav().location());
}

/// Shows the profile of the logged-in user.
pub async fn me() {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    if let Ok(stored) = TokenStore::new().load().await {
        if utils::token_is_expired(&stored.token) {
            warning!("Stored token looks expired; you may need to log in again.");
        }
    }

    match session.fetch_profile(&client).await {
        Ok(()) => match session.user() {
            Some(user) => {
                info!("Username: {}", user.username);
                info!(
                    "Email: {}",
                    user.email.clone().unwrap_or_else(|| "-".to_string())
                );
                info!("Admin: {}", if user.admin_role { "yes" } else { "no" });
            }
            None => warning!("Not logged in. Run mikocli login <username>."),
        },
        Err(e) => error!("Failed to fetch profile: {}", e),
    }
}

fn prompt_password() -> String {
    print!("Password: ");
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer).is_err() {
        error!("Failed to read password from stdin.");
    }
    buffer.trim_end().to_string()
}
