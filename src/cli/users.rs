use tabled::Table;

use crate::{
    cli::spinner,
    client::{self, ApiClient},
    error, info,
    management::{Session, TokenStore},
    routes::{self, Nav},
    types::UserTableRow,
};

/// Lists all users on the server. Admin only; the server rejects the call
/// with a failed envelope for everyone else.
pub async fn users() {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Fetching users...");
    let users = match client::user::get_users(&client).await {
        Ok(users) => users,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch users: {}", e);
        }
    };
    pb.finish_and_clear();

    let rows: Vec<UserTableRow> = users
        .into_iter()
        .map(|u| UserTableRow {
            username: u.username,
            email: u.email.unwrap_or_else(|| "-".to_string()),
            admin: if u.admin_role { "yes" } else { "no" }.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

/// Shows a single user with their role flags and folder access.
pub async fn user(username: String) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Fetching user...");
    let user = match client::user::get_user(&client, &username).await {
        Ok(user) => user,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch user: {}", e);
        }
    };
    pb.finish_and_clear();

    info!("Username: {}", user.username);
    info!("Email: {}", user.email.unwrap_or_else(|| "-".to_string()));
    info!("Admin: {}", if user.admin_role { "yes" } else { "no" });
    info!(
        "Roles: settings={} download={} stream={} playlist={}",
        user.settings_role, user.download_role, user.stream_role, user.playlist_role
    );
    if !user.folder.is_empty() {
        let folders: Vec<String> = user.folder.iter().map(|id| id.to_string()).collect();
        info!("Folders: {}", folders.join(", "));
    }
}
