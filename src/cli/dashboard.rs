use tabled::Table;

use crate::{
    cli::spinner,
    client::{self, ApiClient},
    error, info,
    management::{Session, TokenStore},
    routes::{self, Nav},
    types::FolderTableRow,
    utils,
};

/// Renders the dashboard: library counts, server resource usage, and the
/// configured music folders.
///
/// The three fetches are independent requests issued one after another; a
/// failure of any of them aborts the command after the session had a chance
/// to apply the 401 side effect.
pub async fn dashboard() {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));
    session.nav_mut().navigate("/dashboard");

    let pb = spinner("Fetching dashboard...");

    let stats = match client::system::get_stats(&client, None).await {
        Ok(stats) => stats,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch library stats: {}", e);
        }
    };

    let system = match client::system::get_system_info(&client).await {
        Ok(system) => system,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch system info: {}", e);
        }
    };

    let folders = match client::system::get_folders(&client).await {
        Ok(folders) => folders,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch folders: {}", e);
        }
    };

    pb.finish_and_clear();

    let screen = session.nav().resolve().screen;
    info!("{}", screen.title());
    info!(
        "Library: {} songs, {} albums, {} artists, {} genres",
        stats.songs.unwrap_or(0),
        stats.albums.unwrap_or(0),
        stats.artists.unwrap_or(0),
        stats.genres.unwrap_or(0)
    );
    info!(
        "Server: {:.1}% CPU, {} of {} memory",
        system.cpu_usage,
        utils::format_size(system.memory_usage),
        utils::format_size(system.memory_total)
    );

    let rows: Vec<FolderTableRow> = folders
        .into_iter()
        .map(|f| FolderTableRow {
            label: f.label,
            path: f.path,
            songs: f.song_count,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
