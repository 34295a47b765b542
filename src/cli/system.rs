use std::path::PathBuf;

use crate::{
    cli::spinner,
    client::{self, ApiClient},
    error, info,
    management::{Session, TokenStore},
    routes::{self, Nav},
    success,
};

/// Lists the music folders exposed by the Subsonic `getMusicFolders`
/// operation.
pub async fn folders() {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Fetching music folders...");
    let folders = match client::browsing::get_music_folders(&client).await {
        Ok(folders) => folders,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch music folders: {}", e);
        }
    };
    pb.finish_and_clear();

    for folder in folders {
        info!(
            "{} - {}",
            folder.id,
            folder.name.unwrap_or_else(|| "(unnamed)".to_string())
        );
    }
}

/// Shows the current scan state, or triggers a new scan with `--start`.
pub async fn scan(start: bool) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner(if start {
        "Starting scan..."
    } else {
        "Fetching scan status..."
    });

    let result = if start {
        client::system::start_scan(&client).await
    } else {
        client::system::get_scan_status(&client).await
    };

    let status = match result {
        Ok(status) => status,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Scan request failed: {}", e);
        }
    };
    pb.finish_and_clear();

    if status.scanning {
        info!(
            "Scan in progress, {} entries scanned.",
            status.count.unwrap_or(0)
        );
    } else {
        info!("No scan running. {} entries in library.", status.count.unwrap_or(0));
    }
}

/// Downloads cover art for an id and writes it to disk.
pub async fn cover(id: String, output: Option<PathBuf>) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Downloading cover art...");
    let bytes = match client::media::get_cover_art(&client, &id, None).await {
        Ok(bytes) => bytes,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to download cover art: {}", e);
        }
    };
    pb.finish_and_clear();

    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.jpg", id)));
    match async_fs::write(&path, &bytes).await {
        Ok(()) => success!("Saved cover art to {} ({} bytes).", path.display(), bytes.len()),
        Err(e) => error!("Failed to write {}: {}", path.display(), e),
    }
}
