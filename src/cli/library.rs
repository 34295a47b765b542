use tabled::Table;

use crate::{
    cli::spinner,
    client::{self, ApiClient},
    error, info,
    management::{Session, TokenStore, ViewMode, ViewModeStore},
    routes::{self, Nav},
    types::{AlbumId3, AlbumTableRow, ArtistTableRow, Child, GenreTableRow, SongTableRow},
    utils, warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryScope {
    Tracks,
    Albums,
    Artists,
    Genres,
}

impl LibraryScope {
    /// Preference key the scope's view mode is persisted under.
    pub fn key(&self) -> &'static str {
        match self {
            LibraryScope::Tracks => "tracks",
            LibraryScope::Albums => "albums",
            LibraryScope::Artists => "artists",
            LibraryScope::Genres => "genres",
        }
    }
}

pub fn parse_library_scope(value: &str) -> Result<LibraryScope, String> {
    match value.to_lowercase().as_str() {
        "tracks" | "songs" => Ok(LibraryScope::Tracks),
        "albums" => Ok(LibraryScope::Albums),
        "artists" => Ok(LibraryScope::Artists),
        "genres" => Ok(LibraryScope::Genres),
        other => Err(format!(
            "invalid value '{}' (expected tracks, albums, artists or genres)",
            other
        )),
    }
}

pub fn parse_view_mode(value: &str) -> Result<ViewMode, String> {
    value.parse()
}

/// Lists a library scope, honoring the scope's persisted view mode.
///
/// A `--view` override is persisted for the scope before rendering, so the
/// next invocation without the flag keeps the chosen mode. With a search
/// term the listing is narrowed through the server-side `search3` operation
/// where the scope supports it.
pub async fn library(scope: LibraryScope, view: Option<ViewMode>, search: Option<String>) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));
    session
        .nav_mut()
        .navigate(&format!("/library/{}", scope.key()));

    let mut prefs = ViewModeStore::open(scope.key()).await;
    if let Some(mode) = view {
        if let Err(e) = prefs.set_mode(mode).await {
            warning!("Cannot persist view mode: {:?}", e);
        }
    }
    let mode = prefs.mode();

    match scope {
        LibraryScope::Albums => list_albums(&client, &mut session, mode, search).await,
        LibraryScope::Artists => list_artists(&client, &mut session, mode, search).await,
        LibraryScope::Genres => list_genres(&client, &mut session, search).await,
        LibraryScope::Tracks => list_tracks(&client, &mut session, mode, search).await,
    }
}

async fn list_albums(
    client: &ApiClient,
    session: &mut Session,
    mode: ViewMode,
    search: Option<String>,
) {
    let pb = spinner("Fetching albums...");

    let albums = match search {
        Some(query) => match client::browsing::search3(client, &query).await {
            Ok(result) => result.album,
            Err(e) => {
                pb.finish_and_clear();
                session.absorb(&e).await;
                error!("Failed to search albums: {}", e);
            }
        },
        None => match client::browsing::get_album_list2(client, "alphabeticalByName", 500, 0).await
        {
            Ok(list) => list.album,
            Err(e) => {
                pb.finish_and_clear();
                session.absorb(&e).await;
                error!("Failed to fetch albums: {}", e);
            }
        },
    };

    pb.finish_and_clear();
    render_albums(&albums, mode);
}

async fn list_artists(
    client: &ApiClient,
    session: &mut Session,
    mode: ViewMode,
    search: Option<String>,
) {
    let pb = spinner("Fetching artists...");

    let artists = match search {
        Some(query) => match client::browsing::search3(client, &query).await {
            Ok(result) => result.artist,
            Err(e) => {
                pb.finish_and_clear();
                session.absorb(&e).await;
                error!("Failed to search artists: {}", e);
            }
        },
        None => match client::browsing::get_artists(client).await {
            Ok(index) => index
                .index
                .into_iter()
                .flat_map(|group| group.artist)
                .collect(),
            Err(e) => {
                pb.finish_and_clear();
                session.absorb(&e).await;
                error!("Failed to fetch artists: {}", e);
            }
        },
    };

    pb.finish_and_clear();

    match mode {
        ViewMode::Table => {
            let rows: Vec<ArtistTableRow> = artists
                .into_iter()
                .map(|a| ArtistTableRow {
                    name: a.name,
                    albums: a
                        .album_count
                        .map(|count| count.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        ViewMode::Grid => {
            let names: Vec<String> = artists.into_iter().map(|a| a.name).collect();
            print!("{}", utils::render_grid(&names, 3));
        }
    }
}

async fn list_genres(client: &ApiClient, session: &mut Session, search: Option<String>) {
    let pb = spinner("Fetching genres...");

    let mut genres = match client::browsing::get_genres(client).await {
        Ok(genres) => genres,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch genres: {}", e);
        }
    };

    pb.finish_and_clear();

    if let Some(term) = search {
        let term = term.to_lowercase();
        genres.retain(|g| g.value.to_lowercase().contains(&term));
    }
    genres.sort_by(|a, b| a.value.to_lowercase().cmp(&b.value.to_lowercase()));

    let rows: Vec<GenreTableRow> = genres
        .into_iter()
        .map(|g| GenreTableRow {
            genre: g.value,
            albums: g.album_count,
            songs: g.song_count,
        })
        .collect();
    println!("{}", Table::new(rows));
}

async fn list_tracks(
    client: &ApiClient,
    session: &mut Session,
    mode: ViewMode,
    search: Option<String>,
) {
    let pb = spinner("Fetching tracks...");

    let songs = match search {
        Some(query) => match client::browsing::search3(client, &query).await {
            Ok(result) => result.song,
            Err(e) => {
                pb.finish_and_clear();
                session.absorb(&e).await;
                error!("Failed to search tracks: {}", e);
            }
        },
        None => match client::browsing::get_random_songs(client, 100).await {
            Ok(songs) => {
                pb.finish_and_clear();
                info!("No search term given, showing a random selection.");
                songs
            }
            Err(e) => {
                pb.finish_and_clear();
                session.absorb(&e).await;
                error!("Failed to fetch tracks: {}", e);
            }
        },
    };

    pb.finish_and_clear();
    render_songs(&songs, mode);
}

/// Shows an album with its songs.
pub async fn album(id: String) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Fetching album...");
    let album = match client::browsing::get_album(&client, &id).await {
        Ok(album) => album,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch album: {}", e);
        }
    };
    pb.finish_and_clear();

    info!(
        "{} - {} ({})",
        album.album.artist.clone().unwrap_or_else(|| "?".to_string()),
        album.album.name,
        album
            .album
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    render_songs(&album.song, ViewMode::Table);
}

/// Shows an artist with their albums.
pub async fn artist(id: String) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Fetching artist...");
    let artist = match client::browsing::get_artist(&client, &id).await {
        Ok(artist) => artist,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch artist: {}", e);
        }
    };
    pb.finish_and_clear();

    info!("{}", artist.artist.name);
    render_albums(&artist.album, ViewMode::Table);
}

/// Shows a directory listing (folder navigation).
pub async fn directory(id: String) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Fetching directory...");
    let directory = match client::browsing::get_music_directory(&client, &id).await {
        Ok(directory) => directory,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Failed to fetch directory: {}", e);
        }
    };
    pb.finish_and_clear();

    info!("{}", directory.name);
    for child in &directory.child {
        if child.is_dir {
            println!("  {}/ ({})", child.title, child.id);
        } else {
            println!("  {} ({})", child.title, child.id);
        }
    }
}

/// Runs a library-wide search and prints all matching sections.
pub async fn search(query: String) {
    let client = ApiClient::from_env();
    let mut session = Session::new(TokenStore::new(), Nav::new(routes::table()));

    let pb = spinner("Searching...");
    let result = match client::browsing::search3(&client, &query).await {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            session.absorb(&e).await;
            error!("Search failed: {}", e);
        }
    };
    pb.finish_and_clear();

    if result.artist.is_empty() && result.album.is_empty() && result.song.is_empty() {
        info!("No results for '{}'.", query);
        return;
    }

    if !result.artist.is_empty() {
        info!("Artists");
        let names: Vec<String> = result.artist.into_iter().map(|a| a.name).collect();
        print!("{}", utils::render_grid(&names, 3));
    }
    if !result.album.is_empty() {
        info!("Albums");
        render_albums(&result.album, ViewMode::Table);
    }
    if !result.song.is_empty() {
        info!("Songs");
        render_songs(&result.song, ViewMode::Table);
    }
}

fn render_albums(albums: &[AlbumId3], mode: ViewMode) {
    match mode {
        ViewMode::Table => {
            let rows: Vec<AlbumTableRow> = albums
                .iter()
                .map(|a| AlbumTableRow {
                    name: a.name.clone(),
                    artist: a.artist.clone().unwrap_or_else(|| "?".to_string()),
                    year: a
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    songs: a.song_count,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        ViewMode::Grid => {
            let names: Vec<String> = albums.iter().map(|a| a.name.clone()).collect();
            print!("{}", utils::render_grid(&names, 3));
        }
    }
}

fn render_songs(songs: &[Child], mode: ViewMode) {
    match mode {
        ViewMode::Table => {
            let rows: Vec<SongTableRow> = songs
                .iter()
                .map(|s| SongTableRow {
                    title: s.title.clone(),
                    artist: s.artist.clone().unwrap_or_else(|| "?".to_string()),
                    album: s.album.clone().unwrap_or_else(|| "-".to_string()),
                    duration: s
                        .duration
                        .map(utils::format_duration)
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        ViewMode::Grid => {
            let titles: Vec<String> = songs.iter().map(|s| s.title.clone()).collect();
            print!("{}", utils::render_grid(&titles, 3));
        }
    }
}
