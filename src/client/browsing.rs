use crate::{
    client::http::{ApiClient, ApiError},
    types::{
        AlbumList2, AlbumListResponse, AlbumResponse, AlbumWithSongs, ArtistResponse,
        ArtistWithAlbums, ArtistsId3, ArtistsResponse, Child, Directory, DirectoryResponse,
        Genre, GenresResponse, MusicFolder, MusicFoldersResponse, RandomSongsResponse,
        SearchResponse, SearchResult3,
    },
};

/// Runs a library-wide search via the Subsonic `search3` operation.
///
/// Returns matching artists, albums and songs in one result. The server
/// applies its own per-category limits; this client does not paginate
/// search results.
pub async fn search3(client: &ApiClient, query: &str) -> Result<SearchResult3, ApiError> {
    let value = client
        .get_subsonic("/search3", &[("query", query.to_string())])
        .await?;
    let response: SearchResponse = serde_json::from_value(value)?;
    Ok(response.search_result3)
}

/// Fetches a page of albums via the Subsonic `getAlbumList2` operation.
///
/// # Arguments
///
/// * `kind` - List ordering understood by the server, e.g.
///   `alphabeticalByName`, `newest`, `recent`, `random`
/// * `size` - Maximum number of albums to return
/// * `offset` - List offset for paging
pub async fn get_album_list2(
    client: &ApiClient,
    kind: &str,
    size: u32,
    offset: u32,
) -> Result<AlbumList2, ApiError> {
    let value = client
        .get_subsonic(
            "/getAlbumList2",
            &[
                ("type", kind.to_string()),
                ("size", size.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await?;
    let response: AlbumListResponse = serde_json::from_value(value)?;
    Ok(response.album_list2)
}

/// Fetches all genres with their album and song counts.
pub async fn get_genres(client: &ApiClient) -> Result<Vec<Genre>, ApiError> {
    let value = client.get_subsonic("/getGenres", &[]).await?;
    let response: GenresResponse = serde_json::from_value(value)?;
    Ok(response.genres.genre)
}

/// Fetches the top-level music folders configured on the server.
pub async fn get_music_folders(client: &ApiClient) -> Result<Vec<MusicFolder>, ApiError> {
    let value = client.get_subsonic("/getMusicFolders", &[]).await?;
    let response: MusicFoldersResponse = serde_json::from_value(value)?;
    Ok(response.music_folders.music_folder)
}

/// Fetches a directory listing via the Subsonic `getMusicDirectory`
/// operation. The returned children may be sub-directories or songs.
pub async fn get_music_directory(client: &ApiClient, id: &str) -> Result<Directory, ApiError> {
    let value = client
        .get_subsonic("/getMusicDirectory", &[("id", id.to_string())])
        .await?;
    let response: DirectoryResponse = serde_json::from_value(value)?;
    Ok(response.directory)
}

/// Fetches an album with its songs.
pub async fn get_album(client: &ApiClient, id: &str) -> Result<AlbumWithSongs, ApiError> {
    let value = client
        .get_subsonic("/getAlbum", &[("id", id.to_string())])
        .await?;
    let response: AlbumResponse = serde_json::from_value(value)?;
    Ok(response.album)
}

/// Fetches an artist with their albums.
pub async fn get_artist(client: &ApiClient, id: &str) -> Result<ArtistWithAlbums, ApiError> {
    let value = client
        .get_subsonic("/getArtist", &[("id", id.to_string())])
        .await?;
    let response: ArtistResponse = serde_json::from_value(value)?;
    Ok(response.artist)
}

/// Fetches the full artist index (grouped by initial) via `getArtists`.
pub async fn get_artists(client: &ApiClient) -> Result<ArtistsId3, ApiError> {
    let value = client.get_subsonic("/getArtists", &[]).await?;
    let response: ArtistsResponse = serde_json::from_value(value)?;
    Ok(response.artists)
}

/// Fetches a random selection of songs via `getRandomSongs`.
pub async fn get_random_songs(client: &ApiClient, size: u32) -> Result<Vec<Child>, ApiError> {
    let value = client
        .get_subsonic("/getRandomSongs", &[("size", size.to_string())])
        .await?;
    let response: RandomSongsResponse = serde_json::from_value(value)?;
    Ok(response.random_songs.song)
}
