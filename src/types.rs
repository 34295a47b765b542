use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: Option<String>,
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub songs: Option<u64>,
    pub albums: Option<u64>,
    pub artists: Option<u64>,
    pub genres: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub cpu_usage: f32,
    pub memory_usage: u64,
    pub memory_total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderInfo {
    pub label: String,
    pub path: String,
    pub song_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsonicUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub admin_role: bool,
    #[serde(default)]
    pub settings_role: bool,
    #[serde(default)]
    pub download_role: bool,
    #[serde(default)]
    pub stream_role: bool,
    #[serde(default)]
    pub playlist_role: bool,
    #[serde(default)]
    pub folder: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: SubsonicUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUsersResponse {
    pub users: Users,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Users {
    #[serde(default)]
    pub user: Vec<SubsonicUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub value: String,
    #[serde(rename = "songCount", default)]
    pub song_count: u64,
    #[serde(rename = "albumCount", default)]
    pub album_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresResponse {
    pub genres: Genres,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genres {
    #[serde(default)]
    pub genre: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicFolder {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicFoldersResponse {
    #[serde(rename = "musicFolders")]
    pub music_folders: MusicFolders,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicFolders {
    #[serde(rename = "musicFolder", default)]
    pub music_folder: Vec<MusicFolder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistId3 {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cover_art: Option<String>,
    #[serde(default)]
    pub album_count: Option<u32>,
    #[serde(default)]
    pub artist_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumId3 {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub cover_art: Option<String>,
    #[serde(default)]
    pub song_count: u32,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub is_dir: bool,
    pub title: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub track: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub cover_art: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub bit_rate: Option<u32>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub album_id: Option<String>,
    #[serde(default)]
    pub artist_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    pub name: String,
    #[serde(default)]
    pub child: Vec<Child>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryResponse {
    pub directory: Directory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumWithSongs {
    #[serde(flatten)]
    pub album: AlbumId3,
    #[serde(default)]
    pub song: Vec<Child>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub album: AlbumWithSongs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistWithAlbums {
    #[serde(flatten)]
    pub artist: ArtistId3,
    #[serde(default)]
    pub album: Vec<AlbumId3>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistResponse {
    pub artist: ArtistWithAlbums,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexId3 {
    pub name: String,
    #[serde(default)]
    pub artist: Vec<ArtistId3>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsId3 {
    #[serde(rename = "ignoredArticles", default)]
    pub ignored_articles: String,
    #[serde(default)]
    pub index: Vec<IndexId3>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsResponse {
    pub artists: ArtistsId3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSongs {
    #[serde(default)]
    pub song: Vec<Child>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSongsResponse {
    #[serde(rename = "randomSongs")]
    pub random_songs: RandomSongs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult3 {
    #[serde(default)]
    pub artist: Vec<ArtistId3>,
    #[serde(default)]
    pub album: Vec<AlbumId3>,
    #[serde(default)]
    pub song: Vec<Child>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchResult3")]
    pub search_result3: SearchResult3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumList2 {
    #[serde(default)]
    pub album: Vec<AlbumId3>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumListResponse {
    #[serde(rename = "albumList2")]
    pub album_list2: AlbumList2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStatus {
    pub scanning: bool,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStatusResponse {
    #[serde(rename = "scanStatus")]
    pub scan_status: ScanStatus,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    pub artist: String,
    pub year: String,
    pub songs: u32,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub albums: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub albums: u64,
    pub songs: u64,
}

#[derive(Tabled)]
pub struct UserTableRow {
    pub username: String,
    pub email: String,
    pub admin: String,
}

#[derive(Tabled)]
pub struct FolderTableRow {
    pub label: String,
    pub path: String,
    pub songs: u64,
}
