use tokio::sync::oneshot;

use crate::client::http::{ApiClient, ApiError};

/// Downloads cover art bytes for a song, album, or artist id.
///
/// The optional `cancel` receiver aborts the download when its sender fires
/// (or is dropped), resolving to [`ApiError::Cancelled`]. No other request
/// in flight is affected; cancellation is strictly per call.
///
/// # Example
///
/// ```rust,ignore
/// let (abort, cancel) = oneshot::channel();
/// let art = media::get_cover_art(&client, "al-42", Some(cancel));
/// // drop `abort` or send on it to give up on the download
/// ```
pub async fn get_cover_art(
    client: &ApiClient,
    id: &str,
    cancel: Option<oneshot::Receiver<()>>,
) -> Result<Vec<u8>, ApiError> {
    let params = [("id", id.to_string())];
    let fetch = client.get_bytes("/getCoverArt", &params);

    match cancel {
        Some(cancel) => tokio::select! {
            bytes = fetch => bytes,
            _ = cancel => Err(ApiError::Cancelled),
        },
        None => fetch.await,
    }
}
