use crate::{
    client::http::{ApiClient, ApiError},
    types::{FolderInfo, ScanStatus, ScanStatusResponse, Stats, SystemInfo},
};

/// Fetches library counts from the REST `/stats` endpoint.
///
/// # Arguments
///
/// * `fields` - Optional comma-separated subset (`songs,albums,...`); the
///   server omits everything not asked for. `None` fetches all counts.
pub async fn get_stats(client: &ApiClient, fields: Option<&str>) -> Result<Stats, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(fields) = fields {
        query.push(("fields", fields.to_string()));
    }

    let value = client.get_json("/stats", &query).await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetches process resource usage of the server.
pub async fn get_system_info(client: &ApiClient) -> Result<SystemInfo, ApiError> {
    let value = client.get_json("/system", &[]).await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetches the configured music folders with their song counts.
pub async fn get_folders(client: &ApiClient) -> Result<Vec<FolderInfo>, ApiError> {
    let value = client.get_json("/folders", &[]).await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetches the current library scan state via the Subsonic `getScanStatus`
/// operation.
pub async fn get_scan_status(client: &ApiClient) -> Result<ScanStatus, ApiError> {
    let value = client.get_subsonic("/getScanStatus", &[]).await?;
    let response: ScanStatusResponse = serde_json::from_value(value)?;
    Ok(response.scan_status)
}

/// Triggers a library scan and returns the scan state reported by the
/// server. Admin only.
pub async fn start_scan(client: &ApiClient) -> Result<ScanStatus, ApiError> {
    let value = client.get_subsonic("/startScan", &[]).await?;
    let response: ScanStatusResponse = serde_json::from_value(value)?;
    Ok(response.scan_status)
}
