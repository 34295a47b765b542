use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;

fn token_claims(token: &str) -> Option<serde_json::Value> {
    let mut parts = token.split('.');
    let payload = parts.nth(1)?;
    if payload.is_empty() {
        return None;
    }

    // normalize standard-alphabet payloads, the engine expects url-safe without padding
    let normalized = payload
        .replace('+', "-")
        .replace('/', "_")
        .trim_end_matches('=')
        .to_string();

    let bytes = URL_SAFE_NO_PAD.decode(normalized).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Extracts the `sub` claim from the payload segment of a JWT-shaped token.
///
/// The payload is decoded without any signature verification; the result is
/// only used to address profile lookups, never as proof of identity. Returns
/// `None` for anything that does not look like a decodable token.
pub fn token_subject(token: &str) -> Option<String> {
    token_claims(token)?
        .get("sub")
        .and_then(|sub| sub.as_str())
        .map(|sub| sub.to_string())
}

/// Compares the `exp` claim against the current time.
///
/// Tokens without a readable claim never count as expired here; the server
/// has the final word either way.
pub fn token_is_expired(token: &str) -> bool {
    token_claims(token)
        .and_then(|claims| claims.get("exp").and_then(|exp| exp.as_i64()))
        .map(|exp| Utc::now().timestamp() >= exp)
        .unwrap_or(false)
}

pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

pub fn format_size(bytes: u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= GIB {
        format!("{:.1} GiB", bytes / GIB)
    } else {
        format!("{:.1} MiB", bytes / MIB)
    }
}

pub fn render_grid(items: &[String], columns: usize) -> String {
    if items.is_empty() {
        return String::new();
    }

    let columns = columns.max(1);
    let width = items.iter().map(|i| i.chars().count()).max().unwrap_or(0) + 2;

    let mut out = String::new();
    for row in items.chunks(columns) {
        let mut line = String::new();
        for item in row {
            line.push_str(item);
            let pad = width.saturating_sub(item.chars().count());
            line.push_str(&" ".repeat(pad));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
