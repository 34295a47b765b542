use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use mikocli::utils::*;

// Helper function to build a JWT-shaped token around a payload json
fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}");
    let payload = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{}.{}.signature", header, payload)
}

#[test]
fn test_token_subject_valid_token() {
    let token = token_with_payload("{\"sub\":\"admin\",\"exp\":1735689600}");
    assert_eq!(token_subject(&token), Some("admin".to_string()));
}

#[test]
fn test_token_subject_standard_alphabet_payload() {
    // Same token with the payload re-encoded using the standard alphabet
    // (+, / and padding); the decoder has to normalize before decoding.
    let token = token_with_payload("{\"sub\":\"admin\",\"note\":\"????>>>>\"}");
    let payload = token.split('.').nth(1).unwrap();
    let standard = payload.replace('-', "+").replace('_', "/");
    let padding = (4 - standard.len() % 4) % 4;
    let padded = format!("{}{}", standard, "=".repeat(padding));
    let token = format!("header.{}.signature", padded);

    assert_eq!(token_subject(&token), Some("admin".to_string()));
}

#[test]
fn test_token_subject_malformed_tokens() {
    // Not JWT-shaped at all
    assert_eq!(token_subject("not-a-token"), None);

    // Missing payload segment
    assert_eq!(token_subject("onlyheader"), None);
    assert_eq!(token_subject("header..signature"), None);

    // Payload is not valid base64
    assert_eq!(token_subject("header.!!!.signature"), None);

    // Payload is not JSON
    let garbage = URL_SAFE_NO_PAD.encode(b"garbage");
    assert_eq!(token_subject(&format!("h.{}.s", garbage)), None);
}

#[test]
fn test_token_subject_missing_or_invalid_sub() {
    // No sub claim
    let token = token_with_payload("{\"exp\":1735689600}");
    assert_eq!(token_subject(&token), None);

    // Non-string sub claim
    let token = token_with_payload("{\"sub\":42}");
    assert_eq!(token_subject(&token), None);
}

#[test]
fn test_token_is_expired() {
    let past = chrono::Utc::now().timestamp() - 3600;
    let future = chrono::Utc::now().timestamp() + 3600;

    let token = token_with_payload(&format!("{{\"sub\":\"admin\",\"exp\":{}}}", past));
    assert!(token_is_expired(&token));

    let token = token_with_payload(&format!("{{\"sub\":\"admin\",\"exp\":{}}}", future));
    assert!(!token_is_expired(&token));

    // No exp claim and undecodable tokens never count as expired
    let token = token_with_payload("{\"sub\":\"admin\"}");
    assert!(!token_is_expired(&token));
    assert!(!token_is_expired("not-a-token"));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(61), "1:01");
    assert_eq!(format_duration(3599), "59:59");
    assert_eq!(format_duration(3600), "1:00:00");
    assert_eq!(format_duration(3661), "1:01:01");
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(1024 * 1024), "1.0 MiB");
    assert_eq!(format_size(512 * 1024 * 1024), "512.0 MiB");
    assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GiB");
}

#[test]
fn test_render_grid() {
    let items = vec![
        "Alpha".to_string(),
        "Beta".to_string(),
        "Gamma".to_string(),
        "Delta".to_string(),
    ];

    let grid = render_grid(&items, 3);
    let lines: Vec<&str> = grid.lines().collect();

    // Four items in three columns make two rows
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Alpha"));
    assert!(lines[0].contains("Gamma"));
    assert!(lines[1].contains("Delta"));

    // Empty input renders nothing
    assert_eq!(render_grid(&[], 3), "");
}
