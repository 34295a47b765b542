use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::json;

use mikocli::client::envelope::unwrap_envelope;
use mikocli::client::http::{ApiError, auth_headers, should_logout};

#[test]
fn test_auth_headers_with_token() {
    let headers = auth_headers(Some("abc123"));

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
}

#[test]
fn test_auth_headers_without_token() {
    let headers = auth_headers(None);
    assert!(headers.is_empty());
}

#[test]
fn test_unwrap_envelope_passes_plain_bodies_through() {
    let body = json!({"token": "abc", "user": {"username": "admin"}});
    let result = unwrap_envelope(body.clone()).unwrap();
    assert_eq!(result, body);
}

#[test]
fn test_unwrap_envelope_strips_wrapper_on_ok() {
    let inner = json!({
        "status": "ok",
        "version": "1.16.1",
        "searchResult3": {"artist": [], "album": [], "song": []}
    });
    let body = json!({"subsonic-response": inner.clone()});

    let result = unwrap_envelope(body).unwrap();

    // The resolved body is the unwrapped envelope content
    assert_eq!(result, inner);
    assert_eq!(result["status"], "ok");
    assert!(result.get("searchResult3").is_some());
}

#[test]
fn test_unwrap_envelope_rejects_failed_status() {
    let body = json!({
        "subsonic-response": {
            "status": "failed",
            "version": "1.16.1",
            "error": {"code": 40, "message": "Wrong username or password."}
        }
    });

    match unwrap_envelope(body) {
        Err(ApiError::Subsonic { code, message }) => {
            assert_eq!(code, 40);
            assert_eq!(message, "Wrong username or password.");
        }
        other => panic!("expected subsonic error, got {:?}", other),
    }
}

#[test]
fn test_unwrap_envelope_synthesizes_default_error() {
    // A failed envelope without an error object still rejects, with the
    // default code and message.
    let body = json!({
        "subsonic-response": {"status": "failed", "version": "1.16.1"}
    });

    match unwrap_envelope(body) {
        Err(ApiError::Subsonic { code, message }) => {
            assert_eq!(code, 0);
            assert_eq!(message, "Unknown Subsonic error");
        }
        other => panic!("expected subsonic error, got {:?}", other),
    }
}

#[test]
fn test_unwrap_envelope_partial_error_object() {
    let body = json!({
        "subsonic-response": {
            "status": "failed",
            "error": {"code": 70}
        }
    });

    match unwrap_envelope(body) {
        Err(ApiError::Subsonic { code, message }) => {
            assert_eq!(code, 70);
            assert_eq!(message, "Unknown Subsonic error");
        }
        other => panic!("expected subsonic error, got {:?}", other),
    }
}

#[test]
fn test_should_logout_on_unauthorized() {
    let err = ApiError::Unauthorized {
        path: "/getAlbumList2".to_string(),
    };
    assert!(should_logout(&err));
}

#[test]
fn test_should_logout_spares_profile_endpoints() {
    // Profile lookups probe the token; a 401 there must not cascade into a
    // logout loop.
    let err = ApiError::Unauthorized {
        path: "/getUser".to_string(),
    };
    assert!(!should_logout(&err));

    let err = ApiError::Unauthorized {
        path: "/me".to_string(),
    };
    assert!(!should_logout(&err));
}

#[test]
fn test_should_logout_ignores_other_errors() {
    let err = ApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        path: "/stats".to_string(),
    };
    assert!(!should_logout(&err));

    let err = ApiError::Subsonic {
        code: 70,
        message: "Not found".to_string(),
    };
    assert!(!should_logout(&err));

    assert!(!should_logout(&ApiError::Cancelled));
}

#[test]
fn test_api_error_display() {
    let err = ApiError::Subsonic {
        code: 40,
        message: "Wrong username or password.".to_string(),
    };
    assert_eq!(err.to_string(), "Wrong username or password. (code 40)");

    let err = ApiError::Unauthorized {
        path: "/stats".to_string(),
    };
    assert_eq!(err.to_string(), "authentication required for /stats");
}
