use serde_json::Value;

use crate::client::http::ApiError;

/// Top-level key a Subsonic-compatible response body is wrapped in.
pub const ENVELOPE_KEY: &str = "subsonic-response";

const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Subsonic error";

/// Translates a JSON response body out of its Subsonic envelope.
///
/// Bodies without a `subsonic-response` key pass through unchanged. For
/// enveloped bodies the application-level `status` field decides the
/// outcome: `"failed"` rejects with [`ApiError::Subsonic`] built from the
/// envelope's `error` object (a default error is synthesized when the
/// server omits it), anything else resolves to the unwrapped envelope
/// content. A transport-level 200 OK can therefore still surface as an
/// error to the caller.
pub fn unwrap_envelope(mut body: Value) -> Result<Value, ApiError> {
    if body.get(ENVELOPE_KEY).is_none() {
        return Ok(body);
    }
    let inner = body[ENVELOPE_KEY].take();

    let status = inner
        .get("status")
        .and_then(|status| status.as_str())
        .unwrap_or("ok");

    if status == "failed" {
        let (code, message) = match inner.get("error") {
            Some(error) => (
                error.get("code").and_then(|code| code.as_i64()).unwrap_or(0),
                error
                    .get("message")
                    .and_then(|message| message.as_str())
                    .unwrap_or(UNKNOWN_ERROR_MESSAGE)
                    .to_string(),
            ),
            None => (0, UNKNOWN_ERROR_MESSAGE.to_string()),
        };

        return Err(ApiError::Subsonic { code, message });
    }

    Ok(inner)
}
