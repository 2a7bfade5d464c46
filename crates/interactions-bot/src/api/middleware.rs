//! Signature verification middleware.

use super::AppState;
use crate::error::BotError;
use crate::signature::{parse_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

/// Largest interaction body accepted.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Reject POST requests whose Ed25519 signature does not verify.
///
/// Headers are checked before the body is read. A body over
/// [`MAX_BODY_BYTES`] cannot be verified and is rejected the same way as a
/// bad signature. The verified bytes are handed on unchanged.
pub async fn verify_signature(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, BotError> {
    if request.method() != Method::POST {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();

    let signature = header_str(&parts.headers, SIGNATURE_HEADER).and_then(parse_signature);
    let Some(signature) = signature else {
        warn!(uri = %parts.uri, "Missing or malformed request signature");
        return Err(BotError::InvalidSignature);
    };
    let Some(timestamp) = header_str(&parts.headers, TIMESTAMP_HEADER) else {
        warn!(uri = %parts.uri, "Missing signature timestamp");
        return Err(BotError::InvalidSignature);
    };

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(uri = %parts.uri, "Unverifiable request body: {}", e);
            return Err(BotError::InvalidSignature);
        }
    };

    if !state.verifier.verify_parsed(&bytes, &signature, timestamp) {
        warn!(uri = %parts.uri, "Invalid request signature");
        return Err(BotError::InvalidSignature);
    }

    debug!("Signature verified");
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
