//! Ed25519 verification of inbound interaction requests.
//!
//! The platform signs `timestamp || body` with the application's key and
//! sends the hex signature and the timestamp in request headers.

use crate::error::{BotError, BotResult};
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use tracing::debug;

/// Header carrying the hex-encoded signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the signed timestamp.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Verifier bound to the application's public key.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Parse a hex-encoded Ed25519 public key.
    pub fn from_hex(public_key: &str) -> BotResult<Self> {
        let bytes = hex::decode(public_key.trim())
            .map_err(|e| BotError::InvalidPublicKey(e.to_string()))?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            BotError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                b.len()
            ))
        })?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| BotError::InvalidPublicKey(e.to_string()))?;

        Ok(Self { key })
    }

    /// Check a request. Missing or malformed headers fail verification.
    pub fn verify(&self, body: &[u8], signature: Option<&str>, timestamp: Option<&str>) -> bool {
        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            debug!("Signature headers missing");
            return false;
        };

        let Some(signature) = parse_signature(signature) else {
            debug!("Signature header is not a valid Ed25519 signature");
            return false;
        };

        self.verify_parsed(body, &signature, timestamp)
    }

    /// Check `timestamp || body` against an already decoded signature.
    pub fn verify_parsed(&self, body: &[u8], signature: &Signature, timestamp: &str) -> bool {
        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify(&message, signature).is_ok()
    }
}

/// Verify a request against a hex public key.
///
/// Any malformed input, including the key, yields `false`.
pub fn verify_key(
    body: &[u8],
    signature: Option<&str>,
    timestamp: Option<&str>,
    public_key: &str,
) -> bool {
    SignatureVerifier::from_hex(public_key)
        .map(|verifier| verifier.verify(body, signature, timestamp))
        .unwrap_or(false)
}

/// Decode a hex signature header. Wrong length or non-hex yields `None`.
pub fn parse_signature(signature: &str) -> Option<Signature> {
    let bytes = hex::decode(signature.trim()).ok()?;
    let bytes: [u8; SIGNATURE_LENGTH] = bytes.try_into().ok()?;
    Some(Signature::from_bytes(&bytes))
}
