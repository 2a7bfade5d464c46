//! Common test utilities for integration tests.

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use discord_client::DiscordClient;
use ed25519_dalek::{Signer, SigningKey};
use interactions_bot::api::{create_router, AppState};
use interactions_bot::commands::{CommandContext, CommandRegistry};
use interactions_bot::{CatalogVariant, SignatureVerifier};
use joke_client::JokeClient;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const APPLICATION_ID: &str = "1234567890";
pub const TIMESTAMP: &str = "1700000000";

/// Fixed Ed25519 key the test platform signs with.
pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[42u8; 32])
}

pub fn public_key_hex() -> String {
    hex::encode(signing_key().verifying_key().to_bytes())
}

pub fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    hex::encode(signing_key().sign(&message).to_bytes())
}

/// Router whose outbound calls go to `upstream`.
pub fn test_app(upstream: &MockServer, variant: CatalogVariant) -> Router {
    let verifier = SignatureVerifier::from_hex(&public_key_hex()).unwrap();
    let commands = CommandRegistry::for_catalog(variant).unwrap();
    let context = CommandContext {
        application_id: APPLICATION_ID.into(),
        discord: Arc::new(
            DiscordClient::new(upstream.uri(), "test-token", Duration::from_secs(5)).unwrap(),
        ),
        jokes: Arc::new(
            JokeClient::new(
                format!("{}/random_joke", upstream.uri()),
                Duration::from_secs(5),
            )
            .unwrap(),
        ),
    };

    create_router(AppState::new(verifier, commands, context))
}

/// POST request signed with the test key.
pub fn signed_post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    let body = serde_json::to_vec(body).unwrap();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-signature-ed25519", sign(TIMESTAMP, &body))
        .header("x-signature-timestamp", TIMESTAMP)
        .body(Body::from(body))
        .unwrap()
}

pub fn command(name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "application_id": APPLICATION_ID,
        "type": 2,
        "data": { "id": "2", "name": name, "type": 1 }
    })
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
