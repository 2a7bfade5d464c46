//! HTTP request handlers.

use super::AppState;
use crate::error::BotError;
use axum::{body::Bytes, extract::State, Json};
use discord_client::{Interaction, InteractionKind, InteractionResponse, InteractionType};
use tracing::{debug, info, warn};

/// Liveness page.
pub async fn liveness(State(state): State<AppState>) -> String {
    format!(
        "👋 {} use this endpoint to keep bot alive.",
        state.context.application_id
    )
}

/// Interaction endpoint. The body has already passed signature checks.
///
/// Only the type tag is read up front, so a Ping is answered whatever the
/// rest of its payload looks like.
pub async fn interactions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InteractionResponse>, BotError> {
    let InteractionKind { kind } = serde_json::from_slice(&body)?;

    match kind {
        InteractionType::Ping => {
            info!("Handling Ping request");
            Ok(Json(InteractionResponse::pong()))
        }
        InteractionType::ApplicationCommand => {
            let interaction: Interaction = serde_json::from_slice(&body)?;
            debug!(?interaction, "Interaction received");

            state
                .commands
                .dispatch(&interaction, &state.context)
                .await
                .map(Json)
        }
        InteractionType::Unknown(kind) => {
            warn!(kind, "Unsupported interaction type");
            Err(BotError::NotFound)
        }
    }
}

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> BotError {
    BotError::NotFound
}
