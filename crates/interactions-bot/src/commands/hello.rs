//! Hello command - fixed greeting.

use crate::commands::{CommandContext, CommandHandler};
use crate::error::BotResult;
use async_trait::async_trait;
use discord_client::{Interaction, InteractionResponse};

pub const GREETING: &str =
    "👋 Hey i'm using HTTPS request for sending this message using interactions";

pub struct HelloHandler;

impl HelloHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelloHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for HelloHandler {
    fn name(&self) -> &str {
        "hello"
    }

    async fn execute(
        &self,
        _interaction: &Interaction,
        _ctx: &CommandContext,
    ) -> BotResult<InteractionResponse> {
        Ok(InteractionResponse::message(GREETING))
    }
}
