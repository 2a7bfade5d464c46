//! Joke command - relays a joke from the provider.

use crate::commands::{CommandContext, CommandHandler};
use crate::error::BotResult;
use async_trait::async_trait;
use discord_client::{Interaction, InteractionResponse};
use tracing::debug;

pub struct JokeHandler;

impl JokeHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JokeHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for JokeHandler {
    fn name(&self) -> &str {
        "joke"
    }

    async fn execute(
        &self,
        _interaction: &Interaction,
        ctx: &CommandContext,
    ) -> BotResult<InteractionResponse> {
        let joke = ctx.jokes.random_joke().await?;
        debug!("Fetched joke");
        Ok(InteractionResponse::message(joke.to_string()))
    }
}
