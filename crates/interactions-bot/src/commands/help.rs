//! Help command - lists the deployed commands.

use crate::commands::{CommandContext, CommandHandler};
use crate::error::BotResult;
use async_trait::async_trait;
use discord_client::{ApplicationCommand, Interaction, InteractionResponse};

pub struct HelpHandler {
    text: String,
}

impl HelpHandler {
    /// Render the command list once from the catalog.
    pub fn from_catalog(commands: &[ApplicationCommand]) -> Self {
        let mut text = String::from("👋 Here is list of all commands.");
        for command in commands {
            text.push_str(&format!("\n`{}` - {}", command.name, command.description));
        }
        Self { text }
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    async fn execute(
        &self,
        _interaction: &Interaction,
        _ctx: &CommandContext,
    ) -> BotResult<InteractionResponse> {
        Ok(InteractionResponse::message(self.text.clone()))
    }
}
