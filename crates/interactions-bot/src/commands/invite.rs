//! Invite command - OAuth link for adding the bot to a server.

use crate::commands::{CommandContext, CommandHandler};
use crate::error::BotResult;
use async_trait::async_trait;
use discord_client::{Interaction, InteractionResponse};

pub struct InviteHandler;

impl InviteHandler {
    pub fn new() -> Self {
        Self
    }

    /// OAuth authorize URL granting the command scope.
    pub fn authorize_url(application_id: &str) -> String {
        format!(
            "https://discord.com/oauth2/authorize?client_id={}&scope=applications.commands",
            application_id
        )
    }
}

impl Default for InviteHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for InviteHandler {
    fn name(&self) -> &str {
        "invite"
    }

    async fn execute(
        &self,
        _interaction: &Interaction,
        ctx: &CommandContext,
    ) -> BotResult<InteractionResponse> {
        Ok(InteractionResponse::ephemeral(format!(
            "[Click to use bot 🥳]({})",
            Self::authorize_url(&ctx.application_id)
        )))
    }
}
