//! Discord REST client.

use crate::error::DiscordError;
use crate::types::*;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default REST API base.
pub const DEFAULT_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Discord REST API client authenticated as a bot.
///
/// The bot token is stored using `SecretString` so it never shows up in
/// debug output.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl DiscordClient {
    /// Create a new Discord client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DiscordError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: SecretString::new(token.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an invite on a channel.
    #[instrument(skip(self, request), fields(target = %request.target_application_id))]
    pub async fn create_channel_invite(
        &self,
        channel_id: &str,
        request: &CreateInviteRequest,
    ) -> Result<Invite, DiscordError> {
        let response = self
            .client
            .post(format!("{}/channels/{}/invites", self.base_url, channel_id))
            .header("Authorization", self.authorization())
            .json(request)
            .send()
            .await?;

        let invite: Invite = self.handle_response(response).await?;
        debug!(code = %invite.code, "Invite created");
        Ok(invite)
    }

    /// Replace every registered command in the given scope.
    ///
    /// `guild_id` selects guild-scoped registration; `None` registers globally.
    #[instrument(skip(self, commands), fields(count = commands.len()))]
    pub async fn bulk_overwrite_commands(
        &self,
        application_id: &str,
        guild_id: Option<&str>,
        commands: &[ApplicationCommand],
    ) -> Result<Vec<ApplicationCommand>, DiscordError> {
        let response = self
            .client
            .put(self.commands_url(application_id, guild_id))
            .header("Authorization", self.authorization())
            .json(commands)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the commands currently registered in the given scope.
    #[instrument(skip(self))]
    pub async fn list_commands(
        &self,
        application_id: &str,
        guild_id: Option<&str>,
    ) -> Result<Vec<ApplicationCommand>, DiscordError> {
        let response = self
            .client
            .get(self.commands_url(application_id, guild_id))
            .header("Authorization", self.authorization())
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn commands_url(&self, application_id: &str, guild_id: Option<&str>) -> String {
        match guild_id {
            Some(guild_id) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.base_url, application_id, guild_id
            ),
            None => format!("{}/applications/{}/commands", self.base_url, application_id),
        }
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.token.expose_secret())
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, DiscordError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(DiscordError::from);
        }

        let (code, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => (err.code, err.message),
            Err(_) if body.is_empty() => (None, status.to_string()),
            Err(_) => (None, body),
        };
        warn!(status = status.as_u16(), %message, "Discord API request failed");

        Err(DiscordError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}
