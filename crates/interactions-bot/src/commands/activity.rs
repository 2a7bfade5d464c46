//! Activity command - launches an embedded application in a voice channel.

use crate::catalog::{
    CatalogVariant, ACTIVITY_TYPE_OPTION, CHANNEL_OPTION, WATCH_TOGETHER_APPLICATION_ID,
};
use crate::commands::{CommandContext, CommandHandler};
use crate::error::{BotError, BotResult};
use async_trait::async_trait;
use discord_client::{CreateInviteRequest, DiscordError, Interaction, InteractionResponse};
use tracing::{info, warn};

/// Reply for clients that do not send resolved channel data.
pub const UPDATE_CLIENT_MESSAGE: &str = "Please update your discord app to use this command";

/// Where the embedded application id comes from.
#[derive(Debug, Clone)]
enum Target {
    /// Chosen by the user through the `type` option.
    FromOption,
    /// Fixed by the command.
    Fixed(&'static str),
}

pub struct ActivityHandler {
    name: &'static str,
    target: Target,
}

impl ActivityHandler {
    /// `activity`: the user picks the application.
    pub fn activity() -> Self {
        Self {
            name: "activity",
            target: Target::FromOption,
        }
    }

    /// `youtube`: always Watch Together.
    pub fn youtube() -> Self {
        Self {
            name: "youtube",
            target: Target::Fixed(WATCH_TOGETHER_APPLICATION_ID),
        }
    }

    pub fn for_variant(variant: CatalogVariant) -> Self {
        match variant {
            CatalogVariant::Activity => Self::activity(),
            CatalogVariant::Youtube => Self::youtube(),
        }
    }
}

#[async_trait]
impl CommandHandler for ActivityHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn execute(
        &self,
        interaction: &Interaction,
        ctx: &CommandContext,
    ) -> BotResult<InteractionResponse> {
        let data = interaction.data.as_ref().ok_or_else(|| {
            BotError::MalformedInteraction("application command without data".into())
        })?;

        if data.resolved_channels().is_none() {
            return Ok(InteractionResponse::ephemeral(UPDATE_CLIENT_MESSAGE));
        }

        let channel_id = data.option_str(CHANNEL_OPTION).ok_or_else(|| {
            BotError::MalformedInteraction(format!("missing `{}` option", CHANNEL_OPTION))
        })?;

        let application_id = match &self.target {
            Target::Fixed(id) => *id,
            Target::FromOption => data.option_str(ACTIVITY_TYPE_OPTION).ok_or_else(|| {
                BotError::MalformedInteraction(format!(
                    "missing `{}` option",
                    ACTIVITY_TYPE_OPTION
                ))
            })?,
        };

        let request = CreateInviteRequest::embedded_application(application_id);
        match ctx.discord.create_channel_invite(channel_id, &request).await {
            Ok(invite) => {
                info!(channel = %channel_id, application = %application_id, "Activity invite created");
                Ok(InteractionResponse::message(format!(
                    "[Click to open](<{}>)",
                    invite.url()
                )))
            }
            Err(DiscordError::Api { status, message, .. }) => {
                warn!(channel = %channel_id, status, "Invite creation rejected: {}", message);
                Ok(InteractionResponse::ephemeral(format!(
                    "Error: {}\nMake sure i have the \"Create invite\" permission in the voice channel",
                    message
                )))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{command, context, MockJokes};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn activity_command(with_resolved: bool) -> Interaction {
        let mut data = serde_json::json!({
            "name": "activity",
            "options": [
                { "name": "type", "type": 3, "value": "755827207812677713" },
                { "name": "channel", "type": 7, "value": "555" }
            ]
        });
        if with_resolved {
            data["resolved"] = serde_json::json!({
                "channels": { "555": { "id": "555", "type": 2 } }
            });
        }
        command(data)
    }

    #[tokio::test]
    async fn test_missing_resolved_data_asks_for_update() {
        let discord = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&discord)
            .await;
        let ctx = context(&discord.uri(), MockJokes::new());

        let response = ActivityHandler::activity()
            .execute(&activity_command(false), &ctx)
            .await
            .unwrap();

        assert!(response.is_ephemeral());
        assert_eq!(response.content(), Some(UPDATE_CLIENT_MESSAGE));
    }

    #[tokio::test]
    async fn test_invite_created() {
        let discord = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/channels/555/invites"))
            .and(header("Authorization", "Bot test-token"))
            .and(body_json(serde_json::json!({
                "max_age": 0,
                "target_type": 2,
                "target_application_id": "755827207812677713"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": "abc123" })),
            )
            .expect(1)
            .mount(&discord)
            .await;
        let ctx = context(&discord.uri(), MockJokes::new());

        let response = ActivityHandler::activity()
            .execute(&activity_command(true), &ctx)
            .await
            .unwrap();

        assert!(!response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some("[Click to open](<https://discord.gg/abc123>)")
        );
    }

    #[tokio::test]
    async fn test_upstream_rejection_is_ephemeral() {
        let discord = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/channels/555/invites"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "Missing Permissions",
                "code": 50013
            })))
            .mount(&discord)
            .await;
        let ctx = context(&discord.uri(), MockJokes::new());

        let response = ActivityHandler::activity()
            .execute(&activity_command(true), &ctx)
            .await
            .unwrap();

        assert!(response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some("Error: Missing Permissions\nMake sure i have the \"Create invite\" permission in the voice channel")
        );
    }

    #[tokio::test]
    async fn test_youtube_uses_watch_together() {
        let discord = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/channels/555/invites"))
            .and(body_json(serde_json::json!({
                "max_age": 0,
                "target_type": 2,
                "target_application_id": WATCH_TOGETHER_APPLICATION_ID
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": "yt42" })),
            )
            .expect(1)
            .mount(&discord)
            .await;
        let ctx = context(&discord.uri(), MockJokes::new());

        let interaction = command(serde_json::json!({
            "name": "youtube",
            "options": [{ "name": "channel", "type": 7, "value": "555" }],
            "resolved": { "channels": { "555": { "id": "555", "type": 2 } } }
        }));
        let response = ActivityHandler::youtube()
            .execute(&interaction, &ctx)
            .await
            .unwrap();

        assert_eq!(
            response.content(),
            Some("[Click to open](<https://discord.gg/yt42>)")
        );
    }

    #[tokio::test]
    async fn test_missing_channel_option_is_malformed() {
        let ctx = context("http://127.0.0.1:9", MockJokes::new());
        let interaction = command(serde_json::json!({
            "name": "activity",
            "options": [{ "name": "type", "type": 3, "value": "1" }],
            "resolved": { "channels": { "555": { "id": "555", "type": 2 } } }
        }));

        let result = ActivityHandler::activity().execute(&interaction, &ctx).await;
        assert!(matches!(result, Err(BotError::MalformedInteraction(_))));
    }
}
