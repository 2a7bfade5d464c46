//! Discord interactions model and REST API client.

mod client;
mod error;
mod types;

pub use client::{DiscordClient, DEFAULT_API_BASE_URL};
pub use error::DiscordError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> DiscordClient {
        DiscordClient::new(mock_server.uri(), "test-token", Duration::from_secs(5)).unwrap()
    }

    fn hello_command() -> ApplicationCommand {
        ApplicationCommand {
            name: "hello".into(),
            description: "Say hello".into(),
            options: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_channel_invite() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/channels/123/invites"))
            .and(header("Authorization", "Bot test-token"))
            .and(body_json(serde_json::json!({
                "max_age": 0,
                "target_type": 2,
                "target_application_id": "880218394199220334"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "abc123",
                "max_age": 0,
                "channel": { "id": "123", "type": 2 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let invite = client
            .create_channel_invite(
                "123",
                &CreateInviteRequest::embedded_application("880218394199220334"),
            )
            .await
            .unwrap();

        assert_eq!(invite.code, "abc123");
        assert_eq!(invite.url(), "https://discord.gg/abc123");
    }

    #[tokio::test]
    async fn test_create_channel_invite_missing_permissions() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/channels/123/invites"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "Missing Permissions",
                "code": 50013
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client
            .create_channel_invite("123", &CreateInviteRequest::embedded_application("1"))
            .await;

        match result {
            Err(DiscordError::Api {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 403);
                assert_eq!(code, Some(50013));
                assert_eq!(message, "Missing Permissions");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_kept_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/channels/123/invites"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client
            .create_channel_invite("123", &CreateInviteRequest::embedded_application("1"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DiscordError::Api { status: 502, code: None, ref message } if message == "upstream down"
        ));
    }

    #[tokio::test]
    async fn test_bulk_overwrite_guild_commands() {
        let mock_server = MockServer::start().await;
        let commands = vec![hello_command()];

        Mock::given(method("PUT"))
            .and(path("/applications/42/guilds/7/commands"))
            .and(header("Authorization", "Bot test-token"))
            .and(body_json(serde_json::json!([
                { "name": "hello", "description": "Say hello" }
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "1000",
                    "application_id": "42",
                    "version": "1",
                    "type": 1,
                    "name": "hello",
                    "description": "Say hello"
                }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let registered = client
            .bulk_overwrite_commands("42", Some("7"), &commands)
            .await
            .unwrap();

        assert_eq!(registered, commands);
    }

    #[tokio::test]
    async fn test_list_global_commands() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/applications/42/commands"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "1000",
                    "name": "hello",
                    "description": "Say hello"
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let commands = client.list_commands("42", None).await.unwrap();

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "hello");
    }

    #[test]
    fn test_pong_serialization() {
        let json = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": 1 }));
    }

    #[test]
    fn test_ephemeral_message_serialization() {
        let json = serde_json::to_value(InteractionResponse::ephemeral("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": 4, "data": { "content": "hi", "flags": 64 } })
        );

        let json = serde_json::to_value(InteractionResponse::message("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": 4, "data": { "content": "hi" } }));
    }

    #[test]
    fn test_interaction_parsing() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "id": "1",
            "type": 2,
            "application_id": "42",
            "data": {
                "id": "9",
                "name": "activity",
                "type": 1,
                "options": [
                    { "name": "type", "type": 3, "value": "880218394199220334" },
                    { "name": "channel", "type": 7, "value": "555" }
                ],
                "resolved": {
                    "channels": {
                        "555": { "id": "555", "type": 2, "name": "General", "permissions": "0" }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        let data = interaction.data.unwrap();
        assert_eq!(data.option_str("type"), Some("880218394199220334"));
        assert_eq!(data.option_str("channel"), Some("555"));
        assert_eq!(data.option_str("missing"), None);
        let channels = data.resolved_channels().unwrap();
        assert_eq!(channels["555"].kind, ChannelType::GuildVoice);
    }

    #[test]
    fn test_unknown_interaction_type_is_preserved() {
        let interaction: Interaction =
            serde_json::from_value(serde_json::json!({ "type": 3 })).unwrap();
        assert_eq!(interaction.kind, InteractionType::Unknown(3));
    }

    #[test]
    fn test_interaction_kind_ignores_other_fields() {
        let kind: InteractionKind = serde_json::from_value(serde_json::json!({
            "type": 1,
            "id": 123,
            "data": { "foo": 1 }
        }))
        .unwrap();
        assert_eq!(kind.kind, InteractionType::Ping);
    }

    #[test]
    fn test_empty_resolved_channels_count_as_missing() {
        let data: CommandData = serde_json::from_value(serde_json::json!({
            "name": "activity",
            "resolved": { "channels": {} }
        }))
        .unwrap();
        assert!(data.resolved_channels().is_none());
    }
}
