//! Discord interaction, command and invite types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound interaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    /// Component, autocomplete and modal interactions are not routed.
    Unknown(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Unknown(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Unknown(other) => other,
        }
    }
}

/// Type tag of an inbound interaction, read before the rest of the payload.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InteractionKind {
    #[serde(rename = "type")]
    pub kind: InteractionType,
}

/// Inbound interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CommandData>,
}

/// Payload of an application command interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandDataOption>,
    /// Entities referenced by options. Older clients omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedData>,
}

impl CommandData {
    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&CommandDataOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// String value of a named option.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.option(name)
            .and_then(|o| o.value.as_ref())
            .and_then(|v| v.as_str())
    }

    /// Resolved channels, if the client sent any.
    pub fn resolved_channels(&self) -> Option<&HashMap<String, PartialChannel>> {
        self.resolved
            .as_ref()
            .and_then(|r| r.channels.as_ref())
            .filter(|channels| !channels.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDataOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<HashMap<String, PartialChannel>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialChannel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Interaction callback type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum InteractionResponseType {
    Pong,
    ChannelMessageWithSource,
}

impl From<InteractionResponseType> for u8 {
    fn from(value: InteractionResponseType) -> Self {
        match value {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
        }
    }
}

/// Message flags bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageFlags(u64);

impl MessageFlags {
    pub const EPHEMERAL: MessageFlags = MessageFlags(1 << 6);

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: MessageFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Message body of a channel message response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageData {
    pub content: String,
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
}

/// Interaction callback returned in the webhook response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    /// Message visible to the whole channel.
    pub fn message(content: impl Into<String>) -> Self {
        Self::with_flags(content, MessageFlags::empty())
    }

    /// Message visible only to the invoking user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::with_flags(content, MessageFlags::EPHEMERAL)
    }

    fn with_flags(content: impl Into<String>, flags: MessageFlags) -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(MessageData {
                content: content.into(),
                flags,
            }),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.content.as_str())
    }

    pub fn is_ephemeral(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|d| d.flags.contains(MessageFlags::EPHEMERAL))
    }
}

/// Application command option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CommandOptionType {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
    Unknown(u8),
}

impl From<u8> for CommandOptionType {
    fn from(value: u8) -> Self {
        match value {
            1 => CommandOptionType::SubCommand,
            2 => CommandOptionType::SubCommandGroup,
            3 => CommandOptionType::String,
            4 => CommandOptionType::Integer,
            5 => CommandOptionType::Boolean,
            6 => CommandOptionType::User,
            7 => CommandOptionType::Channel,
            8 => CommandOptionType::Role,
            9 => CommandOptionType::Mentionable,
            10 => CommandOptionType::Number,
            11 => CommandOptionType::Attachment,
            other => CommandOptionType::Unknown(other),
        }
    }
}

impl From<CommandOptionType> for u8 {
    fn from(value: CommandOptionType) -> Self {
        match value {
            CommandOptionType::SubCommand => 1,
            CommandOptionType::SubCommandGroup => 2,
            CommandOptionType::String => 3,
            CommandOptionType::Integer => 4,
            CommandOptionType::Boolean => 5,
            CommandOptionType::User => 6,
            CommandOptionType::Channel => 7,
            CommandOptionType::Role => 8,
            CommandOptionType::Mentionable => 9,
            CommandOptionType::Number => 10,
            CommandOptionType::Attachment => 11,
            CommandOptionType::Unknown(other) => other,
        }
    }
}

/// Channel kind, as used for option filtering and resolved channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelType {
    GuildText,
    GuildVoice,
    GuildCategory,
    GuildStageVoice,
    Unknown(u8),
}

impl From<u8> for ChannelType {
    fn from(value: u8) -> Self {
        match value {
            0 => ChannelType::GuildText,
            2 => ChannelType::GuildVoice,
            4 => ChannelType::GuildCategory,
            13 => ChannelType::GuildStageVoice,
            other => ChannelType::Unknown(other),
        }
    }
}

impl From<ChannelType> for u8 {
    fn from(value: ChannelType) -> Self {
        match value {
            ChannelType::GuildText => 0,
            ChannelType::GuildVoice => 2,
            ChannelType::GuildCategory => 4,
            ChannelType::GuildStageVoice => 13,
            ChannelType::Unknown(other) => other,
        }
    }
}

/// Command definition as registered with the platform.
///
/// Fields the registry adds on read-back (ids, versions) are ignored, so a
/// definition fetched from the platform compares equal to the one pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommand {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandOptionChoice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<ChannelType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOptionChoice {
    pub name: String,
    pub value: serde_json::Value,
}

/// Invite target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum InviteTargetType {
    Stream,
    EmbeddedApplication,
}

impl From<InviteTargetType> for u8 {
    fn from(value: InviteTargetType) -> Self {
        match value {
            InviteTargetType::Stream => 1,
            InviteTargetType::EmbeddedApplication => 2,
        }
    }
}

/// Body of a channel invite creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInviteRequest {
    /// Seconds until expiry, 0 for never.
    pub max_age: u32,
    pub target_type: InviteTargetType,
    pub target_application_id: String,
}

impl CreateInviteRequest {
    /// Non-expiring invite that launches an embedded application.
    pub fn embedded_application(application_id: impl Into<String>) -> Self {
        Self {
            max_age: 0,
            target_type: InviteTargetType::EmbeddedApplication,
            target_application_id: application_id.into(),
        }
    }
}

/// Created invite.
#[derive(Debug, Clone, Deserialize)]
pub struct Invite {
    pub code: String,
}

impl Invite {
    pub fn url(&self) -> String {
        format!("https://discord.gg/{}", self.code)
    }
}

/// Error body returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<u64>,
}
