//! Slash command catalog advertised to the platform.
//!
//! Two deployments exist: one exposes `activity` with a choice of embedded
//! applications, the other a fixed `youtube` command. Exactly one is active,
//! selected by [`CatalogVariant`].

use crate::error::{BotError, BotResult};
use discord_client::{
    ApplicationCommand, ChannelType, CommandOption, CommandOptionChoice, CommandOptionType,
};
use serde::Deserialize;
use std::collections::HashSet;

/// Embedded application launched by the `youtube` command.
pub const WATCH_TOGETHER_APPLICATION_ID: &str = "880218394199220334";

/// Embedded applications offered by the `activity` command.
pub const ACTIVITY_CHOICES: [(&str, &str); 13] = [
    ("Watch Together", WATCH_TOGETHER_APPLICATION_ID),
    ("Poker Night (required server boost level 1)", "755827207812677713"),
    ("Betrayal.io", "773336526917861400"),
    ("Fishington.io", "814288819477020702"),
    ("Chess In The Park (required server boost level 1)", "832012774040141894"),
    ("Sketchy Artist", "879864070101172255"),
    ("Awkword", "879863881349087252"),
    ("Doodle Crew", "878067389634314250"),
    ("Sketch Heads", "902271654783242291"),
    ("Letter League(Formerly known as 'Letter Tile')", "879863686565621790"),
    ("Word Snacks", "879863976006127627"),
    ("SpellCast (required server boost level 1)", "852509694341283871"),
    ("Putt Party", "945737671223947305"),
];

/// Option carrying the embedded application id.
pub const ACTIVITY_TYPE_OPTION: &str = "type";

/// Option carrying the target voice channel.
pub const CHANNEL_OPTION: &str = "channel";

/// Which catalog revision is deployed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    #[default]
    Activity,
    Youtube,
}

/// Build the command catalog for a deployment.
pub fn commands(variant: CatalogVariant) -> Vec<ApplicationCommand> {
    let mut commands = vec![
        command("invite", "Get bot invite link", vec![]),
        command("hello", "Get hello world using HTTPS Request", vec![]),
        command("joke", "Get random joke.", vec![]),
        command("help", "List all commands.", vec![]),
    ];

    commands.push(match variant {
        CatalogVariant::Activity => command(
            "activity",
            "Create youtube activity in your channel",
            vec![activity_type_option(), channel_option()],
        ),
        CatalogVariant::Youtube => command(
            "youtube",
            "Start a Watch Together session in your voice channel",
            vec![channel_option()],
        ),
    });

    commands
}

/// Reject catalogs with duplicate command names.
pub fn validate(commands: &[ApplicationCommand]) -> BotResult<()> {
    let mut seen = HashSet::new();
    for command in commands {
        if !seen.insert(command.name.as_str()) {
            return Err(BotError::DuplicateCommand(command.name.clone()));
        }
    }
    Ok(())
}

fn command(name: &str, description: &str, options: Vec<CommandOption>) -> ApplicationCommand {
    ApplicationCommand {
        name: name.into(),
        description: description.into(),
        options,
    }
}

fn activity_type_option() -> CommandOption {
    CommandOption {
        name: ACTIVITY_TYPE_OPTION.into(),
        description: "Select type of activity".into(),
        kind: CommandOptionType::String,
        required: true,
        choices: ACTIVITY_CHOICES
            .iter()
            .map(|(name, value)| CommandOptionChoice {
                name: (*name).into(),
                value: serde_json::Value::String((*value).into()),
            })
            .collect(),
        channel_types: vec![],
    }
}

fn channel_option() -> CommandOption {
    CommandOption {
        name: CHANNEL_OPTION.into(),
        description: "The channel to create activity for.".into(),
        kind: CommandOptionType::Channel,
        required: true,
        choices: vec![],
        channel_types: vec![ChannelType::GuildVoice],
    }
}
