//! One-shot registration of the command catalog.

use crate::catalog;
use crate::error::{BotError, BotResult};
use discord_client::{ApplicationCommand, DiscordClient};
use std::fmt;
use tracing::{error, info};

/// Registry the catalog is pushed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationScope {
    /// Test guild; changes show up immediately.
    Guild(String),
    Global,
}

impl RegistrationScope {
    pub fn from_guild(guild_id: Option<&str>) -> Self {
        match guild_id {
            Some(id) => RegistrationScope::Guild(id.to_string()),
            None => RegistrationScope::Global,
        }
    }

    pub fn guild_id(&self) -> Option<&str> {
        match self {
            RegistrationScope::Guild(id) => Some(id),
            RegistrationScope::Global => None,
        }
    }
}

impl fmt::Display for RegistrationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationScope::Guild(id) => write!(f, "guild {}", id),
            RegistrationScope::Global => write!(f, "global"),
        }
    }
}

/// Replace every registered command in `scope` with `commands`.
///
/// The registry is re-fetched afterwards and must describe exactly the
/// pushed catalog.
pub async fn register_commands(
    client: &DiscordClient,
    application_id: &str,
    scope: &RegistrationScope,
    commands: &[ApplicationCommand],
) -> BotResult<Vec<ApplicationCommand>> {
    catalog::validate(commands)?;

    info!(%scope, count = commands.len(), "Started refreshing application (/) commands");

    let registered = match overwrite_and_fetch(client, application_id, scope, commands).await {
        Ok(registered) => registered,
        Err(e) => {
            error!(%scope, "Failed to refresh application (/) commands: {}", e);
            return Err(e);
        }
    };

    if let Err(e) = ensure_matches(commands, &registered) {
        error!(%scope, "{}", e);
        return Err(e);
    }

    info!(%scope, count = registered.len(), "Successfully reloaded application (/) commands");
    Ok(registered)
}

async fn overwrite_and_fetch(
    client: &DiscordClient,
    application_id: &str,
    scope: &RegistrationScope,
    commands: &[ApplicationCommand],
) -> BotResult<Vec<ApplicationCommand>> {
    client
        .bulk_overwrite_commands(application_id, scope.guild_id(), commands)
        .await?;
    Ok(client.list_commands(application_id, scope.guild_id()).await?)
}

/// Compare a registry listing against the catalog, ignoring order.
pub fn ensure_matches(
    expected: &[ApplicationCommand],
    actual: &[ApplicationCommand],
) -> BotResult<()> {
    let mut expected_sorted: Vec<&ApplicationCommand> = expected.iter().collect();
    let mut actual_sorted: Vec<&ApplicationCommand> = actual.iter().collect();
    expected_sorted.sort_by(|a, b| a.name.cmp(&b.name));
    actual_sorted.sort_by(|a, b| a.name.cmp(&b.name));

    if expected_sorted == actual_sorted {
        return Ok(());
    }

    Err(BotError::RegistrationMismatch {
        expected: expected_sorted.iter().map(|c| c.name.clone()).collect(),
        actual: actual_sorted.iter().map(|c| c.name.clone()).collect(),
    })
}
