//! Pushes the command catalog to the platform's command registry.
//!
//! Run once per deployment; re-run on failure.

use anyhow::Context;
use discord_client::DiscordClient;
use interactions_bot::{
    catalog,
    config::Config,
    logging::init_logging,
    registrar::{register_commands, RegistrationScope},
};
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config.log);

    let scope = RegistrationScope::from_guild(config.registration_guild()?);

    let client = DiscordClient::new(
        &config.discord.api_base_url,
        config.discord.token.expose_secret().as_str(),
        config.http.timeout,
    )
    .context("Failed to create Discord client")?;

    let commands = catalog::commands(config.catalog.variant);

    register_commands(&client, &config.discord.application_id, &scope, &commands)
        .await
        .context("Command registration failed")?;

    Ok(())
}
