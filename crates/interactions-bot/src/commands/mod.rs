//! Slash command handlers.

mod activity;
mod hello;
mod help;
mod invite;
mod joke;

pub use activity::ActivityHandler;
pub use hello::HelloHandler;
pub use help::HelpHandler;
pub use invite::InviteHandler;
pub use joke::JokeHandler;

use crate::catalog::{self, CatalogVariant};
use crate::error::{BotError, BotResult};
use anyhow::anyhow;
use async_trait::async_trait;
use discord_client::{ApplicationCommand, DiscordClient, Interaction, InteractionResponse};
use joke_client::JokeProvider;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Process-wide collaborators and settings handed to every handler.
#[derive(Clone)]
pub struct CommandContext {
    /// Application id, used in OAuth links
    pub application_id: String,
    /// Authenticated REST client
    pub discord: Arc<DiscordClient>,
    /// Joke source
    pub jokes: Arc<dyn JokeProvider>,
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name, matched exactly against the invoked command.
    fn name(&self) -> &str;

    /// Execute the command.
    async fn execute(
        &self,
        interaction: &Interaction,
        ctx: &CommandContext,
    ) -> BotResult<InteractionResponse>;
}

/// Dispatch table from command name to handler.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry serving a catalog revision.
    ///
    /// Fails if the catalog has duplicates or a command without a handler.
    pub fn for_catalog(variant: CatalogVariant) -> BotResult<Self> {
        let commands = catalog::commands(variant);
        catalog::validate(&commands)?;

        let mut registry = Self::new();
        registry.register(Arc::new(InviteHandler::new()))?;
        registry.register(Arc::new(HelloHandler::new()))?;
        registry.register(Arc::new(JokeHandler::new()))?;
        registry.register(Arc::new(HelpHandler::from_catalog(&commands)))?;
        registry.register(Arc::new(ActivityHandler::for_variant(variant)))?;

        registry.ensure_serves(&commands)?;
        Ok(registry)
    }

    /// Require a one-to-one match between handlers and catalog commands.
    fn ensure_serves(&self, commands: &[ApplicationCommand]) -> BotResult<()> {
        if let Some(missing) = commands.iter().find(|c| !self.contains(&c.name)) {
            return Err(BotError::Config(anyhow!(
                "no handler for command {}",
                missing.name
            )));
        }

        if let Some(extra) = self
            .handlers
            .keys()
            .find(|name| !commands.iter().any(|c| &c.name == *name))
        {
            return Err(BotError::Config(anyhow!(
                "handler {} is not in the catalog",
                extra
            )));
        }

        if self.len() != commands.len() {
            return Err(BotError::Config(anyhow!(
                "{} handlers for {} catalog commands",
                self.len(),
                commands.len()
            )));
        }

        Ok(())
    }

    /// Register a handler under its name.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> BotResult<()> {
        let name = handler.name().to_string();
        if self.handlers.contains_key(&name) {
            return Err(BotError::DuplicateCommand(name));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler for an application command interaction.
    ///
    /// Upstream failures become an ephemeral error reply; everything else
    /// propagates.
    pub async fn dispatch(
        &self,
        interaction: &Interaction,
        ctx: &CommandContext,
    ) -> BotResult<InteractionResponse> {
        let data = interaction.data.as_ref().ok_or_else(|| {
            BotError::MalformedInteraction("application command without data".into())
        })?;

        let Some(handler) = self.get(&data.name) else {
            error!(command = %data.name, "Unknown command");
            return Err(BotError::UnknownCommand(data.name.clone()));
        };

        info!(command = %data.name, "Dispatching command");

        match handler.execute(interaction, ctx).await {
            Err(e) if e.is_upstream() => {
                warn!(command = %data.name, "Command failed upstream: {}", e);
                Ok(InteractionResponse::ephemeral(format!("Error: {}", e)))
            }
            result => result,
        }
    }
}
