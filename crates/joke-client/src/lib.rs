//! Random joke provider.

mod client;
mod error;
mod types;

pub use client::{JokeClient, DEFAULT_JOKE_URL};
pub use error::JokeError;
pub use types::Joke;

use async_trait::async_trait;

/// Source of random jokes.
#[async_trait]
pub trait JokeProvider: Send + Sync {
    async fn random_joke(&self) -> Result<Joke, JokeError>;
}
