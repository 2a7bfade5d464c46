//! HTTP joke provider.

use crate::error::JokeError;
use crate::types::Joke;
use crate::JokeProvider;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default random joke endpoint.
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Client for a JSON endpoint returning `{setup, punchline}`.
#[derive(Clone)]
pub struct JokeClient {
    client: Client,
    url: String,
}

impl JokeClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, JokeError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl JokeProvider for JokeClient {
    #[instrument(skip(self))]
    async fn random_joke(&self) -> Result<Joke, JokeError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(status = status.as_u16(), "Joke provider request failed");
            return Err(JokeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        debug!("Response body: {}", body.chars().take(200).collect::<String>());
        let joke: Joke = serde_json::from_str(&body)?;

        if joke.is_empty() {
            return Err(JokeError::EmptyJoke);
        }
        Ok(joke)
    }
}
