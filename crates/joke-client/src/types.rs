//! Joke provider types.

use serde::Deserialize;
use std::fmt;

/// A two-part joke.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    #[serde(default)]
    pub setup: String,
    #[serde(default)]
    pub punchline: String,
}

impl Joke {
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.setup.trim().is_empty() && self.punchline.trim().is_empty()
    }
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.setup.trim(), self.punchline.trim()) {
            (setup, "") => write!(f, "{}", setup),
            ("", punchline) => write!(f, "{}", punchline),
            (setup, punchline) => write!(f, "{}\n{}", setup, punchline),
        }
    }
}
