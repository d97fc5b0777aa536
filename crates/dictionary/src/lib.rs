use async_trait::async_trait;
use dictionary_api::{get_definition, DICTIONARY_API_URL};
use thiserror::Error;

mod de;
mod dictionary;
mod dictionary_api;

pub use dictionary::{Definition, Entry, ErrorPayload, LookupResponse, Meaning, Phonetic};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to read the dictionary response: {0}")]
    Body(#[source] reqwest::Error),
    #[error("dictionary response is not JSON: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Anything able to answer a word lookup.
#[async_trait]
pub trait LookupSource: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<LookupResponse, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    endpoint: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_endpoint(DICTIONARY_API_URL)
    }

    /// Uses `endpoint` in place of the public English entries URL. The word
    /// is appended as the last path segment.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get_definition(&self, word: &str) -> Result<LookupResponse, DictionaryError> {
        get_definition(&self.client, &self.endpoint, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupSource for Dictionary {
    async fn lookup(&self, word: &str) -> Result<LookupResponse, DictionaryError> {
        self.get_definition(word).await
    }
}
