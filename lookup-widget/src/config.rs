use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://sqlite.db";

pub struct Config {
    /// Entries endpoint; the looked-up word is appended as a path segment
    pub endpoint: Option<String>,
    pub database_url: String,
}

impl Config {
    pub fn new() -> Self {
        let endpoint = env::var("DICTIONARY_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty());

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Config {
            endpoint,
            database_url,
        }
    }
}
