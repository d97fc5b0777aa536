use std::str::FromStr;

use sqlx::{
    query, query_scalar,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

/// Key the last submitted word is kept under.
pub const LAST_WORD_KEY: &str = "lastWord";

/// String key/value store with the semantics of the browser's `localStorage`.
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(url: &str) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // a single long-lived connection keeps `sqlite::memory:` databases alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        sqlx::migrate!().run(&pool).await?;
        tracing::debug!(url, "storage ready");
        Ok(Self { pool })
    }
}

impl Storage {
    pub async fn get_item(&self, key: &str) -> sqlx::Result<Option<String>> {
        query_scalar::<_, String>("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    /// Stores `value` under `key`, replacing whatever was there.
    pub async fn set_item(&self, key: &str, value: &str) -> sqlx::Result<()> {
        query(
            "INSERT INTO local_storage(key, value) VALUES(?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map(|_| ())
    }

    /// Attempt to remove an item, returns true if the key existed
    pub async fn remove_item(&self, key: &str) -> sqlx::Result<bool> {
        let result = query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) async fn memory() -> Storage {
    Storage::initialize("sqlite::memory:")
        .await
        .expect("in-memory storage failed to open")
}
