use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    busy_timeout_ms: u64,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let busy_timeout_ms = std::env::var("DATABASE_BUSY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5000);

        let db = if config.url.starts_with("libsql://") || config.url.starts_with("https://") {
            if let Some(ref local_path) = config.local_path {
                Builder::new_remote_replica(
                    local_path,
                    config.url.clone(),
                    config.auth_token.clone().unwrap_or_default(),
                )
                .build()
                .await?
            } else {
                Builder::new_remote(
                    config.url.clone(),
                    config.auth_token.clone().unwrap_or_default(),
                )
                .build()
                .await?
            }
        } else if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let database = Self {
            db: Arc::new(db),
            busy_timeout_ms,
        };
        database.configure_database().await?;
        database.init_schema().await?;

        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }

    async fn configure_database(&self) -> Result<()> {
        let conn = self.connect()?;

        for pragma in [
            format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms),
            "PRAGMA journal_mode = WAL".to_string(),
            "PRAGMA synchronous = NORMAL".to_string(),
        ] {
            if let Err(error) = conn.execute_batch(&pragma).await {
                tracing::warn!(pragma = %pragma, error = %error, "Failed to apply SQLite pragma");
            }
        }

        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init_schema(&conn).await
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_backed_database_initializes_schema() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("vitalog-test.db");

        let config = DatabaseConfig {
            url: format!("file:{}", path.display()),
            auth_token: None,
            local_path: None,
        };

        let database = Database::new(&config).await.expect("database should open");
        let conn = database.connect().expect("connection");

        let mut rows = conn
            .query("SELECT COUNT(*) FROM entries", ())
            .await
            .expect("entries table should exist");
        let row = rows.next().await.expect("row").expect("count row");
        assert_eq!(row.get::<i64>(0).expect("count"), 0);
    }

    #[tokio::test]
    async fn in_memory_database_initializes_schema() {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
        };

        let database = Database::new(&config).await.expect("database should open");
        let conn = database.connect().expect("connection");

        conn.query("SELECT COUNT(*) FROM health_metrics", ())
            .await
            .expect("health_metrics table should exist");
    }
}
