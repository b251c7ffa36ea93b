use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use tracing::{debug, warn};

use super::error::StoreError;

/// Opens one SQLite connection per unit of work.
///
/// No pooling: callers acquire with [`Connector::connect`] and hand the
/// connection back through [`Connector::release`] on every exit path.
#[derive(Clone, Debug)]
pub struct Connector {
    options: SqliteConnectOptions,
}

impl Connector {
    /// Build a connector from a connection string
    ///
    /// # Parameters
    /// - `database_url`: SQLite connection string
    ///   Format: sqlite://PATH/TO/FILE.db
    ///
    /// The database file is created on first connect if it is missing.
    pub fn from_url(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|source| StoreError::InvalidUrl {
                url: database_url.to_string(),
                source,
            })?
            .create_if_missing(true);

        Ok(Self { options })
    }

    /// Build a connector for a database file on disk
    #[cfg(test)]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        Self { options }
    }

    /// Acquire a fresh connection
    pub async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        debug!("Opening database connection");
        self.options.connect().await.map_err(StoreError::Connect)
    }

    /// Close a connection obtained from [`Connector::connect`].
    ///
    /// A failure to close is logged and otherwise ignored; the statement
    /// result has already been decided by then.
    pub async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        } else {
            debug!("Database connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_url() {
        let err = Connector::from_url("sqlite://jobs.db?mode=sideways").unwrap_err();
        assert!(matches!(err, StoreError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn creates_missing_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        let connector = Connector::from_path(&path);

        let conn = connector.connect().await.unwrap();
        connector.release(conn).await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn reports_connect_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory that does not exist cannot hold the database file
        let connector = Connector::from_path(dir.path().join("missing").join("jobs.db"));

        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, StoreError::Connect(_)));
    }
}
