use thiserror::Error;

/// Failures talking to the application store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection URL could not be parsed
    #[error("invalid database url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    /// Opening a connection failed
    #[error("could not connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// The statement itself failed
    #[error("database statement failed: {0}")]
    Statement(#[source] sqlx::Error),
}
