use tracing::{debug, error};

use super::connection::Connector;
use super::error::StoreError;

/// Database connectivity check
///
/// Opens a connection, runs `SELECT 1` and releases it.
pub async fn ping(connector: &Connector) -> Result<(), StoreError> {
    let mut conn = connector.connect().await.inspect_err(|e| {
        error!("Health check failed: {}", e);
    })?;

    let result = sqlx::query("SELECT 1").fetch_one(&mut conn).await;
    connector.release(conn).await;

    match result {
        Ok(_) => {
            debug!("Health check passed");
            Ok(())
        }
        Err(e) => {
            error!("Health check failed: {:?}", e);
            Err(StoreError::Statement(e))
        }
    }
}
