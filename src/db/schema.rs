use tracing::info;

use super::connection::Connector;
use super::error::StoreError;

const CREATE_APPLICATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS applications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL,
        position TEXT NOT NULL,
        application_date TEXT NOT NULL,
        status TEXT NOT NULL,
        notes TEXT
    )
"#;

/// Create the `applications` table if it does not exist yet.
///
/// Safe to run on every start. `AUTOINCREMENT` keeps ids from being
/// handed out again after a delete.
pub async fn ensure_schema(connector: &Connector) -> Result<(), StoreError> {
    let mut conn = connector.connect().await?;
    let result = sqlx::query(CREATE_APPLICATIONS).execute(&mut conn).await;
    connector.release(conn).await;

    result.map_err(StoreError::Statement)?;
    info!("Database schema ready");
    Ok(())
}
