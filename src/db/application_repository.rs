use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use super::connection::Connector;
use super::error::StoreError;
use super::models::ApplicationRow;
use crate::tracker::Application;

/// Result of an update or delete keyed by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// At least one row was touched
    Applied,
    /// No row has that id
    NotFound,
}

impl WriteOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        }
    }
}

/// Read and write access to the persisted applications
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// All applications in id order
    async fn list(&self) -> Result<Vec<ApplicationRow>, StoreError>;

    /// Insert a new application, returning rows affected.
    /// The assigned id is only visible through a later [`list`](Self::list).
    async fn create(&self, application: &Application) -> Result<u64, StoreError>;

    /// Overwrite every field of the application with `id`
    async fn update(&self, id: i64, application: &Application) -> Result<WriteOutcome, StoreError>;

    /// Remove the application with `id`
    async fn delete(&self, id: i64) -> Result<WriteOutcome, StoreError>;
}

/// Repository for application database operations.
///
/// Every call is its own unit of work: connect, run one statement, release.
#[derive(Clone, Debug)]
pub struct ApplicationRepository {
    connector: Connector,
}

impl ApplicationRepository {
    /// Create a new repository over the given connector
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    async fn list(&self) -> Result<Vec<ApplicationRow>, StoreError> {
        debug!("Listing applications");

        let mut conn = self.connector.connect().await.inspect_err(|e| {
            error!("Error retrieving applications: {}", e);
        })?;

        let result = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, company, position, application_date, status, COALESCE(notes, '') AS notes
            FROM applications
            ORDER BY id
            "#,
        )
        .fetch_all(&mut conn)
        .await;
        self.connector.release(conn).await;

        let rows = result.map_err(|e| {
            error!("Error retrieving applications: {}", e);
            StoreError::Statement(e)
        })?;

        debug!("Listed {} application(s)", rows.len());
        Ok(rows)
    }

    async fn create(&self, application: &Application) -> Result<u64, StoreError> {
        debug!(
            "Creating application: company={}, status={}",
            application.company, application.status
        );

        let mut conn = self.connector.connect().await.inspect_err(|e| {
            error!("Error inserting application: {}", e);
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO applications (company, position, application_date, status, notes)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&application.company)
        .bind(&application.position)
        .bind(&application.application_date)
        .bind(application.status.as_str())
        .bind(&application.notes)
        .execute(&mut conn)
        .await;
        self.connector.release(conn).await;

        let rows_affected = result
            .map_err(|e| {
                error!("Error inserting application: {}", e);
                StoreError::Statement(e)
            })?
            .rows_affected();

        info!("Inserted {} application(s).", rows_affected);
        Ok(rows_affected)
    }

    async fn update(&self, id: i64, application: &Application) -> Result<WriteOutcome, StoreError> {
        debug!("Updating application id={}", id);

        let mut conn = self.connector.connect().await.inspect_err(|e| {
            error!("Error updating application: {}", e);
        })?;

        let result = sqlx::query(
            r#"
            UPDATE applications
            SET company = $1, position = $2, application_date = $3, status = $4, notes = $5
            WHERE id = $6
            "#,
        )
        .bind(&application.company)
        .bind(&application.position)
        .bind(&application.application_date)
        .bind(application.status.as_str())
        .bind(&application.notes)
        .bind(id)
        .execute(&mut conn)
        .await;
        self.connector.release(conn).await;

        let rows_affected = result
            .map_err(|e| {
                error!("Error updating application: {}", e);
                StoreError::Statement(e)
            })?
            .rows_affected();

        let outcome = WriteOutcome::from_rows_affected(rows_affected);
        match outcome {
            WriteOutcome::Applied => info!("Application id={} updated", id),
            WriteOutcome::NotFound => warn!("No application found with id={} to update", id),
        }
        Ok(outcome)
    }

    async fn delete(&self, id: i64) -> Result<WriteOutcome, StoreError> {
        debug!("Deleting application id={}", id);

        let mut conn = self.connector.connect().await.inspect_err(|e| {
            error!("Error deleting application: {}", e);
        })?;

        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await;
        self.connector.release(conn).await;

        let rows_affected = result
            .map_err(|e| {
                error!("Error deleting application: {}", e);
                StoreError::Statement(e)
            })?
            .rows_affected();

        let outcome = WriteOutcome::from_rows_affected(rows_affected);
        match outcome {
            WriteOutcome::Applied => info!("Application deleted successfully."),
            WriteOutcome::NotFound => warn!("No application found with id={}", id),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::ensure_schema;
    use crate::tracker::ApplicationStatus;
    use tempfile::TempDir;

    async fn repository() -> (TempDir, ApplicationRepository) {
        let dir = tempfile::tempdir().unwrap();
        let connector = Connector::from_path(dir.path().join("applications.db"));
        ensure_schema(&connector).await.unwrap();
        (dir, ApplicationRepository::new(connector))
    }

    fn application(company: &str, status: ApplicationStatus) -> Application {
        Application {
            company: company.to_string(),
            position: "Engineer".to_string(),
            application_date: "2024-01-15".to_string(),
            status,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (_dir, repo) = repository().await;
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_list_preserves_fields() {
        let (_dir, repo) = repository().await;
        let app = Application {
            notes: "Referred by Sam; follow up Friday".to_string(),
            ..application("Acme", ApplicationStatus::Applied)
        };

        assert_eq!(repo.create(&app).await.unwrap(), 1);

        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert!(row.id > 0);
        assert_eq!(row.company, "Acme");
        assert_eq!(row.position, "Engineer");
        assert_eq!(row.application_date, "2024-01-15");
        assert_eq!(row.status, "Applied");
        assert_eq!(row.notes, "Referred by Sam; follow up Friday");
    }

    #[tokio::test]
    async fn list_is_in_insertion_order() {
        let (_dir, repo) = repository().await;
        for company in ["Acme", "Globex", "Initech"] {
            repo.create(&application(company, ApplicationStatus::Applied))
                .await
                .unwrap();
        }

        let rows = repo.list().await.unwrap();
        let companies: Vec<&str> = rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(companies, ["Acme", "Globex", "Initech"]);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (_dir, repo) = repository().await;
        repo.create(&application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        let first = repo.list().await.unwrap()[0].id;

        repo.delete(first).await.unwrap();
        repo.create(&application("Globex", ApplicationStatus::Applied))
            .await
            .unwrap();

        let second = repo.list().await.unwrap()[0].id;
        assert!(second > first);
    }

    #[tokio::test]
    async fn update_touches_only_the_target_row() {
        let (_dir, repo) = repository().await;
        repo.create(&application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        repo.create(&application("Globex", ApplicationStatus::Applied))
            .await
            .unwrap();
        let before = repo.list().await.unwrap();
        let target = before[0].id;

        let changed = Application {
            company: "Acme Corp".to_string(),
            position: "Staff Engineer".to_string(),
            application_date: "2024-02-01".to_string(),
            status: ApplicationStatus::Interviewed,
            notes: "Onsite next week".to_string(),
        };
        assert_eq!(
            repo.update(target, &changed).await.unwrap(),
            WriteOutcome::Applied
        );

        let after = repo.list().await.unwrap();
        let updated: Vec<_> = after.iter().filter(|r| r.id == target).collect();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].company, "Acme Corp");
        assert_eq!(updated[0].position, "Staff Engineer");
        assert_eq!(updated[0].application_date, "2024-02-01");
        assert_eq!(updated[0].status, "Interviewed");
        assert_eq!(updated[0].notes, "Onsite next week");
        assert_eq!(after[1], before[1]);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let (_dir, repo) = repository().await;
        repo.create(&application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        let before = repo.list().await.unwrap();

        let outcome = repo
            .update(9_999, &application("Ghost", ApplicationStatus::Rejected))
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::NotFound);
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let (_dir, repo) = repository().await;
        for company in ["Acme", "Globex"] {
            repo.create(&application(company, ApplicationStatus::Applied))
                .await
                .unwrap();
        }
        let rows = repo.list().await.unwrap();

        assert_eq!(repo.delete(rows[0].id).await.unwrap(), WriteOutcome::Applied);

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![rows[1].clone()]);
    }

    #[tokio::test]
    async fn delete_of_missing_id_changes_nothing() {
        let (_dir, repo) = repository().await;
        repo.create(&application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        let before = repo.list().await.unwrap();

        assert_eq!(repo.delete(12_345).await.unwrap(), WriteOutcome::NotFound);
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn null_notes_read_back_as_empty() {
        let (dir, repo) = repository().await;
        let connector = Connector::from_path(dir.path().join("applications.db"));
        let mut conn = connector.connect().await.unwrap();
        sqlx::query(
            "INSERT INTO applications (company, position, application_date, status, notes) \
             VALUES ('Acme', 'Engineer', '2024-01-15', 'applied', NULL)",
        )
        .execute(&mut conn)
        .await
        .unwrap();
        connector.release(conn).await;

        let rows = repo.list().await.unwrap();
        assert_eq!(rows[0].notes, "");
        assert_eq!(rows[0].status, "applied");
    }

    #[tokio::test]
    async fn missing_table_is_a_statement_fault() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ApplicationRepository::new(Connector::from_path(dir.path().join("bare.db")));

        assert!(matches!(repo.list().await, Err(StoreError::Statement(_))));
        assert!(matches!(repo.delete(1).await, Err(StoreError::Statement(_))));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_connect_fault() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ApplicationRepository::new(Connector::from_path(
            dir.path().join("missing").join("jobs.db"),
        ));

        assert!(matches!(repo.list().await, Err(StoreError::Connect(_))));
        assert!(matches!(
            repo.create(&application("Acme", ApplicationStatus::Applied))
                .await,
            Err(StoreError::Connect(_))
        ));
    }
}
