use serde::Serialize;
use sqlx::FromRow;

/// Database representation of an application with all fields.
///
/// `status` is kept as stored text so rows written by other tools still
/// load; matching against [`crate::tracker::ApplicationStatus`] is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ApplicationRow {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub application_date: String,
    pub status: String,
    pub notes: String,
}
