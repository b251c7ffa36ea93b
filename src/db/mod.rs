//! SQLite persistence for job applications.

pub mod application_repository;
pub mod connection;
pub mod error;
pub mod health;
pub mod models;
pub mod schema;

pub use application_repository::{ApplicationRepository, ApplicationStore, WriteOutcome};
pub use connection::Connector;
pub use error::StoreError;
pub use models::ApplicationRow;
