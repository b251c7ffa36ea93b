pub mod models;
pub mod validation;

// Re-export commonly used types
pub use models::{Application, ApplicationStatus, UnknownStatus};
