use chrono::NaiveDate;
use thiserror::Error;
use validator::Validate;

use crate::db::ApplicationRow;
use crate::tracker::validation::error_messages;
use crate::tracker::{Application, ApplicationStatus, UnknownStatus};

/// Whether the form adds a new application or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Company,
    Position,
    Date,
    Status,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Company,
        FormField::Position,
        FormField::Date,
        FormField::Status,
        FormField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Company => "Company:",
            FormField::Position => "Position:",
            FormField::Date => "Date (YYYY-MM-DD):",
            FormField::Status => "Status:",
            FormField::Notes => "Notes:",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Status(#[from] UnknownStatus),

    #[error("{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

/// A validated form ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub mode: FormMode,
    pub application: Application,
}

/// The add/edit dialog.
///
/// Submit is gated live: [`ApplicationForm::can_submit`] reflects the
/// current field values after every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    mode: FormMode,
    company: String,
    position: String,
    application_date: String,
    status: ApplicationStatus,
    notes: String,
}

impl ApplicationForm {
    /// Empty form for a new application, dated `today`
    pub fn create(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            company: String::new(),
            position: String::new(),
            application_date: today.format("%Y-%m-%d").to_string(),
            status: ApplicationStatus::Applied,
            notes: String::new(),
        }
    }

    /// Form pre-filled from a table row.
    /// Unrecognised stored statuses fall back to `Applied`.
    pub fn edit(row: &ApplicationRow) -> Self {
        Self {
            mode: FormMode::Edit { id: row.id },
            company: row.company.clone(),
            position: row.position.clone(),
            application_date: row.application_date.clone(),
            status: row.status.parse().unwrap_or_default(),
            notes: row.notes.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Application",
            FormMode::Edit { .. } => "Edit Application",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Submit",
            FormMode::Edit { .. } => "Save Changes",
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Company => &self.company,
            FormField::Position => &self.position,
            FormField::Date => &self.application_date,
            FormField::Status => self.status.as_str(),
            FormField::Notes => &self.notes,
        }
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn set(&mut self, field: FormField, text: &str) -> Result<(), FormError> {
        match field {
            FormField::Company => self.company = text.to_string(),
            FormField::Position => self.position = text.to_string(),
            FormField::Date => self.application_date = text.to_string(),
            FormField::Status => self.status = text.parse()?,
            FormField::Notes => self.notes = text.to_string(),
        }
        Ok(())
    }

    /// Current values, trimmed, as an unvalidated application
    pub fn draft(&self) -> Application {
        Application {
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            application_date: self.application_date.trim().to_string(),
            status: self.status,
            notes: self.notes.trim().to_string(),
        }
    }

    /// Reasons submit is currently disabled; empty when it is enabled
    pub fn problems(&self) -> Vec<String> {
        match self.draft().validate() {
            Ok(()) => Vec::new(),
            Err(errors) => error_messages(&errors),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.draft().validate().is_ok()
    }

    pub fn submit(&self) -> Result<Submission, FormError> {
        let application = self.draft();
        application
            .validate()
            .map_err(|errors| FormError::Invalid(error_messages(&errors)))?;

        Ok(Submission {
            mode: self.mode,
            application,
        })
    }
}
