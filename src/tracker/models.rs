use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use super::validation::{not_blank, APPLICATION_DATE};

/// Where an application currently stands
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewed,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// All statuses in the order they are offered to the user
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewed,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    /// Text stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interviewed => "Interviewed",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    /// Case-insensitive comparison against stored status text
    pub fn matches(&self, stored: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(stored)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status '{0}' (expected Applied, Interviewed, Rejected or Accepted)")]
pub struct UnknownStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.matches(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Application model for creating, updating and validating records.
///
/// Carries no id: the store assigns one on insert and updates are keyed
/// by the id of the row being edited.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Validate)]
pub struct Application {
    #[validate(custom(function = "not_blank"))]
    pub company: String,
    #[validate(custom(function = "not_blank"))]
    pub position: String,
    /// `YYYY-MM-DD`, checked for shape only
    #[validate(regex(path = *APPLICATION_DATE, message = "Please enter date as YYYY-MM-DD."))]
    pub application_date: String,
    pub status: ApplicationStatus,
    pub notes: String,
}
