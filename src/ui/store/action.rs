use chrono::NaiveDate;

use crate::db::{ApplicationRow, StoreError, WriteOutcome};
use crate::ui::form::{FormField, FormMode};
use crate::ui::state::StatusFilter;

#[derive(Debug)]
pub enum Action {
    View(ViewAction),
    Form(FormAction),
    Async(AsyncAction),
    /// Acknowledge the dialog on top
    DismissNotice,
}

/// Main window interactions
#[derive(Debug)]
pub enum ViewAction {
    Refresh,
    SetFilter(StatusFilter),
    Select(usize),
    /// Double-activation of a row: open it for editing
    Activate(usize),
    OpenCreateForm { today: NaiveDate },
    DeleteSelected,
}

/// Interactions with the open modal form
#[derive(Debug)]
pub enum FormAction {
    Edit(FormField, String),
    Submit,
    Cancel,
}

/// Store results fed back into the state
#[derive(Debug)]
pub enum AsyncAction {
    RecordsLoaded(Result<Vec<ApplicationRow>, StoreError>),
    Saved {
        mode: FormMode,
        result: Result<WriteOutcome, StoreError>,
    },
    Deleted {
        id: i64,
        index: usize,
        result: Result<WriteOutcome, StoreError>,
    },
}

impl From<ViewAction> for Action {
    fn from(action: ViewAction) -> Self {
        Action::View(action)
    }
}

impl From<FormAction> for Action {
    fn from(action: FormAction) -> Self {
        Action::Form(action)
    }
}
