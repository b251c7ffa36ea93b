use super::action::{Action, AsyncAction, FormAction, ViewAction};
use super::command::Command;
use crate::db::{ApplicationRow, StoreError, WriteOutcome};
use crate::ui::form::{ApplicationForm, FormMode};
use crate::ui::state::{AppState, Notice};

const FORM_OPEN: &str = "Finish or cancel the open form first.";

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::View(action) => reduce_view(state, action),
        Action::Form(action) => reduce_form(state, action),
        Action::Async(action) => reduce_async(state, action),
        Action::DismissNotice => {
            state.dismiss_notice();
            Vec::new()
        }
    }
}

fn reduce_view(state: &mut AppState, action: ViewAction) -> Vec<Command> {
    // The form is modal
    if state.form.is_some() {
        state.notify(Notice::Warning(FORM_OPEN.into()));
        return Vec::new();
    }

    match action {
        ViewAction::Refresh => vec![Command::LoadRecords],
        ViewAction::SetFilter(filter) => {
            state.view.set_filter(filter);
            vec![Command::LoadRecords]
        }
        ViewAction::Select(index) => {
            if !state.view.select(index) {
                state.notify(Notice::Warning(no_such_row(index)));
            }
            Vec::new()
        }
        ViewAction::Activate(index) => {
            match state.view.row(index).map(ApplicationForm::edit) {
                Some(form) => {
                    state.view.select(index);
                    state.form = Some(form);
                }
                None => state.notify(Notice::Warning(no_such_row(index))),
            }
            Vec::new()
        }
        ViewAction::OpenCreateForm { today } => {
            state.form = Some(ApplicationForm::create(today));
            Vec::new()
        }
        ViewAction::DeleteSelected => {
            let Some((index, row)) = state.view.selected_row() else {
                state.notify(Notice::Info("Select a row to delete.".into()));
                return Vec::new();
            };
            vec![Command::DeleteRecord { id: row.id, index }]
        }
    }
}

fn reduce_form(state: &mut AppState, action: FormAction) -> Vec<Command> {
    let Some(form) = state.form.as_mut() else {
        return Vec::new();
    };

    match action {
        FormAction::Edit(field, text) => {
            if let Err(e) = form.set(field, &text) {
                state.notify(Notice::Warning(e.to_string()));
            }
            Vec::new()
        }
        FormAction::Submit => match form.submit() {
            Ok(submission) => match submission.mode {
                FormMode::Create => vec![Command::CreateRecord(submission.application)],
                FormMode::Edit { id } => vec![Command::UpdateRecord {
                    id,
                    application: submission.application,
                }],
            },
            Err(e) => {
                state.notify(Notice::Warning(e.to_string()));
                Vec::new()
            }
        },
        FormAction::Cancel => {
            state.form = None;
            Vec::new()
        }
    }
}

fn reduce_async(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::RecordsLoaded(result) => {
            records_loaded(state, result);
            Vec::new()
        }
        AsyncAction::Saved { mode, result } => saved(state, mode, result),
        AsyncAction::Deleted { id, index, result } => deleted(state, id, index, result),
    }
}

fn records_loaded(state: &mut AppState, result: Result<Vec<ApplicationRow>, StoreError>) {
    match result {
        Ok(records) => state.view.replace_rows(records),
        Err(e) => {
            state.view.mark_unavailable(e.to_string());
            state.notify(Notice::Error(format!("Could not load applications: {}", e)));
        }
    }
}

fn saved(
    state: &mut AppState,
    mode: FormMode,
    result: Result<WriteOutcome, StoreError>,
) -> Vec<Command> {
    let notice = match (mode, result) {
        (_, Err(e)) => {
            // Keep the form open so the user can retry
            state.notify(Notice::Error(format!("Could not save application: {}", e)));
            return Vec::new();
        }
        (FormMode::Create, Ok(_)) => Notice::Info("Application added!".into()),
        (FormMode::Edit { .. }, Ok(WriteOutcome::Applied)) => {
            Notice::Info("Application updated!".into())
        }
        (FormMode::Edit { .. }, Ok(WriteOutcome::NotFound)) => {
            Notice::Info("That application no longer exists.".into())
        }
    };

    state.notify(notice);
    state.form = None;
    vec![Command::LoadRecords]
}

fn deleted(
    state: &mut AppState,
    id: i64,
    index: usize,
    result: Result<WriteOutcome, StoreError>,
) -> Vec<Command> {
    match result {
        Ok(WriteOutcome::Applied) => {
            if state.view.row(index).map(|row| row.id) == Some(id) {
                state.view.remove_row(index);
                state.notify(Notice::Info("Application deleted.".into()));
                Vec::new()
            } else {
                // Table changed underneath us; resync instead of guessing
                state.notify(Notice::Info("Application deleted.".into()));
                vec![Command::LoadRecords]
            }
        }
        Ok(WriteOutcome::NotFound) => {
            state.notify(Notice::Info("No application found with that ID.".into()));
            vec![Command::LoadRecords]
        }
        Err(e) => {
            state.notify(Notice::Error(format!("Could not delete application: {}", e)));
            Vec::new()
        }
    }
}

fn no_such_row(index: usize) -> String {
    format!("There is no row {}.", index + 1)
}
