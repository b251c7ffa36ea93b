use tracing::debug;

use super::action::{Action, AsyncAction};
use super::command::Command;
use crate::db::{ApplicationStore, WriteOutcome};
use crate::ui::form::FormMode;

/// Execute one command against the store and report the result as an action
pub async fn run<S>(store: &S, command: Command) -> Action
where
    S: ApplicationStore + ?Sized,
{
    debug!("Running command: {:?}", command);

    let action = match command {
        Command::LoadRecords => AsyncAction::RecordsLoaded(store.list().await),
        Command::CreateRecord(application) => AsyncAction::Saved {
            mode: FormMode::Create,
            result: store
                .create(&application)
                .await
                .map(WriteOutcome::from_rows_affected),
        },
        Command::UpdateRecord { id, application } => AsyncAction::Saved {
            mode: FormMode::Edit { id },
            result: store.update(id, &application).await,
        },
        Command::DeleteRecord { id, index } => AsyncAction::Deleted {
            id,
            index,
            result: store.delete(id).await,
        },
    };

    Action::Async(action)
}
