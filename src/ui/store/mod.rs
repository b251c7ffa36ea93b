//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, FormAction, ViewAction};

use std::sync::Arc;

use super::TrackerApp;
use crate::db::ApplicationStore;

impl<S: ApplicationStore + 'static> TrackerApp<S> {
    /// Reduce an action and start the store commands it asks for.
    ///
    /// Commands run on the tokio runtime; their results come back
    /// through [`TrackerApp::poll`]. Only the reducer touches the state.
    pub fn dispatch(&mut self, action: Action) {
        for command in reducer::reduce(&mut self.state, action) {
            let store = Arc::clone(&self.store);
            let results = self.results_tx.clone();
            self.in_flight += 1;
            tokio::spawn(async move {
                let action = runtime::run(store.as_ref(), command).await;
                // The receiver lives as long as the app
                let _ = results.send(action);
            });
        }
    }

    /// Reduce every command result that has arrived since the last frame
    pub fn poll(&mut self) {
        while let Ok(action) = self.results_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.dispatch(action);
        }
    }

    /// Wait until every command, including follow-ups, has been reduced
    #[cfg(test)]
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some(action) = self.results_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.dispatch(action);
        }
    }
}
