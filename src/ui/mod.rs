//! Desktop front end: table view, modal add/edit form, reducer store.

pub mod app;
pub mod form;
pub mod state;
pub mod store;
mod views;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::db::ApplicationStore;
use state::AppState;
use store::Action;

/// The tracker window: UI state plus the store it reads and writes
pub struct TrackerApp<S> {
    store: Arc<S>,
    state: AppState,
    /// Results of store commands still to be reduced
    results_tx: mpsc::UnboundedSender<Action>,
    results_rx: mpsc::UnboundedReceiver<Action>,
    in_flight: usize,
}

impl<S: ApplicationStore + 'static> TrackerApp<S> {
    pub fn new(store: S) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            store: Arc::new(store),
            state: AppState::default(),
            results_tx,
            results_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// True while a store command has not reported back
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    #[cfg(test)]
    pub fn take_notices(&mut self) -> Vec<state::Notice> {
        self.state.take_notices()
    }
}
