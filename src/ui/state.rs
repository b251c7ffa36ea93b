use std::str::FromStr;

use super::form::ApplicationForm;
use crate::db::ApplicationRow;
use crate::tracker::{ApplicationStatus, UnknownStatus};

/// Which rows the table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    /// Choices offered by the filter control, in order
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(ApplicationStatus::Applied),
        StatusFilter::Only(ApplicationStatus::Interviewed),
        StatusFilter::Only(ApplicationStatus::Rejected),
        StatusFilter::Only(ApplicationStatus::Accepted),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, row: &ApplicationRow) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => status.matches(&row.status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// A message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Warning(text) | Notice::Error(text) => text,
        }
    }
}

/// In-memory mirror of the last listing, after filtering.
///
/// Row indexes are positions in [`MainView::rows`]; ids stay attached to
/// each row for addressing but are never displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainView {
    rows: Vec<ApplicationRow>,
    filter: StatusFilter,
    selected: Option<usize>,
    load_error: Option<String>,
}

impl MainView {
    pub fn rows(&self) -> &[ApplicationRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ApplicationRow> {
        self.rows.get(index)
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row together with its index
    pub fn selected_row(&self) -> Option<(usize, &ApplicationRow)> {
        let index = self.selected?;
        self.rows.get(index).map(|row| (index, row))
    }

    /// Set when the last listing failed, so an empty table can be told
    /// apart from an unreachable database
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Rebuild the mirror from a fresh listing
    pub fn replace_rows(&mut self, records: Vec<ApplicationRow>) {
        let filter = self.filter;
        self.rows = records.into_iter().filter(|row| filter.matches(row)).collect();
        self.selected = None;
        self.load_error = None;
    }

    pub fn mark_unavailable(&mut self, reason: String) {
        self.rows.clear();
        self.selected = None;
        self.load_error = Some(reason);
    }

    /// Returns false when there is no row at `index`; the previous
    /// selection is dropped either way
    pub fn select(&mut self, index: usize) -> bool {
        self.selected = (index < self.rows.len()).then_some(index);
        self.selected.is_some()
    }

    pub fn remove_row(&mut self, index: usize) -> Option<ApplicationRow> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(removed)
    }
}

/// Everything the tracker UI shows
#[derive(Debug, Default)]
pub struct AppState {
    pub view: MainView,
    /// The open modal form, if any
    pub form: Option<ApplicationForm>,
    /// Pending dialogs, oldest first
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// The dialog currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }

    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }

    #[cfg(test)]
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, company: &str, status: &str) -> ApplicationRow {
        ApplicationRow {
            id,
            company: company.to_string(),
            position: "Engineer".to_string(),
            application_date: "2024-01-15".to_string(),
            status: status.to_string(),
            notes: String::new(),
        }
    }

    fn sample() -> Vec<ApplicationRow> {
        vec![
            row(1, "Acme", "Applied"),
            row(2, "Globex", "Rejected"),
            row(3, "Initech", "rejected"),
            row(4, "Umbrella", "Accepted"),
            row(5, "Hooli", " Rejected"),
        ]
    }

    #[test]
    fn all_filter_keeps_everything() {
        let mut view = MainView::default();
        view.replace_rows(sample());
        assert_eq!(view.rows(), sample().as_slice());
    }

    #[test]
    fn status_filter_is_case_insensitive() {
        let mut view = MainView::default();
        view.set_filter("Rejected".parse().unwrap());
        view.replace_rows(sample());

        let ids: Vec<i64> = view.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn filter_parses_all_and_statuses() {
        assert_eq!("ALL".parse(), Ok(StatusFilter::All));
        assert_eq!(
            "accepted".parse(),
            Ok(StatusFilter::Only(ApplicationStatus::Accepted))
        );
        assert!("pending".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::All.label(), "All");
        assert_eq!(
            StatusFilter::Only(ApplicationStatus::Interviewed).label(),
            "Interviewed"
        );
    }

    #[test]
    fn reload_clears_selection_and_error() {
        let mut view = MainView::default();
        view.mark_unavailable("database is locked".to_string());
        assert_eq!(view.load_error(), Some("database is locked"));

        view.replace_rows(sample());
        assert!(view.select(1));
        view.replace_rows(sample());

        assert_eq!(view.selected(), None);
        assert_eq!(view.load_error(), None);
    }

    #[test]
    fn selection_must_point_at_a_row() {
        let mut view = MainView::default();
        view.replace_rows(sample());
        assert!(!view.select(5));
        assert!(view.select(3));
        assert_eq!(view.selected_row().map(|(i, r)| (i, r.id)), Some((3, 4)));
    }

    #[test]
    fn failed_selection_clears_the_previous_one() {
        let mut view = MainView::default();
        view.replace_rows(sample());
        assert!(view.select(0));

        assert!(!view.select(9));
        assert_eq!(view.selected(), None);
        assert!(view.selected_row().is_none());
    }

    #[test]
    fn removing_rows_keeps_selection_consistent() {
        let mut view = MainView::default();
        view.replace_rows(sample());
        view.select(2);

        assert_eq!(view.remove_row(0).map(|r| r.id), Some(1));
        assert_eq!(view.selected_row().map(|(_, r)| r.id), Some(3));

        assert_eq!(view.remove_row(1).map(|r| r.id), Some(3));
        assert_eq!(view.selected(), None);
        assert_eq!(view.remove_row(7), None);
    }

    #[test]
    fn notices_are_shown_oldest_first() {
        let mut state = AppState::default();
        state.notify(Notice::Error("Could not load applications".to_string()));
        state.notify(Notice::Info("Application added!".to_string()));

        assert_eq!(state.current_notice().map(Notice::text), Some("Could not load applications"));
        state.dismiss_notice();
        assert_eq!(state.current_notice().map(Notice::text), Some("Application added!"));
        state.dismiss_notice();
        state.dismiss_notice();
        assert_eq!(state.current_notice(), None);
    }

    #[test]
    fn filter_options_start_with_all() {
        assert_eq!(StatusFilter::OPTIONS[0], StatusFilter::All);
        let labels: Vec<&str> = StatusFilter::OPTIONS.iter().map(StatusFilter::label).collect();
        assert_eq!(labels, ["All", "Applied", "Interviewed", "Rejected", "Accepted"]);
    }

    #[test]
    fn notices_are_drained_once() {
        let mut state = AppState::default();
        state.notify(Notice::Info("Application added!".to_string()));
        assert_eq!(state.take_notices().len(), 1);
        assert!(state.take_notices().is_empty());
    }
}
