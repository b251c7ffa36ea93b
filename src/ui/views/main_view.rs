use chrono::NaiveDate;
use eframe::egui;

use crate::db::ApplicationRow;
use crate::ui::app::WINDOW_TITLE;
use crate::ui::state::{MainView, StatusFilter};
use crate::ui::store::{Action, ViewAction};

const HEADERS: [&str; 5] = ["Company", "Position", "Date", "Status", "Notes"];
const NOTES_WIDTH: usize = 40;

/// Table cell text: single line, notes cut to a readable width.
/// The id is never shown.
fn cells(row: &ApplicationRow) -> [String; 5] {
    [
        single_line(&row.company),
        single_line(&row.position),
        single_line(&row.application_date),
        single_line(&row.status),
        truncate(&single_line(&row.notes), NOTES_WIDTH),
    ]
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn empty_message(filter: StatusFilter) -> String {
    match filter {
        StatusFilter::All => "No applications yet. Click \"Add Application\" to create one.".to_string(),
        StatusFilter::Only(status) => format!("No applications with status {}.", status),
    }
}

/// Title, status filter and the add/delete buttons
pub(crate) fn render_toolbar(
    ui: &mut egui::Ui,
    view: &MainView,
    busy: bool,
    today: NaiveDate,
    actions: &mut Vec<Action>,
) {
    ui.horizontal(|ui| {
        ui.heading(WINDOW_TITLE);
        ui.separator();

        ui.label("Filter by status:");
        let current = view.filter();
        let mut chosen = current;
        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for option in StatusFilter::OPTIONS {
                    ui.selectable_value(&mut chosen, option, option.label());
                }
            });
        if chosen != current {
            actions.push(ViewAction::SetFilter(chosen).into());
        }

        if ui.button("Refresh").clicked() {
            actions.push(ViewAction::Refresh.into());
        }
        if ui.button("Add Application").clicked() {
            actions.push(ViewAction::OpenCreateForm { today }.into());
        }
        if ui.button("Delete Selected").clicked() {
            actions.push(ViewAction::DeleteSelected.into());
        }

        if busy {
            ui.spinner();
        }
    });
}

/// The application table. Click selects a row, double-click opens it for
/// editing.
pub(crate) fn render_table(ui: &mut egui::Ui, view: &MainView, actions: &mut Vec<Action>) {
    if let Some(reason) = view.load_error() {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, format!("Database unavailable: {}", reason));
        return;
    }

    if view.rows().is_empty() {
        ui.label(empty_message(view.filter()));
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("applications")
            .num_columns(HEADERS.len())
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in HEADERS {
                    ui.strong(header);
                }
                ui.end_row();

                for (index, row) in view.rows().iter().enumerate() {
                    let selected = view.selected() == Some(index);
                    for cell in cells(row) {
                        let response = ui.selectable_label(selected, cell);
                        if response.double_clicked() {
                            actions.push(ViewAction::Activate(index).into());
                        } else if response.clicked() {
                            actions.push(ViewAction::Select(index).into());
                        }
                    }
                    ui.end_row();
                }
            });
    });
}
