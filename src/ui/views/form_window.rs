use eframe::egui;

use crate::tracker::ApplicationStatus;
use crate::ui::form::{ApplicationForm, FormField};
use crate::ui::store::{Action, FormAction};

const FIELD_WIDTH: f32 = 280.0;

fn text_field(
    ui: &mut egui::Ui,
    form: &ApplicationForm,
    field: FormField,
    actions: &mut Vec<Action>,
) {
    let mut text = form.value(field).to_string();
    let editor = match field {
        FormField::Notes => egui::TextEdit::multiline(&mut text).desired_rows(4),
        _ => egui::TextEdit::singleline(&mut text),
    };
    if ui.add(editor.desired_width(FIELD_WIDTH)).changed() {
        actions.push(FormAction::Edit(field, text).into());
    }
}

fn status_choice(ui: &mut egui::Ui, form: &ApplicationForm, actions: &mut Vec<Action>) {
    let current = form.status();
    let mut chosen = current;
    egui::ComboBox::from_id_salt("application_status")
        .selected_text(current.as_str())
        .show_ui(ui, |ui| {
            for status in ApplicationStatus::ALL {
                ui.selectable_value(&mut chosen, status, status.as_str());
            }
        });
    if chosen != current {
        actions.push(FormAction::Edit(FormField::Status, chosen.as_str().to_string()).into());
    }
}

/// The modal add/edit form.
///
/// Submit stays disabled until the current values validate. Escape
/// cancels.
pub(crate) fn render_form_window(
    ctx: &egui::Context,
    form: &ApplicationForm,
    interactive: bool,
    actions: &mut Vec<Action>,
) {
    egui::Window::new(form.title())
        .id(egui::Id::new("application_form"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                egui::Grid::new("application_form_fields")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        for field in FormField::ALL {
                            ui.label(field.label());
                            match field {
                                FormField::Status => status_choice(ui, form, actions),
                                _ => text_field(ui, form, field, actions),
                            }
                            ui.end_row();
                        }
                    });

                let can_submit = form.can_submit();
                if !can_submit {
                    ui.add_space(6.0);
                    let color = ui.visuals().warn_fg_color;
                    for problem in form.problems() {
                        ui.colored_label(color, problem);
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        actions.push(FormAction::Cancel.into());
                    }
                    let submit = egui::Button::new(form.submit_label());
                    if ui.add_enabled(can_submit, submit).clicked() {
                        actions.push(FormAction::Submit.into());
                    }
                });
            });
        });

    if interactive && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        actions.push(FormAction::Cancel.into());
    }
}
