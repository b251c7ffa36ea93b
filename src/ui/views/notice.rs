use eframe::egui;

use crate::ui::state::Notice;
use crate::ui::store::Action;

fn title(notice: &Notice) -> &'static str {
    match notice {
        Notice::Info(_) => "Information",
        Notice::Warning(_) => "Warning",
        Notice::Error(_) => "Error",
    }
}

/// Message dialog; OK, Enter or Escape dismisses it
pub(crate) fn render_notice_window(ctx: &egui::Context, notice: &Notice, actions: &mut Vec<Action>) {
    let mut dismissed = false;

    egui::Window::new(title(notice))
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let color = match notice {
                Notice::Info(_) => ui.visuals().text_color(),
                Notice::Warning(_) => ui.visuals().warn_fg_color,
                Notice::Error(_) => ui.visuals().error_fg_color,
            };
            for line in notice.text().lines() {
                ui.colored_label(color, line);
            }
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        dismissed = true;
    }
    if dismissed {
        actions.push(Action::DismissNotice);
    }
}
