use chrono::Local;
use eframe::egui;
use std::time::Duration;
use tracing::info;

use super::store::Action;
use super::views;
use super::TrackerApp;
use crate::db::ApplicationStore;
use crate::shutdown;

pub const WINDOW_TITLE: &str = "Job Application Tracker";

/// How often to look for store results while commands are running
const RESULT_POLL: Duration = Duration::from_millis(50);

/// Close the window on CTRL+C or SIGTERM
pub fn close_on_shutdown_signal(ctx: egui::Context) {
    tokio::spawn(async move {
        shutdown::signal().await;
        info!("Closing tracker window");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    });
}

impl<S: ApplicationStore + 'static> TrackerApp<S> {
    /// Draw one frame and apply whatever the user did in it
    pub fn show(&mut self, ctx: &egui::Context) {
        self.poll();
        if self.is_busy() {
            ctx.request_repaint_after(RESULT_POLL);
        }

        let busy = self.is_busy();
        let today = Local::now().date_naive();
        let state = self.state();
        let notice = state.current_notice();
        // Forms and dialogs are modal; a running store call locks everything
        let form_enabled = !busy && notice.is_none();
        let main_enabled = form_enabled && state.form.is_none();
        let mut actions: Vec<Action> = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(main_enabled, |ui| {
                views::render_toolbar(ui, &state.view, busy, today, &mut actions);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(main_enabled, |ui| {
                views::render_table(ui, &state.view, &mut actions);
            });
        });

        if let Some(form) = &state.form {
            views::render_form_window(ctx, form, form_enabled, &mut actions);
        }

        if let Some(notice) = notice {
            views::render_notice_window(ctx, notice, &mut actions);
        }

        for action in actions {
            self.dispatch(action);
        }
    }
}

impl<S: ApplicationStore + 'static> eframe::App for TrackerApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ApplicationRow, StoreError, WriteOutcome};
    use crate::tracker::Application;
    use crate::ui::form::FormField;
    use crate::ui::store::{FormAction, ViewAction};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct EmptyStore;

    #[async_trait]
    impl ApplicationStore for EmptyStore {
        async fn list(&self) -> Result<Vec<ApplicationRow>, StoreError> {
            Ok(Vec::new())
        }

        async fn create(&self, _application: &Application) -> Result<u64, StoreError> {
            Ok(1)
        }

        async fn update(
            &self,
            _id: i64,
            _application: &Application,
        ) -> Result<WriteOutcome, StoreError> {
            Ok(WriteOutcome::Applied)
        }

        async fn delete(&self, _id: i64) -> Result<WriteOutcome, StoreError> {
            Ok(WriteOutcome::Applied)
        }
    }

    fn frame(ctx: &egui::Context, app: &mut TrackerApp<EmptyStore>, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn escape() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn open_form(app: &mut TrackerApp<EmptyStore>) {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        app.dispatch(ViewAction::OpenCreateForm { today }.into());
    }

    #[test]
    fn escape_cancels_the_form() {
        let ctx = egui::Context::default();
        let mut app = TrackerApp::new(EmptyStore);
        open_form(&mut app);
        app.dispatch(FormAction::Edit(FormField::Company, "Acme".into()).into());

        frame(&ctx, &mut app, Vec::new());
        assert!(app.state().form.is_some());

        frame(&ctx, &mut app, vec![escape()]);
        assert!(app.state().form.is_none());
        assert!(!app.is_busy());
    }

    #[test]
    fn escape_dismisses_a_notice_before_the_form() {
        let ctx = egui::Context::default();
        let mut app = TrackerApp::new(EmptyStore);
        open_form(&mut app);
        // Blank required fields: warning dialog over the form
        app.dispatch(FormAction::Submit.into());
        assert!(app.state().current_notice().is_some());

        frame(&ctx, &mut app, vec![escape()]);
        assert!(app.state().current_notice().is_none());
        assert!(app.state().form.is_some());

        frame(&ctx, &mut app, vec![escape()]);
        assert!(app.state().form.is_none());
    }
}
