use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;

mod cli;
mod config;
mod db;
mod logging;
mod shutdown;
mod tracker;
mod ui;

use crate::cli::{Cli, Command};
use crate::db::{ApplicationRepository, ApplicationStore, Connector};
use crate::ui::store::ViewAction;
use crate::ui::TrackerApp;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Environment first, then command-line overrides
    let config = config::Config::from_env()
        .context("Failed to load configuration")?
        .with_overrides(&cli);

    std::fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create log directory {}", config.log_dir.display())
    })?;
    logging::init(&config.log_dir).context("Failed to initialise logging")?;

    info!("Starting job-tracker");
    info!("  - Database: {}", config.database_url);
    info!("  - Log directory: {}", config.log_dir.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let connector = Connector::from_url(&config.database_url)
        .context("Failed to read database configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Check => {
            runtime
                .block_on(db::health::ping(&connector))
                .context("Database health check failed")?;
            println!("database: connected");
        }
        Command::Export => {
            let rows = runtime.block_on(async {
                db::schema::ensure_schema(&connector)
                    .await
                    .context("Failed to prepare database schema")?;
                ApplicationRepository::new(connector)
                    .list()
                    .await
                    .context("Failed to read applications")
            })?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Run => {
            runtime
                .block_on(db::schema::ensure_schema(&connector))
                .context("Failed to prepare database schema")?;

            // Store commands are spawned from the UI thread
            let _guard = runtime.enter();
            let mut app = TrackerApp::new(ApplicationRepository::new(connector));
            app.dispatch(ViewAction::Refresh.into());

            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([960.0, 600.0])
                    .with_title(ui::app::WINDOW_TITLE),
                ..Default::default()
            };
            eframe::run_native(
                ui::app::WINDOW_TITLE,
                options,
                Box::new(|cc| {
                    ui::app::close_on_shutdown_signal(cc.egui_ctx.clone());
                    Ok(Box::new(app))
                }),
            )
            .map_err(|e| anyhow::anyhow!("Tracker window failed: {}", e))?;
        }
    }

    info!("job-tracker exited");
    Ok(())
}
