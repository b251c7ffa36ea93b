use tracing::{error, info};

/// Resolves on the first shutdown signal.
///
/// Listens for:
/// - CTRL+C
/// - SIGTERM (Unix only)
///
/// If a handler cannot be installed the failure is logged and that signal
/// is never reported, so the window stays open until the user closes it.
pub async fn signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM signal handler: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received CTRL+C signal, closing tracker...");
        }
        _ = terminate => {
            info!("Received SIGTERM signal, closing tracker...");
        }
    }
}
