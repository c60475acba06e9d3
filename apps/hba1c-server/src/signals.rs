use tokio::signal;

/// Resolve when Ctrl+C or SIGTERM arrives.
///
/// Signal handler installation failures are logged and that source is
/// treated as never firing, so the server keeps running.
pub async fn shutdown_signal() {
    tokio::select! {
        () = ctrl_c() => tracing::info!("Received Ctrl+C signal"),
        () = sigterm() => tracing::info!("Received SIGTERM signal"),
    }
    tracing::info!("Shutdown signal received, draining in-flight requests");
}

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(%e, "Error handling Ctrl+C signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn sigterm() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut handler) => {
            handler.recv().await;
        }
        Err(e) => {
            tracing::error!(%e, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn sigterm() {
    std::future::pending::<()>().await;
}
