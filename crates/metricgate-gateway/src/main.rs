//! metricgate gateway
//!
//! HTTP -> statsd bridge:
//! - `/{gauge,count,histogram,set}/<metric>` with the value as request body
//! - config from environment, validated before the listener binds
//! - forwards to the local statsd agent over UDP

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metricgate_core::error::{MetricGateError, Result};
use metricgate_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "metricgate-gateway exiting");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.listen_addrs()?;

    tracing::info!(
        namespace = %cfg.namespace,
        tags = ?cfg.tags,
        listen = %cfg.listen,
        statsd = %cfg.statsd_addr,
        "metricgate-gateway starting"
    );
    match &cfg.whitelist {
        Some(w) => {
            tracing::info!(count = w.len(), "whitelisted metrics:");
            for name in w.sorted() {
                tracing::info!(" - {name}");
            }
        }
        None => tracing::info!("whitelist: <all allowed>"),
    }

    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen.as_slice())
        .await
        .map_err(|e| MetricGateError::Internal(format!("failed to bind {listen:?}: {e}")))?;
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MetricGateError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
