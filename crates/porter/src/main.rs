mod app;
mod error;
mod handlers;
mod state;

use std::future::IntoFuture;
use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use porter_auth::{AuthConfig, AuthState, InMemorySessionStore};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, state::AppState};

/// How long in-flight requests may run after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Porter - Sign in with Google and keep a browser session
#[derive(Parser, Debug)]
#[command(name = "porter")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "4949", env = "APP_PORT")]
    port: u16,

    /// Directory static assets are served from
    #[arg(long, default_value = "www", env = "ASSETS_DIR")]
    assets_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "porter=debug,porter_auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One session store for the life of the process
    let sessions = Arc::new(InMemorySessionStore::new());
    let auth_config = AuthConfig::from_env()?;
    let auth = AuthState::with_google(sessions, auth_config)?;

    let state = AppState::new(auth, cli.assets_dir);
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on http://{}", listener.local_addr()?);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    tokio::select! {
        result = server.into_future() => result?,
        _ = drain_deadline(shutdown_rx) => {
            tracing::warn!(
                grace = ?SHUTDOWN_GRACE,
                "in-flight requests still running, forcing shutdown"
            );
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves `SHUTDOWN_GRACE` after the shutdown signal fires.
async fn drain_deadline(shutdown: oneshot::Receiver<()>) {
    match shutdown.await {
        Ok(()) => tokio::time::sleep(SHUTDOWN_GRACE).await,
        // The server finished on its own.
        Err(_) => std::future::pending().await,
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
