//! VerseVibe terminal application
//!
//! Terminal client for the VerseVibe manuscript analysis service.

use anyhow::Context;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use versevibe_core::{AnalysisBackend, HttpBackend, WorkflowController};
use versevibe_ui::{App, TerminalGuard};

/// Log file under the platform data directory
fn log_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("versevibe");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("versevibe.log"))
}

/// Initialize logging. The terminal belongs to the UI, so logs go to a file
/// when one can be opened and to stderr otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_path().and_then(|path| File::options().create(true).append(true).open(path).ok()) {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    info!("VerseVibe v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(HttpBackend::from_env().context("could not set up the analysis service")?);
    info!("Analysis service at {}", backend.config().base_url);

    let probe = Arc::clone(&backend);
    tokio::spawn(async move {
        match probe.health().await {
            Ok(health) if health.is_ok() => info!("Service healthy: {}", health.message),
            Ok(health) => warn!("Service reports {}: {}", health.status, health.message),
            Err(e) => warn!("Service health check failed: {}", e),
        }
    });

    let controller = WorkflowController::new(backend);
    let mut app = App::new(controller);

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    app.run(&mut terminal).await.context("terminal event loop failed")
}
