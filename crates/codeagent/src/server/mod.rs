mod cli;
mod demo;
mod manager;
mod routes;

pub use cli::App;
use routes::router;

use crate::prelude::{eprintln, *};
use cli::Config;
use demo::DemoEngine;
use manager::ServerManager;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared state behind every handler
#[derive(Debug)]
pub struct AppState {
    pub manager: ServerManager,
    pub engine: DemoEngine,
    pub frontend: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            manager: ServerManager::new(config.delays.startup),
            engine: DemoEngine::new(config.delays),
            frontend: config.frontend.clone(),
        }
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = Config::from(&app);

    log::info!("Starting Enhanced CodeAgent Production Platform v2.0...");
    if global.verbose {
        eprintln!("Listening on http://{}", config.addr);
        eprintln!("Frontend: {}", config.frontend.display());
        eprintln!("Status endpoint: http://{}/api/v2/status", config.addr);
    }

    let state = Arc::new(AppState::new(&config));
    let app_router = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", config.addr, e))?;
    log::info!("Listening on http://{}", config.addr);

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
