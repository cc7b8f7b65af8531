use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the HTTP API server")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "CODEAGENT_PORT", default_value = "12000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "CODEAGENT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTML file served on `/`
    #[arg(long, env = "CODEAGENT_FRONTEND", default_value = "frontend-v2/index.html")]
    pub frontend: PathBuf,

    /// Simulated model server startup time in milliseconds
    #[arg(long, env = "CODEAGENT_STARTUP_DELAY_MS", default_value = "2000")]
    pub startup_delay_ms: u64,

    /// Simulated code generation time in milliseconds
    #[arg(long, env = "CODEAGENT_GENERATE_DELAY_MS", default_value = "1000")]
    pub generate_delay_ms: u64,

    /// Simulated code analysis time in milliseconds
    #[arg(long, env = "CODEAGENT_ANALYZE_DELAY_MS", default_value = "800")]
    pub analyze_delay_ms: u64,

    /// Simulated chat response time in milliseconds
    #[arg(long, env = "CODEAGENT_CHAT_DELAY_MS", default_value = "600")]
    pub chat_delay_ms: u64,

    /// Maximum request body size accepted by the upload endpoint, in bytes
    #[arg(long, env = "CODEAGENT_MAX_UPLOAD_BYTES", default_value = "67108864")]
    pub max_upload_bytes: usize,
}

/// Artificial latencies applied by the demo backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub startup: Duration,
    pub generate: Duration,
    pub analyze: Duration,
    pub chat: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            startup: Duration::from_millis(2000),
            generate: Duration::from_millis(1000),
            analyze: Duration::from_millis(800),
            chat: Duration::from_millis(600),
        }
    }
}

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub frontend: PathBuf,
    pub delays: Delays,
    pub max_upload_bytes: usize,
}

impl From<&App> for Config {
    fn from(app: &App) -> Self {
        Self {
            addr: format!("{}:{}", app.host, app.port),
            frontend: app.frontend.clone(),
            delays: Delays {
                startup: Duration::from_millis(app.startup_delay_ms),
                generate: Duration::from_millis(app.generate_delay_ms),
                analyze: Duration::from_millis(app.analyze_delay_ms),
                chat: Duration::from_millis(app.chat_delay_ms),
            },
            max_upload_bytes: app.max_upload_bytes,
        }
    }
}
