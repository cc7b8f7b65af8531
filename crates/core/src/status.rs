//! Simulated backend server status.
//!
//! The flag itself is owned by the shell; this module only knows the three
//! states and how to turn them into the payloads the API returns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint the simulated backend pretends to listen on
pub const DEMO_ENDPOINT: &str = "http://localhost:8000";

/// Lifecycle of the simulated model server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Stopped,
    Starting,
    Running,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Stopped => "stopped",
            ServerStatus::Starting => "starting",
            ServerStatus::Running => "running",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ServerStatus::Running)
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot returned by `get_status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: ServerStatus,
    pub running: bool,
    pub infrastructure: String,
    pub cost: String,
}

/// Payload returned once a start request has completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartOutcome {
    pub success: bool,
    pub message: String,
    pub endpoint: String,
    pub status: ServerStatus,
}

/// Payload returned by a stop request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopOutcome {
    pub success: bool,
    pub message: String,
    pub status: ServerStatus,
}

pub fn status_report(status: ServerStatus) -> StatusReport {
    StatusReport {
        status,
        running: status.is_running(),
        infrastructure: "production-ready".to_string(),
        cost: "local-deployment".to_string(),
    }
}

pub fn start_outcome(status: ServerStatus) -> StartOutcome {
    StartOutcome {
        success: true,
        message: "vLLM server started successfully (demo mode)".to_string(),
        endpoint: DEMO_ENDPOINT.to_string(),
        status,
    }
}

pub fn stop_outcome(status: ServerStatus) -> StopOutcome {
    StopOutcome {
        success: true,
        message: "vLLM server stopped".to_string(),
        status,
    }
}
