//! Simulated model server lifecycle.
//!
//! `start` flips the flag to `starting`, waits out the startup delay with the
//! lock released, then promotes to `running`. A `stop` (or another `start`)
//! that lands in between bumps the generation counter, and the stale start
//! leaves the flag alone.

use codeagent_core::status::{
    start_outcome, status_report, stop_outcome, ServerStatus, StartOutcome, StatusReport,
    StopOutcome,
};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Flag {
    status: ServerStatus,
    generation: u64,
}

#[derive(Debug)]
pub struct ServerManager {
    flag: Mutex<Flag>,
    startup_delay: Duration,
}

impl ServerManager {
    pub fn new(startup_delay: Duration) -> Self {
        Self {
            flag: Mutex::new(Flag::default()),
            startup_delay,
        }
    }

    pub async fn start(&self) -> StartOutcome {
        let generation = {
            let mut flag = self.flag.lock().await;
            flag.status = ServerStatus::Starting;
            flag.generation += 1;
            flag.generation
        };
        log::info!("Starting simulated vLLM server (demo mode)");

        tokio::time::sleep(self.startup_delay).await;

        let mut flag = self.flag.lock().await;
        if flag.generation == generation && flag.status == ServerStatus::Starting {
            flag.status = ServerStatus::Running;
            log::info!("Simulated vLLM server running");
        } else {
            log::debug!(
                "Start superseded while waiting, leaving status at {}",
                flag.status
            );
        }

        start_outcome(flag.status)
    }

    pub async fn stop(&self) -> StopOutcome {
        let mut flag = self.flag.lock().await;
        flag.status = ServerStatus::Stopped;
        flag.generation += 1;
        log::info!("Simulated vLLM server stopped");

        stop_outcome(flag.status)
    }

    pub async fn status(&self) -> ServerStatus {
        self.flag.lock().await.status
    }

    pub async fn report(&self) -> StatusReport {
        status_report(self.status().await)
    }
}
