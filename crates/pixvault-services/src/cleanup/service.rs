//! Background expiry sweeper.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::interval;

use pixvault_core::AppError;
use pixvault_db::LinkRepository;

/// Periodically deletes expired link rows in one batch per run.
///
/// Each run is a single bounded delete keyed on "now", so runs are idempotent
/// and safe to overlap with the resolve-side lazy GC: whichever path deletes
/// a row first wins, the other sees zero rows affected.
#[derive(Clone)]
pub struct SweeperService {
    links: Arc<dyn LinkRepository>,
    sweep_interval: Duration,
}

impl SweeperService {
    pub fn new(links: Arc<dyn LinkRepository>, sweep_interval_secs: u64) -> Self {
        Self {
            links,
            sweep_interval: Duration::from_secs(sweep_interval_secs),
        }
    }

    /// Start the background sweep loop. Returns a JoinHandle for graceful
    /// shutdown.
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut tick = interval(self.sweep_interval);

            loop {
                tick.tick().await;

                match self.sweep_once().await {
                    Ok(deleted) => {
                        tracing::info!(deleted, "Expiry sweep completed");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Expiry sweep failed");
                    }
                }
            }
        })
    }

    /// Delete every link past its expiry. Returns the number of rows removed;
    /// zero on an empty set is a normal outcome, not an error.
    #[tracing::instrument(skip(self))]
    pub async fn sweep_once(&self) -> Result<u64, AppError> {
        self.links.delete_expired(Utc::now()).await
    }
}
