//! Commit gate that writes accepted shortcuts to `config.toml`.

use crate::config::Config;

use std::{path::PathBuf, sync::Arc};

use shortcut_recorder_core::{
    Shortcut,
    collab::{GateFuture, PersistenceGate},
};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Persists recorder commits. A change is accepted only once it is on disk.
#[derive(Clone)]
pub struct ConfigGate {
    config: Arc<Mutex<Config>>,
    path: PathBuf,
}

impl ConfigGate {
    /// Gate over the in-memory `config`, saved to `path`.
    pub fn new(config: Arc<Mutex<Config>>, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Save `candidate` and adopt it in memory.
    ///
    /// The config lock is held from clone to store, so overlapping commits
    /// are written one at a time and disk always matches memory.
    #[instrument(skip(self), fields(path = ?self.path))]
    async fn persist(&self, candidate: Option<Shortcut>) -> bool {
        let mut config = self.config.lock().await;
        let mut next = (*config).clone();
        next.set_shortcut(candidate);

        let path = self.path.clone();
        let saved = tokio::task::spawn_blocking(move || next.save_to(&path).map(|()| next)).await;

        match saved {
            Ok(Ok(next)) => {
                *config = next;
                info!(binding = ?candidate.map(|s| s.to_config_string()), "Shortcut persisted");
                true
            }
            Ok(Err(e)) => {
                error!(error = ?e, "Failed to persist shortcut");
                false
            }
            Err(e) => {
                error!(error = ?e, "Config save task panicked");
                false
            }
        }
    }
}

impl PersistenceGate for ConfigGate {
    fn request(&self, candidate: Option<Shortcut>) -> GateFuture {
        let gate = self.clone();
        Box::pin(async move { gate.persist(candidate).await })
    }
}
