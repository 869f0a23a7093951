use std::time::Duration;

use anyhow::Result;

use super::{record_key, LocalStore, RemoteStore, KEY_SETTINGS};
use crate::dashboard::{history, HistoryMode};
use crate::model::UserRecord;

const DEFAULT_AUTOSAVE_SECS: u64 = 30;

/// The dual-write / fallback policy around the two stores.
///
/// Save: attempt the remote write when a remote store is attached (failure
/// is logged, never fatal); always write the local copy. Load: remote first,
/// local on failure or absence, a fresh default record when neither has
/// anything. Last write wins everywhere; there is no version check and no
/// merge on this path.
pub struct Persistence {
    remote: Option<RemoteStore>,
    local: LocalStore,
    history_mode: HistoryMode,
    autosave: Duration,
}

impl Persistence {
    pub fn new(remote: Option<RemoteStore>, local: LocalStore, history_mode: HistoryMode) -> Self {
        let autosave_secs = std::env::var("FINANCAS_AUTOSAVE_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_AUTOSAVE_SECS);

        Self {
            remote,
            local,
            history_mode,
            autosave: Duration::from_secs(autosave_secs),
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    /// Interval for the periodic re-persist driven by the UI tick loop.
    pub fn autosave_interval(&self) -> Duration {
        self.autosave
    }

    pub async fn load(&self, user_id: &str) -> UserRecord {
        if let Some(remote) = &self.remote {
            match remote.load(user_id).await {
                Ok(Some(record)) => return record,
                Ok(None) => {}
                Err(err) => log::warn!("remote read failed, using local copy: {err}"),
            }
        }
        self.local
            .get(&record_key(user_id))
            .unwrap_or_else(|| UserRecord::for_user(user_id))
    }

    /// Folds the net-worth history, then writes both stores. Only a failed
    /// local write is an error — it is the backup of last resort.
    pub async fn save(&self, record: &mut UserRecord) -> Result<()> {
        history::update(record, self.history_mode, chrono::Utc::now().date_naive());

        if let Some(remote) = &self.remote {
            if let Err(err) = remote.save(record).await {
                log::warn!("remote write failed, local copy kept: {err}");
            }
        }

        self.local.set(&record_key(&record.user_id), record)?;
        self.local.set(KEY_SETTINGS, &record.settings)?;
        Ok(())
    }
}
