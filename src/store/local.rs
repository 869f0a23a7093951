use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON files in one directory, one file per key. This is the fallback and
/// backup layer; reads never fail the caller, they degrade to `None`.
#[derive(Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Directory from `FINANCAS_DATA_DIR`, defaulting to `./.financas`.
    pub fn from_env() -> Result<Self> {
        let dir = std::env::var("FINANCAS_DATA_DIR").unwrap_or_else(|_| "./.financas".to_string());
        Self::open(dir)
    }

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating local store dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Missing file or malformed JSON both read as `None`; malformed data is
    /// logged and left in place.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("cannot read {}: {err}", path.display());
                }
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("malformed JSON in {}: {err}", path.display());
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path(key);
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn remove(&self, key: &str) {
        let path = self.path(key);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("cannot remove {}: {err}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        store.set("currentUser", &serde_json::json!({"id": "u-1"})).unwrap();
        let back: Option<serde_json::Value> = store.get("currentUser");
        assert_eq!(back.unwrap()["id"], "u-1");

        store.remove("currentUser");
        assert!(store.get::<serde_json::Value>("currentUser").is_none());
    }

    #[test]
    fn malformed_json_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("users.json"), "{not json").unwrap();

        assert!(store.get::<serde_json::Value>("users").is_none());
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        assert!(store.get::<serde_json::Value>("nothing").is_none());
    }
}
