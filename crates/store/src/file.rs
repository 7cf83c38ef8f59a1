use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SessionStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk shape of the slot.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSlot {
    token: Option<String>,
}

/// Session slot persisted to a JSON file, surviving a full restart of the
/// host application.
///
/// Reads are served from memory; `set`/`clear` write through. A write-through
/// failure degrades the store to in-memory behavior (logged, not propagated):
/// a persistence problem must not change a guard decision.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    token: Option<String>,
}

impl FileStore {
    /// Open the store at `path`, loading a previously persisted token.
    ///
    /// A missing file is an empty store. A corrupt file is also treated as
    /// empty: an unreadable slot and a scrubbed token are indistinguishable
    /// on the next evaluation anyway.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let token = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<PersistedSlot>(&contents) {
                Ok(slot) => slot.token,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "corrupt session file, starting empty"
                    );
                    None
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, token })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let slot = PersistedSlot {
            token: self.token.clone(),
        };
        let result = serde_json::to_string(&slot)
            .map_err(std::io::Error::other)
            .and_then(|contents| fs::write(&self.path, contents));

        if let Err(err) = result {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to persist session slot"
            );
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self) -> Option<String> {
        self.token.clone()
    }

    fn set(&mut self, token: &str) {
        self.token = Some(token.to_string());
        self.persist();
    }

    fn clear(&mut self) {
        if self.token.take().is_some() {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("schoolgate-store-{}.json", Uuid::now_v7()))
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let path = scratch_path();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn token_survives_a_reopen() {
        let path = scratch_path();

        let mut store = FileStore::open(&path).unwrap();
        store.set("persisted-token");
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(), Some("persisted-token".to_string()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn clear_removes_the_persisted_token() {
        let path = scratch_path();

        let mut store = FileStore::open(&path).unwrap();
        store.set("persisted-token");
        store.clear();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let path = scratch_path();
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(), None);

        let _ = fs::remove_file(&path);
    }
}
