//! The durable key-value storage adapter.
//!
//! Browser `localStorage` semantics, rendered as one JSON document per
//! well-known key inside a storage directory. Operations are read-whole /
//! write-whole per key; a single key write is atomic (temp file + rename),
//! and nothing larger is. Concurrent writers race at the granularity of a
//! full collection write: last write wins.
//!
//! Change notification is an explicit broadcast channel rather than implicit
//! platform storage events. Every successful `set`/`remove` publishes a
//! [`StorageEvent`] so open views can re-read the collection and converge.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::broadcast;

/// Capacity of the change-notification channel. Slow subscribers that lag
/// behind miss events and should re-read the store on the next one.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Errors from the storage adapter.
///
/// Reads never surface errors for malformed content; only real I/O failures
/// on write paths are reported.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to serialize key '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// A change notification for one storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
}

/// File-backed key-value store with change notification.
///
/// Cheaply cloneable; clones share the same directory and the same broadcast
/// channel, which is what models two views of the same profile.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
    events: broadcast::Sender<StorageEvent>,
}

impl LocalStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self { dir, events })
    }

    /// Root directory of the store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Subscribe to change notifications.
    ///
    /// Delivery is same-process only and best-effort; a lagging receiver
    /// drops old events. Subscribers should treat any event as "re-read the
    /// key and resynchronize".
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Missing keys and malformed content both resolve to `None` - untrusted
    /// persisted state never becomes an error (the caller supplies the
    /// default). Malformed content is logged and left in place.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read storage key");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed storage value, using default");
                None
            }
        }
    }

    /// Serialize and write `value` under `key`, then notify subscribers.
    ///
    /// The write replaces the whole value for the key. Each write goes to
    /// its own uniquely named temp file in the storage directory and is
    /// renamed into place, so a reader never sees a torn value and racing
    /// writers cannot publish each other's half-written temp.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;

        let path = self.key_path(key);

        let write = || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
            tmp.write_all(&json)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        };

        write().map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })?;

        self.notify(key);
        Ok(())
    }

    /// Remove the value under `key`, then notify subscribers.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the filesystem removal fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => {
                self.notify(key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn notify(&self, key: &str) {
        // Nobody listening is fine; send only fails when there are no receivers.
        let _ = self.events.send(StorageEvent {
            key: key.to_string(),
        });
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
