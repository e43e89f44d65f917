// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Disappearing-message timers.
//!
//! One entry per bridged event that must be redacted once its timer runs
//! out. Entries are kept in memory ordered by (room, event) and, when the
//! store has a path, mirrored to a JSON snapshot after every mutation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot schema version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("disappearing message already exists: {room_id} {event_id}")]
    Exists { room_id: RoomId, event_id: EventId },
}

/// Matrix room the timer belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

/// Matrix event to redact on expiry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(RoomId);
string_id!(EventId);

/// Timer for one bridged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisappearingMessage {
    pub room_id: RoomId,
    #[serde(rename = "mxid")]
    pub event_id: EventId,
    pub expiration_seconds: i64,
    /// Deadline in epoch milliseconds, unset until the message is read
    #[serde(default)]
    pub expiration_ts: Option<i64>,
}

impl DisappearingMessage {
    pub fn new(room_id: RoomId, event_id: EventId, expiration_seconds: i64) -> Self {
        Self { room_id, event_id, expiration_seconds, expiration_ts: None }
    }

    /// Start the countdown at `now_ms`.
    pub fn start_timer(&mut self, now_ms: i64) {
        self.expiration_ts = Some(now_ms.saturating_add(self.expiration_seconds.saturating_mul(1000)));
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expiration_ts.is_some_and(|ts| ts <= now_ms)
    }

    fn key(&self) -> Key {
        (self.room_id.clone(), self.event_id.clone())
    }
}

type Key = (RoomId, EventId);

#[derive(Serialize, Deserialize)]
struct Snapshot {
    #[serde(rename = "v")]
    version: u32,
    messages: Vec<DisappearingMessage>,
}

/// Ordered collection of disappearing-message timers.
#[derive(Debug, Default)]
pub struct DisappearingStore {
    path: Option<PathBuf>,
    messages: BTreeMap<Key, DisappearingMessage>,
}

impl DisappearingStore {
    /// Store that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a store backed by the snapshot at `path`, loading it if present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let messages = match fs::read(&path) {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
                if snapshot.version != SNAPSHOT_VERSION {
                    tracing::warn!(
                        path = %path.display(),
                        version = snapshot.version,
                        "unknown disappearing-message snapshot version"
                    );
                }
                snapshot.messages.into_iter().map(|m| (m.key(), m)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), count = messages.len(), "loaded disappearing messages");
        Ok(Self { path: Some(path), messages })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Add a new timer. Fails if one already exists for the same event.
    pub fn insert(&mut self, message: DisappearingMessage) -> Result<(), StorageError> {
        let key = message.key();
        if self.messages.contains_key(&key) {
            let (room_id, event_id) = key;
            return Err(StorageError::Exists { room_id, event_id });
        }
        self.messages.insert(key.clone(), message);
        if let Err(e) = self.persist() {
            self.messages.remove(&key);
            return Err(e);
        }
        Ok(())
    }

    /// Write the timer fields of `message`. Failures are logged, not returned,
    /// and leave the previous entry in place.
    pub fn update(&mut self, message: &DisappearingMessage) {
        let key = message.key();
        let previous = self.messages.insert(key.clone(), message.clone());
        if let Err(e) = self.persist() {
            match previous {
                Some(previous) => self.messages.insert(key, previous),
                None => self.messages.remove(&key),
            };
            tracing::warn!(
                room_id = %message.room_id,
                event_id = %message.event_id,
                error = %e,
                "failed to update disappearing message"
            );
        }
    }

    pub fn delete(&mut self, room_id: &RoomId, event_id: &EventId) -> Result<(), StorageError> {
        if self.messages.remove(&(room_id.clone(), event_id.clone())).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    pub fn get(&self, room_id: &RoomId, event_id: &EventId) -> Option<DisappearingMessage> {
        self.messages.get(&(room_id.clone(), event_id.clone())).cloned()
    }

    pub fn get_all(&self) -> Vec<DisappearingMessage> {
        self.messages.values().cloned().collect()
    }

    pub fn get_all_for_room(&self, room_id: &RoomId) -> Vec<DisappearingMessage> {
        self.messages.values().filter(|m| &m.room_id == room_id).cloned().collect()
    }

    /// Timers whose deadline is at or before `now_ms`.
    pub fn expired(&self, now_ms: i64) -> Vec<DisappearingMessage> {
        self.messages.values().filter(|m| m.is_expired(now_ms)).cloned().collect()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let snapshot = Snapshot { version: SNAPSHOT_VERSION, messages: self.get_all() };
        let json = serde_json::to_vec_pretty(&snapshot)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "disappearing_tests.rs"]
mod tests;
