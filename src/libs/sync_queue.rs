//! Offline-durable delivery of completed-work records.
//!
//! Every completed item produces one immutable `SyncRecord`. Submission
//! tries the remote store first; when the store is unreachable or rejects
//! the insert, the record lands in a durable local queue instead, and the
//! caller sees "queued", not an error. The only hard failure left is the
//! local queue file itself becoming unwritable.
//!
//! The queue file is a flat JSON array with load-all / replace-all
//! semantics, owned exclusively by `SyncQueue`. Rewrites go through a
//! temporary file in the same directory followed by an atomic rename, so a
//! crash mid-write leaves either the old queue or the new one, never a
//! truncated file.

use crate::api::RemoteStore;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

pub const QUEUE_FILE_NAME: &str = "offline_queue.json";

/// Bound on any single remote call. The tracker loop that drives this
/// queue also processes ticks and hotkey commands, so a hung request must
/// degrade into "queued offline" instead of freezing the session.
const NETWORK_TIMEOUT: Duration = Duration::from_secs(5);

/// One completed-work telemetry record, snapshotted at completion time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SyncRecord {
    pub employee_name: String,
    pub work_type: String,
    pub shift: String,
    pub client_name: String,
    pub filename: String,
    /// Containing directory of the tracked file.
    pub file_path: String,
    pub time_spent_seconds: i64,
    pub completed_at: String,
    pub pause_count: u32,
    pub total_idle_seconds: u64,
}

/// A record waiting in the durable queue, tagged with when it was queued.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QueuedRecord {
    pub queued_at: String,
    #[serde(flatten)]
    pub record: SyncRecord,
}

/// Where a submitted record ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted by the remote store.
    Delivered,
    /// Persisted locally, pending a later flush.
    Queued,
}

/// At-least-once delivery buffer in front of a `RemoteStore`.
pub struct SyncQueue<S: RemoteStore> {
    store: S,
    queue_path: PathBuf,
    /// Result of the last connectivity probe. Starts optimistic.
    online: bool,
}

impl<S: RemoteStore> SyncQueue<S> {
    pub fn new(store: S) -> Result<Self> {
        let queue_path = DataStorage::new()
            .get_path(QUEUE_FILE_NAME)
            .map_err(|e| anyhow!("Failed to resolve offline queue path: {}", e))?;
        Ok(Self::with_path(store, queue_path))
    }

    /// Uses an explicit queue file location. Tests point this at a tempdir.
    pub fn with_path(store: S, queue_path: PathBuf) -> Self {
        Self {
            store,
            queue_path,
            online: true,
        }
    }

    /// Attempts immediate delivery, falling back to the durable queue.
    ///
    /// Never reports delivery failure: once the record is persisted locally
    /// the submission has succeeded from the caller's point of view. Errors
    /// only when the local queue itself cannot be written.
    pub async fn submit(&mut self, record: SyncRecord) -> Result<SubmitOutcome> {
        if self.online {
            match self.try_insert(&record).await {
                Ok(()) => return Ok(SubmitOutcome::Delivered),
                Err(e) => {
                    msg_debug!(format!("Immediate delivery failed, queueing locally: {}", e));
                    self.online = false;
                }
            }
        }
        self.enqueue(record)?;
        Ok(SubmitOutcome::Queued)
    }

    /// Probes connectivity, then drains the durable queue in enqueue order.
    ///
    /// Entries the store accepts are dropped; the rest are kept, and the
    /// queue file is atomically rewritten to exactly the still-failing
    /// subset. Returns the number of records synced.
    pub async fn flush(&mut self) -> Result<usize> {
        if !self.probe().await {
            return Ok(0);
        }

        let queue = self.load();
        if queue.is_empty() {
            return Ok(0);
        }

        let mut synced = 0;
        let mut remaining = Vec::new();
        for entry in queue {
            match self.try_insert(&entry.record).await {
                Ok(()) => synced += 1,
                Err(e) => {
                    msg_debug!(format!("Entry still failing to sync: {}", e));
                    remaining.push(entry);
                }
            }
        }
        self.replace(&remaining)?;
        Ok(synced)
    }

    /// Re-probes connectivity and records the result.
    pub async fn probe(&mut self) -> bool {
        self.online = timeout(NETWORK_TIMEOUT, self.store.probe()).await.unwrap_or(false);
        self.online
    }

    /// Last known connectivity, without touching the network.
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Number of records pending in the durable queue.
    pub fn pending_count(&self) -> usize {
        self.load().len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn try_insert(&self, record: &SyncRecord) -> Result<()> {
        match timeout(NETWORK_TIMEOUT, self.store.insert(record)).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!("Remote insert timed out after {:?}", NETWORK_TIMEOUT)),
        }
    }

    fn enqueue(&self, record: SyncRecord) -> Result<()> {
        let mut queue = self.load();
        queue.push(QueuedRecord {
            queued_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            record,
        });
        self.replace(&queue)
    }

    /// Loads the whole queue. A missing file is an empty queue; an
    /// unparsable one is treated as empty rather than blocking submissions.
    fn load(&self) -> Vec<QueuedRecord> {
        let Ok(raw) = fs::read_to_string(&self.queue_path) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(queue) => queue,
            Err(e) => {
                msg_debug!(format!("Offline queue unreadable, starting empty: {}", e));
                Vec::new()
            }
        }
    }

    /// Atomically replaces the queue file: temp file in the same directory,
    /// flush, then rename over the old file.
    fn replace(&self, entries: &[QueuedRecord]) -> Result<()> {
        let dir = self
            .queue_path
            .parent()
            .ok_or_else(|| anyhow!("Offline queue path has no parent directory"))?;
        fs::create_dir_all(dir).context("Failed to create offline queue directory")?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).context("Failed to create temporary queue file")?;
        serde_json::to_writer_pretty(tmp.as_file_mut(), entries).context("Failed to serialize offline queue")?;
        tmp.as_file_mut().flush().context("Failed to flush offline queue")?;
        tmp.persist(&self.queue_path)
            .map_err(|e| anyhow!("Failed to replace offline queue: {}", e.error))?;
        Ok(())
    }
}
