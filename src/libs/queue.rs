//! The ordered queue of tracked files and the timing invariants over it.
//!
//! A `WorkQueue` owns every `WorkItem` added during a session. Exactly one
//! item may accrue time at any instant: starting an item folds the running
//! time of any other active item into its accumulated total and demotes it
//! to `Paused`. Elapsed time is only ever folded at pause, completion or
//! preemption; between those points the live value is always
//! `elapsed + (now - current_start)`.
//!
//! All mutating operations are exposed twice: the plain form stamps
//! `Instant::now()`, the `_at` form takes the timestamp explicitly so tests
//! can drive a synthetic clock.

use crate::libs::client_id::extract_client_id;
use crate::libs::formatter::format_elapsed;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Filenames longer than this are shortened with an ellipsis for display.
const DISPLAY_NAME_LIMIT: usize = 25;

/// Lifecycle state of a single tracked file.
///
/// `Active` is the one-and-only running state; `Paused` means the item was
/// active before and keeps its accumulated time. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Queued,
    Opened,
    Active,
    Paused,
    Completed,
}

/// One tracked file with its identity, display fields and timing state.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub id: u64,
    pub path: PathBuf,
    pub client: String,
    pub filename: String,
    pub status: ItemStatus,
    /// Seconds accumulated over previous active stretches. Folded only at
    /// pause, completion or preemption, never by the display tick.
    elapsed: Duration,
    /// Present only while the item is running.
    current_start: Option<Instant>,
    pub pause_count: u32,
    pub idle_seconds: u64,
    pub completed_at: Option<DateTime<Local>>,
}

impl WorkItem {
    fn new(id: u64, path: PathBuf) -> Self {
        let client = extract_client_id(&path);
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            id,
            path,
            client,
            filename,
            status: ItemStatus::Queued,
            elapsed: Duration::ZERO,
            current_start: None,
            pause_count: 0,
            idle_seconds: 0,
            completed_at: None,
        }
    }

    /// "client - filename", with long filenames shortened.
    pub fn display_text(&self) -> String {
        let short = if self.filename.chars().count() > DISPLAY_NAME_LIMIT {
            let truncated: String = self.filename.chars().take(DISPLAY_NAME_LIMIT).collect();
            format!("{}...", truncated)
        } else {
            self.filename.clone()
        };
        format!("{} - {}", self.client, short)
    }

    /// Directory containing the tracked file, for the telemetry record.
    pub fn containing_dir(&self) -> String {
        self.path.parent().unwrap_or_else(|| Path::new("")).to_string_lossy().into_owned()
    }

    pub fn is_running(&self) -> bool {
        self.status == ItemStatus::Active
    }

    /// Accumulated elapsed time plus the in-progress stretch, if running.
    /// Purely observational.
    pub fn live_elapsed(&self, now: Instant) -> Duration {
        match self.current_start {
            Some(start) => self.elapsed + now.saturating_duration_since(start),
            None => self.elapsed,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Folds the in-progress stretch into the accumulated total.
    fn fold(&mut self, now: Instant) {
        if let Some(start) = self.current_start.take() {
            self.elapsed += now.saturating_duration_since(start);
        }
    }
}

/// Snapshot of the current item for display surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInfo {
    pub display: String,
    pub timer: String,
    pub paused: bool,
}

/// Insertion-ordered collection of work items plus the pointer to the item
/// currently being worked (running or paused in place).
pub struct WorkQueue {
    items: Vec<WorkItem>,
    current: Option<usize>,
    next_id: u64,
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkQueue {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            next_id: 1,
        }
    }

    /// Appends a file to the end of the queue and returns its id.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(WorkItem::new(id, path.into()));
        id
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Index of the current item (running or paused in place).
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_item(&self) -> Option<&WorkItem> {
        self.current.and_then(|index| self.items.get(index))
    }

    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| item.status != ItemStatus::Completed).count()
    }

    pub fn all_completed(&self) -> bool {
        !self.items.is_empty() && self.remaining_count() == 0
    }

    /// Queued -> Opened. Silent no-op for any other state.
    pub fn mark_opened(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            if item.status == ItemStatus::Queued {
                item.status = ItemStatus::Opened;
            }
        }
    }

    /// Stamps the cumulative idle seconds attributed to this item. Must
    /// happen before completion; a Completed item is frozen and silently
    /// rejects the write.
    pub fn attribute_idle(&mut self, id: u64, seconds: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            if item.status != ItemStatus::Completed {
                item.idle_seconds = seconds;
            }
        }
    }

    /// Deletes an item by id, re-pointing or clearing the current pointer
    /// so later index-based lookups stay consistent.
    pub fn remove(&mut self, id: u64) {
        let Some(index) = self.position(id) else {
            return;
        };
        self.items.remove(index);

        if let Some(current) = self.current {
            if current == index {
                self.current = None;
            } else if current > index {
                self.current = Some(current - 1);
            }
        }
    }

    pub fn start(&mut self, id: u64) {
        self.start_at(id, Instant::now());
    }

    /// Makes `id` the single running item.
    ///
    /// Any other active item first has its running time folded and is
    /// demoted to `Paused`, preserving its progress. Starting is allowed
    /// only from `Opened` or `Paused`; anything else is a silent no-op.
    pub fn start_at(&mut self, id: u64, now: Instant) {
        let Some(index) = self.position(id) else {
            return;
        };
        match self.items[index].status {
            ItemStatus::Opened | ItemStatus::Paused => {}
            _ => return,
        }

        for (i, item) in self.items.iter_mut().enumerate() {
            if i != index && item.status == ItemStatus::Active {
                item.fold(now);
                item.status = ItemStatus::Paused;
            }
        }

        let item = &mut self.items[index];
        item.status = ItemStatus::Active;
        item.current_start = Some(now);
        self.current = Some(index);
    }

    pub fn pause(&mut self, id: u64) {
        self.pause_at(id, Instant::now());
    }

    /// Pauses the running item, folding its time and counting the pause.
    /// No-op unless `id` is the current item and it is running.
    pub fn pause_at(&mut self, id: u64, now: Instant) {
        let Some(index) = self.current else {
            return;
        };
        let item = &mut self.items[index];
        if item.id != id || item.status != ItemStatus::Active {
            return;
        }
        item.fold(now);
        item.status = ItemStatus::Paused;
        item.pause_count += 1;
    }

    pub fn resume(&mut self, id: u64) {
        self.resume_at(id, Instant::now());
    }

    /// Resumes the current item from an in-place pause. No-op unless `id`
    /// is the current item and it is paused.
    pub fn resume_at(&mut self, id: u64, now: Instant) {
        let Some(index) = self.current else {
            return;
        };
        let item = &mut self.items[index];
        if item.id != id || item.status != ItemStatus::Paused {
            return;
        }
        item.status = ItemStatus::Active;
        item.current_start = Some(now);
    }

    /// Pause if running, resume if paused in place.
    pub fn toggle_pause_at(&mut self, id: u64, now: Instant) {
        match self.current_item() {
            Some(item) if item.id == id && item.status == ItemStatus::Active => self.pause_at(id, now),
            Some(item) if item.id == id && item.status == ItemStatus::Paused => self.resume_at(id, now),
            _ => {}
        }
    }

    pub fn complete(&mut self, id: u64) -> bool {
        self.complete_at(id, Instant::now())
    }

    /// Folds any remaining running time, marks the item completed and
    /// freezes it. Returns false (no-op) if already completed.
    pub fn complete_at(&mut self, id: u64, now: Instant) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if self.items[index].status == ItemStatus::Completed {
            return false;
        }

        let item = &mut self.items[index];
        item.fold(now);
        item.status = ItemStatus::Completed;
        item.completed_at = Some(Local::now());

        if self.current == Some(index) {
            self.current = None;
        }
        true
    }

    /// Display snapshot of the current item, or `None` when nothing is
    /// being worked. Never mutates timing state.
    pub fn active_info_at(&self, now: Instant) -> Option<ActiveInfo> {
        let item = self.current_item()?;
        match item.status {
            ItemStatus::Active | ItemStatus::Paused => Some(ActiveInfo {
                display: item.display_text(),
                timer: format_elapsed(item.live_elapsed(now)),
                paused: item.status == ItemStatus::Paused,
            }),
            _ => None,
        }
    }

    pub fn active_info(&self) -> Option<ActiveInfo> {
        self.active_info_at(Instant::now())
    }
}
