//! The tracking session loop.
//!
//! `Tracker` is the single writer over the work queue. Hotkeys and the idle
//! monitor never mutate anything directly; they post `TrackerCommand`s into
//! a channel, and the loop here applies them one at a time, interleaved with
//! a one-second display tick and a periodic offline-queue flush. That
//! serialization is what upholds the single-running-item invariant without
//! locking the queue itself.

use crate::api::RemoteStore;
use crate::libs::config::{MonitorConfig, TrackerConfig};
use crate::libs::formatter::format_elapsed;
use crate::libs::freshness::is_recently_modified;
use crate::libs::idle::IdleMonitor;
use crate::libs::messages::Message;
use crate::libs::queue::{ItemStatus, WorkQueue};
use crate::libs::scheduler;
use crate::libs::sync_queue::{SubmitOutcome, SyncQueue, SyncRecord};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time;

/// Key-repeat and double-fire protection on top of the dispatcher-side
/// debounce. Complete commands inside this window are dropped.
const COMPLETE_GUARD: Duration = Duration::from_millis(100);

/// Everything the outside world may ask the tracker to do. Applied strictly
/// in arrival order by the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerCommand {
    /// Complete the item currently being worked.
    Complete,
    /// Activate the next available item, preempting the running one.
    StartNext,
    /// Pause the running item, or resume it if paused in place.
    TogglePause,
    /// The idle monitor crossed the inactivity threshold.
    IdleBegan,
}

/// Identity stamped on every telemetry record produced this session.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub employee_name: String,
    pub work_type: String,
    pub shift: String,
}

pub struct Tracker<S: RemoteStore> {
    queue: WorkQueue,
    sync: SyncQueue<S>,
    idle: IdleMonitor,
    session: SessionInfo,
    freshness_window: u64,
    flush_interval: Duration,
    tx: UnboundedSender<TrackerCommand>,
    rx: Option<UnboundedReceiver<TrackerCommand>>,
    last_complete: Option<Instant>,
}

impl<S: RemoteStore> Tracker<S> {
    pub fn new(session: SessionInfo, sync: SyncQueue<S>, monitor: &MonitorConfig, tracker: &TrackerConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            queue: WorkQueue::new(),
            sync,
            idle: IdleMonitor::new(monitor.idle_threshold),
            session,
            freshness_window: tracker.freshness_window,
            flush_interval: Duration::from_secs(tracker.flush_interval),
            tx,
            rx: Some(rx),
            last_complete: None,
        }
    }

    /// Command-channel sender for hotkey dispatchers and other frontends.
    pub fn sender(&self) -> UnboundedSender<TrackerCommand> {
        self.tx.clone()
    }

    /// Appends a file to the session queue.
    pub fn add_file(&mut self, path: impl Into<std::path::PathBuf>) -> u64 {
        let id = self.queue.add(path);
        if let Some(item) = self.queue.get(id) {
            msg_info!(Message::ItemAdded(item.display_text()));
        }
        id
    }

    /// Drops an item from the queue. Accrued time is discarded.
    pub fn remove_item(&mut self, id: u64) {
        self.queue.remove(id);
    }

    pub fn queue(&self) -> &WorkQueue {
        &self.queue
    }

    /// Display snapshot of the current item for embedding frontends.
    pub fn active_display_info(&self) -> Option<crate::libs::queue::ActiveInfo> {
        self.queue.active_info()
    }

    /// Records still waiting in the durable offline queue.
    pub fn pending_sync_count(&self) -> usize {
        self.sync.pending_count()
    }

    /// Immediate flush attempt, outside the periodic timer.
    pub async fn force_sync_now(&mut self) -> Result<usize> {
        self.sync.flush().await
    }

    /// Runs the session to completion: spawns the idle monitor, activates
    /// the first item and then multiplexes commands, the display tick and
    /// the flush timer until every item is done or the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut rx = self.rx.take().ok_or_else(|| anyhow!("Tracker session is already running"))?;

        msg_print!(Message::SessionStarted {
            files: self.queue.items().len(),
            employee: self.session.employee_name.clone(),
            work_type: self.session.work_type.clone(),
            shift: self.session.shift.clone(),
        });
        msg_print!(Message::SessionHotkeyHelp);

        self.idle.spawn(self.tx.clone());
        self.start_next(None);

        let mut tick = time::interval(Duration::from_secs(1));
        let mut flush = time::interval(self.flush_interval);

        loop {
            tokio::select! {
                command = rx.recv() => {
                    match command {
                        Some(command) => self.handle(command).await?,
                        None => break,
                    }
                }
                _ = tick.tick() => self.render_status(),
                _ = flush.tick() => self.flush_pending().await,
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    break;
                }
            }

            if self.queue.all_completed() {
                msg_success!(Message::AllItemsDone);
                break;
            }
        }

        self.idle.stop();
        self.flush_pending().await;
        let pending = self.sync.pending_count();
        if pending > 0 {
            msg_warning!(Message::SyncPending(pending));
        }
        msg_print!(Message::SessionEnded);
        Ok(())
    }

    async fn handle(&mut self, command: TrackerCommand) -> Result<()> {
        match command {
            TrackerCommand::Complete => self.complete_current().await?,
            TrackerCommand::StartNext => self.start_next(None),
            TrackerCommand::TogglePause => self.toggle_pause(),
            TrackerCommand::IdleBegan => self.idle_pause(),
        }
        Ok(())
    }

    /// Activates the item the scheduler picks after `after`, opening it
    /// first when it has never been opened. Resets idle attribution so the
    /// new item starts with a clean slate.
    fn start_next(&mut self, after: Option<usize>) {
        let Some(plan) = scheduler::select_next(&self.queue, after) else {
            msg_info!(Message::NothingToStart);
            return;
        };

        if plan.needs_open {
            self.queue.mark_opened(plan.id);
            if let Some(item) = self.queue.get(plan.id) {
                match open::that_detached(&item.path) {
                    Ok(()) => msg_info!(Message::ItemOpened(item.display_text())),
                    Err(e) => msg_warning!(Message::FileOpenFailed(item.filename.clone(), e.to_string())),
                }
            }
        }

        self.queue.start(plan.id);
        self.idle.reset();
        if let Some(item) = self.queue.get(plan.id) {
            msg_print!(Message::ItemStarted(item.display_text()));
        }
    }

    fn toggle_pause(&mut self) {
        let Some(item) = self.queue.current_item() else {
            return;
        };
        let id = item.id;
        let display_text = item.display_text();
        match item.status {
            ItemStatus::Active => {
                self.queue.pause(id);
                msg_print!(Message::ItemPaused(display_text));
            }
            ItemStatus::Paused => {
                self.queue.resume(id);
                msg_print!(Message::ItemResumed(display_text));
            }
            _ => {}
        }
    }

    /// Idle threshold crossed: stop charging time to the running item. The
    /// idle monitor keeps accumulating the episode; time-on-task simply
    /// freezes until the user resumes.
    fn idle_pause(&mut self) {
        let Some(item) = self.queue.current_item() else {
            return;
        };
        if item.status != ItemStatus::Active {
            return;
        }
        let id = item.id;
        let display_text = item.display_text();
        self.queue.pause(id);
        println!();
        msg_warning!(Message::IdleAutoPause(display_text));
    }

    /// The completion pipeline: freshness gate, freeze the item, attribute
    /// idle time, emit the telemetry record and auto-advance.
    async fn complete_current(&mut self) -> Result<()> {
        let now = Instant::now();
        if let Some(last) = self.last_complete {
            if now.saturating_duration_since(last) < COMPLETE_GUARD {
                return Ok(());
            }
        }

        let Some(item) = self.queue.current_item() else {
            return Ok(());
        };
        let id = item.id;
        let path = item.path.clone();
        let filename = item.filename.clone();
        let index = self.queue.current_index();

        if !is_recently_modified(&path, self.freshness_window) {
            println!();
            msg_warning!(Message::FreshnessWarning(filename.clone(), self.freshness_window));
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::FreshnessOverridePrompt.to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok(());
            }
        }

        self.last_complete = Some(Instant::now());
        // Idle is stamped while the item is still mutable; completion
        // freezes every field.
        self.queue.attribute_idle(id, self.idle.total_seconds());
        if !self.queue.complete(id) {
            return Ok(());
        }
        self.idle.reset();

        let record = {
            let item = self.queue.get(id).ok_or_else(|| anyhow!("Completed item vanished from the queue"))?;
            println!();
            msg_success!(Message::ItemCompleted(item.display_text(), format_elapsed(item.elapsed())));
            SyncRecord {
                employee_name: self.session.employee_name.clone(),
                work_type: self.session.work_type.clone(),
                shift: self.session.shift.clone(),
                client_name: item.client.clone(),
                filename: item.filename.clone(),
                file_path: item.containing_dir(),
                time_spent_seconds: item.elapsed().as_secs() as i64,
                completed_at: item
                    .completed_at
                    .map(|at| at.format("%Y-%m-%dT%H:%M:%S").to_string())
                    .unwrap_or_default(),
                pause_count: item.pause_count,
                total_idle_seconds: item.idle_seconds,
            }
        };

        match self.sync.submit(record).await {
            Ok(SubmitOutcome::Delivered) => msg_info!(Message::RecordDelivered(filename)),
            Ok(SubmitOutcome::Queued) => msg_warning!(Message::RecordQueuedOffline(filename)),
            Err(e) => msg_error!(Message::RecordLost(filename, e.to_string())),
        }

        if !self.queue.all_completed() {
            self.start_next(index);
        }
        Ok(())
    }

    /// One-line live status for the current item, rewritten in place.
    fn render_status(&self) {
        if crate::libs::messages::macros::is_debug_mode() {
            return;
        }
        if let Some(info) = self.queue.active_info() {
            let marker = if info.paused { "⏸" } else { "▶" };
            print!("\r{} {} {}   ", marker, info.timer, info.display);
            let _ = std::io::stdout().flush();
        }
    }

    async fn flush_pending(&mut self) {
        match self.sync.flush().await {
            Ok(0) => {}
            Ok(count) => {
                println!();
                msg_success!(Message::SyncedEntries(count));
            }
            Err(e) => {
                println!();
                msg_error!(format!("Offline queue flush failed: {}", e));
            }
        }
    }
}
