//! Idle-activity monitoring.
//!
//! Samples global input on a fixed cadence and flags an idle episode once
//! the inactivity threshold elapses, notifying the tracker exactly once per
//! episode. Cumulative idle time is scoped to the running item: the tracker
//! resets the monitor whenever an item starts or completes.
//!
//! Activity events arrive from an rdev listener thread while the poll loop
//! and the tracker read and reset the counters, so all state lives behind
//! one mutex. The timing logic itself is a plain clock-injected state
//! machine (`IdleState`) so it can be tested without input hooks.

use crate::libs::tracker::TrackerCommand;
use crate::msg_debug;
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time;

/// Fixed sampling period of the idle poll loop.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Clock-injected idle bookkeeping.
#[derive(Debug)]
pub struct IdleState {
    last_activity: Instant,
    idle: bool,
    idle_start: Option<Instant>,
    accumulated: Duration,
}

impl IdleState {
    pub fn new(now: Instant) -> Self {
        Self {
            last_activity: now,
            idle: false,
            idle_start: None,
            accumulated: Duration::ZERO,
        }
    }

    /// Records an activity event. Closes any open idle episode, folding its
    /// duration into the cumulative total, and re-arms idle detection.
    pub fn touch(&mut self, now: Instant) {
        if self.idle {
            if let Some(start) = self.idle_start.take() {
                self.accumulated += now.saturating_duration_since(start);
            }
            self.idle = false;
        }
        self.last_activity = now;
    }

    /// One sampling step. Returns true exactly once per idle episode, when
    /// inactivity first crosses the threshold.
    pub fn poll(&mut self, now: Instant, threshold: Duration) -> bool {
        if !self.idle && now.saturating_duration_since(self.last_activity) >= threshold {
            self.idle = true;
            self.idle_start = Some(now);
            return true;
        }
        false
    }

    /// Cumulative idle time including any in-progress episode. Read-only.
    pub fn total(&self, now: Instant) -> Duration {
        match self.idle_start {
            Some(start) => self.accumulated + now.saturating_duration_since(start),
            None => self.accumulated,
        }
    }

    /// Zeroes all counters and re-arms detection from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        self.idle_start = None;
        self.idle = false;
        self.last_activity = now;
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }
}

/// Samples global input activity and raises one idle-begin notification per
/// idle episode through the tracker command channel.
pub struct IdleMonitor {
    threshold: Duration,
    state: Arc<Mutex<IdleState>>,
    running: Arc<AtomicBool>,
}

impl IdleMonitor {
    pub fn new(idle_threshold_seconds: u64) -> Self {
        Self {
            threshold: Duration::from_secs(idle_threshold_seconds),
            state: Arc::new(Mutex::new(IdleState::new(Instant::now()))),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Starts the input listener thread and the poll loop. Idle-begin is
    /// never acted on inline; it is marshaled into the tracker as a command.
    pub fn spawn(&self, notify: UnboundedSender<TrackerCommand>) {
        self.running.store(true, Ordering::SeqCst);

        let shared_state = self.state.clone();
        std::thread::spawn(move || {
            loop {
                let state_for_listener = shared_state.clone();
                if let Err(e) = listen(move |event: Event| match event.event_type {
                    EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::MouseMove { .. } | EventType::Wheel { .. } => {
                        state_for_listener.lock().touch(Instant::now());
                    }
                    _ => {}
                }) {
                    msg_debug!(format!("Input listener failed: {:?}, retrying in 1 second", e));
                    std::thread::sleep(Duration::from_secs(1));
                } else {
                    // listen only returns without error when the hook is torn down
                    break;
                }
            }
        });

        let state = self.state.clone();
        let running = self.running.clone();
        let threshold = self.threshold;
        tokio::spawn(async move {
            loop {
                time::sleep(POLL_INTERVAL).await;
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                if state.lock().poll(Instant::now(), threshold) {
                    if notify.send(TrackerCommand::IdleBegan).is_err() {
                        break;
                    }
                }
            }
        });
    }

    /// Cumulative idle seconds including any in-progress episode.
    pub fn total_seconds(&self) -> u64 {
        self.state.lock().total(Instant::now()).as_secs()
    }

    /// Zeroes the counters. Called whenever an item starts or completes so
    /// idle time is attributed to the item that was running when idle began.
    pub fn reset(&self) {
        self.state.lock().reset(Instant::now());
    }

    /// Stops the poll loop. Any in-flight idle episode is folded into the
    /// cumulative total rather than discarded.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        let mut state = self.state.lock();
        let now = Instant::now();
        if state.is_idle() {
            state.touch(now);
        }
    }
}
