//! Display implementation for traq application messages.
//!
//! Central place for all user-facing text. Keeping the wording in one
//! `match` keeps terminal output consistent and makes future localization
//! a single-file change.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptSelectModules => "Select the modules to configure".to_string(),
            Message::ConfigModuleMonitor => "Idle monitor settings".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::PromptIdleThreshold => "Inactivity threshold in seconds before auto-pause".to_string(),
            Message::PromptFlushInterval => "Offline queue flush interval in seconds".to_string(),
            Message::PromptFreshnessWindow => "File freshness window in seconds".to_string(),

            // === AUTH MESSAGES ===
            Message::PromptUsername => "Enter your username".to_string(),
            Message::PromptPassword => "Enter your password".to_string(),
            Message::LoginSuccess(username) => format!("Logged in as {}", username),
            Message::LoginFailed(reason) => format!("Login failed: {}", reason),
            Message::RegisterSuccess(username) => format!("Registered user {}", username),
            Message::RegisterFailed(reason) => format!("Registration failed: {}", reason),
            Message::LogoutSuccess => "Logged out".to_string(),
            Message::NotLoggedIn => "Not logged in. Run 'traq login' first".to_string(),
            Message::VaultNotConfigured => "Vault is not configured. Run 'traq init' first".to_string(),

            // === TRACK SESSION MESSAGES ===
            Message::SessionStarted {
                files,
                employee,
                work_type,
                shift,
            } => format!("Tracking {} file(s) | {} | {} | {} shift", files, employee, work_type, shift),
            Message::SessionHotkeyHelp => {
                "Hotkeys: Alt+Shift+S = start next | Alt+Shift+P = pause/resume | Alt+Shift+D = complete | Ctrl+C = quit".to_string()
            }
            Message::SessionEnded => "Tracking session ended".to_string(),
            Message::QueueEmpty => "No files to track".to_string(),
            Message::AllItemsDone => "All files completed 🎉".to_string(),
            Message::ItemAdded(display) => format!("Queued {}", display),
            Message::ItemOpened(display) => format!("Opened {}", display),
            Message::ItemStarted(display) => format!("▶ {}", display),
            Message::ItemPaused(display) => format!("⏸ {}", display),
            Message::ItemResumed(display) => format!("▶ {} (resumed)", display),
            Message::ItemCompleted(display, elapsed) => format!("✔ {} in {}", display, elapsed),
            Message::IdleAutoPause(display) => format!("⏸ {} (auto-paused, no activity)", display),
            Message::NothingToStart => "Nothing left to start".to_string(),
            Message::FileOpenFailed(filename, error) => format!("Could not open {}: {}", filename, error),
            Message::FreshnessWarning(filename, window_secs) => {
                format!(
                    "{} has not been modified in the last {} seconds. Did you save your work?",
                    filename, window_secs
                )
            }
            Message::FreshnessOverridePrompt => "Complete anyway?".to_string(),

            // === SYNC MESSAGES ===
            Message::RecordDelivered(filename) => format!("Entry for {} saved to vault", filename),
            Message::RecordQueuedOffline(filename) => format!("Entry for {} queued offline", filename),
            Message::RecordLost(filename, error) => format!("Entry for {} could not be persisted: {}", filename, error),
            Message::SyncedEntries(count) => format!("Synced {} offline entr{}", count, if *count == 1 { "y" } else { "ies" }),
            Message::SyncNothingPending => "Offline queue is empty".to_string(),
            Message::SyncPending(count) => format!("{} entr{} still pending sync", count, if *count == 1 { "y" } else { "ies" }),
            Message::SyncOffline => "Vault unreachable, entries kept in the offline queue".to_string(),
            Message::ConnectionOnline => "● Online".to_string(),
            Message::ConnectionOffline => "● Offline".to_string(),

            // === ENTRIES MESSAGES ===
            Message::EntriesHeader(employee) => format!("Time entries for {}", employee),
            Message::NoEntriesFound => "No entries found".to_string(),
            Message::EntriesExported(path) => format!("Entries exported to {}", path),
        };
        write!(f, "{}", text)
    }
}
