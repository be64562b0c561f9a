//! The interactive tracking session.

use crate::api::VaultClient;
use crate::commands::login;
use crate::libs::config::Config;
use crate::libs::hotkeys::HotkeyDispatcher;
use crate::libs::messages::Message;
use crate::libs::shift::current_shift_label;
use crate::libs::sync_queue::SyncQueue;
use crate::libs::tracker::{SessionInfo, Tracker};
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkType {
    Employee,
    Contractor,
    Freelancer,
}

impl WorkType {
    fn label(self) -> &'static str {
        match self {
            WorkType::Employee => "Employee",
            WorkType::Contractor => "Contractor",
            WorkType::Freelancer => "Freelancer",
        }
    }
}

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Files to work through this session, in queue order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Work type stamped on every entry
    #[arg(short, long, value_enum, default_value_t = WorkType::Employee)]
    work_type: WorkType,
}

pub async fn cmd(track_args: TrackArgs) -> Result<()> {
    let Some(employee_name) = login::current_user() else {
        msg_bail_anyhow!(Message::NotLoggedIn);
    };
    let config = Config::read()?;
    let Some(vault_config) = config.vault else {
        msg_bail_anyhow!(Message::VaultNotConfigured);
    };
    let monitor = config.monitor.unwrap_or_default();
    let tracker_config = config.tracker.unwrap_or_default();

    let sync = SyncQueue::new(VaultClient::new(&vault_config))?;
    let session = SessionInfo {
        employee_name,
        work_type: track_args.work_type.label().to_string(),
        shift: current_shift_label().to_string(),
    };

    let mut tracker = Tracker::new(session, sync, &monitor, &tracker_config);
    for file in track_args.files {
        if !file.exists() {
            msg_warning!(format!("{} does not exist, skipping", file.display()));
            continue;
        }
        tracker.add_file(file);
    }
    if tracker.queue().items().is_empty() {
        msg_print!(Message::QueueEmpty);
        return Ok(());
    }

    HotkeyDispatcher::new(tracker.sender()).spawn();
    tracker.run().await
}
