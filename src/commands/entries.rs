//! Recorded time entries report.

use crate::api::{RemoteStore, VaultClient};
use crate::commands::login;
use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EntriesArgs {
    /// Show entries for every employee, not only the logged-in one
    #[arg(short, long)]
    all: bool,

    /// Export the entries to a CSV file instead of printing a table
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

pub async fn cmd(entries_args: EntriesArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(vault_config) = config.vault else {
        msg_bail_anyhow!(Message::VaultNotConfigured);
    };

    let employee = if entries_args.all { None } else { login::current_user() };
    if !entries_args.all && employee.is_none() {
        msg_bail_anyhow!(Message::NotLoggedIn);
    }

    let client = VaultClient::new(&vault_config);
    let entries = client.query(employee.as_deref()).await?;
    if entries.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    if let Some(path) = entries_args.csv {
        let mut writer = csv::Writer::from_path(&path)?;
        for entry in &entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        msg_success!(Message::EntriesExported(path.display().to_string()));
        return Ok(());
    }

    msg_print!(Message::EntriesHeader(employee.unwrap_or_else(|| "all employees".to_string())));

    let mut table = Table::new();
    table.add_row(row!["COMPLETED", "EMPLOYEE", "CLIENT", "FILE", "TIME", "PAUSES", "IDLE", "SHIFT"]);
    for entry in &entries {
        table.add_row(row![
            entry.completed_at,
            entry.employee_name,
            entry.client_name,
            entry.filename,
            format_duration(entry.time_spent_seconds),
            entry.pause_count,
            format!("{}s", entry.total_idle_seconds),
            entry.shift,
        ]);
    }
    table.printstd();
    Ok(())
}
