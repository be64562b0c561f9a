//! Manual flush of the offline queue.

use crate::api::VaultClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::sync_queue::SyncQueue;
use crate::{msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(vault_config) = config.vault else {
        msg_bail_anyhow!(Message::VaultNotConfigured);
    };

    let mut queue = SyncQueue::new(VaultClient::new(&vault_config))?;
    if queue.pending_count() == 0 {
        msg_info!(Message::SyncNothingPending);
        return Ok(());
    }

    let synced = queue.flush().await?;
    if queue.is_online() {
        msg_info!(Message::ConnectionOnline);
    } else {
        msg_info!(Message::ConnectionOffline);
    }
    if synced > 0 {
        msg_success!(Message::SyncedEntries(synced));
    }

    let remaining = queue.pending_count();
    if remaining > 0 {
        if !queue.is_online() {
            msg_warning!(Message::SyncOffline);
        }
        msg_warning!(Message::SyncPending(remaining));
    }
    Ok(())
}
