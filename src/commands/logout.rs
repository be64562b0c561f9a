//! Clears the cached session and credentials.

use crate::commands::login;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    login::clear_session()?;
    msg_success!(Message::LogoutSuccess);
    Ok(())
}
