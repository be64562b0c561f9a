//! Vault authentication.
//!
//! The confirmed username is cached in a session file and stamped on every
//! telemetry record as `employee_name`. The password itself only lives in
//! the encrypted secret cache, never in the session file.

use crate::api::VaultClient;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::fs;

const SESSION_FILE: &str = ".vault_session";
const SECRET_FILE: &str = ".vault_secret";

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Create a new vault account instead of logging in
    #[arg(short, long)]
    register: bool,
}

/// The logged-in username, if a session file exists.
pub fn current_user() -> Option<String> {
    let path = DataStorage::new().get_path(SESSION_FILE).ok()?;
    let username = fs::read_to_string(path).ok()?;
    let username = username.trim().to_string();
    if username.is_empty() {
        None
    } else {
        Some(username)
    }
}

pub(crate) fn session_secret() -> Secret {
    Secret::new(SECRET_FILE, &Message::PromptPassword.to_string())
}

fn save_session(username: &str) -> Result<()> {
    let path = DataStorage::new()
        .get_path(SESSION_FILE)
        .map_err(|e| anyhow::anyhow!("Failed to resolve session path: {}", e))?;
    fs::write(path, username)?;
    Ok(())
}

pub(crate) fn clear_session() -> Result<()> {
    if let Ok(path) = DataStorage::new().get_path(SESSION_FILE) {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    session_secret().forget()?;
    Ok(())
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(vault_config) = config.vault else {
        msg_bail_anyhow!(Message::VaultNotConfigured);
    };
    let client = VaultClient::new(&vault_config);

    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptUsername.to_string())
        .interact_text()?;
    let password = session_secret().get_or_prompt()?;

    if login_args.register {
        match client.register(&username, &password).await {
            Ok(()) => msg_success!(Message::RegisterSuccess(username.clone())),
            Err(e) => {
                session_secret().forget()?;
                msg_error!(Message::RegisterFailed(e.to_string()));
                return Err(e);
            }
        }
    }

    match client.login(&username, &password).await {
        Ok(confirmed) => {
            save_session(&confirmed)?;
            msg_success!(Message::LoginSuccess(confirmed));
            Ok(())
        }
        Err(e) => {
            // A wrong cached password would otherwise fail every retry.
            session_secret().forget()?;
            msg_error!(Message::LoginFailed(e.to_string()));
            Err(e)
        }
    }
}
