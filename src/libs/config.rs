//! Configuration management for the traq application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and are organized as optional modules: the vault connection, the idle
//! monitor thresholds and the tracker session parameters. `traq init` runs
//! an interactive wizard over whichever modules the user selects; missing
//! modules fall back to defaults so a fresh install works untouched.

use super::data_storage::DataStorage;
use crate::api::vault::VaultConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module presented by the `init` wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Idle monitor thresholds.
///
/// The sampling period is fixed at 5 seconds; only the inactivity
/// threshold that triggers an auto-pause is configurable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Inactivity duration in seconds before the running item is
    /// auto-paused and an idle episode begins.
    pub idle_threshold: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig { idle_threshold: 60 }
    }
}

/// Tracking session parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Seconds between periodic offline queue flush attempts.
    pub flush_interval: u64,
    /// Window in seconds for the save-freshness warning before completion.
    pub freshness_window: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            flush_interval: 30,
            freshness_window: 60,
        }
    }
}

/// Root configuration object. Every module is optional so users only
/// configure what they use; unset modules are omitted from the JSON.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Remote vault connection for telemetry delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultConfig>,

    /// Idle detection thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    /// Tracking session parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
}

impl Config {
    /// Loads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!("Failed to resolve config path: {}", e))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!("Failed to resolve config path: {}", e))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Presents the available modules, pre-filling existing values as
    /// defaults, and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            VaultConfig::module(),
            ConfigModule {
                key: "monitor".to_string(),
                name: "Monitor".to_string(),
            },
            ConfigModule {
                key: "tracker".to_string(),
                name: "Tracker".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "vault" => {
                    config.vault = Some(VaultConfig::init(&config.vault).map_err(|e| anyhow::anyhow!("{}", e))?);
                }
                "monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,
                    });
                }
                "tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        flush_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptFlushInterval.to_string())
                            .default(default.flush_interval)
                            .interact_text()?,
                        freshness_window: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptFreshnessWindow.to_string())
                            .default(default.freshness_window)
                            .interact_text()?,
                    });
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
