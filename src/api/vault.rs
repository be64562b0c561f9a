use crate::api::RemoteStore;
use crate::libs::config::ConfigModule;
use crate::libs::sync_queue::SyncRecord;
use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::error::Error;

const TIME_ENTRIES_PATH: &str = "rest/v1/time_entries";
const APP_USER_PATH: &str = "rest/v1/app_user";

/// Client-side password derivation parameters. Must match what existing
/// `app_user` rows were written with.
const BASE_SALT: &str = "schl_time_tracker_2024";
const HASH_ROUNDS: usize = 1000;

#[derive(Deserialize)]
struct UserRow {
    username: String,
}

pub struct VaultClient {
    client: Client,
    config: VaultConfig,
}

impl VaultClient {
    pub fn new(config: &VaultConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn table_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&self.config.api_key)?);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))?);
        Ok(headers)
    }

    /// Iterated SHA-256 with a per-user salt. Deliberately the same scheme
    /// the desktop clients used, so accounts remain valid across tools.
    pub fn hash_password(username: &str, password: &str) -> String {
        let user_salt_digest = Sha256::digest(format!("{}{}", username, BASE_SALT).as_bytes());
        let user_salt: String = hex::encode(user_salt_digest).chars().take(16).collect();

        let mut combined = format!("{}{}{}", password, user_salt, BASE_SALT);
        for _ in 0..HASH_ROUNDS {
            combined = hex::encode(Sha256::digest(combined.as_bytes()));
        }
        combined
    }

    /// Checks credentials against the `app_user` table and returns the
    /// confirmed username.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let hashed = Self::hash_password(username, password);
        let url = self.table_url(APP_USER_PATH);
        let res = self
            .client
            .get(url)
            .headers(self.headers()?)
            .query(&[
                ("username", format!("eq.{}", username)),
                ("password", format!("eq.{}", hashed)),
                ("select", "username".to_string()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(anyhow!("Login request failed with status {}", res.status()));
        }
        let rows: Vec<UserRow> = res.json().await?;
        match rows.into_iter().next() {
            Some(row) => Ok(row.username),
            None => Err(anyhow!("Invalid username or password")),
        }
    }

    /// Creates a new `app_user` row. Fails when the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let url = self.table_url(APP_USER_PATH);
        let existing = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(&[("username", format!("eq.{}", username)), ("select", "username".to_string())])
            .send()
            .await?;
        let rows: Vec<UserRow> = existing.json().await?;
        if !rows.is_empty() {
            return Err(anyhow!("Username already exists"));
        }

        let hashed = Self::hash_password(username, password);
        let body = serde_json::json!({
            "username": username,
            "password": hashed,
            "created_at": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        });
        let res = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(anyhow!("Registration failed with status {}", res.status()))
        }
    }
}

impl RemoteStore for VaultClient {
    async fn insert(&self, record: &SyncRecord) -> Result<()> {
        let res = self
            .client
            .post(self.table_url(TIME_ENTRIES_PATH))
            .headers(self.headers()?)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(anyhow!("Insert rejected with status {}", res.status()))
        }
    }

    async fn probe(&self) -> bool {
        let Ok(headers) = self.headers() else {
            return false;
        };
        self.client
            .get(self.table_url(TIME_ENTRIES_PATH))
            .headers(headers)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await
            .map(|res| res.status().is_success())
            .unwrap_or(false)
    }

    async fn query(&self, employee: Option<&str>) -> Result<Vec<SyncRecord>> {
        let mut request = self
            .client
            .get(self.table_url(TIME_ENTRIES_PATH))
            .headers(self.headers()?)
            .query(&[("select", "*"), ("order", "completed_at.desc")]);
        if let Some(name) = employee {
            request = request.query(&[("employee_name", format!("eq.{}", name))]);
        }

        let res = request.send().await?;
        if !res.status().is_success() {
            return Err(anyhow!("Query failed with status {}", res.status()));
        }
        Ok(res.json().await?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VaultConfig {
    pub api_url: String,
    pub api_key: String,
}

impl VaultConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "vault".to_string(),
            name: "Vault".to_string(),
        }
    }

    pub fn init(config: &Option<VaultConfig>) -> Result<Self, Box<dyn Error>> {
        let config = config
            .clone()
            .or(Some(Self {
                api_url: "".to_string(),
                api_key: "".to_string(),
            }))
            .unwrap();
        println!("Vault settings");
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the vault API URL")
                .default(config.api_url)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the vault API key")
                .default(config.api_key)
                .interact_text()?,
        })
    }
}
