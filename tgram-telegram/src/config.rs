//! Bot configuration: token, default bot profile and its channel, API URL, storage roots, log path.
//! Loaded from environment variables (call `dotenvy::dotenv()` first).

use std::env;

use anyhow::Result;
use tgram_core::Storage;

pub const DEFAULT_BOT_NAME: &str = "default";

/// Storage roots for the default and public disks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// STORAGE_ROOT
    pub root: String,
    /// STORAGE_PUBLIC_ROOT, defaults to `<root>/public`
    pub public_root: String,
}

impl StorageConfig {
    /// Loads storage roots from the environment. Needs no bot token.
    pub fn from_env() -> Self {
        let root = env::var("STORAGE_ROOT").unwrap_or_else(|_| "storage/app".to_string());
        let public_root = env::var("STORAGE_PUBLIC_ROOT")
            .unwrap_or_else(|_| format!("{}/public", root.trim_end_matches('/')));
        Self { root, public_root }
    }

    pub fn storage(&self) -> Storage {
        Storage::new(&self.root, &self.public_root)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: "storage/app".to_string(),
            public_root: "storage/app/public".to_string(),
        }
    }
}

/// A named bot profile. Only the default profile is populated from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotProfile {
    pub name: String,
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_DEFAULT_BOT plus TELEGRAM_CHANNEL_ID
    pub default_bot: BotProfile,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    pub storage: StorageConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let name = env::var("TELEGRAM_DEFAULT_BOT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string());
        let channel_id = env::var("TELEGRAM_CHANNEL_ID")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/tgram.log".to_string());

        Ok(Self {
            bot_token,
            default_bot: BotProfile { name, channel_id },
            telegram_api_url,
            storage: StorageConfig::from_env(),
            log_file,
        })
    }

    /// Config with the given token and defaults everywhere else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            default_bot: BotProfile {
                name: DEFAULT_BOT_NAME.to_string(),
                channel_id: None,
            },
            telegram_api_url: None,
            storage: StorageConfig::default(),
            log_file: "logs/tgram.log".to_string(),
        }
    }

    /// Fails if the API URL is set but does not parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Channel of the default bot profile.
    pub fn channel_id(&self) -> Option<&str> {
        self.default_bot.channel_id.as_deref()
    }

    pub fn storage(&self) -> Storage {
        self.storage.storage()
    }
}
