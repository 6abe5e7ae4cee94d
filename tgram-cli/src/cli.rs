//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tgram_telegram::TelegramConfig;

#[derive(Parser)]
#[command(name = "tgram")]
#[command(about = "Telegram request builder CLI: test fixtures and operational checks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every send/edit/pin/delete scenario against the default bot's channel.
    Test {
        /// Overrides BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// Overrides TELEGRAM_CHANNEL_ID.
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Create the upload fixtures on the public disk, or delete them with --clean.
    TestFiles {
        #[arg(long)]
        clean: bool,
    },
}

/// Load TelegramConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<TelegramConfig> {
    let config = TelegramConfig::from_env(token)?;
    config.validate()?;
    Ok(config)
}
