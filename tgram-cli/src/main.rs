//! tgram CLI: create or clean upload fixtures, run operational checks against a channel.
//! Config from env (.env supported) and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use tgram::Telegram;
use tgram_cli::fixtures::{clean_test_files, create_test_files};
use tgram_cli::{load_config, render_table, run_scenarios, Cli, Commands};
use tgram_core::init_tracing;
use tgram_telegram::StorageConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Test { token, channel } => handle_test(token, channel).await,
        Commands::TestFiles { clean } => handle_test_files(clean),
    }
}

/// Handle the test-files command. Uses a console-only subscriber; no token needed.
fn handle_test_files(clean: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    let storage = StorageConfig::from_env().storage();
    let public = storage.public();
    if clean {
        clean_test_files(public)?;
        println!("Test files cleaned.");
    } else {
        let files = create_test_files(public)?;
        println!("Test files created or kept: {}", files.join(", "));
    }
    Ok(())
}

/// Handle the test command: fixtures, scenarios, cleanup, results table.
async fn handle_test(token: Option<String>, channel: Option<String>) -> Result<()> {
    let mut config = load_config(token)?;
    init_tracing(&config.log_file)?;

    let channel = channel
        .or_else(|| config.channel_id().map(str::to_string))
        .context("No channel configured: set TELEGRAM_CHANNEL_ID or pass --channel")?;

    let public = config.storage().public().clone();
    let files = create_test_files(&public).context("Create test files on the public disk")?;
    info!(files = ?files, "Test files ready");

    // Fixtures live on the public disk, so photo/document paths resolve there as well.
    config.storage.root = config.storage.public_root.clone();
    let mut telegram = Telegram::from_config(&config)?;

    info!(bot = %config.default_bot.name, %channel, "Running Telegram scenarios");
    let results = run_scenarios(&mut telegram, &channel).await;

    clean_test_files(&public).context("Clean test files")?;

    println!("{}", render_table(&results));
    info!(results = ?results, "Telegram tests results");
    Ok(())
}
