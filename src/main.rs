//! Main entry point for the Cloud Translator demo CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloud_translator::cli::commands::{self, Commands};
use cloud_translator::{ClientConfig, TranslationClient, TranslationError};

/// Cloud Translator - translate, detect and list languages from the terminal
#[derive(Parser, Debug)]
#[command(name = "cloud-translator", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to TRANSLATE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// API endpoint override
    #[arg(long)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("cloud_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    // CLI flags override the environment
    let config = ClientConfig::from_env_with(args.api_key, args.endpoint)?;

    let client = TranslationClient::new(config)?.with_error_handler(|e: &TranslationError| {
        tracing::warn!("Request failed ({:?}): {}", e.kind(), e);
    });

    commands::run(&client, command).await
}
