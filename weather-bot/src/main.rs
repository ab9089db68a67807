//! Binary entry point for the Telegram weather bot.

use anyhow::Result;
use clap::Parser;
use weather_bot::{run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    if dotenvy::dotenv().is_err() {
        eprintln!("⚠️ .env not found, relying on the process environment");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
