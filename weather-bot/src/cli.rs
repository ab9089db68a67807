//! Command-line interface for the bot binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weather-bot")]
#[command(about = "Telegram weather bot for Russian cities", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
