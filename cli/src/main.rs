mod parse_html;
mod scrape;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Pantry CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL and print the recipe found on it as JSON
    Scrape {
        /// Page to scrape
        url: String,
        /// Give up after this many seconds (default: no timeout)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Parse a saved HTML page and print the recipe found in it as JSON
    ParseHtml {
        /// Path to the HTML file
        file: PathBuf,
        /// URL the page was saved from
        #[arg(long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { url, timeout } => {
            scrape::scrape(&url, timeout).await?;
        }
        Commands::ParseHtml { file, url } => {
            parse_html::parse_html(&file, &url)?;
        }
    }

    Ok(())
}
