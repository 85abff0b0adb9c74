//! # newgle
//!
//! Search news from the past week by keyword and browse the results as
//! cards, ten at a time, opening any of them in the browser.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... newgle              # interactive session
//! NEWS_API_KEY=... newgle "rust"       # print the first page and exit
//! ```
//!
//! ## Architecture
//!
//! Each search runs the same pipeline:
//! 1. **Query**: build the request with a 7-day lookback floor
//! 2. **Fetch**: one GET against the news endpoint
//! 3. **Filter**: drop retracted articles, keeping response order
//! 4. **Page**: show the first 10; "load more" adds 10 at a time
//!
//! A failed search is logged and shows as an empty list.

use clap::Parser;
use std::error::Error;
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod filter;
mod models;
mod outputs;
mod page;
mod query;
mod screen;
mod session;
#[cfg(test)]
mod testing;
mod utils;

use api::NewsApiClient;
use cli::Cli;
use config::Settings;
use screen::{SearchScreen, SystemOpener};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so they never mix with the cards on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(query = ?args.query, config = ?args.config, json = args.json, "Parsed CLI arguments");

    let settings = Settings::resolve(&args).await?;
    info!(?settings, "Resolved settings");

    let client = NewsApiClient::new(settings.timeout)?;
    let mut screen = SearchScreen::new(client, SystemOpener, settings.endpoint, settings.api_key);

    match args.query {
        Some(query) => {
            screen.on_submit(&query).await;
            let page = session::render_page(screen.state(), args.json, false)?;
            let mut stdout = io::stdout();
            stdout.write_all(page.as_bytes()).await?;
            stdout.flush().await?;
        }
        None => {
            session::run(&mut screen, BufReader::new(io::stdin()), io::stdout(), args.json).await?;
        }
    }

    info!("Session finished");
    Ok(())
}
