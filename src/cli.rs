//! Command-line interface definitions for newgle.
//!
//! Every option can also come from an environment variable or the YAML
//! config file; see [`crate::config`] for how the layers combine.

use clap::Parser;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Interactive session, key from the environment
/// NEWS_API_KEY=... newgle
///
/// # One-shot search, first page as JSON
/// newgle --api-key ... --json "rust language"
///
/// # Settings from a file
/// newgle -c ~/.config/newgle.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search once for this query, print the first page and exit
    pub query: Option<String>,

    /// News API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint URL
    #[arg(long, env = "NEWS_API_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print results as JSON instead of cards
    #[arg(short, long)]
    pub json: bool,
}
