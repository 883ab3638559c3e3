mod cli;
mod config;
mod domain;
mod handlers;
mod infrastructure;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::FetchConfig;

// Diagnostics go to standard output and leave the exit code at 0, matching
// what existing callers of this tool scrape. Only a serialization failure
// after a successful fetch exits non-zero.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(config) = FetchConfig::from_cli(cli)? else {
        println!("You must specify a secret name to fetch");
        return Ok(());
    };

    let client = match infrastructure::session::resolve_client(&config).await {
        Ok(client) => client,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    handlers::fetch::fetch_and_render(&client, &config).await
}
