use anyhow::Context;
use clap::Parser;
use wort_config::Config;

mod cli;
mod client;
mod display;
mod logging;

use self::cli::Cli;
use self::client::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    let client = Client::from_config(&config, !cli.no_cache)
        .context("Failed to set up the downloader")?;

    let record = client
        .search(&cli.word, cli.hint())
        .await
        .with_context(|| format!("Lookup of {:?} failed", cli.word))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", display::render(&record, cli.tables));
    }

    Ok(())
}
