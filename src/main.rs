use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use mangagen::api::ComicClient;
use mangagen::config::Config;
use mangagen::logging::init_tracing;
use mangagen::ui;

#[derive(Parser, Debug)]
#[command(name = "mangagen")]
#[command(version)]
#[command(about = "Turn a product name and pitch into a four-panel comic")]
struct Args {
    /// Generation endpoint URL (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(&args)?;
    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    let client = ComicClient::new(&config.api).context("Failed to build HTTP client")?;
    tracing::info!(endpoint = client.endpoint(), "Starting mangagen");

    ui::runtime::run(&config, client, runtime.handle())?;

    drop(_enter);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Exited cleanly");
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    match &args.endpoint {
        Some(endpoint) => Ok(config.with_endpoint(endpoint)?),
        None => Ok(config),
    }
}
