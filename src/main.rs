#![warn(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::FmtSubscriber;
use wargate::{Cli, Config, app};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let mut config = Config::load_or_init()?;
    config.apply_env_overrides();
    cli.apply_to(&mut config);
    config.validate()?;

    app::dispatch(cli, config).await
}
