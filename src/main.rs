use anyhow::{Context, Result};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use person_filter::{print_users, DisplayConfig, PersonRegistry, UserCriteria};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DisplayConfig::from_env()?;
    let colorizer = config.colorizer();
    info!(version = person_filter::VERSION, color = ?config.color, "starting");

    let registry = PersonRegistry::sample();
    let users = registry.filter_users(&UserCriteria::new().age(23));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_users(&mut out, colorizer.as_ref(), "Users of age 23:", &users)
        .context("Failed to write to stdout")?;

    Ok(())
}
