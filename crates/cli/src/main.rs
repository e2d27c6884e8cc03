//! Front desk console entry point.

mod config;
mod input;
mod menu;
mod render;

use anyhow::Result;
use domain::Directory;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(name = %config.name, "starting front desk console");

    let mut directory = Directory::new(config.name.clone());
    menu::run(&mut directory)
}
