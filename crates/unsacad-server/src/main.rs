//! Unsacad backend server binary.

mod startup;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = unsacad_config::load().context("failed to load configuration")?;

    startup::init_logging(&config.logging);
    startup::run(config).await
}
