mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use std::sync::Arc;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing()?;

    let config = Arc::new(Config::from_env()?);

    tracing::info!("Starting {}", config.brand_name);

    let client = bot::start::init_bot(config).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
