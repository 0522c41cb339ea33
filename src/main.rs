mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let db = startup::connect_to_database(&config)
        .await
        .inspect_err(|e| tracing::error!("Failed to prepare database: {}", e))?;

    bot::start::start_bot(&config, db)
        .await
        .inspect_err(|e| tracing::error!("Discord bot stopped: {}", e))?;

    Ok(())
}
