mod bot;
mod config;
mod data;
mod error;
mod model;
mod platform;
mod scheduler;
mod service;
mod sheets;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, scheduler::observer_expiry};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("racespot_livebot=info,serenity=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_state(&config, db)?;

    tracing::info!("Starting RaceSpot live bot");

    // Start reaction observer expiry scheduler
    let scheduler_observers = state.observers.clone();
    tokio::spawn(async move {
        if let Err(e) = observer_expiry::start_scheduler(scheduler_observers).await {
            tracing::error!("Observer expiry scheduler error: {}", e);
        }
    });

    bot::start::start_bot(&config, state).await
}
