use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::observer::ReactionObserverRegistry};

/// Starts the reaction observer expiry scheduler
///
/// Runs at the top of every hour and drops observers whose five-day lifetime has passed,
/// so messages posted long ago stop holding memory. Expired observers are already ignored
/// at lookup; this only reclaims them.
///
/// # Arguments
/// - `observers`: Registry shared with the bot's reaction handler
pub async fn start_scheduler(observers: ReactionObserverRegistry) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let observers = observers.clone();

        Box::pin(async move {
            let pruned = observers.prune_expired().await;
            if pruned > 0 {
                tracing::info!("Detached {} expired reaction observers", pruned);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Observer expiry scheduler started");

    Ok(())
}
