use std::time::Duration;

use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::cooldown::CooldownService};

/// Starts the cooldown sweep scheduler
///
/// The sweep runs every `interval` (the cooldown duration) for the lifetime of the
/// process and drops cooldown entries that fell out of the window. An entry can
/// therefore outlive its window by up to one interval, which only delays pruning.
///
/// # Arguments
/// - `cooldown`: Cooldown tracker to prune
/// - `interval`: Time between two sweeps
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(
    cooldown: CooldownService,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let cooldown = cooldown.clone();

        Box::pin(async move {
            sweep_cooldowns(&cooldown, Utc::now().timestamp_millis()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Cooldown sweep scheduler started, running every {} ms",
        interval.as_millis()
    );

    Ok(scheduler)
}

/// Prunes expired cooldown entries at time `now`
///
/// # Returns
/// - `usize` - Number of entries removed
pub async fn sweep_cooldowns(cooldown: &CooldownService, now: i64) -> usize {
    let removed = cooldown.sweep(now).await;

    if removed > 0 {
        tracing::debug!("Cooldown sweep removed {} expired entries", removed);
    }

    removed
}
