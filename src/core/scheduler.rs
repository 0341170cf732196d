//! Cron-based scheduler driving the update pass

use crate::core::runtime::SignalRuntime;
use crate::error::ConfigError;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Cron expression firing every `interval_seconds`.
///
/// Cron fields reset at the top of each minute, hour and day, so only
/// intervals that divide evenly into the enclosing unit tick at a fixed
/// rate: divisors of 60 below a minute, whole minutes dividing 60, or whole
/// hours dividing 24. Anything else is rejected.
pub fn interval_to_cron(interval_seconds: u64) -> Result<String, ConfigError> {
    if interval_seconds == 0 {
        return Err(ConfigError::Invalid(
            "scheduler disabled: interval_seconds is 0".to_string(),
        ));
    }

    // Cron format: second minute hour day month weekday
    let expr = if interval_seconds < 60 && 60 % interval_seconds == 0 {
        format!("*/{} * * * * *", interval_seconds)
    } else if interval_seconds % 60 == 0 && interval_seconds < 3600 && 60 % (interval_seconds / 60) == 0 {
        format!("0 */{} * * * *", interval_seconds / 60)
    } else if interval_seconds % 3600 == 0 && 24 % (interval_seconds / 3600) == 0 {
        format!("0 0 */{} * * *", interval_seconds / 3600)
    } else {
        return Err(ConfigError::Invalid(format!(
            "interval of {}s cannot be scheduled at a fixed rate; use a divisor of 60s, \
             a whole number of minutes dividing 60 or a whole number of hours dividing 24",
            interval_seconds
        )));
    };
    Ok(expr)
}

/// Runs one update pass per tick. A pass always finishes before the next
/// tick is computed, so passes never overlap.
pub struct UpdateScheduler {
    runtime: Arc<SignalRuntime>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl UpdateScheduler {
    pub fn new(runtime: Arc<SignalRuntime>, interval_seconds: u64) -> Result<Self, ConfigError> {
        let cron_expr = interval_to_cron(interval_seconds)?;
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            ConfigError::Invalid(format!("invalid cron expression '{}': {}", cron_expr, e))
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            symbols = ?runtime.symbols(),
            "UpdateScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            runtime,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn start(&self) {
        let runtime = self.runtime.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("UpdateScheduler: started, waiting for next tick...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                };
                let now = chrono::Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }

                runtime.run_cycle().await;
            }
        });

        let mut h = self.handle.write().await;
        if let Some(previous) = h.replace(handle) {
            previous.abort();
        }
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("UpdateScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
