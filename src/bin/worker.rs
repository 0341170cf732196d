//! fxsignal Worker
//!
//! Polls a quote source on a fixed interval and keeps a prediction per
//! instrument up to date. Quotes are replayed from the JSON file named by
//! `QUOTES_FILE` (`{ "EUR/USD": [1.1, null, ...] }`).

use dotenvy::dotenv;
use fxsignal::config::{get_environment, Config};
use fxsignal::core::runtime::SignalRuntime;
use fxsignal::core::scheduler::UpdateScheduler;
use fxsignal::logging;
use fxsignal::metrics::Metrics;
use fxsignal::services::market_data::{QuoteSource, ReplayQuoteSource};
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = get_environment();
    info!("Starting fxsignal Worker");
    info!(environment = %env, "Environment");

    let quotes_file = env::var("QUOTES_FILE").map_err(|_| "QUOTES_FILE must point to a replay file")?;
    let source = ReplayQuoteSource::from_json_file(&quotes_file)
        .map_err(|e| format!("Failed to load {}: {}", quotes_file, e))?;

    // Without SYMBOLS, evaluate every symbol the replay file carries
    let replay_symbols = source.symbols().join(",");
    let config = Config::from_lookup(|key| match env::var(key) {
        Ok(value) => Some(value),
        Err(_) if key == "SYMBOLS" => Some(replay_symbols.clone()),
        Err(_) => None,
    })?;
    let interval = config.runtime.evaluation_interval_seconds;

    if config.runtime.symbols.is_empty() {
        warn!("No symbols configured - nothing will be evaluated");
    } else {
        info!(symbols = ?config.runtime.symbols, "Symbols: {}", config.runtime.symbols.join(", "));
    }
    info!(interval = interval, "Signal evaluation: every {} seconds", interval);

    let metrics = Arc::new(Metrics::new()?);
    let source: Arc<dyn QuoteSource> = Arc::new(source);
    let runtime = Arc::new(SignalRuntime::new(config, source).with_metrics(metrics.clone()));

    let scheduler = UpdateScheduler::new(runtime.clone(), interval)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;

    info!("Shutting down worker...");
    scheduler.stop().await;

    for (symbol, prediction) in runtime.predictions().await {
        info!(
            symbol = %symbol,
            trend = %prediction.trend,
            confidence = prediction.confidence,
            "Final prediction: {}",
            serde_json::to_string(prediction.as_ref())?
        );
    }
    info!("Metrics:\n{}", metrics.render());
    info!("Worker stopped");

    Ok(())
}
