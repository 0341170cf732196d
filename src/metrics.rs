//! Prometheus metrics for the update loop

use prometheus::{Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub updates_total: IntCounter,
    pub updates_skipped_total: IntCounter,
    pub instruments_tracked: Gauge,
    pub cycle_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let updates_total = IntCounter::new(
            "fxsignal_updates_total",
            "Observations applied to the engine",
        )?;
        let updates_skipped_total = IntCounter::new(
            "fxsignal_updates_skipped_total",
            "Instrument updates skipped (missing or rejected quotes)",
        )?;
        let instruments_tracked = Gauge::new(
            "fxsignal_instruments_tracked",
            "Instruments with engine state",
        )?;
        let cycle_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "fxsignal_cycle_duration_seconds",
                "Duration of one update pass",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )?;

        registry.register(Box::new(updates_total.clone()))?;
        registry.register(Box::new(updates_skipped_total.clone()))?;
        registry.register(Box::new(instruments_tracked.clone()))?;
        registry.register(Box::new(cycle_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            updates_total,
            updates_skipped_total,
            instruments_tracked,
            cycle_duration_seconds,
        })
    }

    /// Text exposition format
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::warn!(error = %e, "Metrics: failed to encode");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
