//! Metrics collection and logging setup for the simulation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Running counters for a simulation, summarised every `log_interval` ticks.
pub struct Metrics {
    tick_count: AtomicU64,
    population: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    injected: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            injected: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick and its population changes.
    pub fn record_tick(
        &self,
        duration: Duration,
        population: usize,
        births: usize,
        deaths: usize,
        injected: usize,
    ) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.population.store(population as u64, Ordering::Relaxed);
        self.births.fetch_add(births as u64, Ordering::Relaxed);
        self.deaths.fetch_add(deaths as u64, Ordering::Relaxed);
        self.injected.fetch_add(injected as u64, Ordering::Relaxed);

        if tick % self.log_interval == 0 {
            tracing::info!(
                tick = tick,
                population = population,
                births = self.total_births(),
                deaths = self.total_deaths(),
                injected = self.total_injected(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_injected(&self) -> u64 {
        self.injected.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the run totals.
    pub fn log_summary(&self) {
        let elapsed = self.elapsed();
        let ticks = self.tick_count();
        let tps = if elapsed.as_secs_f64() > 0.0 {
            ticks as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        tracing::info!(
            ticks = ticks,
            population = self.population(),
            births = self.total_births(),
            deaths = self.total_deaths(),
            injected = self.total_injected(),
            elapsed_ms = elapsed.as_millis() as u64,
            tps = tps,
            "Simulation finished"
        );
    }
}

/// Installs the global fmt subscriber, writing to stderr so stdout stays free
/// for reports. `RUST_LOG` wins over `level`. Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
