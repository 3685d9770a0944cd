use crate::model::simulation::Simulation;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop once the simulation reaches this tick. Runs forever when `None`.
    pub ticks: Option<u64>,
    /// Write every executed tick's report to `out` as one JSON line.
    pub json: bool,
    /// Sleep between ticks to hold `target_tps`.
    pub paced: bool,
}

/// Drives `sim` until the tick limit or extinction. Returns the final tick.
pub fn run<W: Write>(sim: &mut Simulation, opts: &RunOptions, out: &mut W) -> anyhow::Result<u64> {
    let period = Duration::from_secs_f64(1.0 / sim.config().target_tps as f64);

    loop {
        if opts.ticks.is_some_and(|limit| sim.tick() >= limit) {
            break;
        }

        let started = Instant::now();
        let report = sim.step()?;

        if opts.json && !report.paused {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }

        if report.population == 0 && sim.config().world.min_population == 0 {
            tracing::info!(tick = report.tick, "Population extinct");
            break;
        }

        // a paused loop would otherwise spin
        if opts.paced || report.paused {
            if let Some(rest) = period.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    out.flush()?;
    sim.metrics().log_summary();
    Ok(sim.tick())
}
