use anyhow::{Context, Result};
use clap::Parser;
use neurotile_lib::app::{self, RunOptions};
use neurotile_lib::model::config::AppConfig;
use neurotile_lib::model::metrics::init_logging;
use neurotile_lib::model::terrain::ValueNoise;
use neurotile_lib::Simulation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path; defaults are used when it does not exist
    #[arg(short, long, default_value = "neurotile.toml")]
    config: String,

    /// Stop after this many ticks and run as fast as possible
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the world seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not read pause/close commands from stdin
    #[arg(long)]
    headless: bool,

    /// Print every tick report to stdout as a JSON line
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut sim = Simulation::new(config, &ValueNoise::default())
        .context("Failed to start simulation")?;
    tracing::info!(seed = sim.seed(), "Run with --seed {} to reproduce", sim.seed());

    if !args.headless {
        app::spawn_console_reader(sim.pause_handle())
            .context("Failed to start console reader")?;
        tracing::info!("Type 'pause' to toggle pause, 'close' to stop reading commands");
    }

    let opts = RunOptions {
        ticks: args.ticks,
        json: args.json,
        paced: args.ticks.is_none(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&mut sim, &opts, &mut out)?;

    let stats = sim.stats();
    tracing::info!(
        population = stats.population,
        mean_size = stats.mean_size,
        mean_generation = stats.mean_generation,
        max_generation = stats.max_generation,
        "Final population"
    );
    Ok(())
}
