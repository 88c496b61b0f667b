use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use velocity_sim::output;
use velocity_sim::simulation::{run_iteration, run_simulation};
use velocity_sim::sweep::SweepEngine;
use velocity_sim::{Result, SimConfig};

#[derive(Parser)]
#[command(
    name = "velocity-sim",
    about = "Monte Carlo simulator for sprint velocity prediction accuracy"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ConfigArgs {
    /// TOML config file; missing keys take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Capacity planned for the first sprint
    #[arg(long)]
    initial_velocity: Option<u32>,

    /// Sprints per cycle
    #[arg(long)]
    sprints: Option<usize>,

    /// Cycles per max story size
    #[arg(long)]
    iterations: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run iterations on a single thread
    #[arg(long)]
    serial: bool,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(v) = self.initial_velocity {
            config.initial_velocity = v;
        }
        if let Some(v) = self.sprints {
            config.sprints = v;
        }
        if let Some(v) = self.iterations {
            config.iterations = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if self.serial {
            config.parallel = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation per max story size and report each
    Sweep {
        #[command(flatten)]
        config: ConfigArgs,

        /// Comma-separated max story sizes (default: all sizes, largest first)
        #[arg(long, value_delimiter = ',')]
        max_sizes: Vec<u32>,

        /// Directory for results.csv, results.json and config.toml
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Run a single simulation for one max story size
    Run {
        #[command(flatten)]
        config: ConfigArgs,

        #[arg(long)]
        max_story_size: u32,
    },

    /// Run one cycle and write its per-sprint trace to CSV
    Trace {
        #[command(flatten)]
        config: ConfigArgs,

        #[arg(long)]
        max_story_size: u32,

        /// Which iteration's random stream to replay
        #[arg(long, default_value = "0")]
        iteration: usize,

        #[arg(long, default_value = "output/trace.csv")]
        output: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn run_sweep(config: SimConfig, max_sizes: Vec<u32>, output_dir: Option<PathBuf>) -> Result<()> {
    let engine = SweepEngine::new(config);
    let sizes = if max_sizes.is_empty() {
        engine.default_max_sizes()
    } else {
        max_sizes
    };

    let bar = ProgressBar::new(sizes.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} max story sizes {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let results = engine.run_with(&sizes, |r| {
        bar.set_message(format!("(last: {})", r.max_story_size));
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    println!(
        "{} sprints x {} iterations, initial velocity {}",
        engine.config.sprints, engine.config.iterations, engine.config.initial_velocity
    );
    output::print_table(&results);

    if let Some(dir) = output_dir {
        output::save_all(&results, &engine.config, &dir)?;
        info!(dir = %dir.display(), "saved sweep results");
    }
    Ok(())
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Sweep {
            config,
            max_sizes,
            output_dir,
        } => run_sweep(config.resolve()?, max_sizes, output_dir),

        Commands::Run {
            config,
            max_story_size,
        } => {
            let config = config.resolve()?;
            let result = run_simulation(&config, max_story_size)?;
            output::print_table(&[result]);
            Ok(())
        }

        Commands::Trace {
            config,
            max_story_size,
            iteration,
            output,
        } => {
            let config = config.resolve()?;
            let cycle = run_iteration(&config, max_story_size, iteration)?;
            output::save_sprints_csv(&cycle, &output)?;
            println!(
                "Saved {} sprints to {} (mean velocity {:.1}, mean accuracy {:.1}%)",
                cycle.sprints.len(),
                output.display(),
                cycle.summary.mean_velocity,
                cycle.summary.mean_accuracy
            );
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
