//! Monte Carlo driver: many independent cycles for one max story size.

use crate::config::SimConfig;
use crate::cycle::{run_cycle, Cycle};
use crate::error::{Result, SimError};
use crate::stats::{CycleSummary, SimulationResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

/// Seed bytes for one cycle's generator. The run seed, max story size and
/// iteration each fill their own bytes of the key, so every cycle gets its
/// own stream and adjacent run seeds share no cycles.
pub fn cycle_key(seed: u64, max_story_size: u32, iteration: usize) -> [u8; 32] {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key[8..12].copy_from_slice(&max_story_size.to_le_bytes());
    key[12..20].copy_from_slice(&(iteration as u64).to_le_bytes());
    key
}

/// Generator for one cycle.
pub fn cycle_rng(seed: u64, max_story_size: u32, iteration: usize) -> StdRng {
    StdRng::from_seed(cycle_key(seed, max_story_size, iteration))
}

/// Run a single cycle exactly as `run_simulation` would for `iteration`.
pub fn run_iteration(config: &SimConfig, max_story_size: u32, iteration: usize) -> Result<Cycle> {
    let mut rng = cycle_rng(config.seed, max_story_size, iteration);
    run_cycle(&mut rng, config, max_story_size)
}

/// Run `config.iterations` cycles and aggregate their summaries.
pub fn run_simulation(config: &SimConfig, max_story_size: u32) -> Result<SimulationResult> {
    config.validate()?;
    if let Some(smallest) = config.smallest_size() {
        if max_story_size < smallest {
            return Err(SimError::InvalidConfig(format!(
                "max story size {} is below the smallest story size {}",
                max_story_size, smallest
            )));
        }
    }

    let summary_of =
        |i: usize| run_iteration(config, max_story_size, i).map(|cycle| cycle.summary);

    let summaries: Vec<CycleSummary> = if config.parallel {
        (0..config.iterations)
            .into_par_iter()
            .map(summary_of)
            .collect::<Result<_>>()?
    } else {
        (0..config.iterations)
            .map(summary_of)
            .collect::<Result<_>>()?
    };

    let result = SimulationResult::from_summaries(max_story_size, config.sprints, &summaries)?;
    info!(
        max_story_size,
        iterations = config.iterations,
        mean_velocity = result.mean_velocity,
        mean_accuracy = result.mean_accuracy,
        "simulation complete"
    );
    Ok(result)
}
