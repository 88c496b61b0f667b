//! Cycle runner: one simulated multi-sprint history.

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::executor::{execute, Sprint};
use crate::planner::plan;
use crate::stats::CycleSummary;
use rand::Rng;
use tracing::debug;

/// A completed cycle: its sprints in order plus their summary.
#[derive(Debug, Clone)]
pub struct Cycle {
    pub sprints: Vec<Sprint>,
    pub summary: CycleSummary,
}

/// Capacity to plan for, given the completed points of past sprints.
///
/// Truncating mean of the last `window` values, never below `floor`.
/// `None` when there is no history yet.
pub fn predict_capacity(history: &[u32], window: usize, floor: u32) -> Option<u32> {
    if history.is_empty() || window == 0 {
        return None;
    }
    let recent = &history[history.len().saturating_sub(window)..];
    let sum: u64 = recent.iter().map(|&v| v as u64).sum();
    let mean = (sum / recent.len() as u64) as u32;
    Some(mean.max(floor))
}

/// Run `config.sprints` sprints capped at `max_story_size`.
pub fn run_cycle<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SimConfig,
    max_story_size: u32,
) -> Result<Cycle> {
    let allowed = config.allowed_sizes(max_story_size);
    if allowed.is_empty() {
        return Err(SimError::InvalidConfig(format!(
            "max story size {} admits no story sizes",
            max_story_size
        )));
    }

    let mut sprints = Vec::with_capacity(config.sprints);
    let mut history: Vec<u32> = Vec::with_capacity(config.sprints);

    for _ in 0..config.sprints {
        let predicted =
            predict_capacity(&history, config.velocity_window, config.capacity_floor)
                .unwrap_or(config.initial_velocity);
        let backlog = plan(rng, &allowed, predicted)?;
        let sprint = execute(rng, &backlog, predicted, config.capacity_stddev_fraction)?;
        history.push(sprint.points_completed);
        sprints.push(sprint);
    }

    let summary = CycleSummary::from_sprints(&sprints)?;
    debug!(
        max_story_size,
        mean_velocity = summary.mean_velocity,
        mean_accuracy = summary.mean_accuracy,
        "cycle complete"
    );
    Ok(Cycle { sprints, summary })
}
