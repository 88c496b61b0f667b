//! Reductions from sprints to cycle summaries and from cycle summaries to
//! one simulation result.

use crate::error::{Result, SimError};
use crate::executor::Sprint;
use serde::Serialize;

/// Prediction error of one sprint, in percent of the prediction.
///
/// Positive when the team under-delivers, negative when it over-delivers.
pub fn accuracy(sprint: &Sprint) -> Result<f64> {
    if sprint.points_predicted == 0 {
        return Err(SimError::ZeroPrediction);
    }
    let predicted = sprint.points_predicted as f64;
    Ok(100.0 * (predicted - sprint.points_completed as f64) / predicted)
}

/// Summary of one cycle's sprints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleSummary {
    pub initial_velocity: f64,
    pub final_velocity: f64,
    pub mean_velocity: f64,
    pub initial_accuracy: f64,
    pub final_accuracy: f64,
    pub mean_accuracy: f64,
}

impl CycleSummary {
    pub fn from_sprints(sprints: &[Sprint]) -> Result<Self> {
        let (first, last) = match (sprints.first(), sprints.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => {
                return Err(SimError::InvalidConfig(
                    "cannot summarize a cycle with no sprints".to_string(),
                ))
            }
        };
        let n = sprints.len() as f64;

        let accuracies = sprints.iter().map(accuracy).collect::<Result<Vec<f64>>>()?;
        let total_completed: u64 = sprints.iter().map(|s| s.points_completed as u64).sum();

        Ok(CycleSummary {
            initial_velocity: first.points_completed as f64,
            final_velocity: last.points_completed as f64,
            mean_velocity: total_completed as f64 / n,
            initial_accuracy: accuracies[0],
            final_accuracy: accuracies[accuracies.len() - 1],
            mean_accuracy: accuracies.iter().sum::<f64>() / n,
        })
    }
}

/// Aggregate over all cycles for one max story size, rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub max_story_size: u32,
    pub iterations: usize,
    pub sprints: usize,
    pub initial_velocity: i64,
    pub final_velocity: i64,
    pub mean_velocity: i64,
    pub initial_accuracy: i64,
    pub final_accuracy: i64,
    pub mean_accuracy: i64,
}

impl SimulationResult {
    pub fn from_summaries(
        max_story_size: u32,
        sprints: usize,
        summaries: &[CycleSummary],
    ) -> Result<Self> {
        if summaries.is_empty() {
            return Err(SimError::InvalidConfig(
                "cannot aggregate zero cycles".to_string(),
            ));
        }
        Ok(SimulationResult {
            max_story_size,
            iterations: summaries.len(),
            sprints,
            initial_velocity: rounded_mean(summaries, |c| c.initial_velocity),
            final_velocity: rounded_mean(summaries, |c| c.final_velocity),
            mean_velocity: rounded_mean(summaries, |c| c.mean_velocity),
            initial_accuracy: rounded_mean(summaries, |c| c.initial_accuracy),
            final_accuracy: rounded_mean(summaries, |c| c.final_accuracy),
            mean_accuracy: rounded_mean(summaries, |c| c.mean_accuracy),
        })
    }
}

fn rounded_mean<F>(summaries: &[CycleSummary], field: F) -> i64
where
    F: Fn(&CycleSummary) -> f64,
{
    let total: f64 = summaries.iter().map(field).sum();
    (total / summaries.len() as f64).round() as i64
}
