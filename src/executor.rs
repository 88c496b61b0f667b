//! Sprint executor: works a planned backlog against a randomly varied
//! capacity, one point at a time.

use crate::error::Result;
use crate::sampling::{sample_capacity, uniform_index};
use rand::Rng;
use serde::Serialize;
use tracing::trace;

/// A story in progress. Lives only for the sprint that executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub size: u32,
    /// Points of work left before the story is done
    pub remaining: u32,
}

impl Story {
    pub fn new(size: u32) -> Self {
        Story {
            size,
            remaining: size,
        }
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// Outcome of one sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprint {
    /// Capacity the sprint was planned against
    pub points_predicted: u32,
    /// Sum of the planned backlog
    pub points_planned: u32,
    /// Capacity actually available, drawn around the prediction
    pub capacity: u32,
    /// Sum of sizes of the stories that finished
    pub points_completed: u32,
}

/// Execute one sprint.
///
/// Each unit of actual capacity goes to a uniformly chosen unfinished story.
/// Work stops when capacity runs out or every story is done. Only finished
/// stories earn their points.
pub fn execute<R: Rng + ?Sized>(
    rng: &mut R,
    backlog: &[u32],
    predicted_capacity: u32,
    stddev_fraction: f64,
) -> Result<Sprint> {
    let mut stories: Vec<Story> = backlog.iter().map(|&s| Story::new(s)).collect();
    let capacity = sample_capacity(rng, predicted_capacity, stddev_fraction)?;

    let mut left = capacity;
    let mut open: Vec<usize> = Vec::with_capacity(stories.len());
    while left > 0 {
        open.clear();
        open.extend((0..stories.len()).filter(|&i| !stories[i].is_done()));
        if open.is_empty() {
            break;
        }
        let idx = open[uniform_index(rng, open.len())];
        stories[idx].remaining -= 1;
        left -= 1;
    }

    let points_completed = stories
        .iter()
        .filter(|s| s.is_done())
        .map(|s| s.size)
        .sum();

    let sprint = Sprint {
        points_predicted: predicted_capacity,
        points_planned: backlog.iter().sum(),
        capacity,
        points_completed,
    };
    trace!(?sprint, "executed sprint");
    Ok(sprint)
}
