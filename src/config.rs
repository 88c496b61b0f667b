use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Story sizes a team may estimate with, smallest first.
pub const DEFAULT_STORY_SIZES: [u32; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

/// Configuration for a simulation run. Read-only once a run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Capacity planned for the first sprint of every cycle
    pub initial_velocity: u32,
    /// Allowed story sizes, strictly increasing and starting at 1
    pub story_sizes: Vec<u32>,
    /// Sprints per cycle
    pub sprints: usize,
    /// Independent cycles (Monte Carlo iterations) per max story size
    pub iterations: usize,
    /// Std-dev of actual capacity as a fraction of the predicted capacity
    pub capacity_stddev_fraction: f64,
    /// Number of past sprints averaged to predict the next one
    pub velocity_window: usize,
    /// Lowest capacity a team ever plans for after the first sprint.
    /// Must be positive so no sprint is planned empty.
    pub capacity_floor: u32,
    /// Base seed; every cycle derives its own generator from it
    pub seed: u64,
    /// Fan iterations out over the rayon thread pool
    pub parallel: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            initial_velocity: 50,
            story_sizes: DEFAULT_STORY_SIZES.to_vec(),
            sprints: 100,
            iterations: 1000,
            capacity_stddev_fraction: 0.2,
            velocity_window: 10,
            capacity_floor: 25,
            seed: 42,
            parallel: true,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn smallest_size(&self) -> Option<u32> {
        self.story_sizes.first().copied()
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_velocity == 0 {
            return Err(invalid("initial_velocity must be positive"));
        }
        let smallest = match self.smallest_size() {
            Some(s) => s,
            None => return Err(invalid("story_sizes must not be empty")),
        };
        if smallest == 0 {
            return Err(invalid("story sizes must be positive"));
        }
        if self.story_sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("story_sizes must be strictly increasing"));
        }
        // Without a 1-point story the planner can be left with a gap no size fits.
        if smallest != 1 {
            return Err(SimError::InvalidConfig(format!(
                "story_sizes must start at 1 so every sprint can be planned full, got {}",
                smallest
            )));
        }
        if self.sprints == 0 {
            return Err(invalid("sprints must be positive"));
        }
        if self.iterations == 0 {
            return Err(invalid("iterations must be positive"));
        }
        if self.velocity_window == 0 {
            return Err(invalid("velocity_window must be positive"));
        }
        if !self.capacity_stddev_fraction.is_finite() || self.capacity_stddev_fraction < 0.0 {
            return Err(invalid("capacity_stddev_fraction must be finite and non-negative"));
        }
        if self.capacity_floor == 0 {
            return Err(invalid("capacity_floor must be positive"));
        }
        Ok(())
    }

    /// Story sizes no larger than `max_story_size`.
    pub fn allowed_sizes(&self, max_story_size: u32) -> Vec<u32> {
        self.story_sizes
            .iter()
            .copied()
            .filter(|&s| s <= max_story_size)
            .collect()
    }

    /// Max story sizes to report on, largest first.
    pub fn default_sweep(&self) -> Vec<u32> {
        self.story_sizes.iter().rev().copied().collect()
    }
}

fn invalid(msg: &str) -> SimError {
    SimError::InvalidConfig(msg.to_string())
}
