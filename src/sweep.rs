use crate::config::SimConfig;
use crate::error::Result;
use crate::simulation::run_simulation;
use crate::stats::SimulationResult;
use tracing::info;

/// Engine that runs one simulation per max story size.
pub struct SweepEngine {
    pub config: SimConfig,
}

impl SweepEngine {
    pub fn new(config: SimConfig) -> Self {
        SweepEngine { config }
    }

    /// Max story sizes from the configured sequence, largest first.
    pub fn default_max_sizes(&self) -> Vec<u32> {
        self.config.default_sweep()
    }

    /// Run the sweep over `max_sizes` in the given order.
    pub fn run(&self, max_sizes: &[u32]) -> Result<Vec<SimulationResult>> {
        self.run_with(max_sizes, |_| {})
    }

    /// Run the sweep, calling `on_result` after each max story size finishes.
    /// Iterations inside each size still fan out when `config.parallel` is set.
    pub fn run_with<F>(&self, max_sizes: &[u32], mut on_result: F) -> Result<Vec<SimulationResult>>
    where
        F: FnMut(&SimulationResult),
    {
        self.config.validate()?;
        info!(
            sizes = max_sizes.len(),
            iterations = self.config.iterations,
            sprints = self.config.sprints,
            "starting sweep"
        );

        let mut results = Vec::with_capacity(max_sizes.len());
        for &max in max_sizes {
            let result = run_simulation(&self.config, max)?;
            on_result(&result);
            results.push(result);
        }
        Ok(results)
    }

    /// Full sweep over the default max sizes.
    pub fn run_full_sweep(&self) -> Result<Vec<SimulationResult>> {
        self.run(&self.default_max_sizes())
    }
}
