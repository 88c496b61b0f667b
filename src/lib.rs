//! Monte Carlo simulation of sprint velocity prediction under Fibonacci
//! story-point estimation.
//!
//! A simulation runs many independent cycles of sprints. Each sprint is
//! planned full to a predicted capacity, worked against a randomly varied
//! actual capacity, and credited only for stories that finish. The results
//! show how prediction accuracy depends on the largest story size a team
//! accepts.

pub mod config;
pub mod cycle;
pub mod error;
pub mod executor;
pub mod output;
pub mod planner;
pub mod sampling;
pub mod simulation;
pub mod stats;
pub mod sweep;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use simulation::run_simulation;
pub use stats::{CycleSummary, SimulationResult};
