//! Sprint planner: fills a backlog to the predicted capacity with randomly
//! drawn story sizes.
use crate::error::{Result, SimError};
use crate::sampling::uniform_index;
use rand::Rng;
use tracing::trace;

/// Build a backlog whose sizes sum to `predicted_capacity`.
///
/// Sizes are drawn uniformly from `allowed_sizes`. A draw that would push
/// the total past the capacity is discarded and another is drawn. Planning
/// stops once the total reaches the capacity.
///
/// Precondition: every leftover gap must be closable by some allowed size.
/// That holds whenever 1 is an allowed size, which `SimConfig::validate`
/// requires. A gap that no allowed size fits, including a capacity below
/// every size, returns [`SimError::PlanningStall`] instead of looping.
pub fn plan<R: Rng + ?Sized>(
    rng: &mut R,
    allowed_sizes: &[u32],
    predicted_capacity: u32,
) -> Result<Vec<u32>> {
    let smallest = match allowed_sizes.iter().min() {
        Some(&s) => s,
        None => {
            return Err(SimError::InvalidConfig(
                "no story sizes allowed for planning".to_string(),
            ))
        }
    };

    let mut backlog = Vec::new();
    let mut planned: u32 = 0;

    while planned < predicted_capacity {
        let gap = predicted_capacity - planned;
        if gap < smallest {
            return Err(SimError::PlanningStall {
                capacity: predicted_capacity,
                planned,
                smallest,
            });
        }
        let size = allowed_sizes[uniform_index(rng, allowed_sizes.len())];
        if size <= gap {
            backlog.push(size);
            planned += size;
        }
    }

    trace!(capacity = predicted_capacity, stories = backlog.len(), "planned sprint");
    Ok(backlog)
}
