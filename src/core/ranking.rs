use itertools::Itertools;

use crate::{core::engine::CostPerPlan, quantity::cost::Cost};

/// Order the plans cheapest-first, keeping at most `limit` of them.
///
/// Plans of equal cost keep the iteration order of the mapping, that is by name.
#[must_use]
pub fn rank(cost_per_plan: &CostPerPlan, limit: Option<usize>) -> Vec<(String, Cost)> {
    cost_per_plan
        .iter()
        .map(|(name, cost)| (name.clone(), *cost))
        .sorted_by_key(|(_, cost)| *cost)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
