// SPDX-License-Identifier: MIT OR Apache-2.0
//! Closure Engine - fixed-point generation of dialectical state sets
//!
//! Starting from a seed set, every iteration hybridizes all unordered pairs
//! of known states (self-pairs included), resolves each result, and folds
//! the genuinely new states into the set. The loop stops when an iteration
//! produces nothing new, or when the iteration budget runs out.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use closure_engine::{run_closure, ClosureConfig};
//!
//! let result = run_closure(&ClosureConfig::default());
//! println!("{} states after {:?}", result.state_count(), result.growth_history);
//! ```
//!
//! The converged set is independent of pair-enumeration order: each pair's
//! contribution is order-independent and the per-iteration merge is a plain
//! union. Only the transient bucketing (which iteration a state first
//! appears in) can shift, and only when the budget cuts generation short.
//!
//! With the canonical seeds the set grows without bound, so practical
//! budgets are small; the history never reaches zero for those seeds.

#![warn(missing_docs)]

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use dialectic_core::{canonical_seeds, TriadVector};

/// Configuration for a closure run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureConfig {
    /// Seed states the closure starts from. Inserted as-is, never resolved,
    /// so an unbalanced seed stays unbalanced in every result set.
    pub seeds: HashSet<TriadVector>,
    /// Upper bound on iterations. Zero returns the seeds untouched.
    pub max_iterations: usize,
}

impl ClosureConfig {
    /// Configuration with the three canonical seeds and the default budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the seed set.
    #[must_use]
    pub fn seeds(mut self, seeds: impl IntoIterator<Item = TriadVector>) -> Self {
        self.seeds = seeds.into_iter().collect();
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub const fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self {
            seeds: canonical_seeds().into_iter().collect(),
            max_iterations: 5,
        }
    }
}

/// Outcome of a closure run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureResult {
    /// New-state count per completed iteration. A zero-growth iteration
    /// terminates the run without being recorded, so every entry is > 0
    /// and the length is at most the configured budget.
    pub growth_history: Vec<usize>,
    /// All states known at the end of the run; a superset of the seeds.
    pub states: HashSet<TriadVector>,
}

impl ClosureResult {
    /// Number of distinct states in the final set.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Whether the run stopped on a zero-growth iteration rather than by
    /// exhausting its budget.
    #[must_use]
    pub fn reached_fixed_point(&self, config: &ClosureConfig) -> bool {
        self.growth_history.len() < config.max_iterations
    }
}

/// Runs the generative closure described by `config`.
///
/// Each iteration snapshots the known states into a fixed-order list and
/// evaluates `resolve(hybridize(s1, s2))` for every index pair `i <= j`.
/// The known set is never mutated mid-pass; new states are unioned in only
/// after the full pair scan.
#[instrument(skip(config), fields(seeds = config.seeds.len(), max_iterations = config.max_iterations))]
#[must_use]
pub fn run_closure(config: &ClosureConfig) -> ClosureResult {
    let mut states = config.seeds.clone();
    let mut growth_history = Vec::new();

    for iteration in 0..config.max_iterations {
        let known: Vec<TriadVector> = states.iter().cloned().collect();
        let mut fresh: HashSet<TriadVector> = HashSet::new();

        for (i, s1) in known.iter().enumerate() {
            for s2 in &known[i..] {
                let stable = s1.hybridize(s2).resolve();
                if !states.contains(&stable) {
                    fresh.insert(stable);
                }
            }
        }

        if fresh.is_empty() {
            debug!(iteration, total = states.len(), "closure stabilized");
            break;
        }

        let new_count = fresh.len();
        growth_history.push(new_count);
        states.extend(fresh);
        debug!(
            iteration,
            new_states = new_count,
            total = states.len(),
            "closure iteration complete"
        );
    }

    ClosureResult {
        growth_history,
        states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(t: u32, a: u32, s: u32) -> TriadVector {
        TriadVector::new(t, a, s)
    }

    #[test]
    fn test_zero_budget_returns_seeds() {
        let config = ClosureConfig::new().max_iterations(0);
        let result = run_closure(&config);

        assert!(result.growth_history.is_empty());
        assert_eq!(result.states, config.seeds);
    }

    #[test]
    fn test_first_iteration_from_canonical_seeds() {
        let result = run_closure(&ClosureConfig::new().max_iterations(1));

        // Six pairs over three seeds, six distinct resolved states.
        let expected_new = [
            v(2, 0, 2), // thesis self-pair, resolved up from (2,0,0)
            v(1, 1, 2), // thesis + antithesis tension (1,1,0)
            v(1, 0, 1),
            v(0, 2, 2),
            v(0, 1, 1),
            v(0, 0, 2),
        ];

        assert_eq!(result.growth_history, vec![6]);
        assert_eq!(result.state_count(), 9);
        for state in &expected_new {
            assert!(result.states.contains(state), "missing {state}");
        }
    }

    #[test]
    fn test_states_superset_of_seeds() {
        let config = ClosureConfig::new().max_iterations(3);
        let result = run_closure(&config);
        for seed in &config.seeds {
            assert!(result.states.contains(seed));
        }
    }

    #[test]
    fn test_unbalanced_seeds_survive_but_generated_states_are_balanced() {
        let config = ClosureConfig::new().max_iterations(2);
        let result = run_closure(&config);

        // Seeds enter the set unresolved.
        assert!(result.states.contains(&v(1, 0, 0)));
        assert!(result.states.contains(&v(0, 1, 0)));

        // Everything else went through resolve and satisfies the axiom.
        for state in result.states.difference(&config.seeds) {
            assert!(state.is_balanced(), "unbalanced generated state {state}");
        }
    }

    #[test]
    fn test_fixed_point_on_self_absorbing_seed() {
        // (0,0,0) hybridized with itself resolves to itself: immediate
        // fixed point, no iteration recorded.
        let config = ClosureConfig::new()
            .seeds([v(0, 0, 0)])
            .max_iterations(5);
        let result = run_closure(&config);

        assert!(result.growth_history.is_empty());
        assert_eq!(result.states, config.seeds);
        assert!(result.reached_fixed_point(&config));
    }

    #[test]
    fn test_empty_seed_set_is_trivial_fixed_point() {
        let config = ClosureConfig::new().seeds([]).max_iterations(4);
        let result = run_closure(&config);

        assert!(result.growth_history.is_empty());
        assert!(result.states.is_empty());
    }

    #[test]
    fn test_growth_once_zero_stays_zero() {
        // Re-running from a converged set must add nothing.
        let converged = run_closure(
            &ClosureConfig::new()
                .seeds([v(0, 0, 0)])
                .max_iterations(3),
        );
        let rerun = run_closure(
            &ClosureConfig::new()
                .seeds(converged.states.iter().cloned())
                .max_iterations(3),
        );

        assert!(rerun.growth_history.is_empty());
        assert_eq!(rerun.states, converged.states);
    }

    #[test]
    fn test_deterministic_final_set() {
        let config = ClosureConfig::new().max_iterations(3);
        let first = run_closure(&config);
        let second = run_closure(&config);

        assert_eq!(first.states, second.states);
        assert_eq!(first.growth_history, second.growth_history);
    }

    #[test]
    fn test_history_bounded_by_budget() {
        for budget in 0..4 {
            let result = run_closure(&ClosureConfig::new().max_iterations(budget));
            assert!(result.growth_history.len() <= budget);
        }
    }

    #[test]
    fn test_config_serialize_round_trip() {
        let config = ClosureConfig::new().max_iterations(2);
        let bytes = bincode::serialize(&config).unwrap();
        let decoded: ClosureConfig = bincode::deserialize(&bytes).unwrap();
        assert_eq!(config, decoded);
    }
}
