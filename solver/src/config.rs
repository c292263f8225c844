//! Solver parameters: discount factor, convergence threshold, goal bonus.
//!
//! All three are fixed for the lifetime of a run and travel with the model
//! as one immutable value — there is no process-wide mutable state.

/// Default discount factor γ. Must be < 1 for the Bellman operator to be a
/// contraction, which is what guarantees the sweep loop terminates.
pub const DEFAULT_DISCOUNT: f64 = 0.9;

/// Default convergence threshold ε: iteration stops once no cell changes by
/// more than this in a full sweep.
pub const DEFAULT_THRESHOLD: f64 = 1e-4;

/// Default reward for entering the goal cell. Every other transition pays 0.
pub const DEFAULT_GOAL_BONUS: f64 = 100.0;

/// Immutable run parameters, passed into [`crate::grid::GridModel`]
/// construction and shared by the engine and the policy extractor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Discount factor γ applied to the successor state's value.
    pub discount: f64,
    /// Convergence threshold ε on the per-sweep max value change.
    pub threshold: f64,
    /// Reward granted for arriving in the goal cell.
    pub goal_bonus: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            discount: DEFAULT_DISCOUNT,
            threshold: DEFAULT_THRESHOLD,
            goal_bonus: DEFAULT_GOAL_BONUS,
        }
    }
}
