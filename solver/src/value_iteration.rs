//! Value-iteration engine: synchronous (Jacobi) Bellman sweeps to a fixed
//! point.
//!
//! Every sweep computes each non-goal cell's new value strictly from the
//! previous sweep's complete grid. The engine keeps two flat buffers and
//! swaps them whole after each sweep, so a value written in the current
//! sweep is unreadable until the next one — information propagates exactly
//! one cell per sweep. That property is deliberate: it ties the sweep count
//! to the grid's maximum Manhattan distance, which is what the
//! [`crate::sweep`] driver's scaling measurement depends on. An in-place
//! update would converge faster and destroy the measurement.
//!
//! The goal cell is initialized to 0 and never written; it serves as the
//! sentinel the wavefront expands from.

use serde::Serialize;

use crate::grid::GridModel;
use crate::policy::{extract_policy, PolicyGrid};
use crate::types::{Action, State};

/// Flat row-major value buffer, one f64 per cell, zero-initialized.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl ValueGrid {
    /// Allocate a zeroed rows×cols grid (the engine's initial V).
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn idx(&self, state: State) -> usize {
        state.row * self.cols + state.col
    }

    /// Value of a cell.
    #[inline(always)]
    pub fn get(&self, state: State) -> f64 {
        self.values[self.idx(state)]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, state: State, value: f64) {
        let i = self.idx(state);
        self.values[i] = value;
    }

    /// Row-major slice of all values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Converged run output for downstream reporting/rendering: the frozen
/// value grid and the policy derived from it, tagged with the number of
/// sweeps that produced them.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    pub values: ValueGrid,
    pub policy: PolicyGrid,
    pub sweeps: u32,
}

/// Bellman candidate for taking `action` in `state`: the reward collected
/// at the destination plus the discounted value of the destination under
/// `values`. Shared by the engine (max over candidates) and the policy
/// extractor (argmax over candidates).
#[inline(always)]
pub fn action_candidate(
    model: &GridModel,
    values: &ValueGrid,
    state: State,
    action: Action,
) -> f64 {
    let dest = model.transition(state, action);
    model.reward(dest) + model.config().discount * values.get(dest)
}

/// One full synchronous sweep: for every non-goal cell, write the best
/// candidate value into `next`, reading only from `prev`. Returns the
/// largest absolute per-cell change. The goal cell is left untouched.
pub fn bellman_sweep(model: &GridModel, prev: &ValueGrid, next: &mut ValueGrid) -> f64 {
    let mut delta: f64 = 0.0;
    for state in model.states() {
        if model.is_goal(state) {
            continue;
        }
        let mut best = f64::NEG_INFINITY;
        for action in Action::ALL {
            let candidate = action_candidate(model, prev, state, action);
            if candidate > best {
                best = candidate;
            }
        }
        delta = delta.max((prev.get(state) - best).abs());
        next.set(state, best);
    }
    delta
}

/// Run sweeps until the max per-cell change drops below the configured
/// threshold. Returns the converged grid and the number of completed sweeps
/// (the sweep that first meets the threshold is counted).
///
/// Termination is guaranteed: with γ < 1 the backup is a contraction on a
/// finite state space. The degenerate single-cell grid has no non-goal
/// state to update and converges in 0 sweeps.
pub fn run_to_convergence(model: &GridModel) -> (ValueGrid, u32) {
    let mut prev = ValueGrid::zeroed(model.rows(), model.cols());
    if model.num_states() == 1 {
        return (prev, 0);
    }

    let mut next = ValueGrid::zeroed(model.rows(), model.cols());
    let mut sweeps = 0u32;
    loop {
        let delta = bellman_sweep(model, &prev, &mut next);
        std::mem::swap(&mut prev, &mut next);
        sweeps += 1;
        if delta < model.config().threshold {
            return (prev, sweeps);
        }
    }
}

/// Run to convergence and extract the greedy policy from the frozen grid.
pub fn solve(model: &GridModel) -> Solution {
    let (values, sweeps) = run_to_convergence(model);
    let policy = extract_policy(model, &values);
    Solution {
        values,
        policy,
        sweeps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;

    fn square(n: usize) -> GridModel {
        GridModel::new(n, n, SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_closed_form_values_4x4() {
        // V(s) = 0.9^(d-1) * 100 where d is the Manhattan distance to the
        // goal at (3,3); the goal itself stays 0.
        let model = square(4);
        let (values, sweeps) = run_to_convergence(&model);
        assert_eq!(sweeps, 7); // wavefront: max distance 6, plus the final no-change sweep

        for state in model.states() {
            let d = state.manhattan_distance(model.goal());
            let expected = if d == 0 {
                0.0
            } else {
                0.9f64.powi(d as i32 - 1) * 100.0
            };
            assert!(
                (values.get(state) - expected).abs() < 1e-9,
                "V({},{}) = {}, expected {}",
                state.row,
                state.col,
                values.get(state),
                expected
            );
        }
        assert!((values.get(State::new(0, 0)) - 59.049).abs() < 1e-9);
    }

    #[test]
    fn test_goal_value_never_updated() {
        let model = square(5);
        let (values, _) = run_to_convergence(&model);
        assert_eq!(values.get(model.goal()), 0.0);
    }

    #[test]
    fn test_monotone_propagation() {
        // After k sweeps, every cell within Manhattan distance k of the goal
        // already holds its converged value; farther cells lag behind.
        let model = square(4);
        let (converged, _) = run_to_convergence(&model);

        let mut prev = ValueGrid::zeroed(4, 4);
        let mut next = ValueGrid::zeroed(4, 4);
        for k in 1..=6 {
            bellman_sweep(&model, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
            for state in model.states() {
                let d = state.manhattan_distance(model.goal());
                if d <= k {
                    assert_eq!(
                        prev.get(state),
                        converged.get(state),
                        "cell ({},{}) at distance {} not settled after {} sweeps",
                        state.row,
                        state.col,
                        d,
                        k
                    );
                } else {
                    assert!(prev.get(state) < converged.get(state));
                }
            }
        }
    }

    #[test]
    fn test_extra_sweep_on_converged_grid_is_idempotent() {
        let model = square(4);
        let (converged, _) = run_to_convergence(&model);
        let mut next = ValueGrid::zeroed(4, 4);
        let delta = bellman_sweep(&model, &converged, &mut next);
        assert!(delta < model.config().threshold);
        // The goal cell is never written, so the full grids match exactly.
        for state in model.states().filter(|&s| !model.is_goal(s)) {
            assert_eq!(next.get(state), converged.get(state));
        }
    }

    #[test]
    fn test_degenerate_1x1() {
        let model = square(1);
        let (values, sweeps) = run_to_convergence(&model);
        assert_eq!(sweeps, 0);
        assert_eq!(values.get(State::new(0, 0)), 0.0);
    }

    #[test]
    fn test_2x2_sweep_count() {
        // Sweep 1 settles the two distance-1 cells, sweep 2 settles (0,0),
        // sweep 3 observes no change and stops.
        let (_, sweeps) = run_to_convergence(&square(2));
        assert_eq!(sweeps, 3);
    }

    #[test]
    fn test_rectangular_grid() {
        let model = GridModel::new(2, 5, SolverConfig::default()).unwrap();
        let (values, _) = run_to_convergence(&model);
        // (0,0) is Manhattan distance 5 from the goal at (1,4).
        assert!((values.get(State::new(0, 0)) - 0.9f64.powi(4) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_solution_tags_sweep_count() {
        let solution = solve(&square(4));
        assert_eq!(solution.sweeps, 7);
        assert_eq!(solution.values.rows(), 4);
        assert_eq!(solution.policy.rows(), 4);
    }
}
