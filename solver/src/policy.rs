//! Greedy policy extraction with an explicit value-then-name tie-break.
//!
//! The extractor runs once, on the converged value grid, and the result is
//! never mutated afterward. The tie-break rule is pinned behavior, not a
//! free choice: when two actions tie on candidate value, the one with the
//! lexicographically *greatest* name wins ("up" > "right" > "left" >
//! "down"). An enumeration-order argmax would pick differently on tied
//! cells and silently change the reference policy.

use std::cmp::Ordering;

use serde::Serialize;

use crate::grid::GridModel;
use crate::types::{Action, PolicyDecision, State};
use crate::value_iteration::{action_candidate, ValueGrid};

/// Flat row-major policy buffer, one decision per cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyGrid {
    rows: usize,
    cols: usize,
    decisions: Vec<PolicyDecision>,
}

impl PolicyGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Decision for a cell.
    #[inline(always)]
    pub fn get(&self, state: State) -> PolicyDecision {
        self.decisions[state.row * self.cols + state.col]
    }

    /// Row-major slice of all decisions.
    pub fn as_slice(&self) -> &[PolicyDecision] {
        &self.decisions
    }
}

/// Compare two (candidate value, action) pairs: by value first, then by
/// action name. Values are finite by construction, so `total_cmp` agrees
/// with the usual numeric order.
#[inline]
fn compare_candidates(a: (f64, Action), b: (f64, Action)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.name().cmp(b.1.name()))
}

/// Derive the greedy policy from a converged value grid. The goal cell gets
/// [`PolicyDecision::Goal`]; every other cell gets the action maximizing
/// `reward(T(s,a)) + γ·V(T(s,a))` under the value-then-name comparator.
pub fn extract_policy(model: &GridModel, values: &ValueGrid) -> PolicyGrid {
    let mut decisions = Vec::with_capacity(model.num_states());
    for state in model.states() {
        if model.is_goal(state) {
            decisions.push(PolicyDecision::Goal);
            continue;
        }
        let first = Action::ALL[0];
        let mut best = (action_candidate(model, values, state, first), first);
        for &action in &Action::ALL[1..] {
            let entry = (action_candidate(model, values, state, action), action);
            if compare_candidates(entry, best) == Ordering::Greater {
                best = entry;
            }
        }
        decisions.push(PolicyDecision::Move(best.1));
    }
    PolicyGrid {
        rows: model.rows(),
        cols: model.cols(),
        decisions,
    }
}
