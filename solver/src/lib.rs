//! # Gridworld — deterministic value-iteration solver
//!
//! Computes the optimal state-value function and greedy policy for a
//! rectangular grid world with a single absorbing goal cell and four
//! axis-aligned deterministic moves, using **synchronous Bellman sweeps**
//! (value iteration), and reports how many sweeps convergence took.
//!
//! ## Algorithm overview
//!
//! | Stage | Rust module | Description |
//! |-------|-------------|-------------|
//! | Model | [`grid`] | State space, deterministic clipped moves, reward lookup |
//! | Engine | [`value_iteration`] | Jacobi sweeps over a double-buffered value grid until `delta < ε` |
//! | Extractor | [`policy`] | Greedy argmax with the value-then-name tie-break |
//! | Driver | [`sweep`] | Repeats the engine over square grid sizes, collects (size, sweeps) pairs |
//!
//! Per sweep, every non-goal state s is rewritten as
//!
//! ```text
//! V_new(s) = max over a of [ reward(T(s,a)) + γ·V_prev(T(s,a)) ]
//! ```
//!
//! reading only the *previous* sweep's grid, so information propagates
//! exactly one cell per sweep. The converged values have a closed form:
//! `V(s) = γ^(d−1)·bonus` where d is the Manhattan distance from s to the
//! goal, and `V(goal) = 0` (the goal cell is pinned at its initial value).
//! A square n×n grid with the goal in the far corner therefore converges in
//! exactly `2n−1` sweeps for any ε small enough to see the whole wavefront.
//!
//! ## Value representation
//!
//! V is a flat row-major `Vec<f64>` sized rows×cols. Each sweep writes into
//! a second buffer and the two are swapped whole afterward, so "never read a
//! value updated in the same sweep" is enforced by buffer ownership rather
//! than by coding convention.

pub mod config;
pub mod grid;
pub mod policy;
pub mod sweep;
pub mod types;
pub mod value_iteration;
