//! Grid/transition model: deterministic four-direction moves with boundary
//! clipping, a single absorbing goal cell, and the reward field.
//!
//! The model is pure and immutable once constructed — every method is a
//! total function of its arguments, so it is safe to share across threads
//! (the sweep driver hands one model per trial to rayon workers).

use thiserror::Error;

use crate::config::SolverConfig;
use crate::types::{Action, State};

/// The only fatal condition in the system: a degenerate dimension at model
/// construction. Everything downstream (transition, reward, backup,
/// extraction) is total given a valid model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must both be >= 1")]
    InvalidDimension { rows: usize, cols: usize },
}

/// Immutable grid world: dimensions, goal cell, and run parameters.
#[derive(Clone, Debug)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    goal: State,
    config: SolverConfig,
}

impl GridModel {
    /// Build a rows×cols model with the goal in the far corner
    /// (rows−1, cols−1). Fails iff either dimension is zero.
    pub fn new(rows: usize, cols: usize, config: SolverConfig) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            goal: State::new(rows - 1, cols - 1),
            config,
        })
    }

    /// Like [`GridModel::new`] with an explicit goal cell, which must lie
    /// within the grid.
    pub fn with_goal(
        rows: usize,
        cols: usize,
        goal: State,
        config: SolverConfig,
    ) -> Result<Self, GridError> {
        let mut model = Self::new(rows, cols, config)?;
        debug_assert!(
            goal.row < rows && goal.col < cols,
            "goal {:?} outside {}x{} grid",
            goal,
            rows,
            cols
        );
        model.goal = goal;
        Ok(model)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn goal(&self) -> State {
        self.goal
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Total number of cells.
    pub fn num_states(&self) -> usize {
        self.rows * self.cols
    }

    /// Apply `action` to `state`. Deterministic and total: a move that
    /// would leave the grid returns the state unchanged.
    pub fn transition(&self, state: State, action: Action) -> State {
        let State { row, col } = state;
        match action {
            Action::Up if row > 0 => State::new(row - 1, col),
            Action::Down if row < self.rows - 1 => State::new(row + 1, col),
            Action::Left if col > 0 => State::new(row, col - 1),
            Action::Right if col < self.cols - 1 => State::new(row, col + 1),
            _ => state,
        }
    }

    /// Reward for *arriving in* `state`: the goal bonus at the goal cell,
    /// zero everywhere else. Reward attaches to the destination of a
    /// transition, never to the action taken.
    pub fn reward(&self, state: State) -> f64 {
        if state == self.goal {
            self.config.goal_bonus
        } else {
            0.0
        }
    }

    pub fn is_goal(&self, state: State) -> bool {
        state == self.goal
    }

    /// Row-major iterator over every cell.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| State::new(row, col)))
    }

    /// Flat row-major index of a cell in the value/policy buffers.
    #[inline(always)]
    pub fn state_index(&self, state: State) -> usize {
        state.row * self.cols + state.col
    }
}
