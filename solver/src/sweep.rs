//! Convergence sweep driver: run the engine across a range of square grid
//! sizes and record how many sweeps each needed.
//!
//! Each trial builds a fresh model and value grid — nothing is shared
//! between sizes, so the trials are embarrassingly parallel. The parallel
//! variant fans them out on the rayon pool; both variants report points in
//! ascending size order.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::SolverConfig;
use crate::grid::{GridError, GridModel};
use crate::value_iteration::run_to_convergence;

/// Smallest grid size in a sweep. A 2×2 grid is the smallest with a
/// non-goal state.
pub const MIN_SWEEP_SIZE: usize = 2;

/// Default largest grid size in a sweep.
pub const DEFAULT_MAX_SWEEP_SIZE: usize = 25;

/// One sample: an n×n grid (goal in the far corner) took `sweeps` sweeps
/// to converge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SweepPoint {
    pub size: usize,
    pub sweeps: u32,
}

fn run_size(size: usize, config: SolverConfig) -> Result<SweepPoint, GridError> {
    let model = GridModel::new(size, size, config)?;
    let (_, sweeps) = run_to_convergence(&model);
    Ok(SweepPoint { size, sweeps })
}

/// Run sizes 2..=max_size sequentially, in ascending order.
pub fn convergence_sweep(
    max_size: usize,
    config: SolverConfig,
) -> Result<Vec<SweepPoint>, GridError> {
    (MIN_SWEEP_SIZE..=max_size)
        .map(|size| run_size(size, config))
        .collect()
}

/// Same trials on the rayon pool. The indexed collect preserves size
/// order, so the output matches [`convergence_sweep`] exactly.
pub fn convergence_sweep_parallel(
    max_size: usize,
    config: SolverConfig,
) -> Result<Vec<SweepPoint>, GridError> {
    (MIN_SWEEP_SIZE..=max_size)
        .into_par_iter()
        .map(|size| run_size(size, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wavefront_sweep_counts() {
        // n×n with the far-corner goal: the wavefront needs 2(n-1) sweeps
        // to reach the opposite corner, plus one no-change sweep to detect
        // convergence.
        let points = convergence_sweep(8, SolverConfig::default()).unwrap();
        assert_eq!(points.len(), 7);
        for point in &points {
            assert_eq!(point.sweeps, 2 * point.size as u32 - 1);
        }
    }

    #[test]
    fn test_sweep_count_lower_bound_and_monotonicity() {
        let points = convergence_sweep(12, SolverConfig::default()).unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].sweeps >= pair[0].sweeps);
        }
        for point in &points {
            assert!(point.sweeps >= 2 * (point.size as u32 - 1));
        }
    }

    #[test]
    fn test_points_ordered_by_size() {
        let points = convergence_sweep(10, SolverConfig::default()).unwrap();
        let sizes: Vec<usize> = points.iter().map(|p| p.size).collect();
        assert_eq!(sizes, (2..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = SolverConfig::default();
        let sequential = convergence_sweep(15, config).unwrap();
        let parallel = convergence_sweep_parallel(15, config).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_range() {
        let points = convergence_sweep(1, SolverConfig::default()).unwrap();
        assert!(points.is_empty());
    }
}
