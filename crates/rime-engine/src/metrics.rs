//! Per-step metrics for the run driver.
//!
//! [`StepMetrics`] captures timing and lattice statistics for a single
//! step, for logging, profiling, and tests that watch a run evolve.

/// Timing and lattice statistics collected during a single step.
///
/// [`Simulation`](crate::Simulation) populates these fields after every
/// step; consumers read them from the most recent one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub step_us: u64,
    /// Side length of the lattice after the step.
    pub size: usize,
    /// Cells at or above the freezing threshold after the step.
    pub frozen_cells: usize,
    /// Receptive sites in the pre-step lattice.
    pub receptive_cells: usize,
    /// Sum of all densities after the step.
    pub total_mass: f64,
}
