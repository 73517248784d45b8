//! The run loop.
//!
//! ```text
//! for i in 0..max_steps:
//!     step
//!     if i % snapshot_every == 0:
//!         too big?  Stop   -> end (TooBig)
//!                   Regrid -> pad, or end (SizeCeiling) past max_size
//!         else      Periodic snapshot
//! Final snapshot
//! ```

use std::error::Error;
use std::fmt;
use std::time::Instant;

use rime_automaton::{pad, Automaton};
use rime_core::{Lattice, LatticeError};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, GrowthPolicy, RunConfig};
use crate::metrics::StepMetrics;
use crate::sink::{SinkError, Snapshot, SnapshotKind, SnapshotSink};

/// Why [`Simulation::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// All `max_steps` steps were applied.
    StepBudget,
    /// The monitor tripped under [`GrowthPolicy::Stop`].
    TooBig,
    /// The monitor tripped under [`GrowthPolicy::Regrid`] but padding
    /// would exceed `max_size`.
    SizeCeiling,
}

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Steps applied during this run.
    pub steps: usize,
    /// Why the loop ended.
    pub stop_reason: StopReason,
    /// Lattice side length at the end.
    pub final_size: usize,
    /// Number of regrids performed during this run.
    pub regrids: usize,
}

/// Errors that abort a run.
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// The snapshot sink rejected a snapshot.
    Sink(SinkError),
    /// Regridding failed.
    Lattice(LatticeError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "sink: {e}"),
            Self::Lattice(e) => write!(f, "lattice: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sink(e) => Some(e),
            Self::Lattice(e) => Some(e),
        }
    }
}

impl From<SinkError> for RunError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

impl From<LatticeError> for RunError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

/// A snowflake run in progress.
///
/// # Examples
///
/// ```
/// use rime_engine::{CollectingSink, RunConfig, Simulation, StopReason};
///
/// let cfg = RunConfig {
///     size: 31,
///     max_steps: 20,
///     snapshot_every: 10,
///     ..RunConfig::default()
/// };
/// let mut sim = Simulation::new(cfg).unwrap();
/// let mut sink = CollectingSink::new();
/// let outcome = sim.run(&mut sink).unwrap();
///
/// assert_eq!(outcome.steps, 20);
/// assert_eq!(outcome.stop_reason, StopReason::StepBudget);
/// // Periodic at steps 0 and 10, then the final frame.
/// assert_eq!(sink.frames().len(), 3);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: RunConfig,
    automaton: Automaton,
    lattice: Lattice,
    steps: usize,
    regrids: usize,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config` and seed a lattice of `config.size` at β.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`RunConfig::validate`].
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::seeded(config.size, config.params.beta())?;
        Ok(Self::build(config, lattice))
    }

    /// Start from an existing lattice instead of a fresh seed.
    ///
    /// `config.size` is replaced by the lattice's size before validation.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`RunConfig::validate`].
    pub fn with_lattice(mut config: RunConfig, lattice: Lattice) -> Result<Self, ConfigError> {
        config.size = lattice.size();
        config.validate()?;
        Ok(Self::build(config, lattice))
    }

    fn build(config: RunConfig, lattice: Lattice) -> Self {
        let automaton = Automaton::from_params(&config.params, config.edge);
        Self {
            config,
            automaton,
            lattice,
            steps: 0,
            regrids: 0,
            last_metrics: StepMetrics::default(),
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Current lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Consume the simulation, keeping the lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    /// Total steps applied since construction.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total regrids since construction.
    pub fn regrids(&self) -> usize {
        self.regrids
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Apply one automaton step.
    pub fn step_once(&mut self) -> &StepMetrics {
        let start = Instant::now();
        let advance = self.automaton.advance(&self.lattice);
        self.lattice = advance.lattice;
        self.steps += 1;
        self.last_metrics = StepMetrics {
            step_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            size: self.lattice.size(),
            frozen_cells: self.lattice.frozen_count(),
            receptive_cells: advance.receptive_cells,
            total_mass: self.lattice.total_mass(),
        };
        &self.last_metrics
    }

    /// Pad the lattice by `margin` cells of background on every side.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidDimension`] if the new size overflows.
    pub fn regrid(&mut self, margin: usize) -> Result<(), LatticeError> {
        let from = self.lattice.size();
        self.lattice = pad(&self.lattice, self.config.params.beta(), margin)?;
        self.regrids += 1;
        info!(
            from,
            to = self.lattice.size(),
            step = self.steps,
            "regridded lattice"
        );
        Ok(())
    }

    /// Step until the budget runs out or the growth policy ends the run.
    ///
    /// A [`SnapshotKind::Final`] snapshot is always delivered on the way
    /// out, unless the sink itself failed.
    ///
    /// # Errors
    ///
    /// [`RunError::Sink`] if the sink rejects a snapshot;
    /// [`RunError::Lattice`] if a regrid fails.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<RunOutcome, RunError> {
        let max_steps = self.config.max_steps;
        let every = self.config.snapshot_every;
        info!(
            size = self.lattice.size(),
            max_steps,
            alpha = self.config.params.alpha(),
            beta = self.config.params.beta(),
            gamma = self.config.params.gamma(),
            edge = ?self.config.edge,
            "snowflake run starting"
        );

        let regrids_before = self.regrids;
        let mut applied: usize = 0;
        let mut stop_reason = StopReason::StepBudget;

        for i in 0..max_steps {
            self.step_once();
            applied += 1;
            if i % every != 0 {
                continue;
            }

            if self.config.monitor.is_too_big(&self.lattice) {
                match self.config.growth {
                    GrowthPolicy::Stop => {
                        stop_reason = StopReason::TooBig;
                        break;
                    }
                    GrowthPolicy::Regrid { margin, max_size } => {
                        let grown = margin
                            .checked_mul(2)
                            .and_then(|m| m.checked_add(self.lattice.size()));
                        match grown {
                            Some(size) if size <= max_size => {
                                self.regrid(margin)?;
                                continue;
                            }
                            _ => {
                                warn!(
                                    size = self.lattice.size(),
                                    max_size,
                                    step = i,
                                    "size ceiling reached, stopping growth"
                                );
                                stop_reason = StopReason::SizeCeiling;
                                break;
                            }
                        }
                    }
                }
            }

            sink.record(&Snapshot {
                step: i,
                kind: SnapshotKind::Periodic,
                params: &self.config.params,
                lattice: &self.lattice,
            })?;
            debug!(
                step = i,
                frozen = self.last_metrics.frozen_cells,
                step_us = self.last_metrics.step_us,
                "periodic snapshot"
            );
        }

        sink.record(&Snapshot {
            step: applied.saturating_sub(1),
            kind: SnapshotKind::Final,
            params: &self.config.params,
            lattice: &self.lattice,
        })?;

        let outcome = RunOutcome {
            steps: applied,
            stop_reason,
            final_size: self.lattice.size(),
            regrids: self.regrids - regrids_before,
        };
        info!(
            steps = outcome.steps,
            stop_reason = ?outcome.stop_reason,
            final_size = outcome.final_size,
            regrids = outcome.regrids,
            frozen = self.lattice.frozen_count(),
            "snowflake run finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CollectingSink, NullSink};
    use rime_test_utils::lattice_with_frozen;

    fn small(size: usize, max_steps: usize, snapshot_every: usize) -> RunConfig {
        RunConfig {
            size,
            max_steps,
            snapshot_every,
            ..RunConfig::default()
        }
    }

    #[test]
    fn new_seeds_the_center() {
        let sim = Simulation::new(small(11, 5, 1)).unwrap();
        assert_eq!(sim.lattice().get(5, 5), Some(1.0));
        assert_eq!(sim.lattice().frozen_count(), 1);
        assert_eq!(sim.steps(), 0);
    }

    #[test]
    fn new_rejects_invalid_config() {
        assert_eq!(
            Simulation::new(small(11, 0, 1)).unwrap_err(),
            ConfigError::ZeroStepBudget
        );
    }

    #[test]
    fn with_lattice_takes_the_lattice_size() {
        let l = Lattice::seeded(7, 0.35).unwrap();
        let sim = Simulation::with_lattice(RunConfig::default(), l).unwrap();
        assert_eq!(sim.config().size, 7);
    }

    #[test]
    fn step_once_reports_metrics() {
        let mut sim = Simulation::new(small(11, 5, 1)).unwrap();
        let m = sim.step_once().clone();
        assert_eq!(m.size, 11);
        assert_eq!(m.receptive_cells, 7);
        assert!(m.frozen_cells >= 1);
        assert!(m.total_mass > 0.0);
        assert_eq!(sim.last_metrics(), &m);
        assert_eq!(sim.steps(), 1);
    }

    #[test]
    fn regrid_pads_and_counts() {
        let mut sim = Simulation::new(small(11, 5, 1)).unwrap();
        sim.regrid(4).unwrap();
        assert_eq!(sim.lattice().size(), 19);
        assert_eq!(sim.lattice().get(9, 9), Some(1.0));
        assert_eq!(sim.regrids(), 1);
    }

    #[test]
    fn stop_policy_ends_at_first_check() {
        // Proxy cell of an 11-lattice is (5, 1).
        let l = lattice_with_frozen(11, 0.35, &[(5, 5), (5, 1)]);
        let mut sim = Simulation::with_lattice(small(11, 100, 10), l).unwrap();
        let outcome = sim.run(&mut NullSink).unwrap();
        assert_eq!(outcome.steps, 1);
        assert_eq!(outcome.stop_reason, StopReason::TooBig);
        assert_eq!(outcome.regrids, 0);
    }

    #[test]
    fn budget_run_counts_every_step() {
        let mut sim = Simulation::new(small(11, 7, 3)).unwrap();
        let mut sink = CollectingSink::new();
        let outcome = sim.run(&mut sink).unwrap();
        assert_eq!(outcome.steps, 7);
        assert_eq!(outcome.stop_reason, StopReason::StepBudget);
        assert_eq!(sim.steps(), 7);
        let steps: Vec<usize> = sink.frames().iter().map(|f| f.step).collect();
        assert_eq!(steps, vec![0, 3, 6, 6]);
        assert_eq!(sink.final_frame().map(|f| f.step), Some(6));
    }

    #[test]
    fn run_error_wraps_sources() {
        let e = RunError::from(SinkError {
            reason: "closed".into(),
        });
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("sink:"));
    }
}
