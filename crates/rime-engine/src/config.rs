//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the input for constructing a [`Simulation`](crate::Simulation).
//! [`validate()`](RunConfig::validate) checks structural invariants once,
//! up front, so the step loop never has to.

use std::error::Error;
use std::fmt;

use rime_automaton::GrowthMonitor;
use rime_core::{Lattice, LatticeError, SimParams};
use rime_space::EdgeBehavior;

// ── GrowthPolicy ───────────────────────────────────────────────────

/// What the driver does once the growth monitor reports the crystal has
/// outgrown its lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// End the run.
    #[default]
    Stop,
    /// Pad the lattice with background on every side and keep going.
    Regrid {
        /// Cells of padding added on each side. Must be at least 1.
        margin: usize,
        /// Largest side length the lattice may grow to. A regrid that
        /// would exceed it ends the run instead.
        max_size: usize,
    },
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RunConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice size or simulation parameters are invalid.
    Lattice(LatticeError),
    /// `max_steps` is zero.
    ZeroStepBudget,
    /// `snapshot_every` is zero.
    ZeroSnapshotCadence,
    /// [`GrowthPolicy`] invariant violated.
    InvalidGrowthPolicy {
        /// Description of which invariant was violated.
        reason: String,
    },
    /// [`GrowthMonitor`] invariant violated.
    InvalidMonitor {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::ZeroStepBudget => write!(f, "max_steps must be at least 1"),
            Self::ZeroSnapshotCadence => write!(f, "snapshot_every must be at least 1"),
            Self::InvalidGrowthPolicy { reason } => {
                write!(f, "invalid growth policy: {reason}")
            }
            Self::InvalidMonitor { reason } => write!(f, "invalid growth monitor: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Everything needed to start a snowflake run.
///
/// Two presets mirror the classic runs: [`Default`] (a 251-cell lattice
/// for 1000 steps) and [`RunConfig::draft`] (451 cells for 10000 steps).
/// Both keep α at the stability bound of 2.0.
///
/// # Examples
///
/// ```
/// use rime_engine::{GrowthPolicy, RunConfig};
///
/// let cfg = RunConfig {
///     size: 101,
///     growth: GrowthPolicy::Regrid { margin: 20, max_size: 301 },
///     ..RunConfig::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Diffusion, background, and accretion constants.
    pub params: SimParams,
    /// Initial side length. Must be positive and odd.
    pub size: usize,
    /// Boundary handling shared by diffusion and receptivity.
    pub edge: EdgeBehavior,
    /// Step budget.
    pub max_steps: usize,
    /// Cadence, in steps, of growth checks and periodic snapshots.
    pub snapshot_every: usize,
    /// Test for "the crystal has outgrown its lattice".
    pub monitor: GrowthMonitor,
    /// Response when the monitor trips.
    pub growth: GrowthPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: SimParams::default(),
            size: 251,
            edge: EdgeBehavior::Wrap,
            max_steps: 1000,
            snapshot_every: 50,
            monitor: GrowthMonitor::ProxyCell,
            growth: GrowthPolicy::Stop,
        }
    }
}

impl RunConfig {
    /// The longer, larger preset: 451 cells, 10000 steps, a check every
    /// 100 steps.
    pub fn draft() -> Self {
        Self {
            size: 451,
            max_steps: 10_000,
            snapshot_every: 100,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// Returns `Ok(())` if the configuration is valid, or the first
    /// error found. `params` is valid by construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Lattice shape.
        Lattice::check_size(self.size)?;

        // 2. Loop bounds.
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        if self.snapshot_every == 0 {
            return Err(ConfigError::ZeroSnapshotCadence);
        }

        // 3. Monitor.
        if let GrowthMonitor::EdgeDistance { margin } = self.monitor {
            if margin == 0 {
                return Err(ConfigError::InvalidMonitor {
                    reason: "edge-distance margin must be at least 1".into(),
                });
            }
        }

        // 4. Growth policy.
        if let GrowthPolicy::Regrid { margin, max_size } = self.growth {
            if margin == 0 {
                return Err(ConfigError::InvalidGrowthPolicy {
                    reason: "regrid margin must be at least 1".into(),
                });
            }
            if max_size < self.size {
                return Err(ConfigError::InvalidGrowthPolicy {
                    reason: format!(
                        "max_size ({max_size}) is below the initial size ({})",
                        self.size
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        let base = RunConfig::default();
        assert!(base.validate().is_ok());
        assert_eq!(base.size, 251);
        assert_eq!(base.max_steps, 1000);
        assert_eq!(base.snapshot_every, 50);

        let draft = RunConfig::draft();
        assert!(draft.validate().is_ok());
        assert_eq!(draft.size, 451);
        assert_eq!(draft.max_steps, 10_000);
        assert_eq!(draft.snapshot_every, 100);
        assert_eq!(draft.params.alpha(), 2.0);
    }

    #[test]
    fn even_size_rejected() {
        let cfg = RunConfig {
            size: 250,
            ..RunConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Lattice(LatticeError::InvalidDimension { .. }))
        ));
    }

    #[test]
    fn zero_budget_and_cadence_rejected() {
        let cfg = RunConfig {
            max_steps: 0,
            ..RunConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStepBudget));

        let cfg = RunConfig {
            snapshot_every: 0,
            ..RunConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSnapshotCadence));
    }

    #[test]
    fn zero_monitor_margin_rejected() {
        let cfg = RunConfig {
            monitor: GrowthMonitor::EdgeDistance { margin: 0 },
            ..RunConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidMonitor { .. })
        ));
    }

    #[test]
    fn regrid_invariants() {
        let zero_margin = RunConfig {
            growth: GrowthPolicy::Regrid {
                margin: 0,
                max_size: 501,
            },
            ..RunConfig::default()
        };
        assert!(matches!(
            zero_margin.validate(),
            Err(ConfigError::InvalidGrowthPolicy { .. })
        ));

        let low_ceiling = RunConfig {
            growth: GrowthPolicy::Regrid {
                margin: 20,
                max_size: 101,
            },
            ..RunConfig::default()
        };
        let err = low_ceiling.validate().unwrap_err();
        assert!(err.to_string().contains("below the initial size"));
    }

    #[test]
    fn lattice_error_is_the_source() {
        let err = ConfigError::from(LatticeError::InvalidDiffusionRate { value: 3.0 });
        assert!(err.source().is_some());
        assert!(ConfigError::ZeroStepBudget.source().is_none());
    }
}
