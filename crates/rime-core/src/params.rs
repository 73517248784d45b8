//! Per-run simulation constants.

use crate::error::LatticeError;
use crate::lattice::Lattice;

/// Largest diffusion coefficient for which the self-retention weight
/// `1 - α/2` stays non-negative.
pub const MAX_DIFFUSION_RATE: f64 = 2.0;

/// Immutable constants of one snowflake run.
///
/// - `alpha`: fraction-of-mass diffusion coefficient, `0 <= α <= 2`.
/// - `beta`: background humidity and padding fill value, `0 <= β < 1`.
/// - `gamma`: per-step accretion onto receptive sites, `γ >= 0`.
///
/// Fields are private so a `SimParams` value is always valid; build one
/// with [`SimParams::new`].
///
/// # Examples
///
/// ```
/// use rime_core::{LatticeError, SimParams};
///
/// let p = SimParams::new(1.5, 0.4, 0.0001).unwrap();
/// assert_eq!(p.alpha(), 1.5);
///
/// assert!(matches!(
///     SimParams::new(2.44, 0.35, 0.001),
///     Err(LatticeError::InvalidDiffusionRate { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl SimParams {
    /// Validate and bundle the three run constants.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::InvalidDiffusionRate`] if `alpha` is NaN or
    ///   outside `[0, 2]`
    /// - [`LatticeError::InvalidBackground`] if `beta` is NaN or outside `[0, 1)`
    /// - [`LatticeError::InvalidAccretionRate`] if `gamma` is NaN, infinite,
    ///   or negative
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self, LatticeError> {
        check_diffusion_rate(alpha)?;
        Lattice::check_background(beta)?;
        check_accretion_rate(gamma)?;
        Ok(Self { alpha, beta, gamma })
    }

    /// Diffusion coefficient α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Background humidity β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Accretion rate γ.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for SimParams {
    /// α = 2.0, β = 0.35, γ = 0.001: a dendritic, fern-armed regime.
    fn default() -> Self {
        Self {
            alpha: MAX_DIFFUSION_RATE,
            beta: 0.35,
            gamma: 0.001,
        }
    }
}

/// Reject α values that would drive the retention weight negative.
pub fn check_diffusion_rate(alpha: f64) -> Result<(), LatticeError> {
    if !(0.0..=MAX_DIFFUSION_RATE).contains(&alpha) {
        return Err(LatticeError::InvalidDiffusionRate { value: alpha });
    }
    Ok(())
}

/// Reject γ values that are negative or not finite.
pub fn check_accretion_rate(gamma: f64) -> Result<(), LatticeError> {
    if !(gamma >= 0.0) || !gamma.is_finite() {
        return Err(LatticeError::InvalidAccretionRate { value: gamma });
    }
    Ok(())
}
