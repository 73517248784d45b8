//! One discrete time step of the snowflake automaton.
//!
//! ```text
//! mask        = receptive_mask(prev)
//! receptive'  = prev + γ   on mask, 0 elsewhere
//! vapor'      = diffuse(prev on !mask, 0 elsewhere)
//! next        = receptive' + vapor'
//! ```
//!
//! The mask is computed on the pre-step state only. Vapor scattered
//! towards a receptive site lands on it, which is how mass moves from the
//! medium into the crystal.

use crate::accretion::{accrete_masked, receptive_mask};
use crate::diffusion::scatter_into;
use rime_core::{check_accretion_rate, check_diffusion_rate, Lattice, LatticeError, SimParams};
use rime_space::{EdgeBehavior, OffsetHex};

/// Result of [`Automaton::advance`].
#[derive(Clone, Debug)]
pub struct Advance {
    /// The post-step lattice.
    pub lattice: Lattice,
    /// Number of receptive sites in the pre-step lattice.
    pub receptive_cells: usize,
}

/// A validated step rule: diffusion rate, accretion rate, and edge
/// behaviour.
///
/// Rates are checked once at construction, so [`step`](Self::step) is
/// infallible and can sit in a hot loop.
///
/// # Examples
///
/// ```
/// use rime_automaton::{Automaton, EdgeBehavior, Lattice};
///
/// let rule = Automaton::new(2.0, 0.0, EdgeBehavior::Wrap).unwrap();
/// let l0 = Lattice::seeded(11, 0.35).unwrap();
/// let l1 = rule.step(&l0);
/// assert_eq!(l1.size(), 11);
/// assert_eq!(l1.get(5, 5), Some(1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Automaton {
    alpha: f64,
    gamma: f64,
    edge: EdgeBehavior,
}

impl Automaton {
    /// Build a step rule.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::InvalidDiffusionRate`] unless `0 <= alpha <= 2`
    /// - [`LatticeError::InvalidAccretionRate`] unless `gamma` is finite and `>= 0`
    pub fn new(alpha: f64, gamma: f64, edge: EdgeBehavior) -> Result<Self, LatticeError> {
        check_diffusion_rate(alpha)?;
        check_accretion_rate(gamma)?;
        Ok(Self { alpha, gamma, edge })
    }

    /// Build a step rule from already-validated run parameters.
    pub fn from_params(params: &SimParams, edge: EdgeBehavior) -> Self {
        Self {
            alpha: params.alpha(),
            gamma: params.gamma(),
            edge,
        }
    }

    /// Diffusion coefficient α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Accretion rate γ.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Edge behaviour shared by diffusion and receptivity.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Apply one step and report how many sites were receptive.
    pub fn advance(&self, lattice: &Lattice) -> Advance {
        let topology = OffsetHex::for_lattice(lattice, self.edge);
        let mask = receptive_mask(lattice, &topology);

        let receptive_next = accrete_masked(lattice, &mask, self.gamma);

        let mut vapor = lattice.clone();
        for (i, v) in vapor.as_mut_slice().iter_mut().enumerate() {
            if mask.at(i) {
                *v = 0.0;
            }
        }
        let mut vapor_next = vec![0.0; lattice.cell_count()];
        scatter_into(vapor.as_slice(), &topology, self.alpha, &mut vapor_next);

        let mut next = receptive_next;
        for (dst, add) in next.as_mut_slice().iter_mut().zip(vapor_next) {
            *dst += add;
        }

        Advance {
            lattice: next,
            receptive_cells: mask.count(),
        }
    }

    /// Apply one step, returning the new lattice. `lattice` is untouched.
    pub fn step(&self, lattice: &Lattice) -> Lattice {
        self.advance(lattice).lattice
    }
}
