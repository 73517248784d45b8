//! Receptive-site detection and accretion.
//!
//! A cell is receptive if it is frozen or is a hex neighbour of a frozen
//! cell. Receptive cells do not diffuse; each step they gain a fixed
//! increment γ, modelling mass deposited from outside the 2-D plane.

use rime_core::{check_accretion_rate, BoolGrid, Lattice, LatticeError, FREEZE_THRESHOLD};
use rime_space::{EdgeBehavior, OffsetHex};

/// Mark every frozen cell and every hex neighbour of a frozen cell.
///
/// Neighbours come from the same [`OffsetHex`] the diffusion kernel
/// scatters through, so both stages agree on adjacency.
pub fn receptive_mask(lattice: &Lattice, topology: &OffsetHex) -> BoolGrid {
    let n = lattice.size();
    debug_assert_eq!(n, topology.size(), "topology does not match lattice");
    let cells = lattice.as_slice();
    let mut mask = BoolGrid::new(n);
    for row in 0..n {
        for col in 0..n {
            let i = row * n + col;
            if cells[i] < FREEZE_THRESHOLD {
                continue;
            }
            mask.mark(i);
            for nb in topology.neighbours_flat(row, col) {
                mask.mark(nb);
            }
        }
    }
    mask
}

/// The receptive partition after accretion: `density + gamma` on
/// receptive cells, `0.0` everywhere else.
pub(crate) fn accrete_masked(lattice: &Lattice, mask: &BoolGrid, gamma: f64) -> Lattice {
    let mut out = lattice.clone();
    for (i, v) in out.as_mut_slice().iter_mut().enumerate() {
        *v = if mask.at(i) { *v + gamma } else { 0.0 };
    }
    out
}

/// Compute the receptive contribution grid for one step.
///
/// Detects receptive sites under `edge` and returns a lattice holding
/// `density + gamma` at each of them and `0.0` elsewhere.
///
/// # Errors
///
/// [`LatticeError::InvalidAccretionRate`] if `gamma` is negative or not
/// finite.
///
/// # Examples
///
/// ```
/// use rime_automaton::{accrete, init, EdgeBehavior};
///
/// let seed = init(0.35, 7).unwrap();
/// let part = accrete(&seed, 0.01, EdgeBehavior::Wrap).unwrap();
/// // Seed plus its six neighbours.
/// assert_eq!(part.as_slice().iter().filter(|&&v| v > 0.0).count(), 7);
/// assert!((part.get(3, 3).unwrap() - 1.01).abs() < 1e-12);
/// assert_eq!(part.get(0, 0), Some(0.0));
/// ```
pub fn accrete(lattice: &Lattice, gamma: f64, edge: EdgeBehavior) -> Result<Lattice, LatticeError> {
    check_accretion_rate(gamma)?;
    let topology = OffsetHex::for_lattice(lattice, edge);
    let mask = receptive_mask(lattice, &topology);
    Ok(accrete_masked(lattice, &mask, gamma))
}
