//! The snowflake automaton: a discretized reaction-diffusion rule on a
//! hexagonal lattice.
//!
//! Each step splits the lattice into receptive sites (frozen cells and
//! their hex neighbours) and vapor sites. Vapor diffuses; receptive sites
//! accrete a fixed increment; the two disjoint partitions are summed.
//!
//! | Stage | Module |
//! |-------|--------|
//! | Receptive-site detection and accretion | [`accretion`] |
//! | Vapor diffusion | [`diffusion`] |
//! | One full time step | [`step`](mod@step) |
//! | Growth / termination detection | [`monitor`] |
//! | Grid resize | [`resize`] |
//!
//! The free functions at the crate root ([`init`], [`step()`],
//! [`is_too_big`], [`pad`], [`threshold_mask`]) form the surface a driver
//! needs. Nothing in this crate performs I/O or logs.
//!
//! # Example
//!
//! ```
//! let mut lattice = rime_automaton::init(0.35, 21).unwrap();
//! for _ in 0..10 {
//!     lattice = rime_automaton::step(&lattice, 2.0, 0.001).unwrap();
//! }
//! assert!(!rime_automaton::is_too_big(&lattice));
//! assert!(rime_automaton::threshold_mask(&lattice).count() >= 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accretion;
pub mod diffusion;
pub mod monitor;
pub mod resize;
pub mod step;

pub use accretion::{accrete, receptive_mask};
pub use diffusion::diffuse;
pub use monitor::{frozen_edge_distance, GrowthMonitor};
pub use resize::pad;
pub use step::{Advance, Automaton};

pub use rime_core::{BoolGrid, Lattice, LatticeError, SimParams};
pub use rime_space::EdgeBehavior;

/// Initial state: an `n × n` lattice at `beta` with a `1.0` seed at the
/// center.
///
/// # Errors
///
/// [`LatticeError::InvalidDimension`] unless `n` is positive and odd;
/// [`LatticeError::InvalidBackground`] unless `beta` is in `[0, 1)`.
pub fn init(beta: f64, n: usize) -> Result<Lattice, LatticeError> {
    Lattice::seeded(n, beta)
}

/// One time step on a toroidal lattice.
///
/// Validates `alpha` and `gamma` on every call; drivers stepping many
/// times should build an [`Automaton`] once instead.
///
/// # Errors
///
/// [`LatticeError::InvalidDiffusionRate`] unless `0 <= alpha <= 2`;
/// [`LatticeError::InvalidAccretionRate`] unless `gamma >= 0`.
pub fn step(lattice: &Lattice, alpha: f64, gamma: f64) -> Result<Lattice, LatticeError> {
    Ok(Automaton::new(alpha, gamma, EdgeBehavior::Wrap)?.step(lattice))
}

/// Single-cell proxy check: has the cell at `(center, n / 9)` frozen?
pub fn is_too_big(lattice: &Lattice) -> bool {
    GrowthMonitor::ProxyCell.is_too_big(lattice)
}

/// Elementwise `density >= 1.0` classification for renderers.
pub fn threshold_mask(lattice: &Lattice) -> BoolGrid {
    lattice.threshold_mask()
}
