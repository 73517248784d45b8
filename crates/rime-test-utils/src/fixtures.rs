//! Reusable lattice fixtures.
//!
//! - [`random_lattice`]: seeded uniform densities, reproducible across runs.
//! - [`lattice_with_frozen`]: background lattice with chosen frozen cells.
//! - [`assert_close`]: absolute-tolerance float comparison with context.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rime_core::Lattice;

/// An `n × n` lattice of densities drawn uniformly from `[0, max)`.
///
/// Deterministic for a given `seed`. Panics if `n` is not a valid
/// lattice size.
pub fn random_lattice(n: usize, max: f64, seed: u64) -> Lattice {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Lattice::from_fn(n, |_, _| rng.random::<f64>() * max).unwrap()
}

/// An `n × n` lattice at `beta` with each listed `(row, col)` set to `1.0`.
pub fn lattice_with_frozen(n: usize, beta: f64, frozen: &[(usize, usize)]) -> Lattice {
    let mut lattice = Lattice::filled(n, beta).unwrap();
    for &(row, col) in frozen {
        lattice.set(row, col, 1.0).unwrap();
    }
    lattice
}

/// Assert `|actual - expected| <= tol`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}
