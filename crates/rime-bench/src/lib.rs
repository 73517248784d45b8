//! Benchmark profiles and utilities for the Rime snowflake automaton.
//!
//! - [`reference_profile`]: the classic 251-cell run
//! - [`stress_profile`]: 451 cells with regridding up to 1001
//! - [`grown_lattice`]: a lattice with a crystal already grown, so step
//!   benchmarks see a realistic receptive region

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rime_automaton::{Automaton, EdgeBehavior, Lattice};
use rime_engine::{GrowthPolicy, RunConfig};

/// The classic run: 251 × 251, 1000 steps, stop when too big.
pub fn reference_profile() -> RunConfig {
    RunConfig::default()
}

/// A larger run that regrids by 20 cells per side up to 1001 cells.
pub fn stress_profile() -> RunConfig {
    RunConfig {
        growth: GrowthPolicy::Regrid {
            margin: 20,
            max_size: 1001,
        },
        ..RunConfig::draft()
    }
}

/// Seed a `size` lattice at the default parameters and step it `steps`
/// times under wrap-around edges.
pub fn grown_lattice(size: usize, steps: usize) -> Lattice {
    let params = RunConfig::default().params;
    let rule = Automaton::from_params(&params, EdgeBehavior::Wrap);
    let mut lattice = match Lattice::seeded(size, params.beta()) {
        Ok(l) => l,
        Err(e) => panic!("grown_lattice: {e}"),
    };
    for _ in 0..steps {
        lattice = rule.step(&lattice);
    }
    lattice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile().validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile().validate().unwrap();
    }

    #[test]
    fn grown_lattice_has_a_crystal() {
        let l = grown_lattice(21, 10);
        assert_eq!(l.size(), 21);
        assert!(l.frozen_count() >= 7);
    }
}
