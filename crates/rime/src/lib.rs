//! Rime: a hexagonal cellular automaton that grows snowflakes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Rime sub-crates. For most users, adding `rime` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rime::prelude::*;
//!
//! let config = RunConfig {
//!     size: 41,
//!     max_steps: 60,
//!     snapshot_every: 20,
//!     ..RunConfig::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let mut sink = CollectingSink::new();
//! let outcome = sim.run(&mut sink).unwrap();
//!
//! assert_eq!(outcome.stop_reason, StopReason::StepBudget);
//! let frozen = sink.final_frame().unwrap().frozen.count();
//! assert!(frozen > 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rime-core` | Lattice, boolean grid, parameters, errors, hashing |
//! | [`space`] | `rime-space` | Offset-hex adjacency and edge behaviour |
//! | [`automaton`] | `rime-automaton` | Diffusion, accretion, step, monitor, resize |
//! | [`engine`] | `rime-engine` | Run driver, growth policies, snapshot sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`rime-core`).
///
/// The density [`types::Lattice`], its [`types::BoolGrid`] classification,
/// [`types::SimParams`], and [`types::LatticeError`].
pub use rime_core as types;

/// Hexagonal adjacency on a square array (`rime-space`).
///
/// [`space::OffsetHex`] resolves the six neighbours of a cell under an
/// [`space::EdgeBehavior`].
pub use rime_space as space;

/// The automaton itself (`rime-automaton`).
///
/// Free functions [`automaton::init`], [`automaton::step()`],
/// [`automaton::is_too_big`], and [`automaton::pad`], plus the reusable
/// [`automaton::Automaton`] step rule.
pub use rime_automaton as automaton;

/// Run driver (`rime-engine`).
///
/// [`engine::Simulation`] steps a lattice under a [`engine::RunConfig`]
/// and hands snapshots to an [`engine::SnapshotSink`].
pub use rime_engine as engine;

/// Common imports for typical Rime usage.
///
/// ```rust
/// use rime::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rime_core::{BoolGrid, Lattice, LatticeError, SimParams};

    // Space
    pub use rime_space::EdgeBehavior;

    // Automaton
    pub use rime_automaton::{Automaton, GrowthMonitor};

    // Engine
    pub use rime_engine::{
        CollectingSink, ConfigError, GrowthPolicy, NullSink, RunConfig, RunError, RunOutcome,
        Simulation, Snapshot, SnapshotKind, SnapshotSink, StepMetrics, StopReason,
    };
}
