//! Core types for the Rime snowflake automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! density [`Lattice`], the derived [`BoolGrid`] classification, the
//! per-run [`SimParams`], and the [`LatticeError`] taxonomy shared by every
//! other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod lattice;
pub mod params;

pub use error::LatticeError;
pub use hash::lattice_hash;
pub use lattice::{BoolGrid, Lattice, FREEZE_THRESHOLD};
pub use params::SimParams;
pub use params::{check_accretion_rate, check_diffusion_rate, MAX_DIFFUSION_RATE};
