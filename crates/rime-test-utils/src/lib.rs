//! Test fixtures and helpers for Rime development.
//!
//! Provides seeded lattice builders and float comparison helpers shared
//! by unit tests, integration tests, and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{assert_close, lattice_with_frozen, random_lattice};
