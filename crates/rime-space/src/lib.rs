//! Lattice addressing for the Rime snowflake automaton.
//!
//! A hexagonal lattice is laid onto a square array by shifting alternate
//! rows half a cell: even rows sit to the left, odd rows to the right.
//! [`OffsetHex`] turns a `(row, col)` address into its six hexagonal
//! neighbours, resolving out-of-range indices per [`EdgeBehavior`].
//!
//! Diffusion and receptive-site detection both go through
//! [`OffsetHex::neighbours_flat`], so the two can never disagree about
//! which cells touch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod offset_hex;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use offset_hex::{hex_offsets, OffsetHex};
