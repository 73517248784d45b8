//! Error types for lattice construction and automaton parameters.
//!
//! Every variant is an input-validation failure detected at a call
//! boundary. None of them can occur mid-step, and none are retryable.

use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction, resizing, or parameter checks.
#[derive(Clone, Debug, PartialEq)]
pub enum LatticeError {
    /// Lattice side length is not a positive odd integer, or a resize
    /// would produce an unrepresentable size.
    InvalidDimension {
        /// The offending side length.
        size: usize,
        /// What went wrong.
        reason: String,
    },
    /// Diffusion coefficient α is NaN or outside `[0, 2]`.
    InvalidDiffusionRate {
        /// The rejected value.
        value: f64,
    },
    /// Accretion rate γ is NaN, infinite, or negative.
    InvalidAccretionRate {
        /// The rejected value.
        value: f64,
    },
    /// Background humidity β is NaN or outside `[0, 1)`.
    InvalidBackground {
        /// The rejected value.
        value: f64,
    },
    /// A raw density buffer does not hold `size * size` cells.
    ShapeMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A `(row, col)` address is outside the lattice.
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Lattice side length.
        size: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { size, reason } => {
                write!(f, "invalid lattice dimension {size}: {reason}")
            }
            Self::InvalidDiffusionRate { value } => {
                write!(f, "diffusion rate must be in [0, 2], got {value}")
            }
            Self::InvalidAccretionRate { value } => {
                write!(f, "accretion rate must be finite and >= 0, got {value}")
            }
            Self::InvalidBackground { value } => {
                write!(f, "background humidity must be in [0, 1), got {value}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::CellOutOfBounds { row, col, size } => {
                write!(f, "cell ({row}, {col}) out of bounds for {size}x{size} lattice")
            }
        }
    }
}

impl Error for LatticeError {}
