//! Square density lattice and its frozen/vapor classification.
//!
//! A [`Lattice`] is an `n × n` row-major array of `f64` densities with `n`
//! odd, so a unique center cell exists. Solidity is never stored: a cell
//! is frozen iff its density is at least [`FREEZE_THRESHOLD`]. The derived
//! [`BoolGrid`] carries that classification for consumers that only need
//! a binary solid/vapor view.

use crate::error::LatticeError;

/// Density at or above which a cell counts as frozen ice.
pub const FREEZE_THRESHOLD: f64 = 1.0;

/// An `n × n` grid of densities, `n` odd.
///
/// Cells are stored row-major: cell `(row, col)` lives at index
/// `row * n + col`. Lattices are treated as values: automaton steps read
/// one lattice and return a fresh one.
///
/// # Examples
///
/// ```
/// use rime_core::Lattice;
///
/// let lattice = Lattice::seeded(5, 0.35).unwrap();
/// assert_eq!(lattice.size(), 5);
/// assert_eq!(lattice.center(), 2);
/// assert_eq!(lattice.get(2, 2), Some(1.0));
/// assert_eq!(lattice.get(0, 0), Some(0.35));
/// assert_eq!(lattice.frozen_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    size: usize,
    cells: Vec<f64>,
}

impl Lattice {
    /// Check that `size` is a usable side length: positive, odd, and
    /// small enough that `size * size` fits in `usize`.
    pub fn check_size(size: usize) -> Result<(), LatticeError> {
        if size == 0 {
            return Err(LatticeError::InvalidDimension {
                size,
                reason: "size must be positive".into(),
            });
        }
        if size % 2 == 0 {
            return Err(LatticeError::InvalidDimension {
                size,
                reason: "size must be odd so a unique center cell exists".into(),
            });
        }
        if size.checked_mul(size).is_none() {
            return Err(LatticeError::InvalidDimension {
                size,
                reason: "cell count overflows usize".into(),
            });
        }
        Ok(())
    }

    /// Check that `beta` is a valid background humidity: finite, in `[0, 1)`.
    pub fn check_background(beta: f64) -> Result<(), LatticeError> {
        if !(0.0..FREEZE_THRESHOLD).contains(&beta) {
            return Err(LatticeError::InvalidBackground { value: beta });
        }
        Ok(())
    }

    /// Create a lattice with every cell set to `value`.
    ///
    /// Only the size is validated; `value` may be anything, which makes
    /// this the constructor for scratch partitions (e.g. all zeros).
    pub fn filled(size: usize, value: f64) -> Result<Self, LatticeError> {
        Self::check_size(size)?;
        Ok(Self {
            size,
            cells: vec![value; size * size],
        })
    }

    /// Create the initial state: every cell at `beta`, the center cell at
    /// exactly `1.0` (the seed).
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidDimension`] if `size` is not positive odd,
    /// [`LatticeError::InvalidBackground`] if `beta` is outside `[0, 1)`.
    pub fn seeded(size: usize, beta: f64) -> Result<Self, LatticeError> {
        Self::check_background(beta)?;
        let mut lattice = Self::filled(size, beta)?;
        let mid = lattice.center();
        let idx = lattice.index(mid, mid);
        lattice.cells[idx] = FREEZE_THRESHOLD;
        Ok(lattice)
    }

    /// Wrap an existing row-major buffer of `size * size` densities.
    pub fn from_vec(size: usize, cells: Vec<f64>) -> Result<Self, LatticeError> {
        Self::check_size(size)?;
        if cells.len() != size * size {
            return Err(LatticeError::ShapeMismatch {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a lattice by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        size: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, LatticeError> {
        Self::check_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `n * n`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row (and column) index of the center cell, `(n - 1) / 2`.
    pub fn center(&self) -> usize {
        (self.size - 1) / 2
    }

    /// Flat index of `(row, col)`. Callers must pass in-range coordinates.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Density at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.size && col < self.size {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite the density at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), LatticeError> {
        if row >= self.size || col >= self.size {
            return Err(LatticeError::CellOutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Whether `(row, col)` is frozen. Out-of-bounds cells are not.
    pub fn is_frozen(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v >= FREEZE_THRESHOLD)
    }

    /// Row-major view of all densities.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable row-major view of all densities.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Consume the lattice and return its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.cells
    }

    /// Densities of one row.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.size {
            let start = row * self.size;
            Some(&self.cells[start..start + self.size])
        } else {
            None
        }
    }

    /// Elementwise `density >= 1.0` classification.
    pub fn threshold_mask(&self) -> BoolGrid {
        BoolGrid {
            size: self.size,
            cells: self.cells.iter().map(|&v| v >= FREEZE_THRESHOLD).collect(),
        }
    }

    /// Number of frozen cells.
    pub fn frozen_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&v| v >= FREEZE_THRESHOLD)
            .count()
    }

    /// Sum of all densities.
    pub fn total_mass(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Largest density on the lattice.
    pub fn max_density(&self) -> f64 {
        self.cells.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// An `n × n` boolean grid, row-major like [`Lattice`].
///
/// Produced by [`Lattice::threshold_mask`] (frozen classification) and by
/// the automaton's receptive-site detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolGrid {
    size: usize,
    cells: Vec<bool>,
}

impl BoolGrid {
    /// An all-`false` grid of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Value at a flat row-major index.
    #[inline]
    pub fn at(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    /// Set the flat row-major index `idx` to `true`.
    #[inline]
    pub fn mark(&mut self, idx: usize) {
        self.cells[idx] = true;
    }

    /// Number of `true` cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}
