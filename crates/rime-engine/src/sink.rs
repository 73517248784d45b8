//! Snapshot delivery.
//!
//! The driver never touches the filesystem. At each checkpoint it hands
//! a borrowed [`Snapshot`] to a [`SnapshotSink`], which may render,
//! persist, or simply record it.

use std::error::Error;
use std::fmt;

use rime_core::{BoolGrid, Lattice, SimParams};

/// Why a snapshot was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Taken on the snapshot cadence while the crystal still fits.
    Periodic,
    /// Taken once when the run ends, whatever the reason.
    Final,
}

/// A borrowed view of the run at a checkpoint.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// Zero-based index of the most recently applied step.
    pub step: usize,
    /// Periodic or final.
    pub kind: SnapshotKind,
    /// Run constants, for naming or annotating output.
    pub params: &'a SimParams,
    /// The lattice after that step.
    pub lattice: &'a Lattice,
}

/// Error reported by a [`SnapshotSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkError {
    /// Human-readable cause.
    pub reason: String,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snapshot sink failed: {}", self.reason)
    }
}

impl Error for SinkError {}

/// Receiver of run snapshots.
///
/// An error aborts the run and is returned from
/// [`Simulation::run`](crate::Simulation::run).
pub trait SnapshotSink {
    /// Accept one snapshot.
    fn record(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError>;
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Owned summary of one snapshot, kept by [`CollectingSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Step index the snapshot was taken at.
    pub step: usize,
    /// Periodic or final.
    pub kind: SnapshotKind,
    /// Lattice side length at the time.
    pub size: usize,
    /// Frozen/vapor classification of every cell.
    pub frozen: BoolGrid,
    /// Largest density on the lattice.
    pub max_density: f64,
}

/// In-memory sink that keeps a [`Frame`] per snapshot.
///
/// Stores frozen masks rather than full lattices, which is all a renderer
/// needs.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    frames: Vec<Frame>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in arrival order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The final frame, if the run has finished.
    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last().filter(|f| f.kind == SnapshotKind::Final)
    }

    /// Drop all collected frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl SnapshotSink for CollectingSink {
    fn record(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        self.frames.push(Frame {
            step: snapshot.step,
            kind: snapshot.kind,
            size: snapshot.lattice.size(),
            frozen: snapshot.lattice.threshold_mask(),
            max_density: snapshot.lattice.max_density(),
        });
        Ok(())
    }
}
