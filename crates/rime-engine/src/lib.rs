//! Run driver for the Rime snowflake automaton.
//!
//! [`Simulation`] owns a [`Lattice`](rime_core::Lattice) and a validated
//! [`Automaton`](rime_automaton::Automaton), steps it up to a budget,
//! consults a [`GrowthMonitor`](rime_automaton::GrowthMonitor) at a fixed
//! cadence, and hands snapshots to a caller-supplied [`SnapshotSink`].
//!
//! This is the only crate in the workspace that logs. Events go through
//! `tracing`; install a subscriber to see them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod run;
pub mod sink;

pub use config::{ConfigError, GrowthPolicy, RunConfig};
pub use metrics::StepMetrics;
pub use run::{RunError, RunOutcome, Simulation, StopReason};
pub use sink::{CollectingSink, Frame, NullSink, SinkError, Snapshot, SnapshotKind, SnapshotSink};
