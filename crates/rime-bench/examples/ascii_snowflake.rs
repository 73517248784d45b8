//! Grow a snowflake and print it as ASCII art.
//!
//! Demonstrates: RunConfig → Simulation → custom SnapshotSink → run.

use rime_core::BoolGrid;
use rime_engine::{
    GrowthPolicy, RunConfig, Simulation, SinkError, Snapshot, SnapshotKind, SnapshotSink,
};

/// Prints the frozen mask of every final snapshot; counts periodic ones.
struct AsciiSink {
    periodic: usize,
}

impl SnapshotSink for AsciiSink {
    fn record(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        match snapshot.kind {
            SnapshotKind::Periodic => self.periodic += 1,
            SnapshotKind::Final => {
                println!(
                    "step {} (n = {}, alpha = {}, beta = {}, gamma = {})",
                    snapshot.step,
                    snapshot.lattice.size(),
                    snapshot.params.alpha(),
                    snapshot.params.beta(),
                    snapshot.params.gamma(),
                );
                print!("{}", render(&snapshot.lattice.threshold_mask()));
            }
        }
        Ok(())
    }
}

/// Odd rows are shifted half a cell right, matching the hex layout.
fn render(mask: &BoolGrid) -> String {
    let n = mask.size();
    let mut out = String::with_capacity(n * (2 * n + 2));
    for row in 0..n {
        if row % 2 == 1 {
            out.push(' ');
        }
        for col in 0..n {
            let frozen = mask.get(row, col) == Some(true);
            out.push(if frozen { '*' } else { '.' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = RunConfig {
        size: 61,
        max_steps: 400,
        snapshot_every: 25,
        growth: GrowthPolicy::Regrid {
            margin: 10,
            max_size: 81,
        },
        ..RunConfig::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    let mut sink = AsciiSink { periodic: 0 };
    let outcome = sim.run(&mut sink).unwrap();

    println!(
        "\n{} steps, {} periodic snapshots, {} regrids, stopped by {:?}",
        outcome.steps, sink.periodic, outcome.regrids, outcome.stop_reason
    );
}
