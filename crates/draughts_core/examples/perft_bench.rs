//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p draughts_core -- [depth]
//!
//! Counts are leg-wise: every jump of a multi-jump chain is its own node.

use draughts_core::{board::Position, perft::perft, types::Side};
use std::env;
use std::time::Instant;

/// Benchmark positions covering the opening, a capture-heavy middlegame and
/// a mobile king endgame.
const TEST_POSITIONS: &[(&str, Option<&str>)] = &[
    ("Standard setup", None),
    (
        "Locked middlegame",
        Some(
            "
            . b . b . . . b
            b . b . . . b .
            . . . b . b . .
            . . w . b . . .
            . w . w . . . .
            w . . . w . . .
            . w . w . w . w
            w . . . w . w .
            ",
        ),
    ),
    (
        "Three kings endgame",
        Some(
            "
            . . . . . . . .
            . . B . . . . .
            . . . . . . . .
            . . . . B . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . W . .
            . . . . . . . .
            ",
        ),
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, diagram) in TEST_POSITIONS {
        let pos = match diagram {
            Some(d) => Position::from_diagram(d, Side::Dark).expect("valid diagram"),
            None => Position::startpos(),
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
