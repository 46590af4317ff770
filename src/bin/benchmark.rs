//! Generation throughput for each rule over several grid sizes

use std::time::Instant;

use pixel_automaton::{Grid, RuleKind, Snapshot};

fn benchmark_rule(kind: RuleKind, size: usize, iterations: u32) -> f64 {
    let rule = kind.rule();
    let mut grid = Grid::new(size, size, 20);
    // Same seed every run so timings are comparable
    let seed: Vec<Vec<bool>> = (0..size)
        .map(|i| (0..size).map(|j| (i * 7 + j * 13) % 5 < 2).collect())
        .collect();
    if let Err(err) = Snapshot::from_rows(&seed).and_then(|s| grid.commit(&s)) {
        eprintln!("seeding failed: {err}");
        return f64::NAN;
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let snapshot = rule.next_generation(&grid);
        if let Err(err) = grid.commit(&snapshot) {
            eprintln!("commit failed: {err}");
            return f64::NAN;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Pixel Automaton Generation Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512];
    let iterations = 20;

    println!("{:>10} {:>14} {:>14}", "Size", "Conway ms", "Rule 30 ms");
    println!("{:-<40}", "");

    for size in sizes {
        let conway_ms = benchmark_rule(RuleKind::Conway, size, iterations);
        let rule30_ms = benchmark_rule(RuleKind::ElementaryRule30, size, iterations);
        println!(
            "{:>10} {:>14.3} {:>14.3}",
            format!("{size}x{size}"),
            conway_ms,
            rule30_ms
        );
    }

    let cells = 512 * 512;
    let conway_ms = benchmark_rule(RuleKind::Conway, 512, iterations);
    println!(
        "\nConway at 512x512: {:.1}M cells/sec",
        cells as f64 / (conway_ms / 1000.0) / 1_000_000.0
    );
}
