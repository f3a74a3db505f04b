//! Performance benchmark comparing serial and parallel advance

use std::time::Instant;

use life_engine::Grid;
use rand::{SeedableRng, rngs::StdRng};

fn seeded_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are non-zero");
    grid.randomize(&mut StdRng::seed_from_u64(size as u64));
    grid
}

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, step: fn(&mut Grid) -> u64) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [30, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Grid::advance);
        let parallel_ms = benchmark(size, iterations, Grid::advance_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let mut serial = seeded_grid(200);
    let mut parallel = serial.clone();
    for _ in 0..50 {
        serial.advance();
        parallel.advance_parallel();
    }
    println!(
        "\nSerial and parallel agree after 50 generations: {}",
        serial == parallel
    );
}
