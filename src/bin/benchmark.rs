//! Performance benchmark comparing serial and parallel ticks

use std::time::Instant;
use life_universe::{Algorithm, Seed, Universe};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let Ok(mut universe) = Universe::with_seed(size, size, Seed::Random(0x5eed)) else {
        return 0.0;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick_with(algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== Universe Tick Benchmark ===\n");

    let sizes = [64, 256, 1000, 2000, 5000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    let size = 5000;
    let cells = size * size;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);
    println!(
        "\nParallel at {}x{}: {:.2} ms/gen, {:.1}M cells/sec",
        size,
        size,
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
