//! Terminal render loop: print the universe, tick, print the generation.
//!
//! Usage:
//!   cargo run --bin text_life -- --width 40 --height 20 --generations 50

use life_universe::{ConfigurationError, SimulationConfig};
use std::io::{self, Write};
use std::time::Duration;

fn run(config: &SimulationConfig) -> Result<(), ConfigurationError> {
    let mut universe = config.build_universe()?;
    let frame = Duration::from_secs_f32(1.0 / config.updates_per_second);
    let stdout = io::stdout();

    log::info!(
        "{}x{} universe, {} ticks, {:?} generations",
        config.width,
        config.height,
        config.algorithm.name(),
        config.generations
    );

    loop {
        if config.generations.is_some_and(|limit| universe.generation() >= limit) {
            break;
        }

        let text = universe.render();
        let stats = universe.tick_with(config.algorithm);

        let mut out = stdout.lock();
        // Clear screen and home the cursor before each frame.
        let written = write!(out, "\x1b[2J\x1b[H{}\ngeneration {}\n", text, stats.generation)
            .and_then(|_| out.flush());
        if written.is_err() {
            // stdout closed (e.g. piped into `head`)
            break;
        }
        drop(out);

        std::thread::sleep(frame);
    }

    log::info!("finished: {}", universe.last_stats());
    Ok(())
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let result = SimulationConfig::from_args(std::env::args().skip(1)).and_then(|c| run(&c));
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}
