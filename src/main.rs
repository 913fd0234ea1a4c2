use macroquad::prelude::*;
use life_universe::{GameState, SimulationConfig, input, rendering};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 960,
        window_height: 780,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = match SimulationConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    let mut state = match GameState::new(&config) {
        Ok(state) => state.with_running(true),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "starting {}x{} universe, {} ticks",
        config.width,
        config.height,
        state.algorithm.name()
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        state = input::process_keyboard_input(state);
        state = state.advance(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_universe(&state.universe);
        rendering::draw_status(&state);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        if config.generations.is_some_and(|limit| state.generation() >= limit) {
            state.is_running = false;
        }

        next_frame().await;
    }

    log::info!("stopped at {}", state.last_stats);
}
