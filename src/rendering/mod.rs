use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::Universe;

/// Height reserved at the bottom of the window for the status line
pub const STATUS_HEIGHT: f32 = 48.0;

/// Largest square cell size that fits the whole universe on screen
pub fn fit_cell_size(universe: &Universe, area_width: f32, area_height: f32) -> f32 {
    let (width, height) = universe.dimensions();
    (area_width / width as f32).min(area_height / height as f32).max(1.0)
}

/// Draw every cell of the universe, top-left anchored
pub fn draw_universe(universe: &Universe) {
    let area_height = (screen_height() - STATUS_HEIGHT).max(1.0);
    let cell_size = fit_cell_size(universe, screen_width(), area_height);

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = cell_size >= 6.0;

    for (row, col, cell) in universe.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;

        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, alive_color);
        }
        if draw_grid_lines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
        }
    }
}

/// Draw generation, change count and timing below the grid
pub fn draw_status(state: &GameState) {
    let y = screen_height() - STATUS_HEIGHT + 20.0;
    let stats = state.last_stats;

    draw_text(
        &format!("generation {}", state.generation()),
        10.0,
        y,
        20.0,
        Color::from_rgba(0, 255, 150, 255),
    );
    draw_text(
        &format!(
            "changes {} | alive {} | {} {:.1}ms | draw {:.1}ms | {:.0} gen/s | {}",
            stats.changes,
            stats.population,
            state.algorithm.name(),
            state.last_evolution_time_ms,
            state.last_render_time_ms,
            state.updates_per_second,
            if state.is_running { "Running" } else { "Paused" },
        ),
        10.0,
        y + 20.0,
        16.0,
        GRAY,
    );
}
