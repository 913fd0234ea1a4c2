mod config;
mod game_state;

pub use config::SimulationConfig;
pub use game_state::GameState;
