use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::{Seed, presets};

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 9] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, |s| s.reseed(Seed::Random(macroquad::rand::rand() as u64))),
        (KeyCode::G, |s| s.stamp(&presets::glider())),
        (KeyCode::B, |s| s.stamp(&presets::blinker())),
        (KeyCode::P, GameState::toggle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
