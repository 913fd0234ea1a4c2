use super::SimulationConfig;
use crate::domain::{Algorithm, ConfigurationError, Pattern, Seed, Stats, Universe};

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub universe: Universe,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_stats: Stats,
    pub last_evolution_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl GameState {
    /// Create new game state from a run configuration
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigurationError> {
        let universe = config.build_universe()?;
        Ok(Self {
            last_stats: universe.last_stats(),
            universe,
            algorithm: config.algorithm,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second.clamp(1.0, 60.0),
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Switch between serial and parallel ticking
    pub fn toggle_algorithm(mut self) -> Self {
        self.algorithm = self.algorithm.toggled();
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        self.universe.clear();
        self.is_running = false;
        self
    }

    /// Replace the universe with a freshly seeded one of the same size.
    /// The new universe starts back at generation 0.
    pub fn reseed(self, seed: Seed) -> Self {
        let (width, height) = self.universe.dimensions();
        let rebuilt = Universe::with_seed(width, height, seed);
        self.replace_universe(rebuilt, seed)
    }

    /// Swap in a rebuilt universe and pause.
    /// On failure the current universe is kept and the error logged.
    fn replace_universe(mut self, rebuilt: Result<Universe, ConfigurationError>, seed: Seed) -> Self {
        let (width, height) = self.universe.dimensions();
        match rebuilt {
            Ok(universe) => {
                log::info!("reseeded {}x{} universe ({})", width, height, seed.name());
                self.last_stats = universe.last_stats();
                self.universe = universe;
            }
            Err(e) => {
                log::warn!("could not reseed {}x{} universe: {}", width, height, e);
            }
        }
        self.is_running = false;
        self
    }

    /// Stamp a pattern into the middle of the universe
    pub fn stamp(mut self, pattern: &Pattern) -> Self {
        pattern.place_centered(&mut self.universe);
        log::debug!("placed {} at generation {}", pattern.name, self.generation());
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance exactly one generation, running or not
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.last_stats = self.universe.tick_with(self.algorithm);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Update simulation by one frame.
    /// Ticks at most once per call, when enough time has accumulated.
    pub fn advance(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step();
            self.update_timer = 0.0;
        }

        self
    }

    pub fn generation(&self) -> u64 {
        self.universe.generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = SimulationConfig { width: 10, height: 8, ..SimulationConfig::default() };
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SimulationConfig { width: 0, ..SimulationConfig::default() };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_paused_state_does_not_tick() {
        let state = state().advance(10.0);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_advance_waits_for_interval() {
        let mut state = state().with_running(true);
        state.updates_per_second = 10.0;

        state = state.advance(0.05);
        assert_eq!(state.generation(), 0);
        state = state.advance(0.06);
        assert_eq!(state.generation(), 1);
        assert_eq!(state.last_stats.generation, 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_step_ignores_pause() {
        let state = state().step().step();
        assert_eq!(state.generation(), 2);
        assert!(!state.is_running);
    }

    #[test]
    fn test_algorithms_agree() {
        let serial = state().step().step().step();
        let parallel = state().toggle_algorithm().step().step().step();
        assert_eq!(parallel.algorithm, Algorithm::Parallel);
        assert_eq!(serial.universe.render(), parallel.universe.render());
        assert_eq!(serial.last_stats, parallel.last_stats);
    }

    #[test]
    fn test_reseed_restarts_generation() {
        let state = state().step().reseed(Seed::Empty);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.universe.population(), 0);
        assert_eq!(state.universe.dimensions(), (10, 8));
    }

    #[test]
    fn test_failed_reseed_keeps_universe() {
        let before = state().step().with_running(true);
        let render = before.universe.render();
        let failure = Err(ConfigurationError::TooLarge { width: 10, height: 8 });

        let state = before.replace_universe(failure, Seed::Empty);
        assert_eq!(state.universe.render(), render);
        assert_eq!(state.generation(), 1);
        assert!(!state.is_running);
    }

    #[test]
    fn test_clear_pauses() {
        let state = state().with_running(true).clear();
        assert!(!state.is_running);
        assert_eq!(state.universe.population(), 0);
    }

    #[test]
    fn test_stamp_places_pattern() {
        let state = state().reseed(Seed::Empty).stamp(&crate::domain::presets::glider());
        assert_eq!(state.universe.population(), 5);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let state = state().adjust_speed(100.0);
        assert_eq!(state.updates_per_second, 60.0);
        let state = state.adjust_speed(-100.0);
        assert_eq!(state.updates_per_second, 1.0);
    }
}
