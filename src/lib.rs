// Domain layer - the universe engine
pub mod domain;

// Application layer - configuration and run-loop coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, ConfigurationError, Pattern, Seed, Stats, Universe, presets};
pub use application::{GameState, SimulationConfig};
