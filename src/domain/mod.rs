mod algorithm;
mod cell;
mod error;
mod patterns;
mod seed;
mod stats;
mod universe;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::{Axis, ConfigurationError};
pub use patterns::{Pattern, presets};
pub use seed::Seed;
pub use stats::Stats;
pub use universe::Universe;
