//! Run configuration shared by the viewer, the text loop and the benchmark.

use crate::domain::{Algorithm, ConfigurationError, Seed, Universe};
use std::str::FromStr;

/// Everything needed to build and drive a universe.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Seed,
    pub algorithm: Algorithm,
    pub updates_per_second: f32,
    /// Stop after this many ticks (None = run until interrupted)
    pub generations: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            seed: Seed::Patterned,
            algorithm: Algorithm::Serial,
            updates_per_second: 10.0,
            generations: None,
        }
    }
}

impl SimulationConfig {
    /// Parse command-line style arguments (without the program name).
    ///
    /// Recognised: `--width N`, `--height N`, `--seed N`, `--empty`,
    /// `--parallel`, `--fps N`, `--generations N`.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--width" => config.width = positive(&flag, args.next())?,
                "--height" => config.height = positive(&flag, args.next())?,
                "--seed" => config.seed = Seed::Random(value(&flag, args.next())?),
                "--empty" => config.seed = Seed::Empty,
                "--parallel" => config.algorithm = Algorithm::Parallel,
                "--fps" => {
                    let fps: f32 = value(&flag, args.next())?;
                    if !(1.0..=60.0).contains(&fps) {
                        return Err(invalid(&flag, fps.to_string()));
                    }
                    config.updates_per_second = fps;
                }
                "--generations" => config.generations = Some(value(&flag, args.next())?),
                _ => return Err(ConfigurationError::UnknownArgument(flag)),
            }
        }

        Ok(config)
    }

    /// Build the universe this configuration describes
    pub fn build_universe(&self) -> Result<Universe, ConfigurationError> {
        Universe::with_seed(self.width, self.height, self.seed)
    }
}

fn invalid(flag: &str, value: String) -> ConfigurationError {
    ConfigurationError::InvalidValue { flag: flag.to_owned(), value }
}

fn value<T: FromStr>(flag: &str, raw: Option<String>) -> Result<T, ConfigurationError> {
    let raw = raw.ok_or_else(|| ConfigurationError::MissingValue { flag: flag.to_owned() })?;
    raw.parse().map_err(|_| invalid(flag, raw.clone()))
}

fn positive(flag: &str, raw: Option<String>) -> Result<usize, ConfigurationError> {
    match value::<usize>(flag, raw)? {
        0 => Err(invalid(flag, "0".to_owned())),
        n => Ok(n),
    }
}
