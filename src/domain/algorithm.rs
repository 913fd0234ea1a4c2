//! Algorithm enum for selecting the tick implementation.
//!
//! Both variants read from the same snapshot buffer and write into the same
//! scratch buffer, so they produce identical generations.

/// Available tick strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row by row on the calling thread
    #[default]
    Serial,
    /// Rows spread across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Double-buffered, 1 byte/cell, serial rows",
            Algorithm::Parallel => "Double-buffered, 1 byte/cell, parallel rows",
        }
    }

    /// The other variant
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_returns_two() {
        assert_eq!(Algorithm::all().len(), 2);
    }

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_toggled_round_trips() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.toggled().toggled(), algorithm);
        }
    }
}
