/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Stats {
    /// Generation reached by the tick.
    pub generation: u64,
    /// Cells whose state differs from the previous generation. Not cumulative.
    pub changes: usize,
    /// Live cells after the tick.
    pub population: usize,
}

impl Stats {
    /// True when the tick left every cell as it was
    pub const fn is_stable(&self) -> bool {
        self.changes == 0
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "generation {} ({} changes, {} alive)",
            self.generation, self.changes, self.population
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let stats = Stats { generation: 3, changes: 4, population: 5 };
        assert_eq!(stats.to_string(), "generation 3 (4 changes, 5 alive)");
        assert!(!stats.is_stable());
        assert!(Stats::default().is_stable());
    }
}
