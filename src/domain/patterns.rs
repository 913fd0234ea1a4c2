use super::{Cell, Universe};

/// Represents a pattern that can be stamped onto a universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Cells that fall off an edge wrap around to the opposite one.
    pub fn place_on(&self, universe: &mut Universe, row: usize, col: usize) {
        let (width, height) = universe.dimensions();
        for &(dr, dc) in &self.cells {
            universe.set((row % height + dr) % height, (col % width + dc) % width, Cell::Alive);
        }
    }

    /// Place pattern centred in the universe
    pub fn place_centered(&self, universe: &mut Universe) {
        let (width, height) = universe.dimensions();
        let row = height.saturating_sub(self.height) / 2;
        let col = width.saturating_sub(self.width) / 2;
        self.place_on(universe, row, col);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Seed;

    fn empty(width: usize, height: usize) -> Universe {
        Universe::with_seed(width, height, Seed::Empty).unwrap()
    }

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    #[test]
    fn test_place_wraps() {
        let mut universe = empty(4, 4);
        presets::block().place_on(&mut universe, 3, 3);
        for (row, col) in [(3, 3), (3, 0), (0, 3), (0, 0)] {
            assert_eq!(universe.get(row, col), Some(Cell::Alive));
        }
        assert_eq!(universe.population(), 4);
    }

    #[test]
    fn test_place_at_extreme_offsets_wraps() {
        // usize::MAX % 4 == 3, so this lands exactly like (3, 3)
        let mut universe = empty(4, 4);
        presets::block().place_on(&mut universe, usize::MAX, usize::MAX);
        for (row, col) in [(3, 3), (3, 0), (0, 3), (0, 0)] {
            assert_eq!(universe.get(row, col), Some(Cell::Alive));
        }
        assert_eq!(universe.population(), 4);
    }

    #[test]
    fn test_glider_circles_the_torus() {
        // A glider moves one cell diagonally every 4 generations,
        // so on an 8x8 torus it is back home after 32.
        let mut universe = empty(8, 8);
        presets::glider().place_on(&mut universe, 1, 1);
        let start = universe.render();

        for _ in 0..31 {
            universe.tick();
            assert_eq!(universe.population(), 5);
        }
        assert_ne!(universe.render(), start);
        universe.tick();
        assert_eq!(universe.render(), start);
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut universe = empty(10, 10);
            pattern.place_centered(&mut universe);
            let start = universe.render();

            assert!(universe.tick().changes > 0, "{} should change", pattern.name);
            assert_ne!(universe.render(), start);
            universe.tick();
            assert_eq!(universe.render(), start, "{} should return", pattern.name);
        }
    }

    #[test]
    fn test_block_is_still() {
        let mut universe = empty(6, 6);
        presets::block().place_centered(&mut universe);
        assert!(universe.tick().is_stable());
    }

    #[test]
    fn test_all_patterns_fit_small_universe() {
        for pattern in presets::all_patterns() {
            let mut universe = empty(12, 12);
            pattern.place_centered(&mut universe);
            assert_eq!(universe.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
