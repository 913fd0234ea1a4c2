use super::error::Axis;
use super::{Algorithm, Cell, ConfigurationError, Seed, Stats};
use rayon::prelude::*;
use std::fmt::{self, Write};

/// Universe owns a fixed-size toroidal grid and its generation counter.
///
/// Cells live in one row-major buffer; a second buffer of the same size is
/// kept as scratch space for the next generation and the two are swapped on
/// every tick, so no tick allocates.
#[derive(Clone, Debug)]
pub struct Universe {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    last: Stats,
}

impl Universe {
    /// Create a universe seeded with [`Seed::Patterned`].
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigurationError> {
        Self::with_seed(width, height, Seed::default())
    }

    /// Create a universe with an explicit seeding rule.
    pub fn with_seed(width: usize, height: usize, seed: Seed) -> Result<Self, ConfigurationError> {
        let len = checked_len(width, height)?;
        let mut cells = alloc_cells(width, height, len)?;
        seed.fill(&mut cells);
        log::debug!("created {}x{} universe with {} seed", width, height, seed.name());
        Self::from_cells(width, height, cells)
    }

    /// Build a universe from rendered text: one line per row, one glyph per cell.
    ///
    /// Accepts the renderer's glyphs as well as `#`/`.` style ASCII art.
    pub fn from_text(text: &str) -> Result<Self, ConfigurationError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row, line) in text.lines().enumerate() {
            let start = cells.len();
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(ConfigurationError::UnknownGlyph { row, col, glyph })?;
                cells.push(cell);
            }

            let found = cells.len() - start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ConfigurationError::RaggedRow { row, expected, found });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(ConfigurationError::EmptyPattern)?;
        checked_len(width, height)?;
        log::debug!("parsed {}x{} universe from text", width, height);
        Self::from_cells(width, height, cells)
    }

    fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, ConfigurationError> {
        debug_assert_eq!(cells.len(), width * height);
        let scratch = alloc_cells(width, height, cells.len())?;
        let population = cells.iter().filter(|c| c.is_alive()).count();
        Ok(Self {
            width,
            height,
            generation: 0,
            scratch,
            cells,
            last: Stats { generation: 0, changes: 0, population },
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Generations advanced since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major view of the current generation
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Stats of the most recent tick (zero changes before the first one)
    pub const fn last_stats(&self) -> Stats {
        self.last
    }

    /// Convert (row, col) to the linear index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; out of range positions are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.get(row, col) {
            self.set(row, col, cell.toggle());
        }
    }

    /// Mark every listed (row, col) alive
    pub fn set_cells(&mut self, positions: &[(usize, usize)]) {
        for &(row, col) in positions {
            self.set(row, col, Cell::Alive);
        }
    }

    /// Kill every cell. The generation counter is left alone.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Count live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / self.width, i % self.width, cell))
    }

    /// Count live neighbors of (row, col) with toroidal wrapping.
    ///
    /// On grids narrower or shorter than three cells a neighbor can be the
    /// same cell seen from several directions; each direction counts.
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.height && col < self.width,
            "({}, {}) outside {}x{} universe",
            row,
            col,
            self.width,
            self.height
        );
        let rows = RowWindow::new(&self.cells, self.width, self.height, row);
        rows.neighbors(col)
    }

    /// Advance one generation on the calling thread.
    pub fn tick(&mut self) -> Stats {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;
        let tally = self
            .scratch
            .chunks_mut(width)
            .enumerate()
            .map(|(row, out)| step_row(cells, width, height, row, out))
            .fold(Tally::default(), Tally::merge);
        self.finish_tick(tally)
    }

    /// Advance one generation with rows spread over the rayon pool.
    /// Produces exactly the same grid and stats as [`Universe::tick`].
    pub fn tick_parallel(&mut self) -> Stats {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;
        let tally = self
            .scratch
            .par_chunks_mut(width)
            .enumerate()
            .map(|(row, out)| step_row(cells, width, height, row, out))
            .reduce(Tally::default, Tally::merge);
        self.finish_tick(tally)
    }

    /// Advance one generation with the chosen algorithm
    pub fn tick_with(&mut self, algorithm: Algorithm) -> Stats {
        match algorithm {
            Algorithm::Serial => self.tick(),
            Algorithm::Parallel => self.tick_parallel(),
        }
    }

    fn finish_tick(&mut self, tally: Tally) -> Stats {
        assert_eq!(self.scratch.len(), self.cells.len(), "scratch buffer out of sync");
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation = self.generation.saturating_add(1);
        self.last = Stats {
            generation: self.generation,
            changes: tally.changes,
            population: tally.population,
        };
        log::trace!("tick -> {}", self.last);
        self.last
    }

    /// Text snapshot: one line per row, no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, ConfigurationError> {
    if width == 0 {
        return Err(ConfigurationError::ZeroDimension { axis: Axis::Width });
    }
    if height == 0 {
        return Err(ConfigurationError::ZeroDimension { axis: Axis::Height });
    }
    // Two buffers of `len` one-byte cells must both fit in an allocation.
    width
        .checked_mul(height)
        .filter(|&len| len <= isize::MAX as usize / 2)
        .ok_or(ConfigurationError::TooLarge { width, height })
}

/// Allocate an all-dead buffer, reporting allocation failure instead of aborting.
fn alloc_cells(width: usize, height: usize, len: usize) -> Result<Vec<Cell>, ConfigurationError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| ConfigurationError::TooLarge { width, height })?;
    cells.resize(len, Cell::Dead);
    Ok(cells)
}

/// Index one step back around a ring of length `n`.
const fn wrap_back(i: usize, n: usize) -> usize {
    if i == 0 { n - 1 } else { i - 1 }
}

/// Index one step forward around a ring of length `n`.
const fn wrap_forward(i: usize, n: usize) -> usize {
    if i + 1 == n { 0 } else { i + 1 }
}

fn row_slice(cells: &[Cell], width: usize, row: usize) -> &[Cell] {
    &cells[row * width..(row + 1) * width]
}

/// The row being computed plus the rows above and below it, wrapped.
struct RowWindow<'a> {
    north: &'a [Cell],
    here: &'a [Cell],
    south: &'a [Cell],
}

impl<'a> RowWindow<'a> {
    fn new(cells: &'a [Cell], width: usize, height: usize, row: usize) -> Self {
        Self {
            north: row_slice(cells, width, wrap_back(row, height)),
            here: row_slice(cells, width, row),
            south: row_slice(cells, width, wrap_forward(row, height)),
        }
    }

    #[inline]
    fn neighbors(&self, col: usize) -> u8 {
        let width = self.here.len();
        let west = wrap_back(col, width);
        let east = wrap_forward(col, width);
        [
            self.north[west], self.north[col], self.north[east],
            self.here[west], self.here[east],
            self.south[west], self.south[col], self.south[east],
        ]
        .iter()
        .map(|&cell| cell as u8)
        .sum()
    }
}

#[derive(Clone, Copy, Default)]
struct Tally {
    changes: usize,
    population: usize,
}

impl Tally {
    fn merge(self, other: Tally) -> Tally {
        Tally {
            changes: self.changes + other.changes,
            population: self.population + other.population,
        }
    }
}

/// Compute one row of the next generation from the snapshot in `cells`.
fn step_row(cells: &[Cell], width: usize, height: usize, row: usize, out: &mut [Cell]) -> Tally {
    debug_assert_eq!(out.len(), width);
    let window = RowWindow::new(cells, width, height, row);
    let mut tally = Tally::default();

    for (col, next) in out.iter_mut().enumerate() {
        let current = window.here[col];
        *next = current.evolve(window.neighbors(col));
        tally.changes += usize::from(*next != current);
        tally.population += usize::from(next.is_alive());
    }

    tally
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.width).enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for &cell in line {
                f.write_char(cell.glyph())?;
            }
        }
        Ok(())
    }
}
