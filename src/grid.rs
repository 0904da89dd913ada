//! The board state store: a fixed-size arena of alive/dead cells addressed by `(row, col)`.

use std::fmt;

use crate::error::{GridError, Result};

/// Position of a cell on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An immutable alive/dead snapshot of every cell of a board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generation {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Generation {
    /// `len` must equal `width * height`.
    fn dead(width: usize, height: usize, len: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    /// builds a generation by asking `alive` about every coordinate in row-major order
    pub(crate) fn from_fn(
        width: usize,
        height: usize,
        mut alive: impl FnMut(CellCoord) -> bool,
    ) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| CellCoord::new(row, col)))
            .map(|coord| alive(coord))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index of `coord`, or `None` when it lies off the board.
    #[inline]
    pub fn index(&self, coord: CellCoord) -> Option<usize> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| coord.row * self.width + coord.col)
    }

    #[inline]
    fn coord_of(&self, idx: usize) -> CellCoord {
        CellCoord::new(idx / self.width, idx % self.width)
    }

    /// Status of the cell at `coord`; `None` when there is no such cell.
    #[inline]
    pub fn get(&self, coord: CellCoord) -> Option<bool> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Every cell with its status, row-major.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (CellCoord, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, alive)| (self.coord_of(idx), *alive))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.iter().filter_map(|(coord, alive)| alive.then_some(coord))
    }

    #[inline]
    fn same_shape(&self, other: &Generation) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.width).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for alive in line {
                f.write_str(if *alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// A `width` x `height` board. The dimensions are fixed for the lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    current: Generation,
}

impl Grid {
    /// allocates an all-dead board
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            current: Generation::dead(width, height, len),
        })
    }

    /// Caller guarantees both dimensions are positive and their product fits a `usize`.
    pub(crate) fn dead(width: usize, height: usize) -> Self {
        Self {
            current: Generation::dead(width, height, width * height),
        }
    }

    /// Builds a board from ASCII rows where `#` is alive and `.` is dead.
    ///
    /// ```
    /// use conway_board::grid::Grid;
    ///
    /// let grid = Grid::from_rows(&[".#.", ".#.", ".#."]).unwrap();
    /// assert_eq!(grid.get(1, 1), Ok(true));
    /// assert_eq!(grid.live_count(), 3);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |line| line.chars().count());
        let mut grid = Self::new(width, height)?;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' => grid.current.cells[row * width + col] = true,
                    '.' => (),
                    found => return Err(GridError::InvalidCell { row, col, found }),
                }
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.current.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.current.height
    }

    /// The current generation. Borrowing it freezes the board until the borrow ends.
    #[inline]
    pub fn generation(&self) -> &Generation {
        &self.current
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        self.current
            .index(CellCoord::new(row, col))
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Status of a cell, or `None` if `(row, col)` is off the board.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.current.get(CellCoord::new(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.checked_index(row, col).map(|idx| self.current.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.current.cells[idx] = alive;
        Ok(())
    }

    /// Flips a cell and returns its new status.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        let cell = &mut self.current.cells[idx];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Commits a computed generation. It must have been computed for a board of the same shape.
    pub fn apply_generation(&mut self, generation: Generation) -> Result<()> {
        if !self.current.same_shape(&generation) {
            return Err(GridError::ShapeMismatch {
                width: self.width(),
                height: self.height(),
                found_width: generation.width,
                found_height: generation.height,
            });
        }
        self.current = generation;
        Ok(())
    }

    /// Commits a generation computed from this very grid.
    pub(crate) fn commit(&mut self, generation: Generation) {
        debug_assert!(self.current.same_shape(&generation));
        self.current = generation;
    }

    /// Sets every cell alive with independent `probability`.
    pub fn randomize(&mut self, probability: f64) -> Result<()> {
        self.randomize_with(&mut fastrand::Rng::new(), probability)
    }

    /// Same as [`Grid::randomize`] but draws from the given generator.
    pub fn randomize_with(&mut self, rng: &mut fastrand::Rng, probability: f64) -> Result<()> {
        let probability = check_probability(probability)?;
        self.fill_random(rng, probability);
        Ok(())
    }

    /// `probability` must already be validated.
    pub(crate) fn fill_random(&mut self, rng: &mut fastrand::Rng, probability: f64) {
        // f64() is in [0, 1): probability 1.0 fills everything, 0.0 nothing
        for cell in self.current.cells.iter_mut() {
            *cell = rng.f64() < probability;
        }
    }

    pub fn clear(&mut self) {
        self.current.cells.fill(false);
    }

    pub fn live_count(&self) -> usize {
        self.current.live_count()
    }

    /// Sets the cells at `origin + offset` alive for every offset in `cells`.
    ///
    /// Every target is checked before anything is written, so on error the board is unchanged.
    pub fn stamp(&mut self, cells: &[(usize, usize)], origin: CellCoord) -> Result<()> {
        let targets = cells
            .iter()
            .map(|&(row, col)| {
                self.checked_index(origin.row.saturating_add(row), origin.col.saturating_add(col))
            })
            .collect::<Result<Vec<_>>>()?;

        for idx in targets {
            self.current.cells[idx] = true;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}

/// Accepts probabilities in `0.0..=1.0`; rejects anything else, NaN included.
pub fn check_probability(probability: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(GridError::InvalidProbability(probability))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(4, grid.width());
        assert_eq!(3, grid.height());
        assert_eq!(0, grid.live_count());
        assert!(grid.generation().is_extinct());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Err(GridError::EmptyDimensions {
                width: 0,
                height: 5
            }),
            Grid::new(0, 5)
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        // side * side is one past usize::MAX
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(
            Err(GridError::TooLarge {
                width: side,
                height: side
            }),
            Grid::new(side, side)
        );
        assert_eq!(
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2
            }),
            Grid::new(usize::MAX, 2)
        );
    }

    #[test]
    fn set_then_get_returns_alive() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 3, true).unwrap();
        assert_eq!(Ok(true), grid.get(2, 3));
        assert_eq!(Some(true), grid.cell(2, 3));
        assert_eq!(Ok(false), grid.get(3, 2));

        grid.set(2, 3, false).unwrap();
        assert_eq!(Ok(false), grid.get(2, 3));
    }

    #[test]
    fn one_past_the_edge_is_absent() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(None, grid.cell(3, 0));
        assert_eq!(None, grid.cell(0, 4));
        assert_eq!(
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                width: 4,
                height: 3
            }),
            grid.get(3, 0)
        );
    }

    #[test]
    fn out_of_bounds_set_leaves_grid_untouched() {
        let mut grid = Grid::from_rows(&["#.", ".#"]).unwrap();
        let before = grid.clone();
        assert!(grid.set(2, 0, true).is_err());
        assert!(grid.set(0, usize::MAX, true).is_err());
        assert!(grid.toggle(5, 5).is_err());
        assert_eq!(before, grid);
    }

    #[test]
    fn toggle_flips() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(Ok(true), grid.toggle(1, 0));
        assert_eq!(Ok(false), grid.toggle(1, 0));
        assert_eq!(0, grid.live_count());
    }

    #[test]
    fn from_rows_and_display() {
        let grid = Grid::from_rows(&["#..", ".#.", "..#"]).unwrap();
        assert_eq!(3, grid.live_count());
        assert_eq!("#..\n.#.\n..#", grid.to_string());
        let live: Vec<_> = grid.generation().live_cells().collect();
        assert_eq!(
            vec![CellCoord::new(0, 0), CellCoord::new(1, 1), CellCoord::new(2, 2)],
            live
        );
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }),
            Grid::from_rows(&["...", ".."])
        );
        assert_eq!(
            Err(GridError::InvalidCell {
                row: 0,
                col: 1,
                found: 'x'
            }),
            Grid::from_rows(&[".x."])
        );
        assert!(Grid::from_rows(&[]).is_err());
    }

    #[test]
    fn apply_generation_checks_shape() {
        let mut grid = Grid::new(3, 3).unwrap();
        let other = Grid::from_rows(&["##", "##"]).unwrap();
        assert_eq!(
            Err(GridError::ShapeMismatch {
                width: 3,
                height: 3,
                found_width: 2,
                found_height: 2
            }),
            grid.apply_generation(other.generation().clone())
        );

        let same = Grid::from_rows(&["#..", "...", "..#"]).unwrap();
        grid.apply_generation(same.generation().clone()).unwrap();
        assert_eq!(same, grid);
    }

    #[test]
    fn randomize_extremes() {
        let mut grid = Grid::new(8, 6).unwrap();
        grid.randomize(1.0).unwrap();
        assert_eq!(48, grid.live_count());
        grid.randomize(0.0).unwrap();
        assert_eq!(0, grid.live_count());
    }

    #[test]
    fn randomize_rejects_invalid_probability() {
        let mut grid = Grid::from_rows(&["#."]).unwrap();
        assert_eq!(
            Err(GridError::InvalidProbability(1.5)),
            grid.randomize(1.5)
        );
        assert!(grid.randomize(-0.1).is_err());
        assert!(grid.randomize(f64::NAN).is_err());
        assert_eq!(Ok(true), grid.get(0, 0));
    }

    #[test]
    fn seeded_randomize_is_reproducible() {
        let mut a = Grid::new(100, 100).unwrap();
        let mut b = Grid::new(100, 100).unwrap();
        a.randomize_with(&mut fastrand::Rng::with_seed(7), 0.5).unwrap();
        b.randomize_with(&mut fastrand::Rng::with_seed(7), 0.5).unwrap();
        assert_eq!(a, b);
        // roughly half of 10_000 cells
        assert!((4_000..6_000).contains(&a.live_count()));
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::from_rows(&["##", "##"]).unwrap();
        grid.clear();
        assert!(grid.generation().is_extinct());
    }

    #[test]
    fn stamp_is_all_or_nothing() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.stamp(&[(0, 0), (1, 1)], CellCoord::new(2, 2)).unwrap();
        assert_eq!("....\n....\n..#.\n...#", grid.to_string());

        let before = grid.clone();
        assert!(grid.stamp(&[(0, 0), (2, 0)], CellCoord::new(2, 0)).is_err());
        assert_eq!(before, grid);
    }
}
