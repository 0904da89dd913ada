use crate::grid::{CellCoord, Grid};

/// A named preset, as `(row, col)` offsets from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Presets in the order they are bound to the number keys.
pub const PATTERNS: &[Pattern] = &[GLIDER, BLOCK, BLINKER, TOAD, BEACON, R_PENTOMINO];

impl Pattern {
    /// rows spanned by the pattern
    pub fn height(&self) -> usize {
        self.cells.iter().map(|(row, _)| row + 1).max().unwrap_or(0)
    }

    /// columns spanned by the pattern
    pub fn width(&self) -> usize {
        self.cells.iter().map(|(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Top-left origin that centres the pattern on `grid`, clamped to the top-left corner
    /// when the pattern is larger than the board.
    pub fn centred_origin(&self, grid: &Grid) -> CellCoord {
        CellCoord::new(
            grid.height().saturating_sub(self.height()) / 2,
            grid.width().saturating_sub(self.width()) / 2,
        )
    }
}
