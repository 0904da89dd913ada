//! The transition engine: Conway's rule evaluated against a frozen snapshot of the board.

use crate::grid::{CellCoord, Generation, Grid};

const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The in-bounds neighbours of `coord`.
///
/// Positions past an edge are skipped rather than wrapped, so corner cells have three
/// neighbours and edge cells five.
pub fn neighbours(
    generation: &Generation,
    coord: CellCoord,
) -> impl DoubleEndedIterator<Item = CellCoord> + '_ {
    NEIGHBOUR_OFFSETS
        .into_iter()
        .filter_map(move |(row_offs, col_offs)| {
            let neighbour = CellCoord::new(
                coord.row.checked_add_signed(row_offs)?,
                coord.col.checked_add_signed(col_offs)?,
            );
            generation.index(neighbour).map(|_| neighbour)
        })
}

pub fn live_neighbours(generation: &Generation, coord: CellCoord) -> u8 {
    neighbours(generation, coord)
        .filter(|neighbour| generation.get(*neighbour) == Some(true))
        .count() as u8
}

/// Conway's rule: survival on 2 or 3, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    matches!((alive, live_neighbours), (true, 2) | (true, 3) | (false, 3))
}

/// Computes the generation that follows `generation`.
///
/// Every cell reads its neighbours from `generation` only; nothing is written until the
/// whole successor exists.
pub fn advance(generation: &Generation) -> Generation {
    Generation::from_fn(generation.width(), generation.height(), |coord| {
        let alive = generation.get(coord).unwrap_or(false);
        next_state(alive, live_neighbours(generation, coord))
    })
}

/// Computes the next generation of `grid` without touching it. Committing is up to the caller.
pub fn compute_next_generation(grid: &Grid) -> Generation {
    advance(grid.generation())
}

/// Computes and commits one transition.
pub fn step(grid: &mut Grid) {
    let next = compute_next_generation(grid);
    grid.commit(next);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::patterns::{BLINKER, BLOCK, GLIDER};

    fn live(generation: &Generation) -> Vec<CellCoord> {
        generation.live_cells().collect()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(n == 2 || n == 3, next_state(true, n), "alive with {n}");
            assert_eq!(n == 3, next_state(false, n), "dead with {n}");
        }
    }

    #[test]
    fn neighbours_are_clipped_at_edges() {
        let grid = Grid::new(4, 3).unwrap();
        let generation = grid.generation();
        assert_eq!(3, neighbours(generation, CellCoord::new(0, 0)).count());
        assert_eq!(5, neighbours(generation, CellCoord::new(0, 2)).count());
        assert_eq!(8, neighbours(generation, CellCoord::new(1, 1)).count());
        assert_eq!(3, neighbours(generation, CellCoord::new(2, 3)).count());

        let corner: Vec<_> = neighbours(generation, CellCoord::new(2, 3)).collect();
        assert_eq!(
            vec![CellCoord::new(1, 2), CellCoord::new(1, 3), CellCoord::new(2, 2)],
            corner
        );
    }

    #[test]
    fn isolated_cell_dies() {
        let grid = Grid::from_rows(&["...", ".#.", "..."]).unwrap();
        assert!(compute_next_generation(&grid).is_extinct());

        // one neighbour is not enough either
        let grid = Grid::from_rows(&["....", ".##.", "...."]).unwrap();
        assert!(compute_next_generation(&grid).is_extinct());
    }

    #[test]
    fn block_is_still_life() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.stamp(BLOCK.cells, CellCoord::new(2, 2)).unwrap();
        assert_eq!(grid.generation(), &compute_next_generation(&grid));

        // also in a corner, where half the neighbourhood is off the board
        let grid = Grid::from_rows(&["##.", "##.", "..."]).unwrap();
        assert_eq!(grid.generation(), &compute_next_generation(&grid));
    }

    #[test]
    fn blinker_has_period_two() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.stamp(BLINKER.cells, CellCoord::new(2, 1)).unwrap();
        let start = grid.clone();

        step(&mut grid);
        assert_eq!(".....\n..#..\n..#..\n..#..\n.....", grid.to_string());
        step(&mut grid);
        assert_eq!(start, grid);
    }

    #[test]
    fn glider_translates_after_four_generations() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.stamp(GLIDER.cells, CellCoord::new(1, 1)).unwrap();

        for _ in 0..4 {
            step(&mut grid);
        }

        let mut expected = Grid::new(10, 10).unwrap();
        expected.stamp(GLIDER.cells, CellCoord::new(2, 2)).unwrap();
        assert_eq!(expected, grid);
    }

    #[test]
    fn board_does_not_wrap() {
        let grid = Grid::from_rows(&["###..", ".....", ".....", ".....", "....."]).unwrap();
        let next = compute_next_generation(&grid);
        // a torus would also give birth to (4, 1)
        assert_eq!(vec![CellCoord::new(0, 1), CellCoord::new(1, 1)], live(&next));
    }

    #[test]
    fn source_grid_is_not_mutated() {
        let grid = Grid::from_rows(&[".#..", "..#.", "###.", "...."]).unwrap();
        let before = grid.clone();
        let next = compute_next_generation(&grid);
        assert_eq!(before, grid);
        assert_ne!(grid.generation(), &next);
    }

    #[test]
    fn cleared_grid_stays_dead() {
        let mut grid = Grid::from_rows(&["##.", ".##", "#.#"]).unwrap();
        grid.clear();
        assert!(compute_next_generation(&grid).is_extinct());
    }

    #[test]
    fn reading_order_does_not_matter() {
        let mut grid = Grid::new(9, 7).unwrap();
        grid.randomize_with(&mut fastrand::Rng::with_seed(42), 0.5).unwrap();
        let generation = grid.generation();

        // walk cells and neighbours back to front
        let mut reversed = Grid::new(9, 7).unwrap();
        for (coord, alive) in generation.iter().rev() {
            let n = neighbours(generation, coord)
                .rev()
                .filter(|neighbour| generation.get(*neighbour) == Some(true))
                .count() as u8;
            reversed.set(coord.row, coord.col, next_state(alive, n)).unwrap();
        }

        assert_eq!(reversed.generation(), &compute_next_generation(&grid));
    }
}
