//! Dead-end pruning
//!
//! Closes every open cell with fewer than two open neighbours until none remain.
//! Closing a cell only lowers its neighbours' counts, so the final grid is the
//! same whichever order dead ends are removed in. A work-list of the neighbours
//! of each closed cell reaches it without rescanning the whole grid.

use super::grid::{Coord, Grid};

/// Remove all dead ends, cascading. Returns the number of cells closed.
pub fn uncarve(grid: &mut Grid) -> usize {
    let mut pending = dead_ends(grid);
    pending.reverse();

    let mut closed = 0;
    while let Some(c) = pending.pop() {
        if !grid.is_dead_end(c) {
            continue;
        }
        grid.set(c, false);
        closed += 1;

        pending.extend(grid.neighbours(c).filter(|n| grid.is_dead_end(*n)));
    }

    log::debug!("uncarve: closed {} dead ends", closed);
    closed
}

/// Dead ends currently in the grid, in scan order
pub fn dead_ends(grid: &Grid) -> Vec<Coord> {
    grid.open_cells().filter(|c| grid.is_dead_end(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_collapses_completely() {
        let mut grid = Grid::from_ascii(&[".....", "#####"]);
        assert_eq!(uncarve(&mut grid), 5);
        assert_eq!(grid.open_count(), 0);
    }

    #[test]
    fn test_loop_survives() {
        let rows = ["...#", ".#.#", "...#", "####"];
        let mut grid = Grid::from_ascii(&rows);
        assert_eq!(uncarve(&mut grid), 0);
        assert_eq!(grid, Grid::from_ascii(&rows));
    }

    #[test]
    fn test_spur_off_loop_is_removed() {
        let mut grid = Grid::from_ascii(&[
            "...##", //
            ".#...", //
            "...##",
        ]);
        assert_eq!(uncarve(&mut grid), 2);
        assert_eq!(
            grid,
            Grid::from_ascii(&[
                "...##", //
                ".#.##", //
                "...##",
            ])
        );
    }

    #[test]
    fn test_isolated_cell_is_closed() {
        let mut grid = Grid::from_ascii(&["###", "#.#", "###"]);
        assert_eq!(uncarve(&mut grid), 1);
        assert!(dead_ends(&grid).is_empty());
    }

    #[test]
    fn test_no_dead_ends_after() {
        let mut grid = Grid::from_ascii(&[
            "..#..", //
            ".#...", //
            "...#.", //
            "#.#..", //
        ]);
        uncarve(&mut grid);
        assert!(dead_ends(&grid).is_empty());
    }
}
