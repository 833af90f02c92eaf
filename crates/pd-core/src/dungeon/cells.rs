//! Random single-cell carving
//!
//! Opens extra cells at random, which introduces loops into the base maze.

use crate::rng::DungeonRng;

use super::frontier::Carver;
use super::grid::Coord;

/// Try to open `count` random cells. Returns how many were actually opened.
///
/// If the chosen cell is already open, walk along the row (wrapping) for at most
/// one full width and open the first closed cell found. A row with no closed
/// cell abandons that attempt.
pub fn add_random_cells(carver: &mut Carver, count: usize, rng: &mut DungeonRng) -> usize {
    let width = carver.grid.width();
    let height = carver.grid.height();
    let mut opened = 0;

    for _ in 0..count {
        let mut x = rng.rn2(width);
        let y = rng.rn2(height);
        for _ in 0..width {
            if carver.mark(Coord::new(x, y)) {
                opened += 1;
                break;
            }
            x = (x + 1) % width;
        }
    }

    log::debug!("cells: opened {} of {} requested", opened, count);
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::grid::Grid;

    #[test]
    fn test_opens_requested_cells_on_empty_grid() {
        let mut carver = Carver::new(10, 10);
        let mut rng = DungeonRng::new(5);
        assert_eq!(add_random_cells(&mut carver, 7, &mut rng), 7);
        assert_eq!(carver.grid.open_count(), 7);
    }

    #[test]
    fn test_full_grid_abandons_silently() {
        let mut grid = Grid::new(4, 4);
        for c in grid.coords().collect::<Vec<_>>() {
            grid.set(c, true);
        }
        let mut carver = Carver::from_grid(grid);
        let mut rng = DungeonRng::new(5);
        assert_eq!(add_random_cells(&mut carver, 3, &mut rng), 0);
        assert_eq!(carver.grid.open_count(), 16);
    }

    #[test]
    fn test_row_scan_wraps_to_closed_cell() {
        // Only (3, 0) is closed. Any draw on row 0 walks or wraps onto it.
        let grid = Grid::from_ascii(&["...#", "....", "....", "...."]);
        let mut carver = Carver::from_grid(grid);
        let mut rng = DungeonRng::new(11);
        let opened = add_random_cells(&mut carver, 50, &mut rng);
        assert_eq!(opened, 1);
        assert_eq!(carver.grid.open_count(), 16);
    }

    #[test]
    fn test_zero_count_draws_nothing() {
        let mut carver = Carver::new(3, 3);
        let mut rng = DungeonRng::new(1);
        assert_eq!(add_random_cells(&mut carver, 0, &mut rng), 0);
        assert_eq!(carver.grid.open_count(), 0);
    }
}
