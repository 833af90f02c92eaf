//! Base maze (randomized Prim's algorithm)
//!
//! Grows a tree of open cells from the origin. A frontier cell is opened only if
//! fewer than two of its neighbours are open, so the carved region stays
//! connected and acyclic.

use crate::rng::DungeonRng;

use super::frontier::Carver;
use super::grid::Coord;

/// Carve the base maze starting from `(0, 0)`. Returns the number of cells opened.
pub fn generate_maze(carver: &mut Carver, rng: &mut DungeonRng) -> usize {
    let mut opened = usize::from(carver.mark(Coord::ORIGIN));

    while let Some(spot) = carver.frontier.take_random(rng) {
        if carver.grid.neighbour_count(spot) < 2 && carver.mark(spot) {
            opened += 1;
        }
    }

    log::debug!(
        "maze: opened {} of {} cells",
        opened,
        carver.grid.width() * carver.grid.height()
    );
    opened
}
