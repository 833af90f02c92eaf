//! Pillar detection and repair
//!
//! A pillar is a single closed cell whose four neighbours are all open. Repair
//! closes the neighbour on the side facing more wall, so the pillar joins that
//! wall, and can optionally open the pillar itself so the wall moves one step.

use strum::IntoEnumIterator;

use super::grid::{Coord, Direction, Grid};

/// Pillars currently in the grid, in scan order
pub fn find_pillars(grid: &Grid) -> Vec<Coord> {
    grid.coords().filter(|c| grid.is_pillar(*c)).collect()
}

/// Repair the pillar at `pillar`.
///
/// Directions are tried left, right, down, up. The first whose cell two steps
/// away is in bounds and closed gets its one-step cell closed. With
/// `move_pillar`, the pillar cell is then opened.
///
/// If no direction qualifies, the pillar is opened when `move_pillar` is set,
/// otherwise its left neighbour is closed. Returns the direction joined, or
/// `None` for that fallback.
pub fn repair_pillar(grid: &mut Grid, pillar: Coord, move_pillar: bool) -> Option<Direction> {
    let toward = Direction::iter().find(|&dir| match grid.step(pillar, dir, 2) {
        Some(far) => !grid.is_open(far),
        None => false,
    });

    let close_dir = match toward {
        Some(dir) => Some(dir),
        None if move_pillar => None,
        None => Some(Direction::Left),
    };
    if let Some(near) = close_dir.and_then(|dir| grid.step(pillar, dir, 1)) {
        grid.set(near, false);
    }
    if move_pillar {
        grid.set(pillar, true);
    }

    toward
}

/// Repair pillars until none remain, restarting the scan from the origin after
/// each repair. Returns the number of repairs made.
///
/// Every repair removes one pillar without creating another, so this terminates.
pub fn fix_pillars(grid: &mut Grid, move_pillars: bool) -> usize {
    let mut fixed = 0;
    loop {
        let Some(pillar) = grid.coords().find(|c| grid.is_pillar(*c)) else {
            break;
        };
        let toward = repair_pillar(grid, pillar, move_pillars);
        log::trace!("pillars: ({}, {}) joined {:?}", pillar.x, pillar.y, toward);
        fixed += 1;
    }

    log::debug!("pillars: fixed {}", fixed);
    fixed
}
