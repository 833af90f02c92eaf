//! Frontier bookkeeping and the `mark` primitive
//!
//! The frontier is a plain list, not a set. A closed cell may be queued by
//! several neighbours; stale entries are resolved lazily when drawn, by looking
//! at the grid again.

use crate::rng::DungeonRng;

use super::grid::{Coord, Direction, Grid};
use strum::IntoEnumIterator;

/// Candidate cells next to the carved region
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    cells: Vec<Coord>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn push(&mut self, c: Coord) {
        self.cells.push(c);
    }

    /// Remove and return a uniformly chosen entry
    pub fn take_random(&mut self, rng: &mut DungeonRng) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        let idx = rng.rn2(self.cells.len());
        Some(self.cells.swap_remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.cells.iter()
    }
}

/// Grid and frontier for one generation run
#[derive(Debug, Clone)]
pub struct Carver {
    pub grid: Grid,
    pub frontier: Frontier,
}

impl Carver {
    /// Fully closed grid with an empty frontier
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            frontier: Frontier::new(),
        }
    }

    /// Wrap an existing grid, starting with an empty frontier
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            frontier: Frontier::new(),
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Queue a cell if it is inside the grid and still closed
    pub fn add_frontier(&mut self, c: Coord) {
        if self.grid.in_bounds(c) && !self.grid.is_open(c) {
            self.frontier.push(c);
        }
    }

    /// Open a cell and queue its neighbours.
    ///
    /// Returns `false` without touching anything if the cell was already open.
    pub fn mark(&mut self, c: Coord) -> bool {
        if self.grid.is_open(c) {
            return false;
        }

        self.grid.set(c, true);
        for dir in Direction::iter() {
            if let Some(n) = c.offset(dir, 1) {
                self.add_frontier(n);
            }
        }
        true
    }
}
