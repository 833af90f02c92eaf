//! Open/closed cell grid
//!
//! The grid is the single source of truth for dungeon topology. Every carving
//! pass mutates it in place; it is never resized after creation.

use std::fmt;

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

/// A cell position. `x` runs over the width, `y` over the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move `steps` cells in `dir`, or `None` if that would go below zero.
    /// The upper bound is checked by [`Grid::step`].
    pub fn offset(self, dir: Direction, steps: usize) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let steps = steps as isize;
        Some(Coord {
            x: self.x.checked_add_signed(dx * steps)?,
            y: self.y.checked_add_signed(dy * steps)?,
        })
    }
}

/// Orthogonal directions, in the priority order used by carving and pillar repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    /// x - 1
    Left,
    /// x + 1
    Right,
    /// y - 1
    Down,
    /// y + 1
    Up,
}

impl Direction {
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }
}

/// Fixed-size boolean grid: `true` is open floor, `false` is closed wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major, `cells[y * width + x]`
    cells: Vec<bool>,
}

impl Grid {
    /// Create a fully closed grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from rows of `'.'` (open) and `'#'` (closed), top row is `y = 0`.
    ///
    /// Any character other than `'.'` is treated as closed. Rows shorter than the
    /// first row are padded with closed cells.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width).enumerate() {
                grid.set(Coord::new(x, y), ch == '.');
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    fn index(&self, c: Coord) -> usize {
        assert!(
            self.in_bounds(c),
            "cell ({}, {}) outside {}x{} grid",
            c.x,
            c.y,
            self.width,
            self.height
        );
        c.y * self.width + c.x
    }

    /// Whether the cell is open. Panics if `c` is out of bounds.
    pub fn is_open(&self, c: Coord) -> bool {
        self.cells[self.index(c)]
    }

    /// Bounds-checked read
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        let c = Coord::new(x, y);
        self.in_bounds(c).then(|| self.is_open(c))
    }

    /// Open or close a cell. Panics if `c` is out of bounds.
    pub fn set(&mut self, c: Coord, open: bool) {
        let idx = self.index(c);
        self.cells[idx] = open;
    }

    /// The cell `steps` away in `dir`, if it lies inside the grid
    pub fn step(&self, c: Coord, dir: Direction, steps: usize) -> Option<Coord> {
        c.offset(dir, steps).filter(|n| self.in_bounds(*n))
    }

    /// In-bounds orthogonal neighbours of `c`, in [`Direction`] order
    pub fn neighbours(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::iter().filter_map(move |dir| self.step(c, dir, 1))
    }

    /// Number of open orthogonal neighbours. Directions leaving the grid are not counted.
    pub fn neighbour_count(&self, c: Coord) -> usize {
        self.neighbours(c).filter(|n| self.is_open(*n)).count()
    }

    /// A closed cell whose four neighbours are all open
    pub fn is_pillar(&self, c: Coord) -> bool {
        !self.is_open(c) && self.neighbour_count(c) == 4
    }

    /// An open cell with fewer than two open neighbours
    pub fn is_dead_end(&self, c: Coord) -> bool {
        self.is_open(c) && self.neighbour_count(c) < 2
    }

    /// Every coordinate in scan order: x outer ascending, y inner ascending
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Open cells in scan order
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |c| self.is_open(*c))
    }

    /// The grid as `rows[y][x]`
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width.max(1))
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let open = self.is_open(Coord::new(x, y));
                write!(f, "{}", if open { '.' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
