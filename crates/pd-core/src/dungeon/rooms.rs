//! Room carving
//!
//! Two policies:
//! - [`RoomPolicy::Overlapping`]: drop rectangles anywhere, merging freely.
//! - [`RoomPolicy::Separate`]: keep rooms apart using a [`PlacementGrid`] of
//!   claimed cells, with a deterministic scan once random proposals run dry.

use serde::Serialize;

use crate::rng::DungeonRng;

use super::frontier::Carver;
use super::grid::{Coord, Grid};

/// Random proposals allowed per requested room before falling back to a scan
pub const PROPOSALS_PER_ROOM: usize = 5;

/// A placed rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    /// Left x coordinate
    pub x: usize,
    /// Lowest y coordinate
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Every cell of the room, x outer, y inner
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let Room {
            x,
            y,
            width,
            height,
        } = *self;
        (x..x + width).flat_map(move |cx| (y..y + height).map(move |cy| Coord::new(cx, cy)))
    }

    /// Whether the two rooms share at least one cell
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// How rooms treat each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomPolicy {
    /// No overlap detection
    Overlapping,
    /// Rooms never share a cell
    Separate,
}

/// Room size and count settings for one carving pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec {
    pub count: usize,
    /// Inclusive lower bound on each side
    pub min_size: usize,
    /// Exclusive upper bound on each side
    pub max_size: usize,
    pub policy: RoomPolicy,
}

/// Cells already claimed by a placed room.
///
/// Independent of the main grid: a cell opened by the maze is still unclaimed here.
#[derive(Debug, Clone)]
pub struct PlacementGrid {
    claims: Grid,
}

impl PlacementGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            claims: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.claims.width()
    }

    pub fn height(&self) -> usize {
        self.claims.height()
    }

    pub fn is_claimed(&self, c: Coord) -> bool {
        self.claims.is_open(c)
    }

    pub fn claim(&mut self, room: &Room) {
        for c in room.cells() {
            self.claims.set(c, true);
        }
    }

    /// Whether any cell of `room` is already claimed
    pub fn overlaps(&self, room: &Room) -> bool {
        room.cells().any(|c| self.is_claimed(c))
    }

    /// First anchor where a `width × height` rectangle is entirely unclaimed.
    ///
    /// Scans x outer ascending, y inner ascending. Anchors run over
    /// `[0, grid_width - width) × [0, grid_height - height)`, the same range random
    /// proposals are drawn from.
    pub fn find_open_space(&self, width: usize, height: usize) -> Option<Coord> {
        let max_x = self.width().saturating_sub(width);
        let max_y = self.height().saturating_sub(height);

        for x in 0..max_x {
            for y in 0..max_y {
                if self.is_claimed(Coord::new(x, y)) {
                    continue;
                }
                if !self.overlaps(&Room::new(x, y, width, height)) {
                    return Some(Coord::new(x, y));
                }
            }
        }
        None
    }
}

fn random_size(spec: &RoomSpec, rng: &mut DungeonRng) -> (usize, usize) {
    let width = rng.range(spec.min_size, spec.max_size);
    let height = rng.range(spec.min_size, spec.max_size);
    (width, height)
}

fn random_room(grid: &Grid, spec: &RoomSpec, rng: &mut DungeonRng) -> Room {
    let (width, height) = random_size(spec, rng);
    let x = rng.rn2(grid.width().saturating_sub(width));
    let y = rng.rn2(grid.height().saturating_sub(height));
    Room::new(x, y, width, height)
}

fn carve_room(carver: &mut Carver, room: &Room) {
    for c in room.cells() {
        carver.mark(c);
    }
}

/// Carve rooms according to `spec.policy`. Returns the rooms placed, in order.
pub fn add_rooms(carver: &mut Carver, spec: &RoomSpec, rng: &mut DungeonRng) -> Vec<Room> {
    let rooms = match spec.policy {
        RoomPolicy::Overlapping => add_rooms_overlapping(carver, spec, rng),
        RoomPolicy::Separate => add_rooms_separate(carver, spec, rng),
    };
    log::info!("rooms: placed {} of {}", rooms.len(), spec.count);
    rooms
}

/// Carve `spec.count` random rooms with no overlap detection
pub fn add_rooms_overlapping(
    carver: &mut Carver,
    spec: &RoomSpec,
    rng: &mut DungeonRng,
) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(spec.count);
    for _ in 0..spec.count {
        let room = random_room(&carver.grid, spec, rng);
        carve_room(carver, &room);
        rooms.push(room);
    }
    rooms
}

/// Carve up to `spec.count` rooms that never share a cell.
///
/// After `PROPOSALS_PER_ROOM * count` random proposals, each remaining room is
/// sized at random and placed at the first free anchor found by
/// [`PlacementGrid::find_open_space`]. If none fits, placement stops early.
pub fn add_rooms_separate(carver: &mut Carver, spec: &RoomSpec, rng: &mut DungeonRng) -> Vec<Room> {
    let mut claims = PlacementGrid::new(carver.grid.width(), carver.grid.height());
    let budget = PROPOSALS_PER_ROOM * spec.count;
    place_separate(carver, &mut claims, spec, budget, rng)
}

fn place_separate(
    carver: &mut Carver,
    claims: &mut PlacementGrid,
    spec: &RoomSpec,
    budget: usize,
    rng: &mut DungeonRng,
) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(spec.count);
    let mut proposals = 0;

    while rooms.len() < spec.count {
        let room = if proposals < budget {
            proposals += 1;
            let room = random_room(&carver.grid, spec, rng);
            if claims.overlaps(&room) {
                continue;
            }
            room
        } else {
            let (width, height) = random_size(spec, rng);
            match claims.find_open_space(width, height) {
                Some(at) => Room::new(at.x, at.y, width, height),
                None => {
                    log::info!(
                        "rooms: no space left for a {}x{} room, stopping at {} of {}",
                        width,
                        height,
                        rooms.len(),
                        spec.count
                    );
                    break;
                }
            }
        };

        carve_room(carver, &room);
        claims.claim(&room);
        rooms.push(room);
    }

    log::debug!("rooms: {} random proposals made", proposals);
    rooms
}
