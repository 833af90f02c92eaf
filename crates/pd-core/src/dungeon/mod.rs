//! Dungeon grid generation
//!
//! Contains the grid, the frontier, the carving passes and the pipeline that
//! chains them.

mod cells;
mod frontier;
mod generator;
mod grid;
mod maze;
mod pillars;
mod rooms;
mod uncarve;

pub use cells::add_random_cells;
pub use frontier::{Carver, Frontier};
pub use generator::{Dungeon, DungeonGenerator, GenerationStats};
pub use grid::{Coord, Direction, Grid};
pub use maze::generate_maze;
pub use pillars::{find_pillars, fix_pillars, repair_pillar};
pub use rooms::{
    PROPOSALS_PER_ROOM, PlacementGrid, Room, RoomPolicy, RoomSpec, add_rooms,
    add_rooms_overlapping, add_rooms_separate,
};
pub use uncarve::{dead_ends, uncarve};
