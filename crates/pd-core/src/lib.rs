//! pd-core: dungeon layout generation
//!
//! Produces a grid of open and closed cells from a parameter set and a seed.
//! Randomized Prim's algorithm lays down a spanning maze. Later passes add
//! random cells and rooms, prune dead ends, and repair pillars.
//!
//! This crate has no I/O besides reading configuration files and is designed to
//! be deterministic for a given seed.

pub mod dungeon;
pub mod options;

mod consts;
mod rng;

pub use consts::*;
pub use dungeon::{Dungeon, DungeonGenerator, GenerationStats, Grid};
pub use options::{GenerationParams, OptionsError, ParamsError};
pub use rng::DungeonRng;
