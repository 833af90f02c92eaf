//! The generation pipeline
//!
//! maze → random cells → rooms → uncarve → pillar repair → uncarve.
//! Every stage after the maze can be switched off in [`GenerationParams`].

use serde::Serialize;

use crate::options::{GenerationParams, ParamsError};
use crate::rng::DungeonRng;

use super::cells::add_random_cells;
use super::frontier::Carver;
use super::grid::Grid;
use super::maze::generate_maze;
use super::pillars::fix_pillars;
use super::rooms::{Room, add_rooms};
use super::uncarve::uncarve;

/// What each pass did during one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub seed: u64,
    pub maze_cells: usize,
    pub random_cells: usize,
    pub rooms_requested: usize,
    pub rooms_placed: usize,
    pub dead_ends_removed: usize,
    pub pillars_fixed: usize,
    pub dead_ends_removed_after_pillars: usize,
}

/// A finished dungeon
#[derive(Debug, Clone, Serialize)]
pub struct Dungeon {
    pub grid: Grid,
    /// Rooms in placement order. Overlapping rooms may have merged on the grid.
    pub rooms: Vec<Room>,
    pub stats: GenerationStats,
}

impl Dungeon {
    /// May be below the request when separated rooms run out of space
    pub fn rooms_placed(&self) -> usize {
        self.rooms.len()
    }
}

/// Runs the generation pipeline for a validated parameter set.
///
/// Holds no state between runs; every call to [`generate`](Self::generate)
/// starts from a fresh closed grid.
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    params: GenerationParams,
}

impl DungeonGenerator {
    pub fn new(params: GenerationParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generate with a fresh RNG seeded from `seed`
    pub fn generate_seeded(&self, seed: u64) -> Dungeon {
        self.generate(&mut DungeonRng::new(seed))
    }

    pub fn generate(&self, rng: &mut DungeonRng) -> Dungeon {
        let params = &self.params;
        let mut stats = GenerationStats {
            seed: rng.seed(),
            ..GenerationStats::default()
        };
        let mut carver = Carver::new(params.width, params.height);
        let mut rooms = Vec::new();

        stats.maze_cells = generate_maze(&mut carver, rng);

        if params.place_random_cells {
            stats.random_cells = add_random_cells(&mut carver, params.cells_to_add, rng);
        }

        if params.place_rooms {
            stats.rooms_requested = params.rooms_to_add;
            rooms = add_rooms(&mut carver, &params.room_spec(), rng);
            stats.rooms_placed = rooms.len();
        }

        let mut grid = carver.into_grid();

        if params.uncarve_maze {
            stats.dead_ends_removed = uncarve(&mut grid);
        }

        if params.fix_pillars {
            stats.pillars_fixed = fix_pillars(&mut grid, params.move_pillars_to_fix);
        }

        if params.uncarve_after_pillars {
            stats.dead_ends_removed_after_pillars = uncarve(&mut grid);
        }

        log::debug!(
            "generated {}x{} dungeon with {} open cells: {:?}",
            grid.width(),
            grid.height(),
            grid.open_count(),
            stats
        );

        Dungeon { grid, rooms, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_only(width: usize, height: usize) -> GenerationParams {
        GenerationParams {
            width,
            height,
            place_random_cells: false,
            place_rooms: false,
            uncarve_maze: false,
            fix_pillars: false,
            uncarve_after_pillars: false,
            ..GenerationParams::default()
        }
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = GenerationParams {
            room_min_size: 5,
            room_max_size: 3,
            ..GenerationParams::default()
        };
        assert!(DungeonGenerator::new(params).is_err());
    }

    #[test]
    fn test_maze_only_run() {
        let generator = DungeonGenerator::new(maze_only(5, 5)).unwrap();
        let dungeon = generator.generate_seeded(1);
        assert!(dungeon.grid.is_open(crate::dungeon::Coord::ORIGIN));
        assert_eq!(dungeon.stats.maze_cells, dungeon.grid.open_count());
        assert_eq!(dungeon.rooms_placed(), 0);
        assert_eq!(dungeon.stats.rooms_requested, 0);
        assert_eq!(dungeon.stats.seed, 1);
    }

    #[test]
    fn test_default_run_reports_rooms() {
        let generator = DungeonGenerator::new(GenerationParams::default()).unwrap();
        let dungeon = generator.generate_seeded(2024);
        assert_eq!(dungeon.stats.rooms_requested, 5);
        assert_eq!(dungeon.rooms_placed(), 5);
        assert_eq!(dungeon.stats.rooms_placed, 5);
        assert_eq!(dungeon.grid.width(), 50);
        assert_eq!(dungeon.grid.height(), 50);
    }

    #[test]
    fn test_runs_are_independent() {
        let generator = DungeonGenerator::new(GenerationParams::default()).unwrap();
        let mut rng = DungeonRng::new(5);
        let first = generator.generate(&mut rng);
        let again = generator.generate_seeded(5);
        assert_eq!(first.grid, again.grid);
    }
}
