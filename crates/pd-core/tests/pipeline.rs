//! End-to-end generation scenarios

use pd_core::dungeon::{Coord, Grid, PlacementGrid, Room, find_pillars, fix_pillars};
use pd_core::{DungeonGenerator, DungeonRng, GenerationParams, ParamsError};

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
fn test_five_by_five_maze_contains_origin() {
    let generator = DungeonGenerator::new(maze_only(5, 5)).unwrap();
    for seed in 0..50 {
        let dungeon = generator.generate_seeded(seed);
        let grid = &dungeon.grid;
        assert!(grid.is_open(Coord::ORIGIN));
        // Every open cell of a tree has at least one open neighbour unless it is alone.
        if grid.open_count() > 1 {
            assert!(grid.open_cells().all(|c| grid.neighbour_count(c) >= 1));
        }
    }
}

#[test]
fn test_enclosed_pillar_is_opened() {
    let mut grid = Grid::from_ascii(&[
        ".....", //
        ".....", //
        "..#..", //
        ".....", //
        ".....",
    ]);
    fix_pillars(&mut grid, true);
    assert!(grid.is_open(Coord::new(2, 2)));
    assert!(find_pillars(&grid).is_empty());

    let mut walled = Grid::from_ascii(&[
        "#####", //
        "##.##", //
        "#.#.#", //
        "##.##", //
        "#####",
    ]);
    fix_pillars(&mut walled, true);
    assert!(walled.is_open(Coord::new(2, 2)));
    assert!(find_pillars(&walled).is_empty());
}

#[test]
fn test_default_pipeline_postconditions() {
    let generator = DungeonGenerator::new(GenerationParams::default()).unwrap();
    for seed in [0, 1, 42, 4096] {
        let dungeon = generator.generate_seeded(seed);
        let grid = &dungeon.grid;
        assert!(find_pillars(grid).is_empty());
        assert!(grid.open_cells().all(|c| grid.neighbour_count(c) >= 2));
        assert!(dungeon.rooms_placed() <= 5);
    }
}

#[test]
fn test_determinism_across_generators() {
    let a = DungeonGenerator::new(GenerationParams::default()).unwrap();
    let b = DungeonGenerator::new(GenerationParams::default()).unwrap();
    let mut rng_a = DungeonRng::new(777);
    let mut rng_b = DungeonRng::new(777);
    assert_eq!(a.generate(&mut rng_a).grid, b.generate(&mut rng_b).grid);
}

#[test]
fn test_different_seeds_differ() {
    let generator = DungeonGenerator::new(maze_only(30, 30)).unwrap();
    let a = generator.generate_seeded(1).grid;
    let b = generator.generate_seeded(2).grid;
    assert_ne!(a, b);
}

#[test]
fn test_crowded_separate_rooms_stop_early() {
    let params = GenerationParams {
        width: 6,
        height: 6,
        rooms_to_add: 30,
        room_min_size: 2,
        room_max_size: 3,
        separate_rooms: true,
        ..GenerationParams::default()
    };
    let dungeon = DungeonGenerator::new(params).unwrap().generate_seeded(9);
    assert!(dungeon.rooms_placed() < 30);
    assert_eq!(dungeon.stats.rooms_requested, 30);
    assert_eq!(dungeon.stats.rooms_placed, dungeon.rooms_placed());
}

#[test]
fn test_find_open_space_boundaries() {
    let empty = PlacementGrid::new(8, 8);
    assert_eq!(empty.find_open_space(3, 2), Some(Coord::ORIGIN));

    let mut full = PlacementGrid::new(8, 8);
    full.claim(&Room::new(0, 0, 8, 8));
    assert_eq!(full.find_open_space(1, 1), None);
}

#[test]
fn test_invalid_params_rejected_at_boundary() {
    let params = GenerationParams {
        width: 3,
        height: 3,
        ..GenerationParams::default()
    };
    assert_eq!(
        DungeonGenerator::new(params).unwrap_err(),
        ParamsError::RoomTooLarge {
            max: 4,
            width: 3,
            height: 3
        }
    );
}

#[test]
fn test_config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("pd-core-test-{}.rc", std::process::id()));
    std::fs::write(
        &path,
        "OPTIONS=width:20,height:12,separate_rooms,!uncarve\n",
    )
    .unwrap();
    let params = GenerationParams::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(params.width, 20);
    assert_eq!(params.height, 12);
    assert!(params.separate_rooms);
    assert!(!params.uncarve_maze);

    let dungeon = DungeonGenerator::new(params).unwrap().generate_seeded(3);
    assert_eq!(dungeon.grid.width(), 20);
    assert_eq!(dungeon.grid.height(), 12);
}

#[test]
fn test_missing_config_file() {
    let path = std::env::temp_dir().join("pd-core-definitely-missing.rc");
    assert!(GenerationParams::load_from_file(&path).is_err());
}

#[test]
fn test_dungeon_serializes() {
    let dungeon = DungeonGenerator::new(maze_only(4, 3))
        .unwrap()
        .generate_seeded(0);
    let json = serde_json::to_value(&dungeon).unwrap();
    assert_eq!(json["grid"]["width"], 4);
    assert_eq!(json["grid"]["height"], 3);
    assert_eq!(json["grid"]["cells"].as_array().unwrap().len(), 12);
    assert_eq!(json["stats"]["seed"], 0);
}
