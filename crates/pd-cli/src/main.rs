//! primdungeon command-line front end
//!
//! Generates one dungeon and prints it to stdout.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use serde::Serialize;

use pd_core::dungeon::Room;
use pd_core::{Dungeon, DungeonGenerator, DungeonRng, GenerationParams, GenerationStats};

/// Generate a maze-and-rooms dungeon grid
#[derive(Parser, Debug)]
#[command(name = "primdungeon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Options file with OPTIONS= lines
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Extra option, same syntax as the options file (e.g. `rooms:8`, `!uncarve`)
    #[arg(short = 'O', long = "option", value_name = "OPT")]
    options: Vec<String>,

    /// RNG seed; random if omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Grid width
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Random cells to open after the maze
    #[arg(long = "cells")]
    cells: Option<usize>,

    /// Rooms to carve
    #[arg(long = "rooms")]
    rooms: Option<usize>,

    /// Smallest room side
    #[arg(long = "room-min")]
    room_min: Option<usize>,

    /// Room sides stay strictly below this
    #[arg(long = "room-max")]
    room_max: Option<usize>,

    /// Keep rooms from overlapping
    #[arg(long = "separate-rooms")]
    separate_rooms: bool,

    /// Skip random cell carving
    #[arg(long = "no-cells")]
    no_cells: bool,

    /// Skip room carving
    #[arg(long = "no-rooms")]
    no_rooms: bool,

    /// Skip dead-end pruning after carving
    #[arg(long = "no-uncarve")]
    no_uncarve: bool,

    /// Skip pillar repair
    #[arg(long = "no-pillars")]
    no_pillars: bool,

    /// Repair pillars without opening the pillar cell
    #[arg(long = "keep-pillars")]
    keep_pillars: bool,

    /// Skip dead-end pruning after pillar repair
    #[arg(long = "no-final-uncarve")]
    no_final_uncarve: bool,

    /// Print JSON instead of ASCII
    #[arg(long = "json")]
    json: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Defaults, then the options file, then `-O` options, then explicit flags
    fn params(&self) -> anyhow::Result<GenerationParams> {
        let mut params = match &self.config {
            Some(path) => GenerationParams::load_from_file(path)
                .with_context(|| format!("failed to read options from {}", path.display()))?,
            None => GenerationParams::default(),
        };

        for opt in &self.options {
            params
                .apply_option(opt)
                .with_context(|| format!("bad option {:?}", opt))?;
        }

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(cells) = self.cells {
            params.cells_to_add = cells;
        }
        if let Some(rooms) = self.rooms {
            params.rooms_to_add = rooms;
        }
        if let Some(min) = self.room_min {
            params.room_min_size = min;
        }
        if let Some(max) = self.room_max {
            params.room_max_size = max;
        }

        params.separate_rooms |= self.separate_rooms;
        params.place_random_cells &= !self.no_cells;
        params.place_rooms &= !self.no_rooms;
        params.uncarve_maze &= !self.no_uncarve;
        params.fix_pillars &= !self.no_pillars;
        params.move_pillars_to_fix &= !self.keep_pillars;
        params.uncarve_after_pillars &= !self.no_final_uncarve;

        Ok(params)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    params: &'a GenerationParams,
    width: usize,
    height: usize,
    /// One string per row, `.` open and `#` closed
    rows: Vec<String>,
    rooms: &'a [Room],
    stats: &'a GenerationStats,
}

impl<'a> JsonReport<'a> {
    fn new(params: &'a GenerationParams, dungeon: &'a Dungeon) -> Self {
        let rows: Vec<String> = dungeon
            .grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&open| if open { '.' } else { '#' })
                    .collect::<String>()
            })
            .collect();
        Self {
            params,
            width: dungeon.grid.width(),
            height: dungeon.grid.height(),
            rows,
            rooms: &dungeon.rooms,
            stats: &dungeon.stats,
        }
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Off, Trace, Warn};

    let level = match verbose {
        0 => Warn,
        1 => Info,
        2 => Debug,
        _ => Trace,
    };
    simplelog::WriteLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(Off)
            .build(),
        std::io::stderr(),
    )
    .context("failed to initialize logging")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let params = args.params()?;
    let generator = DungeonGenerator::new(params).context("invalid generation parameters")?;

    let mut rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    let dungeon = generator.generate(&mut rng);
    log::info!(
        "{} open cells, {} of {} rooms placed",
        dungeon.grid.open_count(),
        dungeon.rooms_placed(),
        dungeon.stats.rooms_requested
    );

    if args.json {
        let report = JsonReport::new(generator.params(), &dungeon);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", dungeon.grid);
    }

    Ok(())
}
