//! Generation parameters and configuration loading
//!
//! Parameters can be written in an rc-style file:
//!
//! ```text
//! # 40x30 with separated rooms
//! OPTIONS=width:40,height:30,rooms:8
//! OPTIONS=separate_rooms,!move_pillars
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::dungeon::{RoomPolicy, RoomSpec};

/// Everything that controls a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    /// Random single cells to open after the maze
    pub cells_to_add: usize,
    pub rooms_to_add: usize,
    /// Inclusive lower bound on room sides
    pub room_min_size: usize,
    /// Exclusive upper bound on room sides
    pub room_max_size: usize,

    pub place_random_cells: bool,
    pub place_rooms: bool,
    /// Keep rooms from overlapping each other
    pub separate_rooms: bool,
    /// Prune dead ends after maze, cells and rooms
    pub uncarve_maze: bool,
    pub fix_pillars: bool,
    /// Open the pillar cell when repairing, shifting the wall by one
    pub move_pillars_to_fix: bool,
    /// Prune dead ends again after pillar repair
    pub uncarve_after_pillars: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells_to_add: DEFAULT_CELLS_TO_ADD,
            rooms_to_add: DEFAULT_ROOMS_TO_ADD,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,

            place_random_cells: true,
            place_rooms: true,
            separate_rooms: false,
            uncarve_maze: true,
            fix_pillars: true,
            move_pillars_to_fix: true,
            uncarve_after_pillars: true,
        }
    }
}

/// Parameter combinations the generator refuses to run with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("room minimum size must be at least 1")]
    ZeroRoomSize,

    #[error("room minimum size {min} must be below maximum size {max}")]
    RoomSizeOrder { min: usize, max: usize },

    #[error("room maximum size {max} does not fit a {width}x{height} grid")]
    RoomTooLarge {
        max: usize,
        width: usize,
        height: usize,
    },
}

/// Errors while reading a configuration file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option: {0}")]
    MissingValue(String),
}

impl GenerationParams {
    /// Check the parameters before a run.
    ///
    /// Room sizes are only checked when rooms will actually be placed.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamsError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }

        if !self.place_rooms || self.rooms_to_add == 0 {
            return Ok(());
        }
        if self.room_min_size == 0 {
            return Err(ParamsError::ZeroRoomSize);
        }
        if self.room_min_size >= self.room_max_size {
            return Err(ParamsError::RoomSizeOrder {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        // Largest side is max - 1 and needs at least one anchor column/row.
        if self.room_max_size > self.width || self.room_max_size > self.height {
            return Err(ParamsError::RoomTooLarge {
                max: self.room_max_size,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn room_policy(&self) -> RoomPolicy {
        if self.separate_rooms {
            RoomPolicy::Separate
        } else {
            RoomPolicy::Overlapping
        }
    }

    pub fn room_spec(&self) -> RoomSpec {
        RoomSpec {
            count: self.rooms_to_add,
            min_size: self.room_min_size,
            max_size: self.room_max_size,
            policy: self.room_policy(),
        }
    }

    /// Load parameters from a file, starting from the defaults
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse parameters from a config string, starting from the defaults
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut params = Self::default();
        params.apply_config(contents)?;
        Ok(params)
    }

    /// Apply every `OPTIONS=` line of a config string on top of `self`
    pub fn apply_config(&mut self, contents: &str) -> Result<(), OptionsError> {
        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    self.apply_option(opt.trim())?;
                }
            }
        }
        Ok(())
    }

    /// Apply a single option such as `rooms:8`, `separate_rooms` or `!uncarve`
    pub fn apply_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }

        let (negated, opt_name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        if let Some((key, value)) = opt_name.split_once(':') {
            return self.set_option(key.trim(), Some(value.trim()));
        }
        if let Some((key, value)) = opt_name.split_once('=') {
            return self.set_option(key.trim(), Some(value.trim()));
        }

        self.set_bool_option(opt_name, !negated)
    }

    fn bool_option(&mut self, name: &str) -> Option<&mut bool> {
        let flag = match name {
            "random_cells" | "place_random_cells" => &mut self.place_random_cells,
            "place_rooms" => &mut self.place_rooms,
            "separate_rooms" => &mut self.separate_rooms,
            "uncarve" | "uncarve_maze" => &mut self.uncarve_maze,
            "fix_pillars" => &mut self.fix_pillars,
            "move_pillars" | "move_pillars_to_fix" => &mut self.move_pillars_to_fix,
            "uncarve_after_pillars" => &mut self.uncarve_after_pillars,
            _ => return None,
        };
        Some(flag)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        let flag = self
            .bool_option(name)
            .ok_or_else(|| OptionsError::UnknownOption(name.to_string()))?;
        *flag = value;
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        if let Some(flag) = self.bool_option(name) {
            *flag = match value.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => return Err(invalid()),
            };
            return Ok(());
        }

        let number = || value.parse::<usize>().map_err(|_| invalid());
        match name {
            "width" => self.width = number()?,
            "height" => self.height = number()?,
            "cells" | "cells_to_add" => self.cells_to_add = number()?,
            "rooms" | "rooms_to_add" => self.rooms_to_add = number()?,
            "room_min" | "room_min_size" => self.room_min_size = number()?,
            "room_max" | "room_max_size" => self.room_max_size = number()?,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}
