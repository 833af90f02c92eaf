//! Default generation settings

/// Default grid width
pub const DEFAULT_WIDTH: usize = 50;
/// Default grid height
pub const DEFAULT_HEIGHT: usize = 50;

/// Random single cells opened after the base maze
pub const DEFAULT_CELLS_TO_ADD: usize = 100;

/// Rooms carved after random cells
pub const DEFAULT_ROOMS_TO_ADD: usize = 5;
/// Smallest room side
pub const DEFAULT_ROOM_MIN_SIZE: usize = 2;
/// Room sides are strictly below this
pub const DEFAULT_ROOM_MAX_SIZE: usize = 4;
