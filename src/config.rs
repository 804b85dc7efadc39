//! Compile-time game constants. Everything is expressed in virtual pixels;
//! the renderer scales the playfield down to the terminal grid.

use std::time::Duration;

use crate::Coord;

pub const SCREEN_WIDTH: Coord = 800;
pub const SCREEN_HEIGHT: Coord = 700;

/// Background scroll rate in pixels per frame. Fractional rates accumulate.
pub const ROAD_SPEED: f32 = 1.0;

/// Falling speed of every obstacle, pixels per frame.
pub const OBSTACLE_SPEED: Coord = 3;
pub const OBSTACLE_GROUPS: usize = 6;
pub const OBSTACLES_PER_GROUP: usize = 1;
pub const OBSTACLE_WIDTH: Coord = 50;
pub const OBSTACLE_HEIGHT: Coord = 80;
// Initial x is drawn from a narrower band than respawns use
pub const OBSTACLE_SPAWN_MARGIN: Coord = 100;

pub const PLAYER_START: (Coord, Coord) = (350, 500);
pub const PLAYER_WIDTH: Coord = 50;
pub const PLAYER_HEIGHT: Coord = 80;
pub const PLAYER_STEP_X: Coord = 50;
pub const PLAYER_STEP_Y: Coord = 100;
pub const PLAYER_MAX_X: Coord = 750;
pub const PLAYER_MAX_Y: Coord = 600;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Wall-clock time worth one point.
pub const SCORE_TICK_MS: u128 = 60;
/// How long the instructions and game-over screens block.
pub const DISPLAY_DELAY: Duration = Duration::from_secs(10);

pub const MIN_TERM_WIDTH: u16 = 40;
pub const MIN_TERM_HEIGHT: u16 = 20;
