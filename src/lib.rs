//! Steady Maze - a pointer-controlled maze game
//!
//! Core modules:
//! - `sim`: Deterministic game core (grid, maze generation, collision, session)
//! - `renderer`: Canvas2D rendering
//! - `platform`: Browser/native platform abstraction
//! - `audio`: Procedural sound effects via Web Audio

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Pixel edge length of one grid cell; also the collision/win distance unit
    pub const CELL_SIZE: f32 = 6.0;
    /// Fixed maze width in pixels
    pub const MAZE_WIDTH: u32 = 300;
    /// Maze height is 1.5x the width (300 x 450)
    pub const MAZE_HEIGHT_RATIO: f32 = 1.5;

    /// Player square edge length (small enough to fit a 6px corridor cell)
    pub const PLAYER_SIZE: f32 = 4.0;

    /// Highest level in the per-level maze variant
    pub const MAX_LEVEL: u32 = 3;

    /// Player fill color
    pub const PLAYER_COLOR: &str = "#4A90E2";
    /// End zone fill color
    pub const END_ZONE_COLOR: &str = "#ff4444";
}

/// Maze height in pixels for a given width
#[inline]
pub fn maze_height(width: u32) -> u32 {
    (width as f32 * consts::MAZE_HEIGHT_RATIO).floor() as u32
}

/// Euclidean distance between two pixel-space points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}
