//! Game constants for colors, sizes, timing defaults and layout.

use bevy::prelude::*;

// Option defaults
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;
pub const DEFAULT_CANVAS_WIDTH: u32 = 400;
pub const DEFAULT_COLUMNS: u32 = 12;
pub const DEFAULT_ROWS: u32 = 12;
pub const DEFAULT_TICK_MS: u32 = 100;
pub const MIN_GRID_CELLS: u32 = 3;
pub const MAX_GRID_CELLS: u32 = 1024;
pub const MAX_CANVAS_SIZE: u32 = 8192;

// Segment easing
pub const SNAP_PRECISION: f32 = 1.0;
pub const DEFAULT_SEGMENT_SIZE: f32 = 0.5;
pub const FOOD_SIZE: f32 = 0.6;
pub const TAIL_TAPER_STRETCH: f32 = 1.1;

// Colors, 0-255 sRGB as written into the vertex buffer
pub const SNAKE_COLOR: [u8; 3] = [32, 247, 90];
pub const FOOD_COLOR: [u8; 3] = [247, 64, 32];
pub const TEXT_COLOR: [u8; 3] = SNAKE_COLOR;

// Bitmap font
pub const FONT_SIZE: f32 = 5.0;
pub const FONT_PADDING: f32 = 0.5;
pub const FONT_CELL_SPACING: f32 = 0.9;
pub const SCORE_TEXT_ORIGIN: Vec2 = Vec2::new(2.0, 2.0);

// Window chrome
pub const WINDOW_MARGIN: f32 = 40.0;
pub const BORDER_THICKNESS: f32 = 2.0;
pub const BACKGROUND_COLOR: Color = Color::srgb_u8(32, 32, 32);
pub const CANVAS_CLEAR_COLOR: Color = Color::BLACK;
pub const BORDER_COLOR: Color = Color::WHITE;
pub const HUD_COLOR: Color = Color::srgb_u8(32, 247, 90);

// Bounce feedback
pub const BOUNCE_DISTANCE: f32 = 5.0;
pub const BOUNCE_SECONDS: f32 = 0.05;

// Z-index constants for rendering layers
pub const Z_CANVAS: f32 = 0.0;
pub const Z_BACKDROP: f32 = -1.0;
pub const Z_BORDER: f32 = 0.1;
