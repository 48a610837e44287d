//! Startup options, resolved once from the command line.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use clap::Parser;
use clap::error::ErrorKind;

use super::{
    Board, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMNS, DEFAULT_ROWS,
    DEFAULT_TICK_MS, MAX_CANVAS_SIZE, MAX_GRID_CELLS, MIN_GRID_CELLS,
};

/// Raw command line. Numeric values stay strings so a bad value falls back
/// to its default instead of aborting the launch.
#[derive(Parser, Debug, Default)]
#[command(name = "wrap_snake", version, about = "Grid snake with seam-wrapping movement")]
pub struct Cli {
    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<String>,
    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<String>,
    /// Grid columns
    #[arg(long)]
    pub pixel_width: Option<String>,
    /// Grid rows
    #[arg(long)]
    pub pixel_height: Option<String>,
    /// Milliseconds per grid step
    #[arg(long)]
    pub speed: Option<String>,
    #[arg(long)]
    pub no_colliders: bool,
    #[arg(long)]
    pub no_feedback_animation: bool,
    #[arg(long)]
    pub no_snake_animation: bool,
    #[arg(long)]
    pub show_fps: bool,
    #[arg(long)]
    pub no_score_text: bool,
    /// Walls instead of wrapping edges
    #[arg(long)]
    pub border: bool,
    /// HDR bloom pipeline
    #[arg(long)]
    pub experimental_shader: bool,
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses the process arguments. A malformed command line yields the defaults.
    pub fn from_env() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(_) => Cli::default(),
        }
    }
}

/// Immutable game configuration shared by every plugin.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameOptions {
    pub height: u32,
    pub width: u32,
    pub columns: u32,
    pub rows: u32,
    pub tick_ms: u32,
    pub colliders: bool,
    pub feedback_animation: bool,
    pub snake_animation: bool,
    pub show_fps: bool,
    pub score_text: bool,
    pub border: bool,
    pub experimental_shader: bool,
    pub verbose: bool,
    /// Options that were present but unusable, reported once logging is up.
    pub fallbacks: Vec<&'static str>,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            height: DEFAULT_CANVAS_HEIGHT,
            width: DEFAULT_CANVAS_WIDTH,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            tick_ms: DEFAULT_TICK_MS,
            colliders: true,
            feedback_animation: true,
            snake_animation: true,
            show_fps: false,
            score_text: true,
            border: false,
            experimental_shader: false,
            verbose: false,
            fallbacks: Vec::new(),
        }
    }
}

impl GameOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut fallbacks = Vec::new();
        let mut number = |name: &'static str,
                          raw: &Option<String>,
                          valid: RangeInclusive<u32>,
                          default: u32| {
            let Some(raw) = raw else {
                return default;
            };
            match leading_integer(raw).and_then(|value| u32::try_from(value).ok()) {
                Some(value) if valid.contains(&value) => value,
                _ => {
                    fallbacks.push(name);
                    default
                }
            }
        };

        let height = number("height", &cli.height, 1..=MAX_CANVAS_SIZE, DEFAULT_CANVAS_HEIGHT);
        let width = number("width", &cli.width, 1..=MAX_CANVAS_SIZE, DEFAULT_CANVAS_WIDTH);
        let grid = MIN_GRID_CELLS..=MAX_GRID_CELLS;
        let columns = number("pixel-width", &cli.pixel_width, grid.clone(), DEFAULT_COLUMNS);
        let rows = number("pixel-height", &cli.pixel_height, grid, DEFAULT_ROWS);
        let tick_ms = number("speed", &cli.speed, 0..=u32::MAX, DEFAULT_TICK_MS);

        GameOptions {
            height,
            width,
            columns,
            rows,
            tick_ms,
            colliders: !cli.no_colliders,
            feedback_animation: !cli.no_feedback_animation,
            snake_animation: !cli.no_snake_animation,
            show_fps: cli.show_fps,
            score_text: !cli.no_score_text,
            border: cli.border,
            experimental_shader: cli.experimental_shader,
            verbose: cli.verbose,
            fallbacks,
        }
    }

    pub fn board(&self) -> Board {
        Board {
            width: self.width as f32,
            height: self.height as f32,
            columns: self.columns as i32,
            rows: self.rows as i32,
        }
    }
}

/// Leading integer prefix of `raw` (`"12px"` reads as 12), like `parseInt`.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
