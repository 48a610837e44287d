//! Shared value types for the grid, movement and controls.

use bevy::prelude::*;

/// Integer cell coordinate on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Travel direction of the snake head. `Up` decreases `y` (canvas space grows downwards).
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// One-cell step for this direction as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    /// Axis and sign used for bounce feedback.
    pub fn bounce(self) -> Option<Bounce> {
        match self {
            Direction::Up => Some(Bounce { axis: Axis::Vertical, negative: true }),
            Direction::Down => Some(Bounce { axis: Axis::Vertical, negative: false }),
            Direction::Left => Some(Bounce { axis: Axis::Horizontal, negative: true }),
            Direction::Right => Some(Bounce { axis: Axis::Horizontal, negative: false }),
            Direction::None => None,
        }
    }
}

/// Discrete control vocabulary produced by the input layer.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    None,
}

impl Control {
    /// The travel direction this control requests, if it is a steering control.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Control::Up => Some(Direction::Up),
            Control::Down => Some(Direction::Down),
            Control::Left => Some(Direction::Left),
            Control::Right => Some(Direction::Right),
            Control::Confirm | Control::None => None,
        }
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Feedback cue emitted when a direction change is accepted.
#[derive(Message, PartialEq, Eq, Copy, Clone, Debug)]
pub struct Bounce {
    pub axis: Axis,
    pub negative: bool,
}

/// Canvas size in pixels and the cell lattice laid over it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    pub columns: i32,
    pub rows: i32,
}

impl Board {
    pub fn cell_width(&self) -> f32 {
        self.width / self.columns as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.height / self.rows as f32
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.columns).contains(&position.x) && (0..self.rows).contains(&position.y)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| Position::new(x, y)))
    }
}
