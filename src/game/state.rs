//! The snake game state machine: steering, grid ticks, growth, collisions, restart.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    Board, Bounce, Control, Direction, GameOptions, Position, SNAKE_COLOR, TAIL_TAPER_STRETCH,
};
use crate::food::{random_free_cell, spawn_food};
use crate::rendering::Drawable;
use crate::snake::Segment;

/// Game phase. Terminal conditions pause; Confirm restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
}

/// Main game state resource.
#[derive(Resource, Debug)]
pub struct SnakeGame {
    board: Board,
    tick_ms: f32,
    wrapping: bool,
    colliders: bool,
    /// Head first.
    snake: Vec<Segment>,
    food: Option<Segment>,
    direction: Direction,
    phase: GamePhase,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(options: &GameOptions) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    pub fn with_seed(options: &GameOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: &GameOptions, rng: StdRng) -> Self {
        let mut game = SnakeGame {
            board: options.board(),
            tick_ms: options.tick_ms as f32,
            wrapping: !options.border,
            colliders: options.colliders,
            snake: Vec::new(),
            food: None,
            direction: Direction::None,
            phase: GamePhase::Running,
            rng,
        };
        game.restart();
        game
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn tick_ms(&self) -> f32 {
        self.tick_ms
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &[Segment] {
        &self.snake
    }

    pub fn food(&self) -> Option<&Segment> {
        self.food.as_ref()
    }

    /// Score shown to the player: the snake's length.
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Cells the snake covers; a pending wrap counts as the cell it lands on.
    pub fn occupied(&self) -> Vec<Position> {
        self.snake.iter().map(Segment::wrapped_position).collect()
    }

    /// Starts over with a one-segment snake on a random interior cell.
    pub fn restart(&mut self) {
        let head = Position::new(
            interior(&mut self.rng, self.board.columns),
            interior(&mut self.rng, self.board.rows),
        );
        self.restart_at(head);
    }

    pub fn restart_at(&mut self, head: Position) {
        self.snake = vec![Segment::new(self.board, self.tick_ms, head, SNAKE_COLOR)];
        self.food = None;
        self.direction = Direction::None;
        self.phase = GamePhase::Running;
        self.spawn_random_food();
        info!("New game: head at ({}, {})", head.x, head.y);
    }

    /// Places food on a random free cell. A full board pauses with no food.
    pub fn spawn_random_food(&mut self) {
        if self.food.is_some() {
            return;
        }
        let occupied = self.occupied();
        match random_free_cell(&mut self.rng, &self.board, &occupied) {
            Some(cell) => {
                debug!("Food at ({}, {})", cell.x, cell.y);
                self.food = Some(spawn_food(self.board, self.tick_ms, cell));
            }
            None => {
                info!("Board full at length {}", self.snake.len());
                self.phase = GamePhase::Paused;
            }
        }
    }

    /// Applies a control. Returns the bounce cue when the direction changed.
    pub fn control(&mut self, control: Control) -> Option<Bounce> {
        if self.is_paused() {
            if control == Control::Confirm {
                self.restart();
            }
            return None;
        }

        let requested = control.direction()?;
        if requested == self.direction || self.reverses_into_neck(requested) {
            debug!("Rejected turn {:?} while heading {:?}", requested, self.direction);
            return None;
        }
        self.direction = requested;
        requested.bounce()
    }

    fn reverses_into_neck(&self, direction: Direction) -> bool {
        match (self.snake.first(), self.snake.get(1)) {
            (Some(head), Some(neck)) => head.would_step_onto(neck, direction),
            _ => false,
        }
    }

    /// One discrete grid step. Food eaten this step is replaced once the
    /// body has moved, so the new cell avoids the head's new position.
    pub fn tick(&mut self) {
        for segment in &mut self.snake {
            segment.correct_position();
        }
        if self.food.is_none() {
            return;
        }

        let ate = self.eat_food();
        self.advance_body();
        if ate {
            self.spawn_random_food();
        }
    }

    /// Grows at the tail when the head sits on the food.
    fn eat_food(&mut self) -> bool {
        let head = self.snake[0].grid_position();
        let Some(food) = &self.food else {
            return false;
        };
        if !food.grid_position().collides_with(&head) {
            return false;
        }

        let tail = self.snake[self.snake.len() - 1].grid_position();
        self.snake
            .push(Segment::new(self.board, self.tick_ms, tail, SNAKE_COLOR));
        self.food = None;
        debug!("Ate food, length {}", self.snake.len());
        true
    }

    /// Steps the head and has each segment take its leader's previous cell.
    fn advance_body(&mut self) {
        let mut leader = self.snake[0].grid_position();
        self.snake[0].step(self.direction);
        if !self.wrapping && self.snake[0].is_off_board() {
            self.snake[0].set_grid_position(leader);
            info!("Hit the border at length {}", self.snake.len());
            self.phase = GamePhase::Paused;
            return;
        }

        for segment in self.snake.iter_mut().skip(1) {
            let previous = segment.grid_position();
            segment.follow(leader, self.wrapping);
            leader = previous;
        }
    }

    /// Eases every segment toward its cell, or jumps there when animation is off.
    pub fn animate(&mut self, elapsed_ms: f32, animated: bool) {
        for segment in &mut self.snake {
            if animated {
                segment.move_toward_target(elapsed_ms);
            } else {
                segment.correct_position();
            }
        }
    }

    /// Head at full size, the rest shrinking toward the tail.
    pub fn taper(&mut self) {
        let count = self.snake.len() as f32;
        for (i, segment) in self.snake.iter_mut().enumerate() {
            if i == 0 {
                segment.set_size(1.0);
            } else {
                let remaining = (count - i as f32) / (count * TAIL_TAPER_STRETCH);
                segment.set_size(0.5 + 0.5 * remaining);
            }
        }
    }

    /// Whether the head shares a cell with any other segment.
    pub fn is_colliding(&self) -> bool {
        let Some((head, body)) = self.snake.split_first() else {
            return false;
        };
        body.iter().any(|segment| head.overlaps(segment))
    }

    /// Pauses on self-collision when colliders are enabled. Returns whether it paused.
    pub fn check_collision(&mut self) -> bool {
        if self.colliders && self.is_colliding() {
            info!("Game over! Final score: {}", self.score());
            self.phase = GamePhase::Paused;
            return true;
        }
        false
    }

    /// Food first, then the snake head to tail.
    pub fn drawables(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.food
            .iter()
            .chain(self.snake.iter())
            .map(|segment| segment as &dyn Drawable)
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, cell: Position) {
        self.food = Some(spawn_food(self.board, self.tick_ms, cell));
    }

    #[cfg(test)]
    pub(crate) fn set_body(&mut self, cells: &[Position]) {
        self.snake = cells
            .iter()
            .map(|cell| Segment::new(self.board, self.tick_ms, *cell, SNAKE_COLOR))
            .collect();
    }
}

/// Random coordinate away from both edges.
fn interior<R: Rng + ?Sized>(rng: &mut R, cells: i32) -> i32 {
    rng.random_range(1..=cells - 2)
}
