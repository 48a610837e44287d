//! Food - placement on a random free cell and the food segment itself.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::{Board, FOOD_COLOR, FOOD_SIZE, Position};
use crate::snake::Segment;

/// Picks a uniformly random cell not covered by `occupied`, or `None` when the board is full.
pub fn random_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    occupied: &[Position],
) -> Option<Position> {
    let free: Vec<Position> = board
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();
    free.choose(rng).copied()
}

/// Builds the food segment resting on `cell`.
pub fn spawn_food(board: Board, tick_ms: f32, cell: Position) -> Segment {
    let mut food = Segment::new(board, tick_ms, cell, FOOD_COLOR);
    food.set_size(FOOD_SIZE);
    food.correct_position();
    food
}
