//! Snake segments - grid-bound entities that ease their drawn position toward their cell
//! and draw a shadow copy across the opposite edge while wrapping.

use bevy::prelude::*;

use crate::game::{Board, DEFAULT_SEGMENT_SIZE, Direction, Position, SNAP_PRECISION};
use crate::rendering::{Drawable, Quad};

/// Chase speed (px per ms) by tick interval (ms): `(from, until, speed)`, first match wins.
///
/// The `[30, 30)` bucket can never match and the speeds are not monotone;
/// both are kept as they are so the easing feel does not change.
const CHASE_SPEED_TABLE: &[(f32, f32, f32)] = &[
    (f32::NEG_INFINITY, 2.0, 0.0),
    (5.0, 10.0, 0.4),
    (10.0, 20.0, 0.3),
    (30.0, 30.0, 0.28),
    (40.0, 50.0, 0.29),
    (50.0, 60.0, 0.3),
    (60.0, 100.0, 0.31),
    (100.0, 200.0, 0.31),
    (200.0, 300.0, 0.31),
    (300.0, 400.0, 0.31),
    (400.0, 500.0, 0.21),
    (500.0, 1000.0, 0.2),
    (1000.0, 2000.0, 0.17),
];
const FALLBACK_CHASE_SPEED: f32 = 0.2;

pub fn chase_speed(tick_ms: f32) -> f32 {
    CHASE_SPEED_TABLE
        .iter()
        .find(|(from, until, _)| *from <= tick_ms && tick_ms < *until)
        .map_or(FALLBACK_CHASE_SPEED, |(_, _, speed)| *speed)
}

/// One body piece (or the food). The grid cell is authoritative; `position` is the
/// drawn top-left corner and lags behind it while animating.
#[derive(Clone, Debug)]
pub struct Segment {
    board: Board,
    /// Cell coordinates. May sit one cell outside the board right after a wrap.
    cell_x: i32,
    cell_y: i32,
    position: Vec2,
    size: f32,
    speed: f32,
    color: [u8; 3],
    shadow: Option<Quad>,
}

impl Segment {
    /// Creates a segment resting on `cell`.
    pub fn new(board: Board, tick_ms: f32, cell: Position, color: [u8; 3]) -> Self {
        let mut segment = Segment {
            board,
            cell_x: 0,
            cell_y: 0,
            position: Vec2::ZERO,
            size: DEFAULT_SEGMENT_SIZE,
            speed: chase_speed(tick_ms),
            color,
            shadow: None,
        };
        segment.set_grid_x(cell.x);
        segment.set_grid_y(cell.y);
        segment.position = segment.target();
        segment
    }

    pub fn set_grid_x(&mut self, x: i32) {
        self.cell_x = x.clamp(0, self.board.columns - 1);
    }

    pub fn set_grid_y(&mut self, y: i32) {
        self.cell_y = y.clamp(0, self.board.rows - 1);
    }

    pub fn set_grid_position(&mut self, cell: Position) {
        self.set_grid_x(cell.x);
        self.set_grid_y(cell.y);
    }

    /// Moves one column in the direction of `dx`'s sign. The result may be `-1` or
    /// `columns`, which marks a wrap the drawn position has not caught up with yet.
    pub fn step_x(&mut self, dx: i32) {
        self.cell_x = (self.cell_x + dx.signum()).clamp(-1, self.board.columns);
    }

    pub fn step_y(&mut self, dy: i32) {
        self.cell_y = (self.cell_y + dy.signum()).clamp(-1, self.board.rows);
    }

    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.step_x(dx);
        self.step_y(dy);
    }

    /// Takes over the cell `leader` just left. On a wrapping board a jump of
    /// `n - 1` cells means the leader crossed the seam, so this segment enters
    /// the cell just past its own edge and slides through the seam instead.
    pub fn follow(&mut self, leader: Position, wrapping: bool) {
        self.cell_x = follow_axis(self.cell_x, leader.x, self.board.columns, wrapping);
        self.cell_y = follow_axis(self.cell_y, leader.y, self.board.rows, wrapping);
    }

    /// Cell clamped onto the board.
    pub fn grid_position(&self) -> Position {
        Position::new(
            self.cell_x.clamp(0, self.board.columns - 1),
            self.cell_y.clamp(0, self.board.rows - 1),
        )
    }

    /// Cell this segment settles on once any pending wrap resolves.
    pub fn wrapped_position(&self) -> Position {
        Position::new(
            self.cell_x.rem_euclid(self.board.columns),
            self.cell_y.rem_euclid(self.board.rows),
        )
    }

    pub fn is_off_board(&self) -> bool {
        !self.board.contains(Position::new(self.cell_x, self.cell_y))
    }

    /// Same cell, including a pending wrap.
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.cell_x == other.cell_x && self.cell_y == other.cell_y
    }

    /// Whether stepping in `direction` would land on `other`.
    ///
    /// Per axis, coordinates count as touching when equal, `n - 1` apart, or more
    /// than two apart; the last two catch neighbours across the seam.
    pub fn would_step_onto(&self, other: &Segment, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let touching = |a: i32, b: i32, n: i32| {
            let gap = (a - b).abs();
            gap == 0 || gap == n - 1 || gap > 2
        };
        touching(self.cell_x + dx, other.cell_x, self.board.columns)
            && touching(self.cell_y + dy, other.cell_y, self.board.rows)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(0.0, 1.0);
    }

    #[cfg(test)]
    pub(crate) fn shadow(&self) -> Option<&Quad> {
        self.shadow.as_ref()
    }

    fn extent(&self) -> Vec2 {
        Vec2::new(self.board.cell_width(), self.board.cell_height()) * self.size
    }

    /// Drawn top-left corner the segment settles at: its cell, centred for its size.
    pub fn target(&self) -> Vec2 {
        let cell = Vec2::new(self.board.cell_width(), self.board.cell_height());
        let offset = (cell - cell * self.size) * 0.5;
        Vec2::new(self.cell_x as f32 * cell.x, self.cell_y as f32 * cell.y) + offset
    }

    /// Eases toward the target by `elapsed_ms * speed` per axis without overshooting.
    pub fn move_toward_target(&mut self, elapsed_ms: f32) {
        let target = self.target();
        let reach = elapsed_ms * self.speed;
        self.position.x = approach(self.position.x, target.x, reach);
        self.position.y = approach(self.position.y, target.y, reach);
        self.apply_wrap_shadow();
        self.snap();
    }

    /// Jumps straight to the target, dropping any animation lag.
    pub fn correct_position(&mut self) {
        self.position = self.target();
        self.apply_wrap_shadow();
        self.snap();
    }

    fn snap(&mut self) {
        let target = self.target();
        if (target.x - self.position.x).abs() < SNAP_PRECISION {
            self.position.x = target.x;
        }
        if (target.y - self.position.y).abs() < SNAP_PRECISION {
            self.position.y = target.y;
        }
    }

    /// Keeps the seam consistent: once the drawn square has fully left one edge the
    /// cell wraps to the opposite side, and while it straddles an edge a shadow copy
    /// is drawn one canvas width (or height) away.
    pub fn apply_wrap_shadow(&mut self) {
        let extent = self.extent();
        let canvas = Vec2::new(self.board.width, self.board.height);
        let inside = |p: f32, span: f32, e: f32| p >= 0.0 && p <= span - e;

        if inside(self.position.x, canvas.x, extent.x) && inside(self.position.y, canvas.y, extent.y)
        {
            self.shadow = None;
            return;
        }

        if self.position.y + extent.y - SNAP_PRECISION < 0.0 {
            self.cell_y = self.board.rows - 1;
            self.position.y = self.target().y;
        } else if self.position.y + SNAP_PRECISION > canvas.y {
            self.cell_y = 0;
            self.position.y = self.target().y;
        }
        if self.position.x + extent.x - SNAP_PRECISION < 0.0 {
            self.cell_x = self.board.columns - 1;
            self.position.x = self.target().x;
        } else if self.position.x + SNAP_PRECISION > canvas.x {
            self.cell_x = 0;
            self.position.x = self.target().x;
        }

        let cell = Vec2::new(self.board.cell_width(), self.board.cell_height());
        let mirror = |p: f32, span: f32, cell: f32| {
            if p < 0.0 {
                p + span
            } else if p > span - cell {
                p - span
            } else {
                p
            }
        };
        let origin = Vec2::new(
            mirror(self.position.x, canvas.x, cell.x),
            mirror(self.position.y, canvas.y, cell.y),
        );
        self.shadow = Some(Quad::new(origin, extent, self.color));
    }

    fn primary(&self) -> Quad {
        Quad::new(self.position, self.extent(), self.color)
    }
}

fn follow_axis(current: i32, leader: i32, n: i32, wrapping: bool) -> i32 {
    if wrapping && current - leader == n - 1 {
        n
    } else if wrapping && leader - current == n - 1 {
        -1
    } else {
        leader.clamp(0, n - 1)
    }
}

fn approach(current: f32, target: f32, reach: f32) -> f32 {
    if target > current {
        (current + reach).min(target)
    } else if target < current {
        (current - reach).max(target)
    } else {
        current
    }
}

impl Drawable for Segment {
    fn append_vertices(&self, out: &mut Vec<f32>) {
        self.primary().append_vertices(out);
        if let Some(shadow) = &self.shadow {
            shadow.append_vertices(out);
        }
    }

    fn shapes(&self) -> usize {
        if self.shadow.is_some() { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SNAKE_COLOR;
    use crate::rendering::BASE_STRIDE;

    fn board() -> Board {
        Board {
            width: 120.0,
            height: 120.0,
            columns: 12,
            rows: 12,
        }
    }

    fn resting(x: i32, y: i32) -> Segment {
        let mut segment = Segment::new(board(), 100.0, Position::new(x, y), SNAKE_COLOR);
        segment.set_size(1.0);
        segment.correct_position();
        segment
    }

    #[test]
    fn chase_speed_keeps_every_bucket() {
        assert_eq!(chase_speed(1.0), 0.0);
        assert_eq!(chase_speed(3.0), FALLBACK_CHASE_SPEED);
        assert_eq!(chase_speed(5.0), 0.4);
        assert_eq!(chase_speed(15.0), 0.3);
        assert_eq!(chase_speed(30.0), FALLBACK_CHASE_SPEED);
        assert_eq!(chase_speed(45.0), 0.29);
        assert_eq!(chase_speed(100.0), 0.31);
        assert_eq!(chase_speed(450.0), 0.21);
        assert_eq!(chase_speed(1500.0), 0.17);
        assert_eq!(chase_speed(5000.0), FALLBACK_CHASE_SPEED);
    }

    #[test]
    fn grid_setters_clamp_to_board() {
        let mut segment = resting(0, 0);
        for (value, expected) in [(-5, 0), (-1, 0), (0, 0), (7, 7), (11, 11), (12, 11), (99, 11)] {
            segment.set_grid_x(value);
            segment.set_grid_y(value);
            assert_eq!(segment.grid_position(), Position::new(expected, expected));
            assert!(!segment.is_off_board());
        }
    }

    #[test]
    fn steps_may_leave_board_by_one() {
        let mut segment = resting(0, 11);
        segment.step_x(-1);
        segment.step_y(1);
        assert!(segment.is_off_board());
        assert_eq!(segment.grid_position(), Position::new(0, 11));

        segment.step_x(-1);
        assert_eq!(segment.target().x, -10.0);
    }

    #[test]
    fn target_centres_smaller_segments() {
        let mut segment = resting(2, 3);
        segment.set_size(0.5);
        assert_eq!(segment.target(), Vec2::new(22.5, 32.5));
    }

    #[test]
    fn eases_without_overshooting_then_snaps() {
        let mut segment = resting(2, 2);
        segment.step(Direction::Right);

        segment.move_toward_target(10.0);
        assert!((segment.position().x - 23.1).abs() < 1e-4);
        assert_eq!(segment.position().y, 20.0);

        // 0.31 px/ms * 30 ms = 9.3 px, past the target
        segment.move_toward_target(30.0);
        assert_eq!(segment.position(), Vec2::new(30.0, 20.0));
    }

    #[test]
    fn snaps_inside_precision_band() {
        let mut segment = resting(2, 2);
        segment.step(Direction::Down);
        // 9.3 px after 30 ms leaves 0.7 px, inside the band
        segment.move_toward_target(30.0);
        assert_eq!(segment.position(), segment.target());
    }

    #[test]
    fn wrap_left_draws_shadow_on_right_edge() {
        let mut segment = resting(0, 5);
        segment.step(Direction::Left);
        segment.move_toward_target(10.0);

        let primary = segment.position();
        assert!(primary.x < 0.0);
        let shadow = segment.shadow().expect("shadow while straddling the seam");
        assert_eq!(shadow.origin.x, primary.x + 120.0);
        assert_eq!(shadow.origin.y, primary.y);
        assert_eq!(segment.shapes(), 2);
        assert_eq!(segment.vertices().len(), 2 * 6 * BASE_STRIDE);

        // Finish leaving the left edge: the cell wraps and the shadow goes on the next frame.
        segment.move_toward_target(100.0);
        assert_eq!(segment.grid_position(), Position::new(11, 5));
        assert!(!segment.is_off_board());
        assert!(segment.position().x >= 0.0);
        segment.move_toward_target(16.0);
        assert!(segment.shadow().is_none());
        assert_eq!(segment.shapes(), 1);
    }

    #[test]
    fn wrap_down_mirrors_vertically() {
        let mut segment = resting(4, 11);
        segment.step(Direction::Down);
        segment.move_toward_target(10.0);

        let primary = segment.position();
        let shadow = segment.shadow().expect("shadow while straddling the seam");
        assert!(primary.y > 110.0);
        assert_eq!(shadow.origin.y, primary.y - 120.0);
        assert_eq!(shadow.origin.x, primary.x);
    }

    #[test]
    fn correcting_a_wrapped_cell_lands_on_the_other_side() {
        let mut segment = resting(11, 3);
        segment.step(Direction::Right);
        segment.correct_position();
        assert_eq!(segment.grid_position(), Position::new(0, 3));
        assert!(!segment.is_off_board());
        assert_eq!(segment.position(), Vec2::new(0.0, 30.0));
    }

    #[test]
    fn follow_slides_through_the_seam() {
        let mut segment = resting(11, 4);
        segment.follow(Position::new(0, 4), true);
        assert!(segment.is_off_board());
        assert_eq!(segment.target().x, 120.0);

        let mut segment = resting(0, 4);
        segment.follow(Position::new(11, 4), true);
        assert_eq!(segment.target().x, -10.0);

        let mut segment = resting(11, 4);
        segment.follow(Position::new(0, 4), false);
        assert_eq!(segment.grid_position(), Position::new(0, 4));
        assert!(!segment.is_off_board());

        let mut segment = resting(6, 4);
        segment.follow(Position::new(6, 5), true);
        assert_eq!(segment.grid_position(), Position::new(6, 5));
    }

    #[test]
    fn pending_wrap_resolves_to_opposite_edge() {
        let mut segment = resting(0, 4);
        segment.step(Direction::Left);
        assert_eq!(segment.grid_position(), Position::new(0, 4));
        assert_eq!(segment.wrapped_position(), Position::new(11, 4));

        let mut segment = resting(7, 11);
        segment.step(Direction::Down);
        assert_eq!(segment.wrapped_position(), Position::new(7, 0));
        assert_eq!(resting(3, 5).wrapped_position(), Position::new(3, 5));
    }

    #[test]
    fn resting_segment_has_no_shadow() {
        for (x, y) in [(0, 0), (11, 11), (5, 0), (0, 7)] {
            let segment = resting(x, y);
            assert!(segment.shadow().is_none(), "shadow at ({x}, {y})");
        }
    }

    #[test]
    fn step_onto_neighbour_is_detected() {
        let head = resting(5, 5);
        let neck = resting(4, 5);
        assert!(head.would_step_onto(&neck, Direction::Left));
        assert!(!head.would_step_onto(&neck, Direction::Up));
        assert!(!head.would_step_onto(&neck, Direction::Down));
    }

    #[test]
    fn step_onto_neighbour_across_seam() {
        let head = resting(0, 5);
        let neck = resting(11, 5);
        assert!(head.would_step_onto(&neck, Direction::Left));
        assert!(!head.would_step_onto(&neck, Direction::Up));

        let head = resting(11, 5);
        let neck = resting(0, 5);
        assert!(head.would_step_onto(&neck, Direction::Right));
        assert!(!head.would_step_onto(&neck, Direction::Down));

        let head = resting(3, 0);
        let neck = resting(3, 11);
        assert!(head.would_step_onto(&neck, Direction::Up));
        assert!(!head.would_step_onto(&neck, Direction::Left));
    }
}
