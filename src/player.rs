use crate::config::*;
use crate::geometry::Rect;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

/// The player's car. Moves one fixed step per key press and never leaves the
/// road.
pub struct Player {
    rect: Rect,
}

impl Player {
    pub fn new() -> Self {
        let (x, y) = PLAYER_START;
        Player { rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT) }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Returns whether the car actually moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        let rect = &mut self.rect;

        let (allowed, dx, dy) = match direction {
            Up => (rect.y > 0, 0, -PLAYER_STEP_Y),
            Down => (rect.y < PLAYER_MAX_Y, 0, PLAYER_STEP_Y),
            Left => (rect.x > 0, -PLAYER_STEP_X, 0),
            Right => (rect.x < PLAYER_MAX_X, PLAYER_STEP_X, 0),
        };

        if allowed {
            rect.x += dx;
            rect.y += dy;
        }

        allowed
    }
}
