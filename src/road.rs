use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::Rect;

/// Two screen-sized road tiles stacked one above the other. They slide down
/// together and leapfrog each other, so the road looks endless.
pub struct ScrollPair {
    tiles: [Rect; 2],
    speed: f32,
    pending: f32,
}

impl ScrollPair {
    pub fn new(speed: f32) -> Self {
        ScrollPair {
            tiles: [
                Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
                Rect::new(0, -SCREEN_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT),
            ],
            speed,
            pending: 0.0,
        }
    }

    pub fn tiles(&self) -> &[Rect; 2] {
        &self.tiles
    }

    /// Adds one frame of movement. Only whole pixels are applied; the
    /// remainder carries over to the next frame.
    pub fn advance(&mut self) {
        self.pending += self.speed;
        if self.pending < 1.0 {
            return;
        }

        let pixels = self.pending.trunc();
        self.pending -= pixels;

        let [first, second] = &mut self.tiles;
        first.y += pixels as i32;
        second.y += pixels as i32;

        if first.y >= SCREEN_HEIGHT {
            first.y = second.y - SCREEN_HEIGHT;
        }
        if second.y >= SCREEN_HEIGHT {
            second.y = first.y - SCREEN_HEIGHT;
        }
    }
}
