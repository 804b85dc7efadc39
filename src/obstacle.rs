use log::trace;
use rand::Rng;

use crate::config::*;
use crate::geometry::Rect;
use crate::sprite::Sprite;

/// A set of falling cars sharing one sprite. Every member moves and respawns
/// on its own.
pub struct ObstacleGroup {
    rects: Vec<Rect>,
    sprite: Sprite,
}

impl ObstacleGroup {
    /// Scatters `count` obstacles over the screen.
    pub fn spawn<R: Rng>(rng: &mut R, sprite: Sprite, count: usize) -> Self {
        let rects = (0..count)
            .map(|_| Rect::new(
                rng.gen_range(0..SCREEN_WIDTH - OBSTACLE_SPAWN_MARGIN),
                rng.gen_range(0..SCREEN_HEIGHT),
                OBSTACLE_WIDTH,
                OBSTACLE_HEIGHT,
            ))
            .collect();

        Self::with_rects(rects, sprite)
    }

    pub fn with_rects(rects: Vec<Rect>, sprite: Sprite) -> Self {
        ObstacleGroup { rects, sprite }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    /// Moves every member down one frame's worth. Anything that fell past the
    /// bottom edge reappears at the top in a fresh random lane.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for rect in self.rects.iter_mut() {
            rect.y += OBSTACLE_SPEED;

            if rect.y > SCREEN_HEIGHT {
                rect.y = 0;
                rect.x = rng.gen_range(0..SCREEN_WIDTH - rect.w);
                trace!("{} respawned at x={}", self.sprite.name, rect.x);
            }
        }
    }

    /// First member overlapping `target`, if any.
    pub fn hit(&self, target: &Rect) -> Option<&Rect> {
        self.rects.iter().find(|rect| rect.collides(target))
    }
}
