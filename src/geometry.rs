use crate::Coord;

/// Axis-aligned rectangle in playfield pixels, anchored at its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: Coord,
    pub y: Coord,
    pub w: Coord,
    pub h: Coord,
}

impl Rect {
    pub const fn new(x: Coord, y: Coord, w: Coord, h: Coord) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> Coord {
        self.x
    }

    pub fn right(&self) -> Coord {
        self.x + self.w
    }

    pub fn top(&self) -> Coord {
        self.y
    }

    pub fn bottom(&self) -> Coord {
        self.y + self.h
    }

    /// True iff the two boxes share a non-zero area. Touching edges don't count.
    pub fn collides(&self, other: &Rect) -> bool {
        !(self.bottom() <= other.top()
            || self.top() >= other.bottom()
            || self.right() <= other.left()
            || self.left() >= other.right())
    }

    /// Inclusive on every edge, which is what menu clicks want.
    pub fn contains(&self, (px, py): (Coord, Coord)) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }
}
