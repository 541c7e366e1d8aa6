//! Screen-space geometry: the control's box and the region its anchor may
//! occupy. All values are CSS/logical pixels with +y pointing down.

use glam::Vec2;

/// Axis-aligned box as reported by the host (origin = top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// True when either side has no extent; such a box has no usable layout.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Inclusive point-in-box test.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.origin + self.size;
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }
}

/// Range the control's top-left anchor may occupy this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ViewportBounds {
    /// Bounds for a box of `size` inside `viewport`, keeping `margin` clear of
    /// every edge. When the box does not fit, `max` collapses onto `min`.
    pub fn new(viewport: Vec2, size: Vec2, margin: f32) -> Self {
        let min = Vec2::splat(margin);
        let max = (viewport - size - Vec2::splat(margin)).max(min);
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Unit vector toward the wall with the most room from `p`.
    /// Ties prefer +x, then -x, then +y.
    pub fn roomiest_direction(&self, p: Vec2) -> Vec2 {
        let candidates = [
            (self.max.x - p.x, Vec2::X),
            (p.x - self.min.x, Vec2::NEG_X),
            (self.max.y - p.y, Vec2::Y),
            (p.y - self.min.y, Vec2::NEG_Y),
        ];
        let mut best = candidates[0];
        for c in &candidates[1..] {
            if c.0 > best.0 {
                best = *c;
            }
        }
        best.1
    }
}

/// Normalise `v`, dividing a zero vector by 1 instead of 0.
#[inline]
pub fn norm_or_zero(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        v
    }
}
