use crate::geometry::ViewportBounds;
use crate::params::EvadeParams;
use glam::Vec2;

/// What the control perceives this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThreatReport {
    /// Pointer urgency in \[0, 1\]; 1 with the pointer on the centre.
    pub threat: f32,
    pub near_left: f32,
    pub near_right: f32,
    pub near_top: f32,
    pub near_bottom: f32,
    /// Horizontal plus vertical wall proximity, in \[0, 2\].
    pub corner_level: f32,
    pub cornered: bool,
    /// Control centre minus pointer.
    pub away: Vec2,
    /// Length of `away`.
    pub dist: f32,
}

impl ThreatReport {
    #[inline]
    pub fn near_horizontal(&self) -> f32 {
        self.near_left.max(self.near_right)
    }

    #[inline]
    pub fn near_vertical(&self) -> f32 {
        self.near_top.max(self.near_bottom)
    }
}

/// Normalised urgency for a pointer `dist` pixels from the centre.
#[inline]
pub fn threat_for_distance(dist: f32, proximity: f32) -> f32 {
    ((proximity - dist) / proximity).clamp(0.0, 1.0)
}

/// Normalised closeness to a wall `dist_to_side` pixels away.
#[inline]
pub fn wall_proximity(dist_to_side: f32, repel_dist: f32) -> f32 {
    ((repel_dist - dist_to_side) / repel_dist).clamp(0.0, 1.0)
}

pub fn analyze(
    position: Vec2,
    size: Vec2,
    pointer: Vec2,
    bounds: &ViewportBounds,
    params: &EvadeParams,
) -> ThreatReport {
    let center = position + size * 0.5;
    let away = center - pointer;
    let dist = away.length();
    let threat = threat_for_distance(dist, params.proximity);

    let repel = params.wall_repel_dist;
    let near_left = wall_proximity(position.x - bounds.min.x, repel);
    let near_right = wall_proximity(bounds.max.x - position.x, repel);
    let near_top = wall_proximity(position.y - bounds.min.y, repel);
    let near_bottom = wall_proximity(bounds.max.y - position.y, repel);

    let corner_level = (near_left.max(near_right) + near_top.max(near_bottom)).clamp(0.0, 2.0);

    ThreatReport {
        threat,
        near_left,
        near_right,
        near_top,
        near_bottom,
        corner_level,
        cornered: corner_level > params.corner_threshold,
        away,
        dist,
    }
}
