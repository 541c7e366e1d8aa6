use glam::Vec2;

// Evasion tuning shared by the web and native front-ends.

// Pointer proximity
pub const PROXIMITY: f32 = 100.0; // pointer distance (px) at which threat starts rising
pub const SCALE_RADIUS: f32 = 120.0; // pointer distance (px) at which shrinking starts
pub const MIN_SCALE: f32 = 0.1; // smallest visual scale, label stays readable

// Speeds (px/s)
pub const BASE_SPEED: f32 = 600.0;
pub const PANIC_SPEED: f32 = 1000.0;
pub const THREAT_SPEED_SHARE: f32 = 0.55; // share of the base..panic span unlocked by full threat

// Walls
pub const WALL_MARGIN: f32 = 24.0; // gap kept between the control and the viewport edge
pub const WALL_REPEL_DIST: f32 = 150.0; // wall distance (px) at which wall push starts
pub const CORNER_THRESHOLD: f32 = 1.2; // corner level above which the control panics

// Direction blend weights
pub const AWAY_WEIGHT_BASE: f32 = 0.85;
pub const AWAY_WEIGHT_THREAT: f32 = 0.15;
pub const WALL_WEIGHT: f32 = 0.9;

// Velocity damping rates (1/s)
pub const DAMPING_CALM: f32 = 15.0;
pub const DAMPING_CORNERED: f32 = 25.0;

// Longest frame step (seconds) fed to the integrator after a stall
pub const MAX_FRAME_DT: f32 = 0.033;

// Pointer position before the first move event: far off-screen, so nothing reacts
pub const POINTER_SENTINEL: [f32; 2] = [-9999.0, -9999.0];

// Spawn offset from the viewport centre when no initial position is given
pub const DEFAULT_SPAWN_OFFSET: [f32; 2] = [100.0, 50.0];

#[inline]
pub fn pointer_sentinel_vec2() -> Vec2 {
    Vec2::from(POINTER_SENTINEL)
}

#[inline]
pub fn default_spawn_offset_vec2() -> Vec2 {
    Vec2::from(DEFAULT_SPAWN_OFFSET)
}
