//! State types shared with the front-ends.
//!
//! These types avoid referencing platform-specific APIs and are usable on both
//! native and web targets. `AgentState` is the simulation state the frame loop
//! owns; `Frame` is the per-tick snapshot a renderer consumes.

use crate::constants::default_spawn_offset_vec2;
use crate::motion::WallContact;
use glam::Vec2;
use instant::Instant;

/// Kinematic state of the evading control.
#[derive(Clone, Debug)]
pub struct AgentState {
    /// Top-left anchor of the control's box.
    pub position: Vec2,
    pub velocity: Vec2,
    pub last_timestamp: Instant,
}

impl AgentState {
    pub fn new(position: Vec2, now: Instant) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            last_timestamp: now,
        }
    }

    /// Spawn at `initial`, or offset from the viewport centre when none is given.
    pub fn spawn(initial: Option<Vec2>, viewport: Vec2, now: Instant) -> Self {
        let position = initial.unwrap_or_else(|| default_spawn_position(viewport));
        Self::new(position, now)
    }
}

#[inline]
pub fn default_spawn_position(viewport: Vec2) -> Vec2 {
    viewport * 0.5 + default_spawn_offset_vec2()
}

/// What a renderer needs after one tick.
///
/// `scale` is visual only; geometry is always computed from the unscaled box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub velocity: Vec2,
    pub scale: f32,
    pub threat: f32,
    pub cornered: bool,
    /// Walls the anchor was clamped against this tick.
    pub walls: WallContact,
}
