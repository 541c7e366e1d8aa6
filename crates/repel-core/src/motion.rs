use crate::geometry::ViewportBounds;
use crate::params::EvadeParams;
use crate::state::AgentState;
use glam::Vec2;
use std::time::Duration;

/// Walls the control touched during the last integration step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Seconds to integrate for an `elapsed` wall-clock gap, capped at `max_dt`
/// so a stalled or backgrounded frame cannot launch the control.
#[inline]
pub fn clamp_dt(elapsed: Duration, max_dt: f32) -> f32 {
    elapsed.as_secs_f32().min(max_dt)
}

/// Advance `agent` by `dt` seconds toward `desired` velocity.
pub fn integrate(
    agent: &mut AgentState,
    desired: Vec2,
    dt: f32,
    cornered: bool,
    bounds: &ViewportBounds,
    params: &EvadeParams,
) -> WallContact {
    let blend = (params.damping_rate(cornered) * dt).clamp(0.0, 1.0);
    agent.velocity += (desired - agent.velocity) * blend;

    let next = agent.position + agent.velocity * dt;
    let x = clamp_axis(next.x, agent.velocity.x, bounds.min.x, bounds.max.x);
    let y = clamp_axis(next.y, agent.velocity.y, bounds.min.y, bounds.max.y);

    agent.position = Vec2::new(x.pos, y.pos);
    agent.velocity = Vec2::new(x.vel, y.vel);
    WallContact {
        left: x.hit_min,
        right: x.hit_max,
        top: y.hit_min,
        bottom: y.hit_max,
    }
}

struct AxisClamp {
    pos: f32,
    vel: f32,
    hit_min: bool,
    hit_max: bool,
}

// At a wall the velocity may only point back into the interior.
fn clamp_axis(pos: f32, vel: f32, min: f32, max: f32) -> AxisClamp {
    if pos <= min {
        AxisClamp {
            pos: min,
            vel: vel.max(0.0),
            hit_min: true,
            hit_max: false,
        }
    } else if pos >= max {
        AxisClamp {
            pos: max,
            vel: vel.min(0.0),
            hit_min: false,
            hit_max: true,
        }
    } else {
        AxisClamp {
            pos,
            vel,
            hit_min: false,
            hit_max: false,
        }
    }
}
