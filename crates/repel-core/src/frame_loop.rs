//! Per-frame driver: owns the agent, runs analyze → plan → integrate → scale
//! once per display refresh, and carries the mount/teardown lifecycle.
//!
//! The host supplies geometry through [`BoxProvider`] and pointer input
//! through the shared [`PointerCell`]. Front-ends call [`FrameLoop::tick`]
//! from their refresh callback and render the returned [`Frame`].

use crate::analyzer::analyze;
use crate::geometry::{Rect, ViewportBounds};
use crate::motion::{clamp_dt, integrate};
use crate::params::EvadeParams;
use crate::pointer::PointerCell;
use crate::scale::scale_for_distance;
use crate::state::{AgentState, Frame};
use crate::steering::plan;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Live geometry of the control and the surface it moves on.
pub trait BoxProvider {
    /// The control's current on-screen box, or `None` while it is not laid out.
    fn current_box(&self) -> Option<Rect>;
    /// Size of the surface the control is confined to.
    fn viewport_size(&self) -> Vec2;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// The loop is not running; nothing happened.
    Stopped,
    /// Geometry was unavailable; the agent was left untouched.
    Skipped,
    Stepped(Frame),
}

impl TickOutcome {
    pub fn frame(&self) -> Option<Frame> {
        match self {
            TickOutcome::Stepped(f) => Some(*f),
            _ => None,
        }
    }
}

pub struct FrameLoop<B: BoxProvider> {
    params: EvadeParams,
    provider: B,
    pointer: PointerCell,
    initial_position: Option<Vec2>,
    agent: Option<AgentState>,
    state: LoopState,
    was_cornered: bool,
}

impl<B: BoxProvider> FrameLoop<B> {
    pub fn new(params: EvadeParams, provider: B, initial_position: Option<Vec2>) -> Self {
        Self {
            params,
            provider,
            pointer: PointerCell::new(),
            initial_position,
            agent: None,
            state: LoopState::Stopped,
            was_cornered: false,
        }
    }

    /// Handle for the pointer listener; writes land in this loop's cell.
    pub fn pointer(&self) -> PointerCell {
        self.pointer.clone()
    }

    pub fn params(&self) -> &EvadeParams {
        &self.params
    }

    pub fn provider(&self) -> &B {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut B {
        &mut self.provider
    }

    pub fn agent(&self) -> Option<&AgentState> {
        self.agent.as_ref()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Mount: create fresh agent and pointer state and begin accepting ticks.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            log::warn!("[loop] start ignored; already running");
            return;
        }
        let agent = AgentState::spawn(self.initial_position, self.provider.viewport_size(), now);
        log::info!(
            "[loop] start at ({:.1},{:.1})",
            agent.position.x,
            agent.position.y
        );
        self.pointer.reset();
        self.agent = Some(agent);
        self.was_cornered = false;
        self.state = LoopState::Running;
    }

    /// Teardown: discard the agent. Ticks after this return `Stopped`.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = LoopState::Stopped;
        self.agent = None;
        log::info!("[loop] stopped");
    }

    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Stopped;
        }
        let Some(agent) = self.agent.as_mut() else {
            return TickOutcome::Stopped;
        };
        let Some(rect) = self.provider.current_box() else {
            log::trace!("[loop] no geometry; skipping tick");
            return TickOutcome::Skipped;
        };

        let elapsed = if now > agent.last_timestamp {
            now - agent.last_timestamp
        } else {
            Duration::ZERO
        };
        let dt = clamp_dt(elapsed, self.params.max_frame_dt);
        agent.last_timestamp = now;

        let size = rect.size;
        let bounds = ViewportBounds::new(
            self.provider.viewport_size(),
            size,
            self.params.wall_margin,
        );
        let report = analyze(
            agent.position,
            size,
            self.pointer.latest(),
            &bounds,
            &self.params,
        );
        let steering = plan(&report, &self.params, bounds.roomiest_direction(agent.position));
        let walls = integrate(
            agent,
            steering.desired_velocity,
            dt,
            report.cornered,
            &bounds,
            &self.params,
        );

        if report.cornered != self.was_cornered {
            log::debug!(
                "[loop] cornered={} level={:.2}",
                report.cornered,
                report.corner_level
            );
            self.was_cornered = report.cornered;
        }
        if walls.any() {
            log::trace!("[loop] wall contact {:?}", walls);
        }

        TickOutcome::Stepped(Frame {
            position: agent.position,
            velocity: agent.velocity,
            scale: scale_for_distance(report.dist, self.params.scale_radius, self.params.min_scale),
            threat: report.threat,
            cornered: report.cornered,
            walls,
        })
    }
}
