use crate::analyzer::ThreatReport;
use crate::geometry::norm_or_zero;
use crate::params::EvadeParams;
use glam::Vec2;

/// Desired motion for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    /// Unit direction, or zero when nothing pushes the control.
    pub direction: Vec2,
    pub target_speed: f32,
    pub desired_velocity: Vec2,
}

/// Speed the control aims for: panic speed when cornered, otherwise base
/// speed raised by part of the base..panic span in proportion to threat.
#[inline]
pub fn target_speed(threat: f32, cornered: bool, params: &EvadeParams) -> f32 {
    if cornered {
        params.panic_speed
    } else {
        params.base_speed
            + threat * (params.panic_speed - params.base_speed) * params.threat_speed_share
    }
}

/// Inward push from the nearest walls, unit length or zero.
#[inline]
pub fn wall_push(report: &ThreatReport) -> Vec2 {
    norm_or_zero(Vec2::new(
        report.near_left - report.near_right,
        report.near_top - report.near_bottom,
    ))
}

/// Blend pointer avoidance with wall avoidance into a desired velocity.
///
/// `fallback_away` is used as the flee direction when the pointer sits exactly
/// on the control centre and `away` carries no direction.
pub fn plan(report: &ThreatReport, params: &EvadeParams, fallback_away: Vec2) -> Steering {
    let speed = target_speed(report.threat, report.cornered, params);

    let mut dir = Vec2::ZERO;
    if report.threat > 0.0 {
        let away_dir = if report.dist > 0.0 {
            report.away / report.dist
        } else {
            norm_or_zero(fallback_away)
        };
        dir += away_dir * (params.away_weight_base + params.away_weight_threat * report.threat);
    }

    let wall_dir = wall_push(report);
    dir.x += wall_dir.x * params.wall_weight * report.near_horizontal();
    dir.y += wall_dir.y * params.wall_weight * report.near_vertical();

    let direction = norm_or_zero(dir);
    Steering {
        direction,
        target_speed: speed,
        desired_velocity: direction * speed,
    }
}
