// Desired velocity planning.

use glam::Vec2;
use repel_core::*;

fn report() -> ThreatReport {
    ThreatReport::default()
}

#[test]
fn cornered_always_targets_panic_speed() {
    let p = EvadeParams::default();
    for i in 0..=10 {
        let threat = i as f32 / 10.0;
        assert_eq!(target_speed(threat, true, &p), PANIC_SPEED);
    }
}

#[test]
fn calm_speed_rises_with_threat() {
    let p = EvadeParams::default();
    assert_eq!(target_speed(0.0, false, &p), BASE_SPEED);
    let full = target_speed(1.0, false, &p);
    let expected = BASE_SPEED + (PANIC_SPEED - BASE_SPEED) * THREAT_SPEED_SHARE;
    assert!((full - expected).abs() < 1e-3);
    assert!(full < PANIC_SPEED);
}

#[test]
fn nothing_nearby_means_no_motion() {
    let s = plan(&report(), &EvadeParams::default(), Vec2::X);
    assert_eq!(s.direction, Vec2::ZERO);
    assert_eq!(s.desired_velocity, Vec2::ZERO);
}

#[test]
fn flees_directly_away_from_pointer() {
    let r = ThreatReport {
        threat: 0.6,
        away: Vec2::new(-30.0, 40.0),
        dist: 50.0,
        ..report()
    };
    let p = EvadeParams::default();
    let s = plan(&r, &p, Vec2::X);
    assert!((s.direction - Vec2::new(-0.6, 0.8)).length() < 1e-5);
    assert!((s.desired_velocity.length() - target_speed(0.6, false, &p)).abs() < 1e-2);
}

#[test]
fn pointer_on_center_uses_fallback_direction() {
    let r = ThreatReport {
        threat: 1.0,
        away: Vec2::ZERO,
        dist: 0.0,
        ..report()
    };
    let s = plan(&r, &EvadeParams::default(), Vec2::NEG_Y);
    assert!((s.direction - Vec2::NEG_Y).length() < 1e-6);
}

#[test]
fn wall_push_points_inward() {
    let r = ThreatReport {
        near_left: 0.8,
        near_top: 0.0,
        ..report()
    };
    let s = plan(&r, &EvadeParams::default(), Vec2::X);
    assert!((s.direction - Vec2::X).length() < 1e-6);
    assert!((s.desired_velocity.length() - BASE_SPEED).abs() < 1e-2);

    let r = ThreatReport {
        near_bottom: 0.5,
        ..report()
    };
    let s = plan(&r, &EvadeParams::default(), Vec2::X);
    assert!((s.direction - Vec2::NEG_Y).length() < 1e-6);
}

#[test]
fn corner_pushes_diagonally_at_panic_speed() {
    let r = ThreatReport {
        near_right: 1.0,
        near_top: 1.0,
        corner_level: 2.0,
        cornered: true,
        ..report()
    };
    let s = plan(&r, &EvadeParams::default(), Vec2::X);
    assert!(s.direction.x < 0.0 && s.direction.y > 0.0);
    assert!((s.direction.length() - 1.0).abs() < 1e-5);
    assert!((s.desired_velocity.length() - PANIC_SPEED).abs() < 1e-2);
}

#[test]
fn pointer_and_wall_blend_before_renormalising() {
    // Pointer pushes toward the left wall; the wall pushes back right.
    let r = ThreatReport {
        threat: 1.0,
        away: Vec2::new(-10.0, 0.0),
        dist: 10.0,
        near_left: 1.0,
        ..report()
    };
    let s = plan(&r, &EvadeParams::default(), Vec2::X);
    // Away weight 0.85 + 0.15 = 1.0 beats wall weight 0.9, so it still heads left
    assert!(s.direction.x < 0.0);
    assert!((s.direction.length() - 1.0).abs() < 1e-5);
}

#[test]
fn wall_push_is_unit_or_zero() {
    assert_eq!(wall_push(&report()), Vec2::ZERO);
    let r = ThreatReport {
        near_left: 0.3,
        near_bottom: 0.9,
        ..report()
    };
    assert!((wall_push(&r).length() - 1.0).abs() < 1e-6);
}
