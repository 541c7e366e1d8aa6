// Headless runs of the whole pipeline with synthetic geometry.

use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use repel_core::*;
use std::time::Duration;

const SIZE: Vec2 = Vec2::new(80.0, 50.0);
const FRAME: Duration = Duration::from_millis(16);

struct FakeSurface {
    size: Option<Vec2>,
    viewport: Vec2,
}

impl BoxProvider for FakeSurface {
    fn current_box(&self) -> Option<Rect> {
        self.size.map(|size| Rect {
            origin: Vec2::ZERO,
            size,
        })
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }
}

fn make_loop(viewport: Vec2, initial: Option<Vec2>) -> FrameLoop<FakeSurface> {
    FrameLoop::new(
        EvadeParams::default(),
        FakeSurface {
            size: Some(SIZE),
            viewport,
        },
        initial,
    )
}

fn center_of(pos: Vec2) -> Vec2 {
    pos + SIZE * 0.5
}

#[test]
fn lifecycle_start_and_stop() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), None);
    let t0 = Instant::now();
    assert_eq!(fl.state(), LoopState::Stopped);
    assert_eq!(fl.tick(t0), TickOutcome::Stopped);
    assert!(fl.agent().is_none());

    fl.start(t0);
    assert!(fl.is_running());
    assert!(fl.tick(t0 + FRAME).frame().is_some());

    fl.stop();
    assert_eq!(fl.state(), LoopState::Stopped);
    assert!(fl.agent().is_none());
    assert_eq!(fl.tick(t0 + FRAME * 2), TickOutcome::Stopped);
}

#[test]
fn default_spawn_is_offset_from_center() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), None);
    fl.start(Instant::now());
    let agent = fl.agent().expect("running loop has an agent");
    assert_eq!(agent.position, Vec2::new(740.0, 450.0));
    assert_eq!(agent.velocity, Vec2::ZERO);
}

#[test]
fn initial_position_is_honoured() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), Some(Vec2::new(300.0, 200.0)));
    fl.start(Instant::now());
    assert_eq!(fl.agent().map(|a| a.position), Some(Vec2::new(300.0, 200.0)));
}

#[test]
fn restart_discards_previous_pointer() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), None);
    let t0 = Instant::now();
    fl.start(t0);
    fl.pointer().record(10.0, 10.0);
    fl.stop();
    fl.start(t0);
    assert_eq!(fl.pointer().latest(), pointer_sentinel_vec2());
}

#[test]
fn missing_geometry_skips_without_mutation() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), Some(Vec2::new(600.0, 375.0)));
    let t0 = Instant::now();
    fl.start(t0);
    let pointer = fl.pointer();
    pointer.record(640.0, 400.0);
    fl.provider_mut().size = None;

    let before = fl.agent().cloned().expect("agent");
    for i in 1..=5 {
        assert_eq!(fl.tick(t0 + FRAME * i), TickOutcome::Skipped);
    }
    let after = fl.agent().cloned().expect("agent");
    assert_eq!(before.position, after.position);
    assert_eq!(before.velocity, after.velocity);
    assert_eq!(before.last_timestamp, after.last_timestamp);

    // Geometry comes back: the loop resumes on its own
    fl.provider_mut().size = Some(SIZE);
    let frame = fl.tick(t0 + FRAME * 6).frame().expect("stepped");
    assert!(frame.position != before.position);
}

#[test]
fn scenario_pointer_on_center_escapes() {
    let viewport = Vec2::new(1920.0, 1080.0);
    let start = Vec2::new(920.0, 515.0);
    let mut fl = make_loop(viewport, Some(start));
    let t0 = Instant::now();
    fl.start(t0);

    let pointer_at = center_of(start);
    fl.pointer().record(pointer_at.x, pointer_at.y);

    let mut last = None;
    for i in 1..=60 {
        last = fl.tick(t0 + FRAME * i).frame();
    }
    let frame = last.expect("stepped");
    let dist = center_of(frame.position).distance(pointer_at);
    assert!(dist > PROXIMITY, "only {dist} px away after 60 ticks");
}

#[test]
fn scenario_trapped_in_corner_panics_inward() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), Some(Vec2::new(10.0, 10.0)));
    let t0 = Instant::now();
    fl.start(t0);

    let frame = fl.tick(t0 + FRAME).frame().expect("stepped");
    assert!(frame.cornered);
    assert!(frame.velocity.x > 0.0);
    assert!(frame.velocity.y > 0.0);
    assert!(frame.position.x >= WALL_MARGIN && frame.position.y >= WALL_MARGIN);
}

#[test]
fn scenario_untouched_pointer_stays_put() {
    let start = Vec2::new(600.0, 375.0);
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), Some(start));
    let t0 = Instant::now();
    fl.start(t0);

    for i in 1..=120 {
        let frame = fl.tick(t0 + FRAME * i).frame().expect("stepped");
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.threat, 0.0);
        assert_eq!(frame.velocity, Vec2::ZERO);
        assert_eq!(frame.position, start);
    }
}

#[test]
fn scenario_viewport_shrink_relocates_inside() {
    let mut fl = make_loop(Vec2::new(1920.0, 1080.0), Some(Vec2::new(1700.0, 900.0)));
    let t0 = Instant::now();
    fl.start(t0);
    assert!(fl.tick(t0 + FRAME).frame().is_some());

    let small = Vec2::new(800.0, 600.0);
    fl.provider_mut().viewport = small;
    let frame = fl.tick(t0 + FRAME * 2).frame().expect("stepped");
    let bounds = ViewportBounds::new(small, SIZE, WALL_MARGIN);
    assert_eq!(frame.position, bounds.max);
    assert!(frame.velocity.x <= 0.0 && frame.velocity.y <= 0.0);
}

#[test]
fn long_stall_does_not_launch_the_control() {
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), Some(Vec2::new(600.0, 375.0)));
    let t0 = Instant::now();
    fl.start(t0);
    fl.pointer().record(630.0, 390.0);

    let frame = fl.tick(t0 + Duration::from_secs(30)).frame().expect("stepped");
    let max_step = PANIC_SPEED * MAX_FRAME_DT;
    assert!(frame.velocity.length() <= PANIC_SPEED + 1e-2);
    assert!(frame.position.distance(Vec2::new(600.0, 375.0)) <= max_step + 1e-2);
}

#[test]
fn clock_going_backwards_is_a_zero_step() {
    let start = Vec2::new(600.0, 375.0);
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), Some(start));
    let t0 = Instant::now() + Duration::from_secs(1);
    fl.start(t0);
    fl.pointer().record(640.0, 400.0);
    let frame = fl.tick(t0 - Duration::from_millis(500)).frame().expect("stepped");
    assert_eq!(frame.position, start);
    assert_eq!(frame.velocity, Vec2::ZERO);
}

#[test]
fn random_inputs_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut fl = make_loop(Vec2::new(1280.0, 800.0), None);
    let mut now = Instant::now();
    fl.start(now);
    let pointer = fl.pointer();

    for i in 0..5_000 {
        if i % 500 == 0 {
            let vp = Vec2::new(rng.gen_range(200.0..2000.0), rng.gen_range(150.0..1200.0));
            fl.provider_mut().viewport = vp;
        }
        if rng.gen::<f32>() < 0.7 {
            let vp = fl.provider().viewport;
            pointer.record(
                rng.gen_range(-50.0..vp.x + 50.0),
                rng.gen_range(-50.0..vp.y + 50.0),
            );
        }
        // Mostly frame-sized steps with the occasional multi-second stall
        let gap = if rng.gen::<f32>() < 0.02 {
            Duration::from_millis(rng.gen_range(500..10_000))
        } else {
            Duration::from_millis(rng.gen_range(1..40))
        };
        now += gap;

        let frame = fl.tick(now).frame().expect("stepped");
        let bounds = ViewportBounds::new(fl.provider().viewport, SIZE, WALL_MARGIN);
        assert!(
            bounds.contains(frame.position),
            "tick {i}: {:?} outside {:?}",
            frame.position,
            bounds
        );
        let speed = frame.velocity.length();
        assert!(speed <= PANIC_SPEED + 1e-2, "tick {i}: speed {speed}");
        assert!((MIN_SCALE..=1.0).contains(&frame.scale));
        if frame.position.x == bounds.min.x && bounds.min.x < bounds.max.x {
            assert!(frame.velocity.x >= 0.0);
        }
        if frame.position.x == bounds.max.x && bounds.min.x < bounds.max.x {
            assert!(frame.velocity.x <= 0.0);
        }
        if frame.position.y == bounds.min.y && bounds.min.y < bounds.max.y {
            assert!(frame.velocity.y >= 0.0);
        }
        if frame.position.y == bounds.max.y && bounds.min.y < bounds.max.y {
            assert!(frame.velocity.y <= 0.0);
        }
    }
}

#[test]
fn frame_reports_wall_contact() {
    let viewport = Vec2::new(1280.0, 800.0);
    let mut fl = make_loop(viewport, Some(Vec2::new(-200.0, 300.0)));
    let t0 = Instant::now();
    fl.start(t0);
    let frame = fl.tick(t0 + FRAME).frame().expect("stepped");
    assert_eq!(frame.position.x, WALL_MARGIN);
    assert!(frame.walls.left);
    assert!(!frame.walls.right && !frame.walls.top && !frame.walls.bottom);

    let mut open = make_loop(viewport, None);
    open.start(t0);
    let frame = open.tick(t0 + FRAME).frame().expect("stepped");
    assert!(!frame.walls.any());
}
