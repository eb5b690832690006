use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{AnchorSpec, CameraSettings, Layout};

type Events = Rc<RefCell<Vec<String>>>;

struct RecordingSink {
    events: Events,
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, frame: &FrameView<'_>) {
        assert_eq!(frame.transforms.len(), frame.body_count * TRANSFORM_STRIDE);
        self.events.borrow_mut().push(format!("draw {} {}", frame.frame, frame.body_count));
    }

    fn resize(&mut self, width: u32, height: u32, aspect: f32) {
        self.events.borrow_mut().push(format!("resize {width}x{height} {aspect:.2}"));
    }

    fn release(&mut self) {
        self.events.borrow_mut().push("release".to_string());
    }
}

struct RecordingScheduler {
    events: Events,
}

impl FrameScheduler for RecordingScheduler {
    fn cancel(&mut self) {
        self.events.borrow_mut().push("cancel".to_string());
    }
}

struct RecordingInput {
    events: Events,
}

impl InputSubscription for RecordingInput {
    fn unsubscribe(&mut self) {
        self.events.borrow_mut().push("unsubscribe".to_string());
    }
}

fn events() -> Events {
    Rc::new(RefCell::new(Vec::new()))
}

fn attach_all(scene: &mut SceneCore, events: &Events) {
    scene.attach(
        Box::new(RecordingSink { events: events.clone() }),
        Box::new(RecordingScheduler { events: events.clone() }),
        Box::new(RecordingInput { events: events.clone() }),
    );
}

/// Hero tuning, custom anchors, camera on +z looking at the origin
fn scene_with(anchors: Vec<AnchorSpec>) -> SceneCore {
    let settings = SceneSettings {
        camera: CameraSettings {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            ..CameraSettings::default()
        },
        layout: Layout::Fixed { anchors },
        ..SceneSettings::hero()
    };
    let mut scene = SceneCore::with_settings(settings, 100, 100).unwrap();
    scene.load_template(MeshTemplate::sphere(0.5)).unwrap();
    scene
}

#[test]
fn empty_scene_still_ticks_and_draws() {
    let log = events();
    let mut scene = SceneCore::new(800, 600);
    scene.attach_renderer(Box::new(RecordingSink { events: log.clone() }));

    assert!(scene.tick(16.0));
    assert!(scene.tick(32.0));

    assert_eq!(scene.body_count(), 0);
    assert_eq!(scene.frame(), 2);
    let draws: Vec<String> = log.borrow().iter().filter(|e| e.starts_with("draw")).cloned().collect();
    assert_eq!(draws, vec!["draw 0 0", "draw 1 0"]);
}

#[test]
fn hero_template_spawns_thirteen_bodies() {
    let mut scene = SceneCore::new(800, 600);
    assert_eq!(scene.load_template(MeshTemplate::sphere(1.0)), Ok(13));
    assert_eq!(scene.body_count(), 13);

    // One template per session
    assert!(scene.load_template(MeshTemplate::sphere(1.0)).is_err());
    assert_eq!(scene.body_count(), 13);
}

#[test]
fn bad_template_json_leaves_scene_empty_but_running() {
    let mut scene = SceneCore::new(800, 600);
    assert!(scene.load_template_json("{\"parts\": 3}").is_err());
    assert_eq!(scene.body_count(), 0);
    assert!(scene.is_live());
    assert!(scene.tick(16.0));

    // A good template can still follow
    let json = r#"{"parts":[{"offset":[0,0,0],"radius":1.0}]}"#;
    assert_eq!(scene.load_template_json(json), Ok(13));
}

#[test]
fn displaced_body_converges_to_anchor() {
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    scene.registry.bodies_mut()[0].position = Vec3::new(2.0, 0.0, 2.0);

    let mut last = (2.0f32, 2.0f32);
    for i in 1..=200 {
        scene.tick(i as f64 * 16.0);
        let p = scene.bodies()[0].position;
        assert!(p.x.abs() < last.0 && p.z.abs() < last.1, "tick {i}: {p:?}");
        assert!(p.y.abs() <= 0.15 + 1e-5);
        last = (p.x.abs(), p.z.abs());
    }
    assert!(last.0 < 1e-2 && last.1 < 1e-2);
}

#[test]
fn impulse_moves_body_then_decays_in_same_tick() {
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    let id = scene.bodies()[0].id();

    assert!(scene.apply_impulse(id, Vec3::new(0.1, 0.0, 0.0)));
    scene.tick(0.0);

    assert!((scene.bodies()[0].position.x - 0.1).abs() < 1e-6);
    let left = scene.impulse(id).unwrap();
    assert!((left.x - 0.098).abs() < 1e-6);
}

#[test]
fn small_impulse_expires() {
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    let id = scene.bodies()[0].id();

    scene.apply_impulse(id, Vec3::new(0.006, 0.0, 0.0));
    scene.tick(16.0);
    assert_eq!(scene.impulse_count(), 1);

    for i in 2..=20 {
        scene.tick(i as f64 * 16.0);
    }
    assert_eq!(scene.impulse_count(), 0);
    assert_eq!(scene.impulse(id), None);
}

#[test]
fn apply_impulse_rejects_unknown_body_and_bad_force() {
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    let id = scene.bodies()[0].id();
    assert!(!scene.apply_impulse(id + 100, Vec3::X));
    assert!(!scene.apply_impulse(id, Vec3::new(f32::NAN, 0.0, 0.0)));
    assert_eq!(scene.impulse_count(), 0);
}

#[test]
fn overlapping_bodies_are_pushed_apart_in_tick() {
    let anchors = vec![AnchorSpec::sized(0.0, 0.0, 0.0, 0.6), AnchorSpec::sized(0.5, 0.0, 0.0, 0.6)];
    let mut scene = scene_with(anchors.clone());
    scene.enable_perf_metrics(true);
    scene.tick(0.0);

    let a = scene.bodies()[0].position;
    let b = scene.bodies()[1].position;
    assert!(a.x < 0.0);
    assert!(b.x > 0.5);
    assert_eq!(scene.get_perf_stats().overlaps(), 1);

    // Same setup without the pass: x never moves
    let mut calm = scene_with(anchors);
    calm.settings.collisions_enabled = false;
    calm.tick(0.0);
    assert_eq!(calm.bodies()[0].position.x, 0.0);
    assert_eq!(calm.bodies()[1].position.x, 0.5);
}

#[test]
fn pointer_sweep_over_body_creates_impulse() {
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    let id = scene.bodies()[0].id();
    scene.enable_perf_metrics(true);

    // First sample has no movement to push with
    assert!(!scene.pointer_move(47.0, 50.0, None));
    assert!(scene.pointer_move(50.0, 46.0, None));

    let force = scene.impulse(id).unwrap();
    assert!((force - Vec3::new(0.6, 0.8, 0.0) * 0.12).length() < 1e-5);

    scene.tick(16.0);
    assert_eq!(scene.get_perf_stats().pick_hits(), 2);
    scene.tick(32.0);
    assert_eq!(scene.get_perf_stats().pick_hits(), 0);
}

#[test]
fn pointer_outside_container_is_ignored() {
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    let bounds = ViewportRect::new(0.0, 0.0, 100.0, 100.0);

    scene.pointer_move(47.0, 50.0, Some(bounds));
    assert!(!scene.pointer_move(400.0, 400.0, Some(bounds)));
    assert_eq!(scene.picker.previous(), Some((47.0, 50.0)));
    assert_eq!(scene.impulse_count(), 0);
}

#[test]
fn teardown_releases_handles_once_in_order() {
    let log = events();
    let mut scene = scene_with(vec![AnchorSpec::at(0.0, 0.0, 0.0)]);
    attach_all(&mut scene, &log);
    scene.tick(16.0);
    log.borrow_mut().clear();

    assert!(scene.teardown());
    assert_eq!(*log.borrow(), vec!["cancel", "unsubscribe", "release"]);
    assert!(!scene.is_live());
    assert_eq!(scene.body_count(), 0);
    assert_eq!(scene.impulse_count(), 0);

    assert!(!scene.teardown());
    drop(scene);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn dropping_a_live_scene_tears_it_down() {
    let log = events();
    let mut scene = SceneCore::new(100, 100);
    attach_all(&mut scene, &log);
    log.borrow_mut().clear();

    drop(scene);
    assert_eq!(*log.borrow(), vec!["cancel", "unsubscribe", "release"]);
}

#[test]
fn calls_after_teardown_are_noops() {
    let log = events();
    let mut scene = SceneCore::new(100, 100);
    scene.attach_renderer(Box::new(RecordingSink { events: log.clone() }));
    scene.teardown();
    log.borrow_mut().clear();

    assert!(!scene.tick(16.0));
    assert!(!scene.pointer_move(50.0, 50.0, None));
    scene.resize(300, 200);
    assert_eq!(scene.viewport_size(), (100, 100));
    assert_eq!(scene.frame(), 0);
    assert!(log.borrow().is_empty());

    // Late asset is dropped
    assert_eq!(scene.load_template(MeshTemplate::sphere(1.0)), Ok(0));
    assert_eq!(scene.body_count(), 0);
}

#[test]
fn handles_attached_after_teardown_are_released_immediately() {
    let log = events();
    let mut scene = SceneCore::new(100, 100);
    scene.teardown();

    attach_all(&mut scene, &log);
    assert_eq!(*log.borrow(), vec!["release", "cancel", "unsubscribe"]);
    assert!(!scene.tick(16.0));
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn replaced_renderer_is_released() {
    let first = events();
    let second = events();
    let mut scene = SceneCore::new(100, 100);
    scene.attach_renderer(Box::new(RecordingSink { events: first.clone() }));
    scene.attach_renderer(Box::new(RecordingSink { events: second.clone() }));

    assert_eq!(first.borrow().last().map(String::as_str), Some("release"));
    scene.tick(16.0);
    assert_eq!(second.borrow().last().map(String::as_str), Some("draw 0 0"));
}

#[test]
fn resize_updates_camera_and_renderer() {
    let log = events();
    let mut scene = SceneCore::new(100, 100);
    scene.attach_renderer(Box::new(RecordingSink { events: log.clone() }));
    scene.resize(200, 100);

    assert_eq!(scene.viewport_size(), (200, 100));
    assert!((scene.camera().aspect - 2.0).abs() < 1e-6);
    assert_eq!(*log.borrow(), vec!["resize 100x100 1.00", "resize 200x100 2.00"]);
}

#[test]
fn zero_height_resize_keeps_aspect() {
    let mut scene = SceneCore::new(200, 100);
    scene.resize(200, 0);
    assert_eq!(scene.viewport_size(), (200, 0));
    assert!((scene.camera().aspect - 2.0).abs() < 1e-6);

    // Picking against an empty viewport never hits
    scene.load_template(MeshTemplate::sphere(1.0)).unwrap();
    assert!(!scene.pointer_move(0.0, 0.0, None));
    assert!(scene.tick(16.0));
}

#[test]
fn breathing_clock_never_runs_backwards() {
    let mut scene = SceneCore::new(100, 100);
    scene.tick(1000.0);
    assert!((scene.time() - 1.2).abs() < 1e-9);

    scene.tick(500.0);
    assert!((scene.time() - 1.2).abs() < 1e-9);

    scene.tick(f64::NAN);
    assert!((scene.time() - 1.2).abs() < 1e-9);

    scene.tick(2000.0);
    assert!((scene.time() - 2.4).abs() < 1e-9);
}

#[test]
fn overflowing_clock_is_dropped_and_bodies_stay_finite() {
    let settings = SceneSettings { time_scale: 1e300, ..SceneSettings::hero() };
    let mut scene = SceneCore::with_settings(settings, 100, 100).unwrap();
    scene.load_template(MeshTemplate::sphere(1.0)).unwrap();

    scene.tick(1.7e12);
    assert!(scene.time().is_finite());
    assert!(scene.bodies().iter().all(|b| b.position.is_finite()));

    // Small wall times still advance it
    scene.tick(1.0);
    assert_eq!(scene.time(), 1e300);
    assert!(scene.bodies().iter().all(|b| b.position.is_finite()));
}

#[test]
fn non_finite_phase_settings_are_refused() {
    let settings = SceneSettings { phase_step: f32::INFINITY, ..SceneSettings::hero() };
    assert!(SceneCore::with_settings(settings, 100, 100).is_err());
}

#[test]
fn transform_buffer_packs_position_rotation_scale() {
    let mut scene = SceneCore::new(800, 600);
    scene.load_template(MeshTemplate::sphere(1.0)).unwrap();
    scene.tick(16.0);

    assert_eq!(scene.transforms_len(), 13 * TRANSFORM_STRIDE);
    let settings = scene.settings().clone();
    for (i, body) in scene.bodies().iter().enumerate() {
        let t = &scene.transforms()[i * TRANSFORM_STRIDE..(i + 1) * TRANSFORM_STRIDE];
        let p = body.position;
        assert_eq!(&t[..3], &[p.x, p.y, p.z]);

        let r = settings.rotation_base + settings.rotation_step * i as f32;
        assert!((Vec3::new(t[3], t[4], t[5]) - r).length() < 1e-6);
        assert!((t[6] - 1.07).abs() < 1e-6);
    }
}

#[test]
fn perf_stats_fill_while_enabled_and_reset_when_disabled() {
    let mut scene = SceneCore::new(800, 600);
    scene.load_template(MeshTemplate::sphere(1.0)).unwrap();
    scene.tick(16.0);
    assert_eq!(scene.get_perf_stats().bodies(), 0);

    scene.enable_perf_metrics(true);
    scene.tick(32.0);
    let stats = scene.get_perf_stats();
    assert_eq!(stats.bodies(), 13);
    assert!(stats.tick_ms() >= 0.0);

    scene.enable_perf_metrics(false);
    assert_eq!(scene.get_perf_stats().bodies(), 0);
}

#[test]
fn presets_build_distinct_scenes() {
    for name in crate::domain::settings::PRESET_NAMES {
        let settings = SceneSettings::preset(name).unwrap();
        let expected = settings.layout.len();
        let mut scene = SceneCore::with_settings(settings, 640, 480).unwrap();
        assert_eq!(scene.load_template(MeshTemplate::sphere(0.5)), Ok(expected), "{name}");
        assert!(scene.tick(16.0));
    }
}
