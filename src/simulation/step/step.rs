use crate::systems::collision::resolve_pairs;

use super::render_extract::{draw, extract_transforms};
use super::{PerfTimer, SceneCore};

pub(super) fn tick(scene: &mut SceneCore, now_ms: f64) -> bool {
    // Live guard: a frame callback already in flight when teardown ran
    // must not touch released handles.
    if !scene.live {
        return false;
    }

    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.bodies = scene.registry.len() as u32;
        scene.perf_stats.pick_hits = scene.pending_pick_hits;
    }
    scene.pending_pick_hits = 0;
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut lap = tick_start;

    advance_clock(scene, now_ms);

    // === IDLE BLEND + IMPULSES ===
    integrate_bodies(scene);
    if let Some(lap) = lap.as_mut() {
        scene.perf_stats.idle_ms = lap.lap_ms();
    }

    // === COLLISIONS ===
    // One relaxation pass; residual overlap is worked off over later frames.
    if scene.settings.collisions_enabled {
        let overlaps = resolve_pairs(scene.registry.bodies_mut(), scene.settings.push_fraction);
        if let Some(lap) = lap.as_mut() {
            scene.perf_stats.overlaps = overlaps;
            scene.perf_stats.collision_ms = lap.lap_ms();
        }
    }

    // === RENDER HANDOFF ===
    // Runs with zero bodies too: the loop never waits for the asset.
    extract_transforms(scene);
    draw(scene);

    if let (Some(lap), Some(start)) = (lap.as_mut(), tick_start) {
        scene.perf_stats.render_ms = lap.lap_ms();
        scene.perf_stats.impulses = scene.impulses.len() as u32;
        scene.perf_stats.tick_ms = start.elapsed_ms();
    }

    scene.frame += 1;
    true
}

/// Breathing clock from wall time. Never runs backwards and never leaves
/// the finite range.
fn advance_clock(scene: &mut SceneCore, now_ms: f64) {
    if !now_ms.is_finite() {
        return;
    }
    let t = now_ms * scene.settings.time_scale;
    if t.is_finite() && t > scene.time {
        scene.time = t;
    }
}

/// Blend every body towards its breathing target, add its live impulse,
/// then decay all impulses once.
fn integrate_bodies(scene: &mut SceneCore) {
    if scene.registry.is_empty() {
        return;
    }

    let t = scene.time;
    let float_strength = scene.settings.float_strength;
    let depth_strength = scene.settings.float_depth_strength;
    let lerp = scene.settings.lerp_factor;

    for body in scene.registry.bodies_mut() {
        let goal = body.idle_target(t, float_strength, depth_strength);
        body.position = body.position.lerp(goal, lerp);

        if let Some(force) = scene.impulses.get(body.id()) {
            body.position += force;
        }
    }

    scene.impulses.decay_step();
}
