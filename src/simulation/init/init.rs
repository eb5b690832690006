use crate::domain::SceneSettings;
use crate::systems::bodies::BodyRegistry;
use crate::systems::impulse::ImpulseTracker;
use crate::systems::picking::{Camera, PointerPicker};

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn create_scene_core(settings: SceneSettings, width: u32, height: u32) -> SceneCore {
    SceneCore {
        registry: BodyRegistry::new(),
        impulses: ImpulseTracker::new(settings.decay_factor, settings.min_force),
        picker: PointerPicker::new(settings.impulse_strength, settings.impulse_mode),
        camera: Camera::from_settings(&settings.camera, width, height),
        viewport_width: width,
        viewport_height: height,
        time: 0.0,
        frame: 0,
        live: true,
        // Start with room for the largest preset; grows on demand.
        transforms: Vec::with_capacity(16 * super::TRANSFORM_STRIDE),
        sink: None,
        scheduler: None,
        subscription: None,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        pending_pick_hits: 0,
        settings,
    }
}
