//! Scene - the per-frame driver of the floating-shapes simulation
//!
//! The scene only orchestrates; the work lives in the systems:
//! - bodies/    owns the body set and the part -> body index
//! - impulse/   owns the decaying pointer forces
//! - picking/   turns pointer moves into impulses
//! - collision/ separates overlapping bodies
//!
//! One tick = idle blend -> impulse application and decay -> collision
//! pass -> render handoff, always in that order, always on one thread.

use crate::domain::{MeshTemplate, SceneSettings};
use crate::systems::bodies::{Body, BodyId, BodyRegistry};
use crate::systems::impulse::ImpulseTracker;
use crate::systems::picking::{Camera, PointerPicker, ViewportRect};
use crate::core::Vec3;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "lifecycle/handles.rs"]
mod handles;
#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Scene;
pub use handles::{FrameScheduler, FrameView, InputSubscription, RenderSink};
pub use perf_stats::PerfStats;
pub use render_extract::TRANSFORM_STRIDE;

use perf_timer::PerfTimer;

/// The simulated scene
pub struct SceneCore {
    settings: SceneSettings,
    registry: BodyRegistry,
    impulses: ImpulseTracker,
    picker: PointerPicker,
    camera: Camera,

    // Viewport (canvas) size in CSS pixels
    viewport_width: u32,
    viewport_height: u32,

    // State
    time: f64,
    frame: u64,
    live: bool,

    // Render handoff: TRANSFORM_STRIDE floats per body
    transforms: Vec<f32>,

    // Host handles, released exactly once at teardown
    sink: Option<Box<dyn RenderSink>>,
    scheduler: Option<Box<dyn FrameScheduler>>,
    subscription: Option<Box<dyn InputSubscription>>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
    pending_pick_hits: u32,
}

impl SceneCore {
    /// Hero preset at the given viewport size
    pub fn new(width: u32, height: u32) -> Self {
        init::create_scene_core(SceneSettings::hero(), width, height)
    }

    pub fn with_settings(settings: SceneSettings, width: u32, height: u32) -> Result<Self, String> {
        settings.validate()?;
        Ok(init::create_scene_core(settings, width, height))
    }

    pub fn settings(&self) -> &SceneSettings { &self.settings }

    pub fn camera(&self) -> &Camera { &self.camera }

    pub fn bodies(&self) -> &[Body] { self.registry.bodies() }

    pub fn body_count(&self) -> usize { self.registry.len() }

    pub fn impulse_count(&self) -> usize { self.impulses.len() }

    pub fn impulse(&self, id: BodyId) -> Option<Vec3> { self.impulses.get(id) }

    /// Breathing clock (scaled wall-clock time of the last tick)
    pub fn time(&self) -> f64 { self.time }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn is_live(&self) -> bool { self.live }

    pub fn viewport_size(&self) -> (u32, u32) { (self.viewport_width, self.viewport_height) }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ASSET ===

    /// Spawn one body per anchor from the loaded mesh. Runs once per session;
    /// a late arrival after teardown is dropped.
    pub fn load_template(&mut self, template: MeshTemplate) -> Result<usize, String> {
        commands::load_template(self, template)
    }

    pub fn load_template_json(&mut self, json: &str) -> Result<usize, String> {
        commands::load_template_json(self, json)
    }

    pub fn load_template_flat(&mut self, parts: &[f32]) -> Result<usize, String> {
        commands::load_template_flat(self, parts)
    }

    /// The host gave up on the asset; the scene keeps running empty
    pub fn asset_failed(&mut self, reason: &str) {
        commands::asset_failed(self, reason);
    }

    // === INPUT ===

    /// Pointer moved to client `(x, y)`. `bounds` is the rendering
    /// container; moves outside it are ignored. Without bounds the whole
    /// viewport is used and every move counts.
    ///
    /// Returns true when an impulse was applied.
    pub fn pointer_move(&mut self, x: f32, y: f32, bounds: Option<ViewportRect>) -> bool {
        commands::pointer_move(self, x, y, bounds)
    }

    /// Set the impulse of a body directly (overwrites)
    pub fn apply_impulse(&mut self, id: BodyId, force: Vec3) -> bool {
        commands::apply_impulse(self, id, force)
    }

    /// Container resized: camera aspect + renderer size, no physics effect
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height);
    }

    // === FRAME ===

    /// Run one frame at wall-clock `now_ms`. Returns false once torn down.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        step::tick(self, now_ms)
    }

    /// Packed per-body transforms from the last tick
    pub fn transforms(&self) -> &[f32] {
        &self.transforms
    }

    /// Pointer to the transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transforms.len()
    }

    // === LIFECYCLE ===

    /// Install all three host handles at once
    pub fn attach(
        &mut self,
        sink: Box<dyn RenderSink>,
        scheduler: Box<dyn FrameScheduler>,
        subscription: Box<dyn InputSubscription>,
    ) {
        self.attach_renderer(sink);
        self.attach_scheduler(scheduler);
        self.attach_input(subscription);
    }

    pub fn attach_renderer(&mut self, sink: Box<dyn RenderSink>) {
        lifecycle::attach_renderer(self, sink);
    }

    pub fn attach_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        lifecycle::attach_scheduler(self, scheduler);
    }

    pub fn attach_input(&mut self, subscription: Box<dyn InputSubscription>) {
        lifecycle::attach_input(self, subscription);
    }

    /// Stop scheduling, drop listeners, release the renderer (in that
    /// order). Returns false when the scene was already torn down.
    pub fn teardown(&mut self) -> bool {
        lifecycle::teardown(self)
    }
}

impl Drop for SceneCore {
    fn drop(&mut self) {
        lifecycle::teardown(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
