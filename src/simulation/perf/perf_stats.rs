use wasm_bindgen::prelude::*;

/// Snapshot of the last tick (only filled while perf metrics are enabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) idle_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) render_ms: f64,
    pub(super) bodies: u32,
    pub(super) impulses: u32,
    pub(super) overlaps: u32,
    pub(super) pick_hits: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Whole tick, render handoff included
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    /// Idle blend + impulse application and decay
    #[wasm_bindgen(getter)]
    pub fn idle_ms(&self) -> f64 { self.idle_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    /// Live impulses after decay
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    /// Overlapping pairs found by the collision pass
    #[wasm_bindgen(getter)]
    pub fn overlaps(&self) -> u32 { self.overlaps }
    /// Pointer rays that hit a body since the previous tick
    #[wasm_bindgen(getter)]
    pub fn pick_hits(&self) -> u32 { self.pick_hits }
}
