use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::api::{listeners, AnimationLoop, DomListeners, JsRenderSink};
use crate::core::clock::now_ms;
use crate::domain::SceneSettings;
use crate::systems::picking::ViewportRect;

use super::perf_stats::PerfStats;
use super::render_extract::TRANSFORM_STRIDE;
use super::SceneCore;

/// JS handle to a scene.
///
/// The core sits behind `Rc<RefCell<..>>` because the frame loop and the
/// DOM listeners call into it too (through weak refs). A call that lands
/// while the core is busy, i.e. from inside the draw callback, is dropped;
/// `teardown` is the exception and is deferred until the tick returns.
#[wasm_bindgen]
pub struct Scene {
    core: Rc<RefCell<SceneCore>>,
    teardown_requested: Rc<Cell<bool>>,
}

impl Scene {
    fn wrap(core: SceneCore) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
            teardown_requested: Rc::new(Cell::new(false)),
        }
    }

    fn read(&self) -> Option<Ref<'_, SceneCore>> {
        self.core.try_borrow().ok()
    }

    fn write(&self) -> Option<RefMut<'_, SceneCore>> {
        self.core.try_borrow_mut().ok()
    }

    /// Run a teardown that was requested while the core was busy
    fn flush_teardown(&self) {
        if !self.teardown_requested.get() {
            return;
        }
        if let Some(mut core) = self.write() {
            self.teardown_requested.set(false);
            core.teardown();
        }
    }
}

#[wasm_bindgen]
impl Scene {
    /// Hero scene at the given viewport size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::wrap(SceneCore::new(width, height))
    }

    /// One of `presetNames()`
    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(name: &str, width: u32, height: u32) -> Result<Scene, JsValue> {
        let settings = SceneSettings::preset(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown preset '{name}'")))?;
        let core = SceneCore::with_settings(settings, width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(core))
    }

    /// Full settings as JSON; missing fields take hero values
    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str, width: u32, height: u32) -> Result<Scene, JsValue> {
        let settings = SceneSettings::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        let core = SceneCore::with_settings(settings, width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.read().map_or(0, |c| c.body_count() as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn impulse_count(&self) -> u32 {
        self.read().map_or(0, |c| c.impulse_count() as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 {
        self.read().map_or(0.0, |c| c.time())
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.read().map_or(0, |c| c.frame())
    }

    #[wasm_bindgen(getter)]
    pub fn is_live(&self) -> bool {
        !self.teardown_requested.get() && self.read().map_or(true, |c| c.is_live())
    }

    pub fn settings_json(&self) -> String {
        self.read().map(|c| c.settings().to_json()).unwrap_or_default()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        if let Some(mut core) = self.write() {
            core.enable_perf_metrics(enabled);
        }
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.read().map(|c| c.get_perf_stats()).unwrap_or_default()
    }

    // === ASSET ===

    /// `{"parts":[{"offset":[x,y,z],"radius":r}, ...]}`. Returns the number
    /// of bodies spawned.
    pub fn load_template_json(&self, json: &str) -> Result<u32, JsValue> {
        let mut core = self.write().ok_or_else(busy)?;
        let count = core.load_template_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(count as u32)
    }

    /// `[ox, oy, oz, radius]` per part
    pub fn load_template_flat(&self, parts: &[f32]) -> Result<u32, JsValue> {
        let mut core = self.write().ok_or_else(busy)?;
        let count = core.load_template_flat(parts).map_err(|e| JsValue::from_str(&e))?;
        Ok(count as u32)
    }

    pub fn asset_failed(&self, reason: &str) {
        if let Some(mut core) = self.write() {
            core.asset_failed(reason);
        }
    }

    // === INPUT ===

    /// Pointer move over the whole viewport
    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.write().map_or(false, |mut c| c.pointer_move(x, y, None))
    }

    /// Pointer move bounded to a container rect (client coordinates)
    pub fn pointer_move_in(&self, x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> bool {
        let bounds = ViewportRect::new(left, top, width, height);
        self.write().map_or(false, |mut c| c.pointer_move(x, y, Some(bounds)))
    }

    pub fn resize(&self, width: u32, height: u32) {
        if let Some(mut core) = self.write() {
            core.resize(width, height);
        }
    }

    // === FRAME ===

    /// Manual tick for hosts that drive their own loop
    pub fn tick(&self, now_ms: f64) -> bool {
        let ticked = self.write().map_or(false, |mut c| c.tick(now_ms));
        self.flush_teardown();
        ticked
    }

    /// Tick at the current wall-clock time
    pub fn tick_now(&self) -> bool {
        self.tick(now_ms())
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.read().map_or(std::ptr::null(), |c| c.transforms_ptr())
    }

    pub fn transforms_len(&self) -> usize {
        self.read().map_or(0, |c| c.transforms_len())
    }

    pub fn transform_stride() -> usize {
        TRANSFORM_STRIDE
    }

    // === LIFECYCLE ===

    /// Register JS render callbacks. `resize` fires immediately with the
    /// current viewport size.
    pub fn attach_renderer(&self, draw: Function, resize: Option<Function>, release: Option<Function>) {
        let sink = JsRenderSink::new(draw, resize, release);
        match self.write() {
            Some(mut core) => core.attach_renderer(Box::new(sink)),
            None => log_warn!("renderer attached while scene busy, ignored"),
        }
    }

    /// Subscribe to window input and start the animation loop. With a
    /// container, pointer moves are bounded to it and it defines the size.
    pub fn start(&self, container: Option<HtmlElement>) -> Result<(), JsValue> {
        let mut core = self.write().ok_or_else(busy)?;
        if !core.is_live() {
            return Err(JsValue::from_str("scene already torn down"));
        }

        let input = DomListeners::attach(Rc::downgrade(&self.core), container.clone())
            .map_err(|e| JsValue::from_str(&e))?;
        let frames = AnimationLoop::start(Rc::downgrade(&self.core), self.teardown_requested.clone())
            .map_err(|e| JsValue::from_str(&e))?;
        core.attach_input(Box::new(input));
        core.attach_scheduler(Box::new(frames));

        let (w, h) = match container.as_ref() {
            Some(el) => (el.client_width().max(0) as u32, el.client_height().max(0) as u32),
            None => web_sys::window().map_or((0, 0), |w| listeners::window_size(&w)),
        };
        core.resize(w, h);
        log_info!("scene started at {}x{}", w, h);
        Ok(())
    }

    /// Stop the loop, remove listeners and release the renderer. Safe to
    /// call repeatedly and from inside the draw callback.
    pub fn teardown(&self) {
        match self.write() {
            Some(mut core) => {
                core.teardown();
            }
            None => self.teardown_requested.set(true),
        }
    }
}

fn busy() -> JsValue {
    JsValue::from_str("scene is busy (called from inside a frame callback)")
}
