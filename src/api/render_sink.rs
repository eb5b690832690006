use js_sys::{Float32Array, Function};
use wasm_bindgen::prelude::*;

use crate::simulation::{FrameView, RenderSink};

use super::listeners::js_error;

/// Forwards frames to host JS callbacks:
/// `draw(transforms: Float32Array, time: number)`,
/// `resize(width, height, aspect)` and `release()`.
///
/// Exceptions thrown by the callbacks are logged, never propagated into
/// the tick.
pub struct JsRenderSink {
    on_draw: Function,
    on_resize: Option<Function>,
    on_release: Option<Function>,
    released: bool,
}

impl JsRenderSink {
    pub fn new(on_draw: Function, on_resize: Option<Function>, on_release: Option<Function>) -> Self {
        Self { on_draw, on_resize, on_release, released: false }
    }
}

impl RenderSink for JsRenderSink {
    fn draw(&mut self, frame: &FrameView<'_>) {
        if self.released {
            return;
        }
        let transforms = Float32Array::from(frame.transforms);
        if let Err(e) = self.on_draw.call2(
            &JsValue::NULL,
            &JsValue::from(transforms),
            &JsValue::from_f64(frame.time),
        ) {
            log_warn!("draw callback failed on frame {}: {}", frame.frame, js_error(e));
        }
    }

    fn resize(&mut self, width: u32, height: u32, aspect: f32) {
        if self.released {
            return;
        }
        let Some(cb) = self.on_resize.as_ref() else {
            return;
        };
        if let Err(e) = cb.call3(
            &JsValue::NULL,
            &JsValue::from(width),
            &JsValue::from(height),
            &JsValue::from_f64(aspect as f64),
        ) {
            log_warn!("resize callback failed: {}", js_error(e));
        }
    }

    fn release(&mut self) {
        if std::mem::replace(&mut self.released, true) {
            return;
        }
        if let Some(cb) = self.on_release.take() {
            if let Err(e) = cb.call0(&JsValue::NULL) {
                log_warn!("release callback failed: {}", js_error(e));
            }
        }
    }
}
