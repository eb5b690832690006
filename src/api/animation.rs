use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::clock::now_ms;
use crate::simulation::{FrameScheduler, SceneCore};

use super::listeners::js_error;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop ticking the scene once per display refresh
pub struct AnimationLoop {
    window: Option<Window>,
    handle: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    callback: Option<FrameCallback>,
}

impl AnimationLoop {
    /// Start ticking. `teardown_requested` is set by a teardown that
    /// arrived while the scene was busy; the loop performs it right after
    /// the tick.
    pub fn start(
        scene: Weak<RefCell<SceneCore>>,
        teardown_requested: Rc<Cell<bool>>,
    ) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        // The closure reschedules itself through a weak ref so that
        // dropping the loop frees it.
        let next: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&callback);
        let h = handle.clone();
        let s = stopped.clone();
        let w = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            h.set(None);
            if s.get() {
                return;
            }
            let Some(scene) = scene.upgrade() else {
                return;
            };
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.tick(now_ms());
                if teardown_requested.replace(false) {
                    // Cancels this loop (sets `s`)
                    scene.teardown();
                }
            };
            if s.get() {
                return;
            }
            if let Some(cb) = next.upgrade() {
                if let Some(f) = cb.borrow().as_ref() {
                    h.set(w.request_animation_frame(f.as_ref().unchecked_ref()).ok());
                }
            }
        }) as Box<dyn FnMut()>));

        let first = {
            let cb = callback.borrow();
            let f = cb.as_ref().ok_or_else(|| "frame callback missing".to_string())?;
            window
                .request_animation_frame(f.as_ref().unchecked_ref())
                .map_err(js_error)?
        };
        handle.set(Some(first));

        Ok(Self {
            window: Some(window),
            handle,
            stopped,
            callback: Some(callback),
        })
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }
}

impl FrameScheduler for AnimationLoop {
    fn cancel(&mut self) {
        self.stopped.set(true);
        if let (Some(window), Some(id)) = (self.window.take(), self.handle.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
