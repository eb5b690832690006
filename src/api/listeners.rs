use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, Window};

use crate::simulation::{InputSubscription, SceneCore};
use crate::systems::picking::ViewportRect;

/// Window-level pointer and resize listeners, removed exactly once.
///
/// With a container, pointer moves are bounded to its client rect and
/// resizes report its client size; without one the whole window is used.
pub struct DomListeners {
    window: Option<Window>,
    on_pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

impl DomListeners {
    pub fn attach(scene: Weak<RefCell<SceneCore>>, container: Option<HtmlElement>) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;

        let pointer_scene = scene.clone();
        let pointer_container = container.clone();
        let on_pointer = Closure::wrap(Box::new(move |e: MouseEvent| {
            let Some(scene) = pointer_scene.upgrade() else {
                return;
            };
            let bounds = pointer_container.as_ref().map(|el| {
                let r = el.get_bounding_client_rect();
                ViewportRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
            });
            // Busy means a tick is running on this thread (re-entrant call
            // from the draw callback); the move is dropped.
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.pointer_move(e.client_x() as f32, e.client_y() as f32, bounds);
            };
        }) as Box<dyn FnMut(MouseEvent)>);

        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move |_: Event| {
            let Some(scene) = scene.upgrade() else {
                return;
            };
            let (w, h) = match container.as_ref() {
                Some(el) => (el.client_width().max(0) as u32, el.client_height().max(0) as u32),
                None => window_size(&resize_window),
            };
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.resize(w, h);
            };
        }) as Box<dyn FnMut(Event)>);

        // Build first so a failed registration is still cleaned up on drop
        let listeners = Self {
            window: Some(window),
            on_pointer: Some(on_pointer),
            on_resize: Some(on_resize),
        };
        listeners.register()?;
        Ok(listeners)
    }

    fn register(&self) -> Result<(), String> {
        let (Some(window), Some(pointer), Some(resize)) =
            (self.window.as_ref(), self.on_pointer.as_ref(), self.on_resize.as_ref())
        else {
            return Err("listeners already removed".to_string());
        };
        window
            .add_event_listener_with_callback("mousemove", pointer.as_ref().unchecked_ref())
            .map_err(js_error)?;
        window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.window.is_some()
    }
}

impl InputSubscription for DomListeners {
    fn unsubscribe(&mut self) {
        let Some(window) = self.window.take() else {
            return;
        };
        if let Some(cb) = self.on_pointer.take() {
            let _ = window.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = self.on_resize.take() {
            let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

impl Drop for DomListeners {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Window inner size in CSS pixels
pub fn window_size(window: &Window) -> (u32, u32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32;
    (read(window.inner_width()), read(window.inner_height()))
}

pub(crate) fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}
