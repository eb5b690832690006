//! Browser glue: the host-side implementations of the scene's handles.
//!
//! - `listeners`   window `mousemove` / `resize` subscription
//! - `animation`   requestAnimationFrame loop
//! - `render_sink` forwards frames to host JS functions (e.g. a three.js
//!   renderer that owns the meshes, materials and lights)

pub mod animation;
pub mod listeners;
pub mod render_sink;

pub use animation::AnimationLoop;
pub use listeners::DomListeners;
pub use render_sink::JsRenderSink;
