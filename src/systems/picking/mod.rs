//! Pointer Picker - turns a pointer move into an impulse on the body
//! under the cursor.
//!
//! Screen point -> NDC -> camera ray -> nearest part sphere -> owning body
//! (via the registry's part index) -> impulse direction.

mod camera;
mod picker;

pub use camera::{Camera, Ray};
pub use picker::{pick, PickHit, PointerPicker, ViewportRect};
