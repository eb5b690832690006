//! Seams to the host: whoever renders, schedules frames and delivers
//! input implements these. The scene owns each handle exclusively and
//! releases it exactly once.

use crate::systems::picking::Camera;

/// What the renderer gets each tick
pub struct FrameView<'a> {
    pub frame: u64,
    pub time: f64,
    pub body_count: usize,
    /// `body_count * TRANSFORM_STRIDE` floats, registry order
    pub transforms: &'a [f32],
    pub camera: &'a Camera,
}

pub trait RenderSink {
    fn draw(&mut self, frame: &FrameView<'_>);
    fn resize(&mut self, width: u32, height: u32, aspect: f32);
    /// Free renderer resources; called once, nothing is drawn afterwards
    fn release(&mut self);
}

/// Per-frame callback registration (e.g. requestAnimationFrame)
pub trait FrameScheduler {
    fn cancel(&mut self);
}

/// Pointer-move / resize listener registration
pub trait InputSubscription {
    fn unsubscribe(&mut self);
}
