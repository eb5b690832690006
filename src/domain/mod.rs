//! Scene description: tunables, presets, layouts and the mesh template.

pub mod layout;
pub mod settings;
pub mod template;

pub use layout::{AnchorSeed, AnchorSpec, Layout, MAX_BODIES};
pub use settings::{CameraSettings, ImpulseMode, SceneSettings};
pub use template::{MeshTemplate, PartShape};
