//! Body Registry - the fixed set of floating shapes.
//!
//! Bodies are created in one batch when the mesh asset arrives and
//! discarded in one batch at teardown. Every visual part of every body is
//! indexed back to its owning body at creation time, so a pointer hit on
//! any part resolves to the body without walking a scene graph.

mod body;
mod registry;

pub use body::{Body, BodyId, BodyPart, PartId};
pub use registry::BodyRegistry;
