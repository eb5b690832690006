//! Core building blocks shared by every system: vector math, the wall
//! clock and the logging macros (exported first so the rest of the crate
//! can use them).

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
#[path = "utils/clock.rs"]
pub mod clock;
#[path = "math/vec3.rs"]
pub mod vec3;

pub use vec3::Vec3;
