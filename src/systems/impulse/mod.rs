//! Impulse Tracker - transient pointer forces keyed by body id.
//!
//! At most one impulse per body. A new hit overwrites, never accumulates.
//! Every live impulse shrinks by the same factor once per tick and is
//! dropped once it falls under the floor.

mod tracker;

pub use tracker::ImpulseTracker;
