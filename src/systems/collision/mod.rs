//! Collision Resolver - keeps bodies from sinking into each other.
//!
//! Bodies are spheres for this purpose. One relaxation pass per tick:
//! overlapping pairs are pushed apart by a fraction of their penetration,
//! so deep overlaps resolve over several frames instead of snapping.

mod resolve;

pub use resolve::{resolve_pairs, FALLBACK_AXIS};
