//! Simulation systems. Each one owns its own state and is driven by the
//! tick in `simulation`; none of them call each other.

pub mod bodies;
pub mod collision;
pub mod impulse;
pub mod picking;
