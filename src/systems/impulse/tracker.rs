use std::collections::HashMap;

use crate::core::Vec3;
use crate::systems::bodies::BodyId;

pub struct ImpulseTracker {
    entries: HashMap<BodyId, Vec3>,
    decay_factor: f32,
    min_force: f32,
}

impl ImpulseTracker {
    /// `decay_factor` must be in (0, 1) and `min_force` positive; settings
    /// validation guarantees both before a tracker is built.
    pub fn new(decay_factor: f32, min_force: f32) -> Self {
        debug_assert!(decay_factor > 0.0 && decay_factor < 1.0);
        debug_assert!(min_force > 0.0);
        Self {
            entries: HashMap::new(),
            decay_factor,
            min_force,
        }
    }

    /// Set the impulse for `id`, replacing any existing one
    pub fn apply(&mut self, id: BodyId, force: Vec3) {
        self.entries.insert(id, force);
    }

    pub fn get(&self, id: BodyId) -> Option<Vec3> {
        self.entries.get(&id).copied()
    }

    /// Decay every live entry once; returns how many were dropped
    pub fn decay_step(&mut self) -> usize {
        let before = self.entries.len();
        let decay = self.decay_factor;
        let floor = self.min_force;
        self.entries.retain(|_, force| {
            *force *= decay;
            force.length() >= floor
        });
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn decay_factor(&self) -> f32 {
        self.decay_factor
    }

    pub fn min_force(&self) -> f32 {
        self.min_force
    }
}
