use std::collections::HashMap;

use crate::domain::{AnchorSeed, MeshTemplate};

use super::body::{Body, BodyId, PartId};

/// Owns the body list and the part -> body index
pub struct BodyRegistry {
    bodies: Vec<Body>,
    part_owner: HashMap<PartId, BodyId>,
    next_body_id: BodyId,
    next_part_id: PartId,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            part_owner: HashMap::new(),
            next_body_id: 1,
            next_part_id: 1,
        }
    }

    /// Create every body in one batch, one template clone per anchor.
    ///
    /// Fails if bodies already exist: the set is fixed for a session.
    /// Ids keep counting across `clear()`, so an id is never handed out twice.
    pub fn create_bodies(
        &mut self,
        anchors: &[AnchorSeed],
        template: &MeshTemplate,
    ) -> Result<usize, String> {
        if !self.bodies.is_empty() {
            return Err(format!("{} bodies already created", self.bodies.len()));
        }

        self.bodies.reserve(anchors.len());
        for seed in anchors {
            let id = self.next_body_id;
            self.next_body_id = self.next_body_id.saturating_add(1);

            let body = Body::spawn(id, seed, template, &mut self.next_part_id);
            for part in body.parts() {
                self.part_owner.insert(part.id, id);
            }
            self.bodies.push(body);
        }
        Ok(self.bodies.len())
    }

    /// Discard the whole set (teardown)
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.part_owner.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// Body that owns a visual part
    pub fn owner_of(&self, part: PartId) -> Option<BodyId> {
        self.part_owner.get(&part).copied()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
