use crate::core::Vec3;
use crate::domain::{AnchorSeed, MeshTemplate};

pub type BodyId = u32;
pub type PartId = u32;

/// One pickable piece of a body's visual (a bounding sphere)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPart {
    pub id: PartId,
    /// Centre relative to the body position, already rotated and scaled
    pub offset: Vec3,
    pub radius: f32,
}

/// One floating shape
#[derive(Clone, Debug)]
pub struct Body {
    // === Simulation State ===
    /// Current position, written by the tick and the collision pass
    pub position: Vec3,

    // === Fixed at creation ===
    id: BodyId,
    anchor: Vec3,
    radius: f32,
    phase_seed: f32,

    // === Visual ===
    rotation: Vec3,
    scale: f32,
    parts: Vec<BodyPart>,
}

impl Body {
    /// Clone the template at `seed`. Part ids are handed out from
    /// `next_part_id`, which is advanced past the ones used.
    pub(super) fn spawn(
        id: BodyId,
        seed: &AnchorSeed,
        template: &MeshTemplate,
        next_part_id: &mut PartId,
    ) -> Self {
        let parts = template
            .parts
            .iter()
            .map(|shape| {
                let part_id = *next_part_id;
                *next_part_id = next_part_id.wrapping_add(1);
                BodyPart {
                    id: part_id,
                    offset: (shape.offset * seed.scale).rotate_xyz(seed.rotation),
                    radius: shape.radius * seed.scale,
                }
            })
            .collect();

        Self {
            position: seed.position,
            id,
            anchor: seed.position,
            radius: seed.radius,
            phase_seed: seed.phase_seed,
            rotation: seed.rotation,
            scale: seed.scale,
            parts,
        }
    }

    pub fn id(&self) -> BodyId { self.id }

    pub fn anchor(&self) -> Vec3 { self.anchor }

    pub fn radius(&self) -> f32 { self.radius }

    pub fn phase_seed(&self) -> f32 { self.phase_seed }

    pub fn rotation(&self) -> Vec3 { self.rotation }

    pub fn scale(&self) -> f32 { self.scale }

    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    /// World-space centre of a part at the current position
    #[inline]
    pub fn part_center(&self, part: &BodyPart) -> Vec3 {
        self.position + part.offset
    }

    /// Idle target at breathing-clock time `t`
    #[inline]
    pub fn idle_target(&self, t: f64, float_strength: f32, depth_strength: f32) -> Vec3 {
        let phase = t + self.phase_seed as f64;
        let mut goal = self.anchor;
        goal.y += (phase.sin() as f32) * float_strength;
        if depth_strength != 0.0 {
            goal.z += (phase.cos() as f32) * depth_strength;
        }
        goal
    }
}
