//! Anchor layouts - where the bodies rest.
//!
//! A layout is either a fixed list of anchors or a seeded scatter inside a
//! box. Resolving it against the settings yields everything the body
//! registry needs per body: anchor, radius, render scale/rotation and the
//! breathing phase seed.

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

use super::settings::SceneSettings;

/// Upper bound on anchors per layout; the all-pairs collision pass is
/// sized for tens of bodies.
pub const MAX_BODIES: usize = 256;

/// Used when a scatter layout is configured with seed 0 (xorshift would
/// stay at zero forever)
const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// One configured resting spot
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorSpec {
    pub position: Vec3,
    /// Collision radius; `base_radius` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Render/pick scale; `clone_scale` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl AnchorSpec {
    pub const fn at(x: f32, y: f32, z: f32) -> Self {
        Self { position: Vec3::new(x, y, z), radius: None, scale: None }
    }

    /// Anchor whose collision radius and visual scale are both `r`
    /// (unit-sphere templates).
    pub const fn sized(x: f32, y: f32, z: f32, r: f32) -> Self {
        Self { position: Vec3::new(x, y, z), radius: Some(r), scale: Some(r) }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    Fixed { anchors: Vec<AnchorSpec> },
    /// `count` anchors uniformly distributed in the box `±extent / 2`
    Scatter { count: u32, seed: u32, extent: Vec3 },
}

/// Fully resolved per-body creation data
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorSeed {
    pub position: Vec3,
    pub radius: f32,
    pub scale: f32,
    pub rotation: Vec3,
    pub phase_seed: f32,
}

impl Layout {
    pub fn len(&self) -> usize {
        match self {
            Layout::Fixed { anchors } => anchors.len(),
            Layout::Scatter { count, .. } => *count as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve to creation data. Deterministic: the same layout and settings
    /// always produce the same anchors and phase seeds.
    pub fn resolve(&self, settings: &SceneSettings) -> Vec<AnchorSeed> {
        let specs: Vec<AnchorSpec> = match self {
            Layout::Fixed { anchors } => anchors.clone(),
            Layout::Scatter { count, seed, extent } => scatter(*count, *seed, *extent),
        };

        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let fi = i as f32;
                AnchorSeed {
                    position: spec.position,
                    radius: spec.radius.unwrap_or(settings.base_radius),
                    scale: spec.scale.unwrap_or(settings.clone_scale),
                    rotation: settings.rotation_base + settings.rotation_step * fi,
                    phase_seed: settings.phase_base + settings.phase_step * fi,
                }
            })
            .collect()
    }
}

fn scatter(count: u32, seed: u32, extent: Vec3) -> Vec<AnchorSpec> {
    let mut state = if seed == 0 { FALLBACK_SEED } else { seed };
    (0..count)
        .map(|_| {
            let x = (unit_f32(&mut state) - 0.5) * extent.x;
            let y = (unit_f32(&mut state) - 0.5) * extent.y;
            let z = (unit_f32(&mut state) - 0.5) * extent.z;
            AnchorSpec::at(x, y, z)
        })
        .collect()
}

/// Random number generator (xorshift32)
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform value in [0, 1) from the top 24 bits
#[inline]
fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}
