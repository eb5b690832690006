//! Mesh template - the pickable shape of the loaded asset.
//!
//! The host decodes the mesh and reports one bounding sphere per visual
//! node (mesh-local space). Every body is a clone of this template.

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

/// Floats per part in the flat encoding: offset xyz + radius
pub const PART_STRIDE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartShape {
    #[serde(default)]
    pub offset: Vec3,
    pub radius: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshTemplate {
    pub parts: Vec<PartShape>,
}

impl MeshTemplate {
    pub fn new(parts: Vec<PartShape>) -> Result<Self, String> {
        let template = Self { parts };
        template.validate()?;
        Ok(template)
    }

    /// A single sphere of radius `r` at the origin
    pub fn sphere(radius: f32) -> Self {
        Self { parts: vec![PartShape { offset: Vec3::ZERO, radius }] }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let template: MeshTemplate = serde_json::from_str(json).map_err(|e| e.to_string())?;
        template.validate()?;
        Ok(template)
    }

    /// `[ox, oy, oz, r, ox, oy, oz, r, ...]`
    pub fn from_flat(data: &[f32]) -> Result<Self, String> {
        if data.len() % PART_STRIDE != 0 {
            return Err(format!(
                "flat template length {} is not a multiple of {}",
                data.len(),
                PART_STRIDE
            ));
        }
        let parts = data
            .chunks_exact(PART_STRIDE)
            .map(|c| PartShape { offset: Vec3::new(c[0], c[1], c[2]), radius: c[3] })
            .collect();
        Self::new(parts)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    fn validate(&self) -> Result<(), String> {
        if self.parts.is_empty() {
            return Err("mesh template has no parts".to_string());
        }
        for (i, p) in self.parts.iter().enumerate() {
            if !p.offset.is_finite() || !(p.radius.is_finite() && p.radius > 0.0) {
                return Err(format!("mesh template part {i} is degenerate"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_encoding_splits_parts() {
        let t = MeshTemplate::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.5, 0.0, 0.0, 0.25]).unwrap();
        assert_eq!(t.part_count(), 2);
        assert_eq!(t.parts[1].offset, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(t.parts[1].radius, 0.25);
    }

    #[test]
    fn rejects_empty_and_ragged_input() {
        assert!(MeshTemplate::from_flat(&[]).is_err());
        assert!(MeshTemplate::from_flat(&[0.0, 0.0, 1.0]).is_err());
        assert!(MeshTemplate::from_flat(&[0.0, 0.0, 0.0, 0.0]).is_err());
        assert!(MeshTemplate::from_json(r#"{ "parts": [] }"#).is_err());
    }

    #[test]
    fn json_offset_defaults_to_origin() {
        let t = MeshTemplate::from_json(r#"{ "parts": [ { "radius": 0.7 } ] }"#).unwrap();
        assert_eq!(t.parts[0].offset, Vec3::ZERO);
    }
}
