//! Scene tunables.
//!
//! The hero canvas, the menu page and the standalone balloon page all run
//! the same simulation with different numbers. Every number is a named
//! field here; the three tunings ship as presets and a host can override
//! any field through JSON.

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

use super::layout::{AnchorSpec, Layout, MAX_BODIES};

/// How a pointer hit turns into an impulse direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpulseMode {
    /// Along the pointer movement (screen y flipped), zero movement = no impulse
    PointerDelta,
    /// From the body centre towards the hit point on its surface
    SurfaceNormal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_deg: 25.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(6.0, 0.5, 6.0),
            target: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Breathing clock rate per wall-clock millisecond
    pub time_scale: f64,
    /// Vertical breathing amplitude
    pub float_strength: f32,
    /// Depth (z) breathing amplitude, 0 disables
    pub float_depth_strength: f32,
    /// Per-tick blend towards the idle target
    pub lerp_factor: f32,
    /// Per-tick impulse multiplier
    pub decay_factor: f32,
    /// Impulses below this magnitude are dropped
    pub min_force: f32,
    /// Magnitude of a fresh pointer impulse
    pub impulse_strength: f32,
    pub impulse_mode: ImpulseMode,
    /// Fraction of the penetration depth removed per collision pass
    pub push_fraction: f32,
    pub collisions_enabled: bool,
    pub base_radius: f32,
    pub clone_scale: f32,
    pub phase_base: f32,
    pub phase_step: f32,
    pub rotation_base: Vec3,
    pub rotation_step: Vec3,
    pub camera: CameraSettings,
    pub layout: Layout,
}

/// Landing-page hero composition
pub const HERO_ANCHORS: [AnchorSpec; 13] = [
    AnchorSpec::at(-2.2, 1.6, 0.5),
    AnchorSpec::at(0.0, 1.4, -0.8),
    AnchorSpec::at(2.4, 1.5, 0.4),
    AnchorSpec::at(-1.0, 0.3, -1.2),
    AnchorSpec::at(0.0, 0.2, 0.0),
    AnchorSpec::at(2.0, 0.3, -1.0),
    AnchorSpec::at(-1.2, 0.1, 1.1),
    AnchorSpec::at(1.4, 0.2, 1.0),
    AnchorSpec::at(0.5, -1.0, -0.6),
    AnchorSpec::at(0.5, -1.6, 0.9),
    AnchorSpec::at(1.0, -1.2, -0.5),
    AnchorSpec::at(-1.0, -0.2, -2.4),
    AnchorSpec::at(1.2, 0.4, -2.2),
];

/// Balloon cluster: unit-sphere template scaled per anchor
pub const BALLOON_ANCHORS: [AnchorSpec; 12] = [
    AnchorSpec::sized(0.0, 0.0, 0.0, 1.0),
    AnchorSpec::sized(1.2, 0.6, -0.3, 0.8),
    AnchorSpec::sized(-1.3, -0.4, 0.4, 0.6),
    AnchorSpec::sized(-1.0, 1.2, -0.2, 0.9),
    AnchorSpec::sized(0.7, -1.1, 0.6, 0.5),
    AnchorSpec::sized(-0.4, -1.4, -0.3, 1.1),
    AnchorSpec::sized(1.6, -0.3, 0.5, 0.7),
    AnchorSpec::sized(-1.7, 0.3, -0.6, 0.4),
    AnchorSpec::sized(0.4, 1.6, 0.2, 0.65),
    AnchorSpec::sized(-0.9, -1.8, 0.8, 0.85),
    AnchorSpec::sized(1.1, -1.3, -0.5, 0.55),
    AnchorSpec::sized(-1.5, 1.5, 0.4, 0.95),
];

pub const PRESET_NAMES: [&str; 3] = ["hero", "menu", "balloons"];

impl SceneSettings {
    pub fn hero() -> Self {
        Self {
            time_scale: 0.0012,
            float_strength: 0.15,
            float_depth_strength: 0.0,
            lerp_factor: 0.04,
            decay_factor: 0.98,
            min_force: 0.005,
            impulse_strength: 0.12,
            impulse_mode: ImpulseMode::PointerDelta,
            push_fraction: 0.09,
            collisions_enabled: true,
            base_radius: 1.2,
            clone_scale: 1.07,
            phase_base: 1.2,
            phase_step: 0.6,
            rotation_base: Vec3::new(0.4, 0.8, 0.3),
            rotation_step: Vec3::new(0.3, 0.25, 0.2),
            camera: CameraSettings::default(),
            layout: Layout::Fixed { anchors: HERO_ANCHORS.to_vec() },
        }
    }

    pub fn menu() -> Self {
        Self {
            time_scale: 0.0015,
            float_strength: 0.1,
            decay_factor: 0.88,
            push_fraction: 0.1,
            base_radius: 0.6,
            clone_scale: 0.5,
            phase_base: 0.0,
            phase_step: 2.7,
            rotation_base: Vec3::ZERO,
            rotation_step: Vec3::ZERO,
            camera: CameraSettings {
                far: 1000.0,
                position: Vec3::new(0.0, 0.0, 18.0),
                ..CameraSettings::default()
            },
            layout: Layout::Scatter { count: 10, seed: 0x5EED, extent: Vec3::new(4.0, 2.0, 2.0) },
            ..Self::hero()
        }
    }

    pub fn balloons() -> Self {
        Self {
            time_scale: 0.0015,
            float_strength: 0.1,
            float_depth_strength: 0.08,
            lerp_factor: 0.03,
            decay_factor: 0.9,
            min_force: 0.01,
            impulse_strength: 0.2,
            impulse_mode: ImpulseMode::SurfaceNormal,
            push_fraction: 0.1,
            collisions_enabled: false,
            base_radius: 1.0,
            clone_scale: 1.0,
            phase_base: 0.0,
            phase_step: 1.0,
            rotation_base: Vec3::ZERO,
            rotation_step: Vec3::ZERO,
            camera: CameraSettings {
                far: 1000.0,
                position: Vec3::new(0.0, 0.0, 18.0),
                ..CameraSettings::default()
            },
            layout: Layout::Fixed { anchors: BALLOON_ANCHORS.to_vec() },
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(Self::hero()),
            "menu" => Some(Self::menu()),
            "balloons" => Some(Self::balloons()),
            _ => None,
        }
    }

    /// Parse a JSON settings object; missing fields take the hero values.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SceneSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        fn open_unit(name: &str, v: f32) -> Result<(), String> {
            if v > 0.0 && v < 1.0 {
                Ok(())
            } else {
                Err(format!("{name} must be in (0, 1), got {v}"))
            }
        }
        fn positive(name: &str, v: f32) -> Result<(), String> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be positive, got {v}"))
            }
        }

        open_unit("decay_factor", self.decay_factor)?;
        open_unit("lerp_factor", self.lerp_factor)?;
        positive("min_force", self.min_force)?;
        positive("impulse_strength", self.impulse_strength)?;
        positive("base_radius", self.base_radius)?;
        positive("clone_scale", self.clone_scale)?;
        if !(self.push_fraction > 0.0 && self.push_fraction <= 1.0) {
            return Err(format!("push_fraction must be in (0, 1], got {}", self.push_fraction));
        }
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(format!("time_scale must be positive, got {}", self.time_scale));
        }
        if !self.float_strength.is_finite() || !self.float_depth_strength.is_finite() {
            return Err("float strengths must be finite".to_string());
        }
        // Feed sin/cos and the render rotation every frame
        if !self.phase_base.is_finite() || !self.phase_step.is_finite() {
            return Err("phase_base / phase_step must be finite".to_string());
        }
        if !self.rotation_base.is_finite() || !self.rotation_step.is_finite() {
            return Err("rotation_base / rotation_step must be finite".to_string());
        }

        let cam = &self.camera;
        if !(cam.fov_deg > 0.0 && cam.fov_deg < 180.0) {
            return Err(format!("camera.fov_deg must be in (0, 180), got {}", cam.fov_deg));
        }
        if !cam.position.is_finite() || !cam.target.is_finite() || !cam.far.is_finite() {
            return Err("camera position, target and far must be finite".to_string());
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(format!("camera near/far invalid: {} / {}", cam.near, cam.far));
        }
        if cam.position == cam.target {
            return Err("camera.position and camera.target coincide".to_string());
        }

        if self.layout.len() > MAX_BODIES {
            return Err(format!("layout has {} anchors, at most {MAX_BODIES} allowed", self.layout.len()));
        }
        if let Layout::Scatter { extent, .. } = &self.layout {
            if !extent.is_finite() {
                return Err("scatter extent must be finite".to_string());
            }
        }
        if let Layout::Fixed { anchors } = &self.layout {
            for (i, a) in anchors.iter().enumerate() {
                if !a.position.is_finite() {
                    return Err(format!("anchor {i} has a non-finite position"));
                }
                if let Some(r) = a.radius {
                    positive("anchor radius", r)?;
                }
                if let Some(s) = a.scale {
                    positive("anchor scale", s)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::hero()
    }
}
