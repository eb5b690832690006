use crate::core::Vec3;
use crate::domain::CameraSettings;

/// Perspective camera looking from `position` at `target` (world up = +Y)
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

/// Ray with a unit direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Camera {
    pub fn from_settings(settings: &CameraSettings, width: u32, height: u32) -> Self {
        let mut camera = Self {
            fov_deg: settings.fov_deg,
            aspect: 1.0,
            near: settings.near,
            far: settings.far,
            position: settings.position,
            target: settings.target,
        };
        camera.set_viewport_size(width, height);
        camera
    }

    /// Recompute the aspect ratio. A zero-height viewport (collapsed
    /// container) keeps the previous aspect.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    /// Orthonormal (right, up, forward) basis
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize().unwrap_or(-Vec3::Z);
        // Looking straight up or down: any horizontal right vector will do
        let right = forward.cross(Vec3::Y).normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1] inside the viewport).
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let (right, up, forward) = self.basis();
        let tan_half = (self.fov_deg.to_radians() * 0.5).tan();
        let dir = forward + right * (ndc_x * tan_half * self.aspect) + up * (ndc_y * tan_half);
        Ray {
            origin: self.position,
            direction: dir.normalize().unwrap_or(forward),
        }
    }
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest non-negative hit distance against a sphere
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin inside the sphere: take the exit point
        let far = -b + sqrt_d;
        if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_camera() -> Camera {
        Camera::from_settings(
            &CameraSettings {
                fov_deg: 90.0,
                near: 0.1,
                far: 100.0,
                position: Vec3::new(0.0, 0.0, 10.0),
                target: Vec3::ZERO,
            },
            200,
            100,
        )
    }

    #[test]
    fn centre_ray_looks_at_target() {
        let ray = front_camera().ray_through(0.0, 0.0);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn edge_rays_span_fov_and_aspect() {
        let cam = front_camera();
        assert_eq!(cam.aspect, 2.0);
        // fov 90 => tan(45) = 1 vertically, 2 horizontally at aspect 2
        let top = cam.ray_through(0.0, 1.0).direction;
        assert!((top - Vec3::new(0.0, 1.0, -1.0).normalize().unwrap()).length() < 1e-5);
        let right = cam.ray_through(1.0, 0.0).direction;
        assert!((right - Vec3::new(2.0, 0.0, -1.0).normalize().unwrap()).length() < 1e-5);
    }

    #[test]
    fn zero_height_keeps_aspect() {
        let mut cam = front_camera();
        assert!(!cam.set_viewport_size(300, 0));
        assert_eq!(cam.aspect, 2.0);
        assert!(cam.set_viewport_size(300, 300));
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn sphere_hits_front_face_and_misses_behind() {
        let ray = Ray { origin: Vec3::new(0.0, 0.0, 10.0), direction: Vec3::new(0.0, 0.0, -1.0) };
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        assert!((ray.at(t) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);

        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_exit() {
        let ray = Ray { origin: Vec3::ZERO, direction: Vec3::X };
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
    }
}
