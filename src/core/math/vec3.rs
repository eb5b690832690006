use serde::{Deserialize, Serialize};

/// Below this length a vector has no usable direction
const NORMALIZE_EPSILON: f32 = 1e-6;

/// 3D vector for body positions, forces and rays.
///
/// Serialized as a plain `[x, y, z]` array so settings files stay compact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn distance(&self, other: Vec3) -> f32 {
        (other - *self).length()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalize(&self) -> Option<Self> {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            Some(*self * (1.0 / len))
        } else {
            None
        }
    }

    /// Move `t` of the way towards `target` (exponential smoothing step)
    pub fn lerp(&self, target: Vec3, t: f32) -> Vec3 {
        *self + (target - *self) * t
    }

    /// Rotate by Euler angles (radians) applied in XYZ order, i.e. the
    /// vector is rotated about Z first, then Y, then X.
    pub fn rotate_xyz(&self, euler: Vec3) -> Vec3 {
        let (sx, cx) = euler.x.sin_cos();
        let (sy, cy) = euler.y.sin_cos();
        let (sz, cz) = euler.z.sin_cos();

        // Rz
        let x1 = self.x * cz - self.y * sz;
        let y1 = self.x * sz + self.y * cz;
        let z1 = self.z;

        // Ry
        let x2 = x1 * cy + z1 * sy;
        let y2 = y1;
        let z2 = -x1 * sy + z1 * cy;

        // Rx
        Vec3::new(x2, y2 * cx - z2 * sx, y2 * sx + z2 * cx)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
