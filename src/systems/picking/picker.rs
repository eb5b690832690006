use crate::core::Vec3;
use crate::domain::ImpulseMode;
use crate::systems::bodies::{BodyId, BodyRegistry, PartId};

use super::camera::{Camera, Ray};

/// Rendering area in client (CSS pixel) coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Full canvas of the given size at the client origin
    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    /// Client point -> NDC (x right, y up). `None` for an empty rect.
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let nx = ((x - self.left) / self.width) * 2.0 - 1.0;
        let ny = -((y - self.top) / self.height) * 2.0 + 1.0;
        Some((nx, ny))
    }
}

/// Nearest part under a ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub part: PartId,
    pub body: BodyId,
    pub distance: f32,
    pub point: Vec3,
}

/// Holds the previous pointer sample and turns pointer moves into impulses
pub struct PointerPicker {
    previous: Option<(f32, f32)>,
    impulse_strength: f32,
    mode: ImpulseMode,
}

impl PointerPicker {
    pub fn new(impulse_strength: f32, mode: ImpulseMode) -> Self {
        Self { previous: None, impulse_strength, mode }
    }

    pub fn previous(&self) -> Option<(f32, f32)> {
        self.previous
    }

    /// Forget the last pointer sample (teardown)
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Handle one pointer move at client `(x, y)`.
    ///
    /// With `bounded`, a point outside `viewport` is ignored entirely and
    /// leaves the previous sample untouched. Otherwise the sample is always
    /// recorded, hit or miss, so the next movement delta is correct.
    ///
    /// The very first sample has no predecessor and counts as zero
    /// movement, so it never pushes. Measuring it against a made-up origin
    /// such as the client corner would fling whatever body sits under the
    /// pointer as it enters the page, with a strength that depends only on
    /// where the page was entered.
    ///
    /// Returns the body and the impulse it should receive, if any. The
    /// boolean reports whether the ray hit anything at all.
    pub fn resolve(
        &mut self,
        x: f32,
        y: f32,
        viewport: &ViewportRect,
        bounded: bool,
        camera: &Camera,
        registry: &BodyRegistry,
    ) -> (Option<(BodyId, Vec3)>, bool) {
        if !x.is_finite() || !y.is_finite() {
            return (None, false);
        }
        if bounded && !viewport.contains(x, y) {
            return (None, false);
        }

        let movement = match self.previous {
            Some((px, py)) => (x - px, y - py),
            None => (0.0, 0.0),
        };
        self.previous = Some((x, y));

        let Some((ndc_x, ndc_y)) = viewport.to_ndc(x, y) else {
            return (None, false);
        };
        let ray = camera.ray_through(ndc_x, ndc_y);
        let Some(hit) = pick(&ray, camera, registry) else {
            return (None, false);
        };

        let direction = match self.mode {
            // Screen y grows downwards, world y upwards
            ImpulseMode::PointerDelta => Vec3::new(movement.0, -movement.1, 0.0).normalize(),
            ImpulseMode::SurfaceNormal => registry
                .get(hit.body)
                .and_then(|body| (hit.point - body.position).normalize()),
        };

        let impulse = direction.map(|dir| (hit.body, dir * self.impulse_strength));
        (impulse, true)
    }
}

/// Nearest part hit within the camera's clip range, resolved to its owner
pub fn pick(ray: &Ray, camera: &Camera, registry: &BodyRegistry) -> Option<PickHit> {
    let mut best: Option<(PartId, f32)> = None;

    for body in registry.bodies() {
        for part in body.parts() {
            let Some(t) = ray.intersect_sphere(body.part_center(part), part.radius) else {
                continue;
            };
            if t < camera.near || t > camera.far {
                continue;
            }
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((part.id, t));
            }
        }
    }

    let (part, distance) = best?;
    let body = registry.owner_of(part)?;
    Some(PickHit { part, body, distance, point: ray.at(distance) })
}
