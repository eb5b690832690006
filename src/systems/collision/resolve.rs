use crate::core::Vec3;
use crate::systems::bodies::Body;

/// Separation axis for two bodies at exactly the same position
pub const FALLBACK_AXIS: Vec3 = Vec3::X;

/// All-pairs overlap pass (n is tens of bodies).
///
/// For an overlapping pair A, B the push is `(min_dist - dist) * push_fraction`,
/// split evenly: A moves half of it away from B and B moves the other half
/// away from A, so the pair's displacements cancel out.
///
/// Returns the number of overlapping pairs found.
pub fn resolve_pairs(bodies: &mut [Body], push_fraction: f32) -> u32 {
    let mut overlaps = 0u32;
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let delta = b.position - a.position;
            let dist = delta.length();
            let min_dist = a.radius() + b.radius();
            // Also skips NaN distances
            if !(dist < min_dist) {
                continue;
            }

            let axis = if dist > 0.0 { delta * (1.0 / dist) } else { FALLBACK_AXIS };
            let half_push = (min_dist - dist) * push_fraction * 0.5;

            a.position -= axis * half_push;
            b.position += axis * half_push;
            overlaps += 1;
        }
    }

    overlaps
}
