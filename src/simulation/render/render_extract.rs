use super::handles::FrameView;
use super::SceneCore;

/// Floats per body in the transform buffer:
/// `[px, py, pz, rx, ry, rz, scale]`
pub const TRANSFORM_STRIDE: usize = 7;

/// Pack body transforms in registry order
pub(super) fn extract_transforms(scene: &mut SceneCore) {
    scene.transforms.clear();
    for body in scene.registry.bodies() {
        let p = body.position;
        let r = body.rotation();
        scene
            .transforms
            .extend_from_slice(&[p.x, p.y, p.z, r.x, r.y, r.z, body.scale()]);
    }
}

/// Synchronous draw call on the attached sink
pub(super) fn draw(scene: &mut SceneCore) {
    let Some(sink) = scene.sink.as_mut() else {
        return;
    };
    let view = FrameView {
        frame: scene.frame,
        time: scene.time,
        body_count: scene.registry.len(),
        transforms: &scene.transforms,
        camera: &scene.camera,
    };
    sink.draw(&view);
}
