use crate::core::Vec3;
use crate::domain::MeshTemplate;
use crate::systems::bodies::BodyId;
use crate::systems::picking::ViewportRect;

use super::SceneCore;

pub(super) fn load_template(scene: &mut SceneCore, template: MeshTemplate) -> Result<usize, String> {
    if !scene.live {
        log_warn!("mesh template arrived after teardown, ignored");
        return Ok(0);
    }

    let anchors = scene.settings.layout.resolve(&scene.settings);
    let count = scene.registry.create_bodies(&anchors, &template)?;
    log_info!("spawned {} bodies ({} parts each)", count, template.part_count());
    Ok(count)
}

pub(super) fn load_template_json(scene: &mut SceneCore, json: &str) -> Result<usize, String> {
    match MeshTemplate::from_json(json) {
        Ok(template) => load_template(scene, template),
        Err(e) => {
            asset_failed(scene, &e);
            Err(e)
        }
    }
}

pub(super) fn load_template_flat(scene: &mut SceneCore, parts: &[f32]) -> Result<usize, String> {
    match MeshTemplate::from_flat(parts) {
        Ok(template) => load_template(scene, template),
        Err(e) => {
            asset_failed(scene, &e);
            Err(e)
        }
    }
}

pub(super) fn asset_failed(scene: &mut SceneCore, reason: &str) {
    if scene.live {
        log_warn!("mesh asset unavailable ({}), scene stays empty", reason);
    }
}

pub(super) fn pointer_move(scene: &mut SceneCore, x: f32, y: f32, bounds: Option<ViewportRect>) -> bool {
    if !scene.live {
        return false;
    }

    let (viewport, bounded) = match bounds {
        Some(rect) => (rect, true),
        None => (ViewportRect::sized(scene.viewport_width, scene.viewport_height), false),
    };

    let (impulse, hit) =
        scene
            .picker
            .resolve(x, y, &viewport, bounded, &scene.camera, &scene.registry);
    if hit {
        scene.pending_pick_hits = scene.pending_pick_hits.saturating_add(1);
    }

    match impulse {
        Some((id, force)) => {
            scene.impulses.apply(id, force);
            true
        }
        None => false,
    }
}

pub(super) fn apply_impulse(scene: &mut SceneCore, id: BodyId, force: Vec3) -> bool {
    if !scene.live || !force.is_finite() || scene.registry.get(id).is_none() {
        return false;
    }
    scene.impulses.apply(id, force);
    true
}

pub(super) fn resize(scene: &mut SceneCore, width: u32, height: u32) {
    if !scene.live {
        return;
    }
    scene.viewport_width = width;
    scene.viewport_height = height;
    scene.camera.set_viewport_size(width, height);
    if let Some(sink) = scene.sink.as_mut() {
        sink.resize(width, height, scene.camera.aspect);
    }
}
