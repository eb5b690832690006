use super::handles::{FrameScheduler, InputSubscription, RenderSink};
use super::SceneCore;

// Handles offered after teardown are released on the spot instead of
// being stored where nothing would ever release them.

pub(super) fn attach_renderer(scene: &mut SceneCore, mut sink: Box<dyn RenderSink>) {
    if !scene.live {
        sink.release();
        return;
    }
    sink.resize(scene.viewport_width, scene.viewport_height, scene.camera.aspect);
    if let Some(mut old) = scene.sink.replace(sink) {
        old.release();
    }
}

pub(super) fn attach_scheduler(scene: &mut SceneCore, mut scheduler: Box<dyn FrameScheduler>) {
    if !scene.live {
        scheduler.cancel();
        return;
    }
    if let Some(mut old) = scene.scheduler.replace(scheduler) {
        old.cancel();
    }
}

pub(super) fn attach_input(scene: &mut SceneCore, mut subscription: Box<dyn InputSubscription>) {
    if !scene.live {
        subscription.unsubscribe();
        return;
    }
    if let Some(mut old) = scene.subscription.replace(subscription) {
        old.unsubscribe();
    }
}

pub(super) fn teardown(scene: &mut SceneCore) -> bool {
    if !scene.live {
        return false;
    }
    scene.live = false;

    // (a) no more frames, (b) no more input, (c) renderer gone
    if let Some(mut scheduler) = scene.scheduler.take() {
        scheduler.cancel();
    }
    if let Some(mut subscription) = scene.subscription.take() {
        subscription.unsubscribe();
    }
    if let Some(mut sink) = scene.sink.take() {
        sink.release();
    }

    scene.registry.clear();
    scene.impulses.clear();
    scene.picker.reset();
    scene.transforms.clear();

    log_info!("scene torn down after {} frames", scene.frame);
    true
}
