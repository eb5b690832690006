use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}
