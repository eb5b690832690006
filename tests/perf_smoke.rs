use floatfield_engine::Scene;

#[test]
fn perf_smoke_tick() {
    let scene = Scene::new(800, 600);
    scene.enable_perf_metrics(true);
    assert_eq!(scene.load_template_flat(&[0.0, 0.0, 0.0, 1.0]).ok(), Some(13));

    for i in 1..=60 {
        assert!(scene.tick(i as f64 * 16.0));
    }
    let stats = scene.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.bodies(), 13);
    assert_eq!(scene.transforms_len(), 13 * Scene::transform_stride());

    scene.teardown();
    assert!(!scene.is_live());
    assert!(!scene.tick(2000.0));
}
