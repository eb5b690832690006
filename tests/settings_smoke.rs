use floatfield_engine::domain::Layout;
use floatfield_engine::{ImpulseMode, MeshTemplate, SceneCore, SceneSettings};

#[test]
fn partial_settings_json_fills_in_hero_values() {
    let json = r#"{
        "decay_factor": 0.9,
        "impulse_mode": "surface_normal",
        "layout": { "kind": "scatter", "count": 4, "seed": 7, "extent": [2, 2, 2] }
    }"#;
    let settings = SceneSettings::from_json(json).expect("settings should parse");

    assert_eq!(settings.decay_factor, 0.9);
    assert_eq!(settings.impulse_mode, ImpulseMode::SurfaceNormal);
    assert_eq!(settings.lerp_factor, SceneSettings::hero().lerp_factor);
    assert!(matches!(settings.layout, Layout::Scatter { count: 4, .. }));

    let mut scene = SceneCore::with_settings(settings, 320, 240).unwrap();
    assert_eq!(scene.load_template(MeshTemplate::sphere(0.4)), Ok(4));
    assert!(scene.tick(16.0));
}

#[test]
fn out_of_range_settings_are_rejected() {
    assert!(SceneSettings::from_json(r#"{"decay_factor": 1.5}"#).is_err());
    assert!(SceneSettings::from_json(r#"{"lerp_factor": 0}"#).is_err());

    let bad = SceneSettings { push_fraction: 0.0, ..SceneSettings::hero() };
    assert!(SceneCore::with_settings(bad, 100, 100).is_err());
}
