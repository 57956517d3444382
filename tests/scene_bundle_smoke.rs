use std::fs;
use std::path::Path;

use platformer_physics::{BodyHandle, CollisionBox, SceneBundle, SimulationCore, Vec2};

fn fixture() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/platform_scene.json");
    fs::read_to_string(path).expect("platform_scene.json fixture should exist")
}

#[test]
fn scene_bundle_smoke_parses_and_has_core_invariants() {
    let bundle = SceneBundle::from_json(&fixture()).expect("scene should parse");
    assert_eq!(bundle.bodies.len(), 4);
    assert_eq!(bundle.physics.gravity, 1.0);

    let sim = SimulationCore::from_scene(&bundle).expect("scene should build");
    assert_eq!(sim.body_count(), 4);

    let player = sim.body(BodyHandle::from_raw(0)).expect("player");
    assert_eq!(player.max_speed(), Some(6.0));
    assert_eq!(player.collision_box(), CollisionBox::all());

    let crate_box = sim.body(BodyHandle::from_raw(1)).expect("crate");
    assert!(!crate_box.collision_box().top);
    assert!(crate_box.collision_box().bottom);

    let floor = sim.body(BodyHandle::from_raw(2)).expect("floor");
    assert!(floor.is_static());
    assert_eq!(floor.surface_props().map(|s| s.friction_coefficient), Some(0.5));
}

#[test]
fn scene_bodies_settle_on_the_floor() {
    let mut sim = SimulationCore::from_scene_json(&fixture()).expect("scene should build");
    let floor = BodyHandle::from_raw(2);
    let wall = BodyHandle::from_raw(3);
    let floor_rect = sim.rect(floor);
    let wall_rect = sim.rect(wall);

    for _ in 0..40 {
        let stats = sim.step(1.0).expect("tick");
        // floor and wall touch but are both static
        assert!(stats.static_pairs_skipped >= 1);
    }

    for raw in [0, 1] {
        let h = BodyHandle::from_raw(raw);
        let rect = sim.rect(h).expect("live body");
        assert_eq!(rect.bottom(), 100.0, "body {} should rest on the floor", raw);
        assert_eq!(sim.velocity(h), Some(Vec2::zero()));
    }
    assert_eq!(sim.rect(floor), floor_rect);
    assert_eq!(sim.rect(wall), wall_rect);
}
