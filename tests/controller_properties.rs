use platformer_physics::{
    Body, BodySettings, CollisionBox, NormalModel, PhysicsController, PhysicsSettings, Rect,
    SurfaceProps, SurfaceSettings, Vec2,
};

fn controller(gravity: f32, terminal_velocity: f32) -> PhysicsController {
    PhysicsController::new(PhysicsSettings::new(gravity, terminal_velocity)).expect("valid settings")
}

fn floor_settings(friction: f32, restitution: f32) -> SurfaceSettings {
    SurfaceSettings {
        body: BodySettings::fixed(CollisionBox::all()),
        friction_coefficient: friction,
        restitution_coefficient: restitution,
        incline: 0.0,
        normal_model: NormalModel::Projected,
    }
}

#[test]
fn free_fall_matches_clamped_running_sum() {
    for (gravity, terminal, dt) in [(1.0f32, 10.0f32, 1.0f32), (0.5, 3.0, 0.25), (2.0, 100.0, 0.5)] {
        let mut c = controller(gravity, terminal);
        let h = c.add_body(Body::new(&BodySettings::default(), Rect::new(0.0, 0.0, 8.0, 8.0)).expect("body"));
        let mut y = 0.0f32;
        for n in 1..=25 {
            c.update(dt).expect("tick");
            let vy = (gravity * n as f32).min(terminal);
            y += vy * dt;
            let v = c.velocity(h).expect("live");
            assert!((v.y - vy).abs() < 1e-4, "tick {}: vy {} != {}", n, v.y, vy);
            let rect = c.rect(h).expect("live");
            assert!((rect.y - y).abs() < 1e-3, "tick {}: y {} != {}", n, rect.y, y);
        }
    }
}

#[test]
fn disabled_edges_never_collide_despite_overlap() {
    let masks = [
        (CollisionBox::none(), CollisionBox::all()),
        (CollisionBox::all(), CollisionBox::none()),
        (
            CollisionBox { top: true, left: true, ..CollisionBox::none() },
            CollisionBox { top: true, left: true, ..CollisionBox::none() },
        ),
    ];
    for (mask_a, mask_b) in masks {
        let mut c = controller(1.0, 10.0);
        let a = Body::new(&BodySettings::dynamic(mask_a), Rect::new(0.0, 0.0, 10.0, 10.0)).expect("body");
        let b = Body::new(&BodySettings::dynamic(mask_b), Rect::new(0.0, 10.0, 10.0, 10.0)).expect("body");
        assert!(!a.colliding(&b));
        assert!(!b.colliding(&a));
        c.add_body(a);
        c.add_body(b);
        for _ in 0..5 {
            let stats = c.update(1.0).expect("tick");
            assert_eq!(stats.collisions, 0);
        }
    }
}

#[test]
fn friction_is_bounded_by_net_force() {
    let mut samples = Vec::new();
    for i in -4..=4 {
        for j in -4..=4 {
            samples.push(Vec2::new(i as f32 * 0.37, j as f32 * 1.9));
        }
    }
    for incline in [-135.0f32, -60.0, -15.0, 0.0, 10.0, 45.0, 80.0, 120.0, 180.0] {
        for coefficient in [0.0f32, 0.3, 0.8, 2.5, 40.0] {
            let props = SurfaceProps {
                incline,
                friction_coefficient: coefficient,
                restitution_coefficient: 0.0,
                normal_model: NormalModel::Projected,
            };
            for &f in &samples {
                let fr = props.friction(f);
                assert!(fr.x.abs() <= f.x.abs(), "{:?} -> {:?}", f, fr);
                assert!(fr.y.abs() <= f.y.abs(), "{:?} -> {:?}", f, fr);
                assert!(fr.x * f.x <= 0.0 && fr.y * f.y <= 0.0, "incline {}: {:?} -> {:?}", incline, f, fr);
            }
        }
    }
}

#[test]
fn zero_input_gives_zero_normal_and_friction() {
    let floor = Body::surface(&floor_settings(0.8, 0.3), Rect::new(0.0, 10.0, 50.0, 10.0)).expect("floor");
    let props = *floor.surface_props().expect("surface");
    let resting = Body::new(&BodySettings::default(), Rect::new(0.0, 0.0, 10.0, 10.0)).expect("body");
    assert_eq!(props.friction(Vec2::zero()), Vec2::zero());
    assert_eq!(props.normal(&floor.rect(), &resting), Vec2::zero());
}

#[test]
fn overlap_fix_never_exceeds_overlap_extents() {
    let floor_rect = Rect::new(0.0, 50.0, 100.0, 50.0);
    let props = *Body::surface(&floor_settings(0.8, 0.0), floor_rect)
        .expect("floor")
        .surface_props()
        .expect("surface");
    for depth in [0.0f32, 0.25, 1.0, 3.5, 9.0] {
        for vy in [0.5f32, 2.0, 10.0, 250.0] {
            let mut body = Body::new(&BodySettings::default(), Rect::new(10.0, 40.0 + depth, 10.0, 10.0)).expect("body");
            body.set_velocity(Vec2::new(3.0, vy));
            let overlap = body.rect().clip(&floor_rect);
            let before = body.rect();
            props.fix_overlap(&floor_rect, &mut body);
            let after = body.rect();
            assert!((after.x - before.x).abs() <= overlap.w);
            assert!((after.y - before.y).abs() <= overlap.h + 1e-6);
            assert!(after.bottom() >= floor_rect.top() - 1e-4);
        }
    }
}

#[test]
fn static_pairs_stay_untouched() {
    let mut c = controller(1.0, 10.0);
    let a = c.add_body(Body::surface(&floor_settings(0.8, 0.5), Rect::new(0.0, 0.0, 20.0, 20.0)).expect("surface"));
    let b = c.add_body(
        Body::new(&BodySettings::fixed(CollisionBox::all()), Rect::new(10.0, 10.0, 20.0, 20.0)).expect("body"),
    );
    let before = (c.body(a).cloned(), c.body(b).cloned());
    for _ in 0..10 {
        let stats = c.update(1.0).expect("tick");
        assert_eq!(stats.static_pairs_skipped, 1);
        assert_eq!(stats.collisions, 0);
    }
    assert_eq!(c.rect(a), before.0.as_ref().map(Body::rect));
    assert_eq!(c.rect(b), before.1.as_ref().map(Body::rect));
    assert_eq!(c.velocity(a), Some(Vec2::zero()));
    assert_eq!(c.velocity(b), Some(Vec2::zero()));
}

#[test]
fn reset_is_independent_of_history() {
    let mut c = controller(1.0, 10.0);
    let body = c.add_body(Body::new(&BodySettings::default(), Rect::new(5.0, 5.0, 10.0, 10.0)).expect("body"));
    c.add_body(Body::surface(&floor_settings(0.8, 0.5), Rect::new(-20.0, 60.0, 100.0, 10.0)).expect("floor"));
    for ticks in [0, 3, 17, 40] {
        for _ in 0..ticks {
            c.update(1.0).expect("tick");
        }
        c.apply_force(body, Vec2::new(4.0, -2.0));
        c.reset();
        let b = c.body(body).expect("live");
        assert_eq!(b.rect(), Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(b.velocity(), Vec2::zero());
        assert_eq!(b.last_position(), Vec2::new(5.0, 5.0));
    }
}

#[test]
fn falling_body_comes_to_rest_on_flat_surface() {
    let mut c = controller(1.0, 10.0);
    let bottom_only = CollisionBox { bottom: true, ..CollisionBox::none() };
    let body = c.add_body(
        Body::new(&BodySettings::dynamic(bottom_only), Rect::new(0.0, 0.0, 10.0, 10.0)).expect("body"),
    );
    let surface = c.add_body(Body::surface(&floor_settings(0.8, 0.0), Rect::new(-50.0, 60.0, 200.0, 20.0)).expect("floor"));
    let surface_rect = c.rect(surface);

    let mut landed_at = None;
    for tick in 1..=30 {
        let stats = c.update(1.0).expect("tick");
        assert_eq!(c.rect(surface), surface_rect);
        assert_eq!(c.velocity(surface), Some(Vec2::zero()));
        if stats.collisions > 0 && landed_at.is_none() {
            landed_at = Some(tick);
        }
        if landed_at.is_some() {
            let rect = c.rect(body).expect("live");
            assert_eq!(rect.bottom(), 60.0, "tick {}", tick);
            assert_eq!(c.velocity(body), Some(Vec2::zero()), "tick {}", tick);
        }
    }
    // bottom crosses the surface on tick 10 and is resolved on tick 11
    assert_eq!(landed_at, Some(11));
}

#[test]
fn restitution_bounces_the_body_back_up() {
    let mut c = controller(1.0, 10.0);
    let body = c.add_body(Body::new(&BodySettings::default(), Rect::new(0.0, 0.0, 10.0, 10.0)).expect("body"));
    c.add_body(Body::surface(&floor_settings(0.0, 0.5), Rect::new(-50.0, 60.0, 200.0, 20.0)).expect("floor"));
    for _ in 0..10 {
        c.update(1.0).expect("tick");
    }
    let stats = c.update(1.0).expect("landing tick");
    assert_eq!(stats.collisions, 1);
    // arrived at 11 (10 + gravity), normal 11 * (1 + 0.5)
    assert_eq!(c.velocity(body), Some(Vec2::new(0.0, -5.5)));
}

#[test]
fn sliding_friction_stops_without_reversing() {
    let mut c = controller(1.0, 10.0);
    let body = c.add_body(Body::new(&BodySettings::default(), Rect::new(0.0, 50.0, 10.0, 10.0)).expect("body"));
    c.add_body(Body::surface(&floor_settings(0.8, 0.0), Rect::new(-50.0, 60.0, 200.0, 20.0)).expect("floor"));
    c.body_mut(body).expect("live").set_velocity(Vec2::new(3.0, 0.0));

    let mut last_vx = 3.0;
    for _ in 0..10 {
        c.update(1.0).expect("tick");
        let v = c.velocity(body).expect("live");
        assert!(v.x <= last_vx);
        assert!(v.x >= 0.0);
        assert_eq!(v.y, 0.0);
        last_vx = v.x;
    }
    assert_eq!(last_vx, 0.0);
    assert_eq!(c.rect(body).map(|r| r.bottom()), Some(60.0));
}

#[test]
fn ceiling_friction_slows_a_body_pressed_against_it() {
    // negative gravity presses the body up into an upside-down surface
    let mut c = controller(-1.0, 10.0);
    let body = c.add_body(Body::new(&BodySettings::default(), Rect::new(0.0, 20.0, 10.0, 10.0)).expect("body"));
    let ceiling = SurfaceSettings { incline: 180.0, ..floor_settings(0.8, 0.0) };
    c.add_body(Body::surface(&ceiling, Rect::new(-50.0, 0.0, 200.0, 20.0)).expect("ceiling"));
    c.body_mut(body).expect("live").set_velocity(Vec2::new(3.0, 0.0));

    let mut last_vx = 3.0;
    for tick in 1..=8 {
        c.update(1.0).expect("tick");
        let vx = c.velocity(body).expect("live").x;
        assert!(vx <= last_vx + 1e-5, "tick {}: vx grew {} -> {}", tick, last_vx, vx);
        assert!(vx >= -1e-5, "tick {}: vx reversed to {}", tick, vx);
        last_vx = vx;
    }
    assert!(last_vx < 3.0);
}
