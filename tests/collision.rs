use rigid2d::collision::{
    detect_circle_circle_collision, detect_plane_polygon_collision,
    detect_polygon_polygon_collision,
};
use rigid2d::{regular_polygon, Body, Material, Scene, Vec2};

fn square(half: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
}

#[test]
fn circle_circle_detection_is_deterministic() {
    let a = Body::circle(Vec2::ZERO, 1.0).unwrap();
    let b = Body::circle(Vec2::new(1.5, 0.0), 1.0).unwrap();

    let manifold = detect_circle_circle_collision(&a, &b).expect("circles overlap");
    assert_eq!(manifold.normal, Vec2::new(1.0, 0.0));
    assert!((manifold.depth - 0.5).abs() < 1e-6);
    assert_eq!(manifold.contacts.len(), 1);

    // Re-running the detection yields the identical manifold.
    let again = detect_circle_circle_collision(&a, &b).expect("circles overlap");
    assert_eq!(again.normal, manifold.normal);
    assert_eq!(again.depth, manifold.depth);
    assert_eq!(again.contacts, manifold.contacts);
}

#[test]
fn disjoint_squares_are_separated_by_sat() {
    let a = Body::polygon(Vec2::ZERO, &square(1.0)).unwrap();
    let b = Body::polygon(Vec2::new(3.0, 0.0), &square(1.0)).unwrap();
    assert!(detect_polygon_polygon_collision(&a, &b).is_none());
}

#[test]
fn overlapping_squares_penetrate_along_x() {
    let a = Body::polygon(Vec2::ZERO, &square(1.0)).unwrap();
    let b = Body::polygon(Vec2::new(1.0, 0.0), &square(1.0)).unwrap();
    let manifold = detect_polygon_polygon_collision(&a, &b).expect("squares overlap");
    assert!((manifold.normal.x.abs() - 1.0).abs() < 1e-6);
    assert!(manifold.normal.y.abs() < 1e-6);
    assert!((manifold.depth - 1.0).abs() < 1e-6);
}

#[test]
fn plane_polygon_contacts_are_the_buried_vertices() {
    let plane = Body::plane(Vec2::ZERO, Vec2::new(0.0, 1.0)).unwrap();
    let block = Body::polygon(Vec2::new(0.0, 0.75), &square(1.0)).unwrap();
    let manifold = detect_plane_polygon_collision(&plane, &block).expect("block is buried");
    assert_eq!(manifold.contacts.len(), 2);
    assert!((manifold.depth - 0.25).abs() < 1e-6);
}

#[test]
fn two_planes_produce_no_manifold_through_the_scene() {
    let mut scene = Scene::default();
    scene
        .add_plane(Vec2::ZERO, Vec2::new(0.0, 1.0))
        .unwrap();
    scene
        .add_plane(Vec2::new(0.0, 0.5), Vec2::new(0.0, -1.0))
        .unwrap();

    for _ in 0..10 {
        let manifolds = scene.step(1.0 / 60.0).expect("not paused");
        assert!(manifolds.is_empty());
    }
}

#[test]
fn elastic_equal_mass_circles_swap_velocities() {
    let elastic = Material::new(1.0, 0.0, 0.0);
    let mut scene = Scene::new(Vec2::ZERO);
    scene.spawn(
        Body::circle(Vec2::new(-0.46, 0.0), 0.5)
            .unwrap()
            .with_velocity(Vec2::new(1.0, 0.0))
            .with_material(elastic),
    );
    scene.spawn(
        Body::circle(Vec2::new(0.46, 0.0), 0.5)
            .unwrap()
            .with_velocity(Vec2::new(-1.0, 0.0))
            .with_material(elastic),
    );

    let manifolds = scene.step(0.01).expect("not paused");
    assert_eq!(manifolds.len(), 1);

    let a = &scene.bodies()[0];
    let b = &scene.bodies()[1];
    assert!((a.vel.x - -1.0).abs() < 1e-4);
    assert!((b.vel.x - 1.0).abs() < 1e-4);
}

#[test]
fn internal_impulses_conserve_momentum() {
    let mut scene = Scene::new(Vec2::ZERO);
    scene.spawn(
        Body::circle(Vec2::new(-0.4, 0.05), 0.5)
            .unwrap()
            .with_velocity(Vec2::new(2.0, 0.3)),
    );
    scene.spawn(
        Body::circle(Vec2::new(0.4, -0.05), 0.5)
            .unwrap()
            .with_velocity(Vec2::new(-1.0, 0.1)),
    );

    // Equal radii mean equal masses, so velocity sums track momentum.
    let before = scene.bodies()[0].vel + scene.bodies()[1].vel;
    scene.step(0.01);
    let after = scene.bodies()[0].vel + scene.bodies()[1].vel;
    assert!((before.x - after.x).abs() < 1e-4);
    assert!((before.y - after.y).abs() < 1e-4);
}

#[test]
fn mixed_pile_produces_manifolds_for_every_pair_kind() {
    // A mixed pile must produce manifolds through the dispatch layer for
    // every pair kind present.
    let mut scene = Scene::default();
    scene.add_plane(Vec2::ZERO, Vec2::new(0.0, 1.0)).unwrap();
    scene.add_circle(Vec2::new(0.0, 0.4), 0.5).unwrap();
    scene
        .add_polygon(Vec2::new(0.1, 1.2), &regular_polygon(0.5, 6))
        .unwrap();

    let manifolds = scene.step(1.0 / 60.0).expect("not paused");
    assert!(!manifolds.is_empty());
    let manifold_count = manifolds.len();
    // Retained for inspection after the step returns.
    assert_eq!(scene.collisions().len(), manifold_count);
}
