use approx::assert_relative_eq;
use gravel::*;

const TILE: i32 = 16;

/// Builds a 12x12 layer of 16 px tiles with the given cells set.
fn layer_with(kinds: &[(i32, i32, TileKind)]) -> TileLayer {
    let map = IVec2::new(12, 12);
    let mut tiles = vec![Tile::default(); (map.x * map.y) as usize];
    for &(x, y, kind) in kinds {
        tiles[(y * map.x + x) as usize] = Tile::new(kind, 0);
    }
    TileLayer::new(IVec2::splat(TILE), map, tiles)
}

fn walker(world: &mut PhysicsWorld, position: Vec2, velocity: Vec2) -> EntityId {
    let mut body = Body::with_transform(Transform::from_position(position));
    body.use_gravity = false;
    body.velocity = velocity;
    let id = world.register_body(body);
    world.register_collider(Collider::new(id, ColliderShape::aabb(Vec2::splat(10.0))));
    id
}

#[test]
fn body_stops_flush_against_solid_column_every_tick() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[
        (5, 1, TileKind::Solid),
        (5, 2, TileKind::Solid),
    ]));
    let id = walker(&mut world, Vec2::new(65.0, 16.0), Vec2::new(100.0, 0.0));

    for _ in 0..3 {
        world.body_mut(id).unwrap().velocity = Vec2::new(100.0, 0.0);
        world.update(0.1);

        let body = world.body(id).unwrap();
        assert_relative_eq!(body.transform.position.x, 70.0);
        assert_eq!(body.velocity.x, 0.0);
        assert!(body.contacts.right);
    }
}

#[test]
fn unisolid_platform_is_one_way() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[(0, 5, TileKind::Unisolid)]));

    // Rising through the platform is never blocked.
    let rising = walker(&mut world, Vec2::new(2.0, 100.0), Vec2::new(0.0, -200.0));
    world.update(0.1);
    {
        let body = world.body(rising).unwrap();
        assert_relative_eq!(body.transform.position.y, 80.0);
        assert!(!body.contacts.above);
        assert_relative_eq!(body.velocity.y, -200.0);
    }
    world.unregister_body(rising);

    // Falling onto the same tile from above lands on it.
    let falling = walker(&mut world, Vec2::new(2.0, 60.0), Vec2::new(0.0, 150.0));
    world.update(0.1);
    let body = world.body(falling).unwrap();
    assert_relative_eq!(body.transform.position.y, 70.0);
    assert_eq!(body.velocity.y, 0.0);
    assert!(body.contacts.below);
}

#[test]
fn walking_uphill_follows_the_slope_surface() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[(2, 5, TileKind::SlopeUp)]));
    let id = walker(&mut world, Vec2::new(20.0, 85.0), Vec2::new(60.0, 0.0));

    world.update(0.1);

    let body = world.body(id).unwrap();
    assert_relative_eq!(body.transform.position.x, 26.0);
    assert_relative_eq!(body.transform.position.y, 82.0);
    assert_relative_eq!(body.velocity.x, 60.0);
}

#[test]
fn falling_body_rests_on_slope_and_is_grounded() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[(2, 5, TileKind::SlopeUp)]));
    let id = walker(&mut world, Vec2::new(30.0, 74.0), Vec2::new(0.0, 100.0));

    world.update(0.1);

    let body = world.body(id).unwrap();
    assert_relative_eq!(body.transform.position.y, 79.0);
    assert_eq!(body.velocity.y, 0.0);
    assert!(body.contacts.below);
}

#[test]
fn ladder_sets_climbing_flags_without_blocking() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[
        (1, 5, TileKind::Ladder),
        (1, 6, TileKind::Ladder),
    ]));

    // Body overlapping the ladder keeps falling but is flagged.
    let id = walker(&mut world, Vec2::new(16.0, 82.0), Vec2::new(0.0, 20.0));
    world.update(0.1);
    {
        let body = world.body(id).unwrap();
        assert_relative_eq!(body.transform.position.y, 84.0);
        assert!(body.contacts.on_ladder);
        assert!(!body.contacts.on_ladder_top);
    }
    assert!(world
        .tile_trigger_events()
        .contains(&(id, TileKind::Ladder)));
    world.unregister_body(id);

    // Body standing just above the ladder column.
    let id = walker(&mut world, Vec2::new(16.0, 70.0), Vec2::ZERO);
    world.update(0.1);
    let body = world.body(id).unwrap();
    assert!(!body.contacts.on_ladder);
    assert!(body.contacts.on_ladder_top);
}

#[test]
fn hazard_overlap_emits_trigger_event_for_one_tick() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[(0, 0, TileKind::Hazard)]));
    let id = walker(&mut world, Vec2::new(2.0, 2.0), Vec2::ZERO);

    world.update(0.1);
    assert_eq!(world.tile_trigger_events(), [(id, TileKind::Hazard)]);

    // Clear of the hazard: the event list resets.
    world.body_mut(id).unwrap().transform.position = Vec2::new(100.0, 100.0);
    world.update(0.1);
    assert!(world.tile_trigger_events().is_empty());
}

#[test]
fn degraded_layer_blocks_nothing() {
    let mut world = PhysicsWorld::new();
    // 8 tiles cannot fill a 3x3 map: the layer degrades to empty.
    let tiles = vec![Tile::new(TileKind::Solid, 0); 8];
    let layer = TileLayer::new(IVec2::splat(TILE), IVec2::new(3, 3), tiles);
    assert_eq!(layer.map_size(), IVec2::ZERO);
    world.register_tile_layer(layer);

    let id = walker(&mut world, Vec2::new(0.0, 16.0), Vec2::new(100.0, 0.0));
    world.update(0.1);

    let body = world.body(id).unwrap();
    assert_relative_eq!(body.transform.position.x, 10.0);
    assert!(!body.contacts.right);
}

#[test]
fn layer_with_bad_tile_size_is_skipped_for_the_tick() {
    let mut world = PhysicsWorld::new();
    let tiles = vec![Tile::new(TileKind::Solid, 0); 4];
    world.register_tile_layer(TileLayer::new(IVec2::new(0, TILE), IVec2::new(2, 2), tiles));

    let id = walker(&mut world, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    world.update(0.1);

    // The solid tiles never block because their layer cannot be sampled.
    let body = world.body(id).unwrap();
    assert_relative_eq!(body.transform.position.x, 10.0);
    assert!(!body.contacts.right);
}

#[test]
fn inactive_collider_ignores_tiles_but_still_moves() {
    let mut world = PhysicsWorld::new();
    world.register_tile_layer(layer_with(&[
        (5, 1, TileKind::Solid),
        (5, 2, TileKind::Solid),
    ]));
    let id = walker(&mut world, Vec2::new(65.0, 16.0), Vec2::new(100.0, 0.0));
    let collider_id = world.body(id).unwrap().collider;
    world.collider_mut(collider_id).unwrap().is_active = false;

    world.update(0.1);

    // Passes straight through the solid column.
    let body = world.body(id).unwrap();
    assert_relative_eq!(body.transform.position.x, 75.0);
    assert!(!body.contacts.right);
}

#[test]
fn layer_offset_shifts_the_collision_grid() {
    let mut world = PhysicsWorld::new();
    let mut layer = layer_with(&[(0, 1, TileKind::Solid), (0, 2, TileKind::Solid)]);
    layer.set_offset(Vec2::new(80.0, 0.0));
    world.register_tile_layer(layer);

    // The solid column now spans x in [80, 96).
    let id = walker(&mut world, Vec2::new(65.0, 16.0), Vec2::new(100.0, 0.0));
    world.update(0.1);

    let body = world.body(id).unwrap();
    assert_relative_eq!(body.transform.position.x, 70.0);
    assert_eq!(body.velocity.x, 0.0);
    assert!(body.contacts.right);
}
