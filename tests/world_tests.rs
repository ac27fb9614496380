use bevy::math::{IVec2, Vec2};
use tilewarden::game::{GameConfig, Zone};
use tilewarden::species::SpeciesId;
use tilewarden::world::{
    move_and_collide, parse_tilemap, tile_to_world, world_to_tile, MapError, DEFAULT_MAP,
    TILE_SIZE,
};

#[test]
fn parse_collects_seeds_in_scan_order() {
    let map = parse_tilemap("B.e\n.P.\na.B").unwrap();
    assert_eq!(map.player_tile, IVec2::new(1, 1));
    assert_eq!(map.block_tiles, vec![IVec2::new(0, 0), IVec2::new(2, 2)]);
    assert_eq!(
        map.seeds,
        vec![
            (SpeciesId::GreyMouse, IVec2::new(2, 0)),
            (SpeciesId::BrownMouse, IVec2::new(0, 2)),
        ]
    );
}

#[test]
fn parse_rejects_map_without_player() {
    assert_eq!(parse_tilemap("..e\n.B."), Err(MapError::NoPlayerSpawn));
}

#[test]
fn parse_rejects_second_player_spawn() {
    assert_eq!(
        parse_tilemap(".P.\n..P"),
        Err(MapError::MultiplePlayerSpawns { col: 2, row: 1 })
    );
}

#[test]
fn parse_rejects_unknown_glyph() {
    assert_eq!(
        parse_tilemap(".P.\n.q."),
        Err(MapError::UnknownTile { glyph: 'q', col: 1, row: 1 })
    );
}

#[test]
fn built_in_map_is_well_formed() {
    let map = parse_tilemap(DEFAULT_MAP).unwrap();
    assert_eq!(map.player_tile, IVec2::new(2, 2));
    let dragons: Vec<_> = map
        .seeds
        .iter()
        .filter(|(species, _)| *species == SpeciesId::Dragon)
        .collect();
    assert_eq!(dragons.len(), 1);
    assert_eq!(dragons[0].1, IVec2::new(36, 11));
    // Every zone is populated.
    let config = GameConfig::default();
    for zone in [Zone::Plains, Zone::Desert, Zone::Scorched] {
        assert!(
            map.seeds
                .iter()
                .any(|(_, tile)| config.zone_for_tile(tile.x, tile.y) == zone),
            "no seed in {zone:?}"
        );
    }
}

#[test]
fn tile_world_round_trip() {
    for tile in [IVec2::new(0, 0), IVec2::new(2, 2), IVec2::new(36, 11)] {
        let world = tile_to_world(tile);
        assert_eq!(world_to_tile(world), (tile.x, tile.y));
    }
}

#[test]
fn tile_rows_grow_downward_in_world_space() {
    let upper = tile_to_world(IVec2::new(0, 0));
    let lower = tile_to_world(IVec2::new(0, 1));
    assert!(lower.y < upper.y);
    assert_eq!(upper.x, TILE_SIZE / 2.0);
}

#[test]
fn collision_resolves_x_before_y_in_a_corner() {
    let blocks = [Vec2::new(100.0, 0.0)];
    let half = Vec2::splat(24.0);
    let block_half = Vec2::splat(TILE_SIZE / 2.0);

    let resolved = move_and_collide(Vec2::ZERO, half, Vec2::new(60.0, 10.0), &blocks, block_half);
    // The x step snaps to the block's west edge; the y step is then free.
    assert_eq!(resolved, Vec2::new(44.0, 10.0));
}

#[test]
fn collision_snaps_to_near_edge_on_y() {
    let blocks = [Vec2::new(0.0, -100.0)];
    let half = Vec2::splat(24.0);
    let block_half = Vec2::splat(TILE_SIZE / 2.0);

    let resolved = move_and_collide(Vec2::ZERO, half, Vec2::new(0.0, -60.0), &blocks, block_half);
    assert_eq!(resolved, Vec2::new(0.0, -44.0));
}

#[test]
fn free_movement_is_unobstructed() {
    let resolved = move_and_collide(
        Vec2::ZERO,
        Vec2::splat(24.0),
        Vec2::new(20.0, -20.0),
        &[],
        Vec2::splat(TILE_SIZE / 2.0),
    );
    assert_eq!(resolved, Vec2::new(20.0, -20.0));
}

#[test]
fn zone_follows_accumulated_displacement() {
    let config = GameConfig::default();
    let origin = tile_to_world(IVec2::new(2, 2));
    let mut traveled = Vec2::ZERO;

    let zone_at = |origin: Vec2, traveled: Vec2| {
        let (col, row) = world_to_tile(origin + traveled);
        config.zone_for_tile(col, row)
    };

    assert_eq!(zone_at(origin, traveled), Zone::Plains);
    // Eight tile rows south crosses the desert line.
    traveled.y -= 8.0 * TILE_SIZE;
    assert_eq!(zone_at(origin, traveled), Zone::Desert);
    traveled.y -= 8.0 * TILE_SIZE;
    assert_eq!(zone_at(origin, traveled), Zone::Scorched);
    // Far enough east and the boss room wins regardless of row.
    traveled.x += 31.0 * TILE_SIZE;
    assert_eq!(zone_at(origin, traveled), Zone::BossRoom);
}

#[test]
fn zone_thresholds() {
    let config = GameConfig::default();
    assert_eq!(config.zone_for_tile(2, 2), Zone::Plains);
    assert_eq!(config.zone_for_tile(2, 7), Zone::Plains);
    assert_eq!(config.zone_for_tile(2, 8), Zone::Desert);
    assert_eq!(config.zone_for_tile(2, 15), Zone::Desert);
    assert_eq!(config.zone_for_tile(2, 16), Zone::Scorched);
    assert_eq!(config.zone_for_tile(33, 11), Zone::BossRoom);
}
