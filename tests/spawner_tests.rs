use bevy::math::IVec2;
use tilewarden::spawner::{RespawnRegistry, SpawnId};
use tilewarden::species::SpeciesId;
use tilewarden::world;

#[test]
fn ids_are_allocated_sequentially() {
    let mut registry = RespawnRegistry::new(10);
    let a = registry.allocate(SpeciesId::GreyMouse, IVec2::new(1, 2));
    let b = registry.allocate(SpeciesId::DesertWolf, IVec2::new(3, 4));
    let c = registry.allocate(SpeciesId::Dragon, IVec2::new(5, 6));
    assert_eq!((a, b, c), (SpawnId(0), SpawnId(1), SpawnId(2)));
}

#[test]
fn mark_dead_is_idempotent() {
    let mut registry = RespawnRegistry::new(10);
    let id = registry.allocate(SpeciesId::BrownMouse, IVec2::new(0, 0));
    registry.mark_dead(id);
    registry.mark_dead(id);
    assert_eq!(registry.pending_len(), 1);
    assert!(registry.is_pending(id));
}

#[test]
fn countdown_resolves_pending_and_rearms() {
    let mut registry = RespawnRegistry::new(3);
    let id = registry.allocate(SpeciesId::WhiteMouse, IVec2::new(7, 8));
    registry.mark_dead(id);
    assert!(registry.tick().is_empty());
    assert!(registry.tick().is_empty());
    assert!(registry.tick().is_empty());
    let respawned = registry.tick();
    assert_eq!(respawned, vec![(id, SpeciesId::WhiteMouse, IVec2::new(7, 8))]);
    assert_eq!(registry.pending_len(), 0);
    assert_eq!(registry.countdown(), 3);
}

#[test]
fn idle_clock_parks_at_zero_until_a_death() {
    let mut registry = RespawnRegistry::new(2);
    let id = registry.allocate(SpeciesId::BurntImp, IVec2::new(9, 9));
    for _ in 0..5 {
        assert!(registry.tick().is_empty());
    }
    assert_eq!(registry.countdown(), 0);
    // A kill during the idle phase comes back on the very next tick.
    registry.mark_dead(id);
    let respawned = registry.tick();
    assert_eq!(respawned.len(), 1);
    assert_eq!(registry.countdown(), 2);
}

#[test]
fn respawn_round_trip_keeps_the_origin_tile() {
    let mut registry = RespawnRegistry::new(1);
    let origin = IVec2::new(12, 5);
    let id = registry.allocate(SpeciesId::DesertBoss, origin);

    for _ in 0..3 {
        registry.mark_dead(id);
        registry.tick();
        let respawned = registry.tick();
        assert_eq!(respawned.len(), 1);
        let (respawn_id, species, tile) = respawned[0];
        assert_eq!(respawn_id, id);
        assert_eq!(species, SpeciesId::DesertBoss);
        assert_eq!(tile, origin);
        // World placement is derived from the tile alone.
        assert_eq!(world::world_to_tile(world::tile_to_world(tile)), (12, 5));
    }
}

#[test]
fn registry_entry_survives_respawn_cycles() {
    let mut registry = RespawnRegistry::new(1);
    let id = registry.allocate(SpeciesId::GreyMouse, IVec2::new(2, 2));
    registry.mark_dead(id);
    registry.tick();
    registry.tick();
    let entry = registry.entry(id).unwrap();
    assert_eq!(entry.species, SpeciesId::GreyMouse);
    assert_eq!(entry.origin_tile, IVec2::new(2, 2));
}
