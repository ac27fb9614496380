use bevy::prelude::*;

use crate::enemy;
use crate::game::BookkeepingSet;
use crate::species::SpeciesId;
use crate::world;

pub const DEFAULT_RESPAWN_DELAY: u32 = 5000;

/// Stable identity of a spawn point. Allocated once at world build and
/// kept across any number of death/respawn cycles.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnId(pub u32);

#[derive(Debug, Clone, Copy)]
pub struct SpawnEntry {
    pub species: SpeciesId,
    pub origin_tile: IVec2,
}

#[derive(Resource)]
pub struct RespawnRegistry {
    entries: Vec<SpawnEntry>,
    pending: Vec<SpawnId>,
    countdown: u32,
    delay: u32,
}

impl Default for RespawnRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_RESPAWN_DELAY)
    }
}

impl RespawnRegistry {
    pub fn new(delay: u32) -> Self {
        Self {
            entries: Vec::new(),
            pending: Vec::new(),
            countdown: delay,
            delay,
        }
    }

    pub fn allocate(&mut self, species: SpeciesId, origin_tile: IVec2) -> SpawnId {
        let id = SpawnId(self.entries.len() as u32);
        self.entries.push(SpawnEntry { species, origin_tile });
        id
    }

    pub fn entry(&self, id: SpawnId) -> Option<&SpawnEntry> {
        self.entries.get(id.0 as usize)
    }

    /// Queues a spawn point for the next respawn cycle. Duplicate
    /// notifications for the same id respawn once.
    pub fn mark_dead(&mut self, id: SpawnId) {
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
    }

    pub fn is_pending(&self, id: SpawnId) -> bool {
        self.pending.contains(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// One tick of the respawn clock. At zero, resolves every pending id
    /// to its species and origin tile; the clock only rearms when it
    /// actually respawned something, so a kill during the idle phase
    /// comes back on the next tick.
    pub fn tick(&mut self) -> Vec<(SpawnId, SpeciesId, IVec2)> {
        if self.countdown > 0 {
            self.countdown -= 1;
            return Vec::new();
        }
        if self.pending.is_empty() {
            return Vec::new();
        }
        self.countdown = self.delay;
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|id| {
                let entry = self.entries[id.0 as usize];
                (id, entry.species, entry.origin_tile)
            })
            .collect()
    }
}

pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnRegistry>()
            .add_systems(FixedUpdate, respawn_system.in_set(BookkeepingSet::Respawn));
    }
}

fn respawn_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut registry: ResMut<RespawnRegistry>,
) {
    for (id, species, origin_tile) in registry.tick() {
        enemy::spawn_enemy(
            &mut commands,
            &asset_server,
            species,
            id,
            world::tile_to_world(origin_tile),
        );
    }
}
