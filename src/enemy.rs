use bevy::prelude::*;

use crate::attacks;
use crate::bars::XpGained;
use crate::components::{CooldownCounter, Facing, Health};
use crate::game::{AppState, CurrentZone, GameConfig, SessionScoped, SimSet, Zone};
use crate::player::Player;
use crate::spawner::{RespawnRegistry, SpawnId};
use crate::species::{Rank, SpeciesDef, SpeciesId};
use crate::visual_effects;
use crate::world::{self, Block};

pub const ENEMY_SIZE: f32 = 56.0;
pub const FINAL_BOSS_AGGRO_RADIUS: f32 = 1200.0;
/// Boss ultimates reach a bit past the chase radius.
pub const BOSS_ULTIMATE_RANGE_BONUS: f32 = 100.0;

#[derive(Component)]
pub struct Enemy {
    pub species: SpeciesId,
}

/// Current movement speed in pixels per tick. Starts at the species
/// value; tiered player attacks chip away at it.
#[derive(Component)]
pub struct MoveSpeed(pub f32);

#[derive(Component)]
pub struct BossUltimate(pub CooldownCounter);

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                enemy_cooldown_system,
                enemy_movement_system,
                enemy_death_system,
                enemy_attack_system,
                boss_ultimate_system,
            )
                .chain()
                .in_set(SimSet::Enemies),
        );
    }
}

fn sprite_path(species: SpeciesId) -> &'static str {
    match species {
        SpeciesId::GreyMouse => "sprites/grey_mouse_placeholder.png",
        SpeciesId::BrownMouse => "sprites/brown_mouse_placeholder.png",
        SpeciesId::WhiteMouse => "sprites/white_mouse_placeholder.png",
        SpeciesId::BossMouse => "sprites/boss_mouse_placeholder.png",
        SpeciesId::DesertBoarman => "sprites/desert_boarman_placeholder.png",
        SpeciesId::DesertWolf => "sprites/desert_wolf_placeholder.png",
        SpeciesId::DesertWartotaur => "sprites/desert_wartotaur_placeholder.png",
        SpeciesId::DesertBoss => "sprites/desert_boss_placeholder.png",
        SpeciesId::BurntImp => "sprites/burnt_imp_placeholder.png",
        SpeciesId::BurntSuccubus => "sprites/burnt_succubus_placeholder.png",
        SpeciesId::BurntFallenAngel => "sprites/burnt_fallen_angel_placeholder.png",
        SpeciesId::Dragon => "sprites/dragon_placeholder.png",
    }
}

pub fn spawn_enemy(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    species: SpeciesId,
    spawn_id: SpawnId,
    position: Vec2,
) {
    let def = species.def();
    let facing = match rand::random::<u32>() % 4 {
        0 => Facing::Up,
        1 => Facing::Down,
        2 => Facing::Left,
        _ => Facing::Right,
    };
    let mut entity = commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::splat(ENEMY_SIZE)),
                ..default()
            },
            texture: asset_server.load(sprite_path(species)),
            transform: Transform::from_translation(position.extend(1.0)),
            ..default()
        },
        Enemy { species },
        spawn_id,
        Health(def.health),
        MoveSpeed(def.speed),
        CooldownCounter::new(def.attack_cooldown),
        facing,
        SessionScoped,
        Name::new(def.name),
    ));
    if let Some((ultimate_cooldown, _)) = def.rank.ultimate() {
        entity.insert(BossUltimate(CooldownCounter::new(ultimate_cooldown)));
    }
}

/// Whether a species acts this tick. The final boss never sleeps.
fn zone_active(def: &SpeciesDef, current: Zone) -> bool {
    matches!(def.rank, Rank::FinalBoss { .. }) || def.zone == current
}

fn aggro_radius(def: &SpeciesDef, config: &GameConfig) -> f32 {
    if matches!(def.rank, Rank::FinalBoss { .. }) {
        FINAL_BOSS_AGGRO_RADIUS
    } else {
        config.aggro_radius
    }
}

fn enemy_cooldown_system(
    current_zone: Res<CurrentZone>,
    mut enemy_query: Query<(&Enemy, &mut CooldownCounter, Option<&mut BossUltimate>)>,
) {
    for (enemy, mut cooldown, boss_ultimate) in enemy_query.iter_mut() {
        if !zone_active(enemy.species.def(), current_zone.0) {
            continue;
        }
        cooldown.tick();
        if let Some(mut ultimate) = boss_ultimate {
            ultimate.0.tick();
        }
    }
}

/// One cardinal step per tick toward the player, along the axis with
/// the larger remaining distance. Blocks snap the step back to their
/// near edge; x resolves before y.
fn enemy_movement_system(
    current_zone: Res<CurrentZone>,
    config: Res<GameConfig>,
    mut enemy_query: Query<
        (&mut Transform, &mut Facing, &MoveSpeed, &Enemy),
        (With<Enemy>, Without<Player>, Without<Block>),
    >,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    block_query: Query<&Transform, With<Block>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_position = player_transform.translation.truncate();
    let blocks: Vec<Vec2> = block_query
        .iter()
        .map(|t| t.translation.truncate())
        .collect();
    let enemy_half = Vec2::splat(ENEMY_SIZE / 2.0);
    let block_half = Vec2::splat(world::TILE_SIZE / 2.0);

    for (mut transform, mut facing, move_speed, enemy) in enemy_query.iter_mut() {
        let def = enemy.species.def();
        if !zone_active(def, current_zone.0) {
            continue;
        }
        let position = transform.translation.truncate();
        let to_player = player_position - position;
        if to_player.length() >= aggro_radius(def, &config) {
            continue;
        }
        let step = if to_player.x.abs() >= to_player.y.abs() {
            *facing = if to_player.x >= 0.0 { Facing::Right } else { Facing::Left };
            Vec2::new(to_player.x.signum() * move_speed.0, 0.0)
        } else {
            *facing = if to_player.y >= 0.0 { Facing::Up } else { Facing::Down };
            Vec2::new(0.0, to_player.y.signum() * move_speed.0)
        };
        let resolved = world::move_and_collide(position, enemy_half, step, &blocks, block_half);
        transform.translation.x = resolved.x;
        transform.translation.y = resolved.y;
    }
}

fn enemy_death_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    enemy_query: Query<(Entity, &Transform, &Health, &Enemy, &SpawnId)>,
    mut registry: ResMut<RespawnRegistry>,
    mut xp_events: EventWriter<XpGained>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (entity, transform, health, enemy, spawn_id) in enemy_query.iter() {
        if !health.is_dead() {
            continue;
        }
        let def = enemy.species.def();
        xp_events.send(XpGained(def.xp));
        registry.mark_dead(*spawn_id);
        visual_effects::spawn_xp_text(
            &mut commands,
            &asset_server,
            transform.translation,
            def.xp,
            &time,
        );
        commands.entity(entity).despawn_recursive();
        if matches!(def.rank, Rank::FinalBoss { .. }) {
            next_state.set(AppState::Victory);
        }
    }
}

fn enemy_attack_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    current_zone: Res<CurrentZone>,
    config: Res<GameConfig>,
    mut enemy_query: Query<(&Transform, &Health, &MoveSpeed, &Enemy, &mut CooldownCounter)>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_position = player_transform.translation.truncate();
    for (transform, health, move_speed, enemy, mut cooldown) in enemy_query.iter_mut() {
        let def = enemy.species.def();
        if health.is_dead() || !zone_active(def, current_zone.0) || !cooldown.ready() {
            continue;
        }
        let position = transform.translation.truncate();
        if position.distance(player_position) >= aggro_radius(def, &config) {
            continue;
        }
        attacks::spawn_enemy_shot(
            &mut commands,
            &asset_server,
            position,
            player_position,
            def.damage,
            move_speed.0,
            attacks::ENEMY_SHOT_FACTOR,
        );
        cooldown.fire();
    }
}

/// The ultimate clock restarts whenever it comes up ready, but the shot
/// itself only happens with the player in extended range.
fn boss_ultimate_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    current_zone: Res<CurrentZone>,
    config: Res<GameConfig>,
    mut boss_query: Query<(&Transform, &Health, &MoveSpeed, &Enemy, &mut BossUltimate)>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_position = player_transform.translation.truncate();
    for (transform, health, move_speed, enemy, mut ultimate) in boss_query.iter_mut() {
        let def = enemy.species.def();
        if health.is_dead() || !zone_active(def, current_zone.0) || !ultimate.0.ready() {
            continue;
        }
        let Some((_, multiplier)) = def.rank.ultimate() else {
            continue;
        };
        let position = transform.translation.truncate();
        let range = aggro_radius(def, &config) + BOSS_ULTIMATE_RANGE_BONUS;
        if position.distance(player_position) < range {
            attacks::spawn_enemy_shot(
                &mut commands,
                &asset_server,
                position,
                player_position,
                def.damage * multiplier,
                move_speed.0,
                attacks::BOSS_SHOT_FACTOR,
            );
        }
        ultimate.0.fire();
    }
}
