use bevy::prelude::*;

use crate::audio::{PlaySoundEvent, SoundEffect};
use crate::bars::HealthBar;
use crate::components::{Damage, FrameLifetime, Health, Velocity};
use crate::enemy::{Enemy, MoveSpeed, ENEMY_SIZE};
use crate::game::{SessionScoped, SimSet};
use crate::player::{Player, PLAYER_SIZE};
use crate::visual_effects;
use crate::world;

pub const BASIC_ATTACK_BASE_LIFETIME: u32 = 70;
pub const ULTIMATE_LIFETIME: u32 = 160;
pub const ENEMY_SHOT_LIFETIME: u32 = 200;
pub const PROJECTILE_SIZE: f32 = 16.0;

/// Per-tick velocity multipliers for enemy fire. The shot direction is
/// scaled by the species speed, doubled at spawn, then applied twice
/// (regular) or two-and-a-half times (boss ultimate) per tick.
pub const ENEMY_SHOT_FACTOR: f32 = 4.0;
pub const BOSS_SHOT_FACTOR: f32 = 5.0;

/// Damage tier of a basic attack, locked in at spawn from the basic
/// attack skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackTier(pub u32);

impl AttackTier {
    pub fn from_level(basic_attack_level: u32) -> Self {
        Self(basic_attack_level / 3)
    }

    pub fn multiplier(self) -> i32 {
        match self.0 {
            0 => 1,
            1 | 2 => 2,
            3 => 3,
            4 => 4,
            _ => 5,
        }
    }

    /// Permanent movement speed loss inflicted on each enemy hit.
    pub fn slow_penalty(self) -> f32 {
        match self.0 {
            2 => 0.05,
            3 => 0.1,
            0 | 1 | 4 => 0.0,
            _ => 0.25,
        }
    }
}

#[derive(Component)]
pub struct Projectile;

#[derive(Component)]
pub struct BasicAttack {
    pub tier: AttackTier,
}

#[derive(Component)]
pub struct UltimateAttack {
    pub hits: u32,
    pub max_hits: u32,
    pub already_hit: Vec<Entity>,
}

impl UltimateAttack {
    pub fn new(max_hits: u32) -> Self {
        Self { hits: 0, max_hits, already_hit: Vec::new() }
    }

    /// Counts one damaged enemy; returns true once the pierce cap is
    /// reached and the projectile should go away.
    pub fn register_hit(&mut self) -> bool {
        self.hits += 1;
        self.hits >= self.max_hits
    }
}

#[derive(Component)]
pub struct EnemyShot;

pub struct AttacksPlugin;

impl Plugin for AttacksPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                projectile_move_system,
                basic_attack_collision_system,
                ultimate_attack_collision_system,
                enemy_shot_collision_system,
                projectile_lifetime_system,
            )
                .chain()
                .in_set(SimSet::Attacks),
        );
    }
}

pub fn spawn_basic_attack(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    player: &Player,
    origin: Vec2,
    direction: Vec2,
) {
    let damage = player.basic_attack_damage() + 3 * player.basic_attack_level as i32;
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::splat(PROJECTILE_SIZE)),
                ..default()
            },
            texture: asset_server.load("sprites/basic_attack_placeholder.png"),
            transform: Transform::from_translation(origin.extend(2.0)),
            ..default()
        },
        BasicAttack { tier: AttackTier::from_level(player.basic_attack_level) },
        Projectile,
        Velocity(direction * player.speed()),
        Damage(damage),
        FrameLifetime(BASIC_ATTACK_BASE_LIFETIME * (player.speed_level + 1)),
        SessionScoped,
        Name::new("BasicAttack"),
    ));
}

pub fn spawn_ultimate_attack(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    player: &Player,
    origin: Vec2,
    direction: Vec2,
) {
    let damage = player.ultimate_attack_damage() + 5 * player.ultimate_attack_level as i32;
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::splat(PROJECTILE_SIZE * 1.5)),
                ..default()
            },
            texture: asset_server.load("sprites/ultimate_attack_placeholder.png"),
            transform: Transform::from_translation(origin.extend(2.0)),
            ..default()
        },
        UltimateAttack::new(1 + player.ultimate_attack_level),
        Projectile,
        Velocity(direction * player.speed() * 2.0),
        Damage(damage),
        FrameLifetime(ULTIMATE_LIFETIME),
        SessionScoped,
        Name::new("UltimateAttack"),
    ));
}

pub fn spawn_enemy_shot(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    origin: Vec2,
    target: Vec2,
    damage: i32,
    speed: f32,
    factor: f32,
) {
    let direction = (target - origin).normalize_or_zero();
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::splat(PROJECTILE_SIZE)),
                ..default()
            },
            texture: asset_server.load("sprites/enemy_shot_placeholder.png"),
            transform: Transform::from_translation(origin.extend(2.0)),
            ..default()
        },
        EnemyShot,
        Projectile,
        Velocity(direction * speed * factor),
        Damage(damage),
        FrameLifetime(ENEMY_SHOT_LIFETIME),
        SessionScoped,
        Name::new("EnemyShot"),
    ));
}

fn projectile_move_system(mut query: Query<(&mut Transform, &Velocity), With<Projectile>>) {
    for (mut transform, velocity) in query.iter_mut() {
        transform.translation.x += velocity.x;
        transform.translation.y += velocity.y;
    }
}

fn projectile_lifetime_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut FrameLifetime), With<Projectile>>,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        if lifetime.tick() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Every enemy overlapping the projectile this tick takes tier damage,
/// then the projectile goes away.
fn basic_attack_collision_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    attack_query: Query<(Entity, &Transform, &Damage, &BasicAttack)>,
    mut enemy_query: Query<(&Transform, &mut Health, &mut MoveSpeed, &Enemy)>,
    mut sound_events: EventWriter<PlaySoundEvent>,
) {
    let half = Vec2::splat(PROJECTILE_SIZE / 2.0);
    let enemy_half = Vec2::splat(ENEMY_SIZE / 2.0);
    for (attack_entity, attack_transform, damage, attack) in attack_query.iter() {
        let attack_position = attack_transform.translation.truncate();
        let mut hit_any = false;
        for (enemy_transform, mut health, mut move_speed, enemy) in enemy_query.iter_mut() {
            let enemy_position = enemy_transform.translation.truncate();
            if !world::aabb_overlap(attack_position, half, enemy_position, enemy_half) {
                continue;
            }
            hit_any = true;
            let dealt = damage.0 * attack.tier.multiplier();
            health.take(dealt);
            move_speed.0 = (move_speed.0 - attack.tier.slow_penalty()).max(0.0);
            sound_events.send(PlaySoundEvent(enemy.species.def().hit_sound));
            visual_effects::spawn_damage_text(
                &mut commands,
                &asset_server,
                enemy_transform.translation,
                dealt,
                &time,
            );
        }
        if hit_any {
            commands.entity(attack_entity).despawn_recursive();
        }
    }
}

/// Pierces through enemies until the hit counter reaches the cap. All
/// enemies overlapping in the final tick are still damaged.
fn ultimate_attack_collision_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    mut attack_query: Query<(Entity, &Transform, &Damage, &mut UltimateAttack)>,
    mut enemy_query: Query<(Entity, &Transform, &mut Health, &Enemy)>,
    mut sound_events: EventWriter<PlaySoundEvent>,
) {
    let half = Vec2::splat(PROJECTILE_SIZE * 0.75);
    let enemy_half = Vec2::splat(ENEMY_SIZE / 2.0);
    for (attack_entity, attack_transform, damage, mut attack) in attack_query.iter_mut() {
        let attack_position = attack_transform.translation.truncate();
        let mut spent = false;
        for (enemy_entity, enemy_transform, mut health, enemy) in enemy_query.iter_mut() {
            let enemy_position = enemy_transform.translation.truncate();
            if !world::aabb_overlap(attack_position, half, enemy_position, enemy_half) {
                continue;
            }
            if attack.already_hit.contains(&enemy_entity) {
                continue;
            }
            attack.already_hit.push(enemy_entity);
            health.take(damage.0);
            sound_events.send(PlaySoundEvent(enemy.species.def().hit_sound));
            visual_effects::spawn_damage_text(
                &mut commands,
                &asset_server,
                enemy_transform.translation,
                damage.0,
                &time,
            );
            if attack.register_hit() {
                spent = true;
            }
        }
        if spent {
            commands.entity(attack_entity).despawn_recursive();
        }
    }
}

fn enemy_shot_collision_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    shot_query: Query<(Entity, &Transform, &Damage), With<EnemyShot>>,
    player_query: Query<&Transform, With<Player>>,
    mut health_bar: ResMut<HealthBar>,
    mut sound_events: EventWriter<PlaySoundEvent>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_position = player_transform.translation.truncate();
    let player_half = Vec2::splat(PLAYER_SIZE / 2.0);
    let half = Vec2::splat(PROJECTILE_SIZE / 2.0);
    for (shot_entity, shot_transform, damage) in shot_query.iter() {
        let shot_position = shot_transform.translation.truncate();
        if !world::aabb_overlap(shot_position, half, player_position, player_half) {
            continue;
        }
        health_bar.lose(damage.0 as f32);
        sound_events.send(PlaySoundEvent(SoundEffect::PlayerHurt));
        visual_effects::spawn_damage_text(
            &mut commands,
            &asset_server,
            player_transform.translation,
            damage.0,
            &time,
        );
        commands.entity(shot_entity).despawn_recursive();
    }
}
