use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::attacks;
use crate::bars::{HealthBar, ManaBar};
use crate::camera_systems::MainCamera;
use crate::components::{CooldownCounter, Facing};
use crate::game::{AppState, BookkeepingSet, GameConfig, SessionScoped, SimSet};
use crate::world::{self, Block};

pub const PLAYER_SIZE: f32 = 48.0;
pub const PLAYER_BASE_SPEED: f32 = 20.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub level: u32,
    pub basic_attack_level: u32,
    pub ultimate_attack_level: u32,
    pub speed_level: u32,
    pub vitality_level: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            level: 1,
            basic_attack_level: 0,
            ultimate_attack_level: 0,
            speed_level: 0,
            vitality_level: 0,
        }
    }
}

impl Player {
    pub fn basic_attack_damage(&self) -> i32 {
        2 + self.level as i32 + 3 * self.basic_attack_level as i32
    }

    pub fn ultimate_attack_damage(&self) -> i32 {
        5 + 3 * self.level as i32 + 5 * self.ultimate_attack_level as i32
    }

    /// Pixels per simulation tick.
    pub fn speed(&self) -> f32 {
        PLAYER_BASE_SPEED + (self.speed_level / 4) as f32
    }
}

/// Signed total displacement since the session started. Added to
/// [`SessionOrigin`] it names the player's current world tile for zone
/// bookkeeping.
#[derive(Resource, Default)]
pub struct Traveled(pub Vec2);

/// World position of the spawn tile, recorded at world build.
#[derive(Resource, Default)]
pub struct SessionOrigin(pub Vec2);

/// Cursor position in world coordinates, refreshed every frame.
#[derive(Resource, Default)]
pub struct AimTarget(pub Vec2);

/// One-shot latch between render-frame input and the fixed tick.
/// A right click is captured once per frame and consumed by exactly
/// one simulation tick, however many ticks that frame runs.
#[derive(Resource, Default)]
pub struct UltimateQueued(bool);

impl UltimateQueued {
    pub fn queue(&mut self) {
        self.0 = true;
    }

    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Traveled>()
            .init_resource::<SessionOrigin>()
            .init_resource::<AimTarget>()
            .init_resource::<UltimateQueued>()
            .add_systems(
                Update,
                (track_cursor_system, queue_ultimate_system)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(Update, skill_menu_system.run_if(in_state(AppState::SkillChoice)))
            .add_systems(
                FixedUpdate,
                (
                    player_cooldown_tick_system,
                    player_movement_system,
                    basic_fire_system,
                    ultimate_fire_system,
                )
                    .chain()
                    .in_set(SimSet::Player),
            )
            .add_systems(FixedUpdate, player_death_system.in_set(BookkeepingSet::Death));
    }
}

pub fn spawn_player(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    position: Vec2,
    fire_cooldown: u32,
) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::splat(PLAYER_SIZE)),
                ..default()
            },
            texture: asset_server.load("sprites/player_placeholder.png"),
            transform: Transform::from_translation(position.extend(1.0)),
            ..default()
        },
        Player::default(),
        Facing::default(),
        CooldownCounter::new(fire_cooldown),
        SessionScoped,
        Name::new("Player"),
    ));
}

fn track_cursor_system(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<AimTarget>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    if let Some(world_position) = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor))
    {
        aim.0 = world_position;
    }
}

fn player_cooldown_tick_system(mut player_query: Query<&mut CooldownCounter, With<Player>>) {
    for mut cooldown in player_query.iter_mut() {
        cooldown.tick();
    }
}

fn player_movement_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<(&mut Transform, &mut Facing, &Player), Without<Block>>,
    block_query: Query<&Transform, With<Block>>,
    mut traveled: ResMut<Traveled>,
) {
    let Ok((mut transform, mut facing, player)) = player_query.get_single_mut() else {
        return;
    };

    let speed = player.speed();
    let mut delta = Vec2::ZERO;
    // Facing follows the last direction key observed this tick.
    if keyboard_input.pressed(KeyCode::ArrowUp) || keyboard_input.pressed(KeyCode::KeyW) {
        delta.y += speed;
        *facing = Facing::Up;
    }
    if keyboard_input.pressed(KeyCode::ArrowDown) || keyboard_input.pressed(KeyCode::KeyS) {
        delta.y -= speed;
        *facing = Facing::Down;
    }
    if keyboard_input.pressed(KeyCode::ArrowLeft) || keyboard_input.pressed(KeyCode::KeyA) {
        delta.x -= speed;
        *facing = Facing::Left;
    }
    if keyboard_input.pressed(KeyCode::ArrowRight) || keyboard_input.pressed(KeyCode::KeyD) {
        delta.x += speed;
        *facing = Facing::Right;
    }
    if delta == Vec2::ZERO {
        return;
    }

    let blocks: Vec<Vec2> = block_query
        .iter()
        .map(|t| t.translation.truncate())
        .collect();
    let before = transform.translation.truncate();
    let after = world::move_and_collide(
        before,
        Vec2::splat(PLAYER_SIZE / 2.0),
        delta,
        &blocks,
        Vec2::splat(world::TILE_SIZE / 2.0),
    );
    transform.translation.x = after.x;
    transform.translation.y = after.y;
    traveled.0 += after - before;
}

fn basic_fire_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    aim: Res<AimTarget>,
    mut player_query: Query<(&Transform, &Facing, &Player, &mut CooldownCounter)>,
) {
    let Ok((transform, facing, player, mut cooldown)) = player_query.get_single_mut() else {
        return;
    };
    if !mouse_input.pressed(MouseButton::Left) || !cooldown.ready() {
        return;
    }
    let origin = transform.translation.truncate();
    let direction = aim_direction(origin, aim.0, *facing);
    attacks::spawn_basic_attack(&mut commands, &asset_server, player, origin, direction);
    cooldown.fire();
}

/// Aims at the cursor, falling back to the facing direction when the
/// cursor sits on the player.
fn aim_direction(origin: Vec2, target: Vec2, facing: Facing) -> Vec2 {
    let direction = (target - origin).normalize_or_zero();
    if direction == Vec2::ZERO {
        facing.unit()
    } else {
        direction
    }
}

fn queue_ultimate_system(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut queued: ResMut<UltimateQueued>,
) {
    if mouse_input.just_pressed(MouseButton::Right) {
        queued.queue();
    }
}

fn ultimate_fire_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    aim: Res<AimTarget>,
    config: Res<GameConfig>,
    mut queued: ResMut<UltimateQueued>,
    mut mana_bar: ResMut<ManaBar>,
    player_query: Query<(&Transform, &Facing, &Player)>,
) {
    let Ok((transform, facing, player)) = player_query.get_single() else {
        return;
    };
    if !queued.take() {
        return;
    }
    if mana_bar.remaining < config.ultimate_mana_cost {
        return;
    }
    mana_bar.lose(config.ultimate_mana_cost);
    let origin = transform.translation.truncate();
    let direction = aim_direction(origin, aim.0, *facing);
    attacks::spawn_ultimate_attack(&mut commands, &asset_server, player, origin, direction);
}

fn player_death_system(
    health_bar: Res<HealthBar>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if health_bar.is_empty() {
        next_state.set(AppState::GameOver);
    }
}

fn skill_menu_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<(&mut Player, &mut CooldownCounter)>,
    mut health_bar: ResMut<HealthBar>,
    mut mana_bar: ResMut<ManaBar>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok((mut player, mut cooldown)) = player_query.get_single_mut() else {
        return;
    };
    let chosen = if keyboard_input.just_pressed(KeyCode::Digit1) {
        player.basic_attack_level += 1;
        true
    } else if keyboard_input.just_pressed(KeyCode::Digit2) {
        player.ultimate_attack_level += 1;
        true
    } else if keyboard_input.just_pressed(KeyCode::Digit3) {
        player.speed_level += 1;
        cooldown.max = cooldown.max.saturating_sub(5).max(5);
        true
    } else if keyboard_input.just_pressed(KeyCode::Digit4) {
        player.vitality_level += 1;
        for bar in [&mut health_bar.0, &mut mana_bar.0] {
            bar.raise_capacity(10.0);
            bar.regen += 0.01;
        }
        true
    } else {
        false
    };
    if chosen {
        next_state.set(AppState::InGame);
    }
}
