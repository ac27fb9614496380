use bevy::prelude::*;

use crate::audio::{PlayMusicEvent, PlaySoundEvent, SoundEffect};
use crate::bars::{Experience, HealthBar, ManaBar};
use crate::player::{SessionOrigin, Traveled, UltimateQueued};
use crate::spawner::RespawnRegistry;
use crate::world;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    MainMenu,
    InGame,
    SkillChoice,
    GameOver,
    Victory,
}

/// Region of the map, keyed off tile thresholds. Enemies only act while
/// their home zone is the current one; the final boss is always awake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Plains,
    Desert,
    Scorched,
    BossRoom,
}

#[derive(Resource)]
pub struct GameConfig {
    pub aggro_radius: f32,
    pub respawn_delay: u32,
    pub basic_fire_cooldown: u32,
    pub ultimate_mana_cost: f32,
    /// First tile row of the desert (rows grow downward in map text).
    pub desert_row: i32,
    pub scorched_row: i32,
    /// First tile column past the boss room wall.
    pub boss_room_col: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            aggro_radius: (SCREEN_WIDTH + SCREEN_HEIGHT) / 4.0,
            respawn_delay: 5000,
            basic_fire_cooldown: 50,
            ultimate_mana_cost: 10.0,
            desert_row: 8,
            scorched_row: 16,
            boss_room_col: 32,
        }
    }
}

impl GameConfig {
    pub fn zone_for_tile(&self, col: i32, row: i32) -> Zone {
        if col >= self.boss_room_col {
            Zone::BossRoom
        } else if row >= self.scorched_row {
            Zone::Scorched
        } else if row >= self.desert_row {
            Zone::Desert
        } else {
            Zone::Plains
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentZone(pub Zone);

/// Fixed simulation order within a tick. Damage and respawn bookkeeping
/// always observe the same intra-tick sequence.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Player,
    Attacks,
    Enemies,
    Bookkeeping,
}

/// Explicit order inside the bookkeeping phase. The death check runs
/// before regen so a lethal hit cannot be trickled back above zero in
/// the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookkeepingSet {
    Death,
    Regen,
    Xp,
    Respawn,
    Zone,
}

/// Everything spawned for one play session; torn down on game over.
#[derive(Component)]
pub struct SessionScoped;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .init_resource::<GameConfig>()
            .insert_resource(CurrentZone(Zone::Plains))
            .configure_sets(
                FixedUpdate,
                (SimSet::Player, SimSet::Attacks, SimSet::Enemies, SimSet::Bookkeeping)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .configure_sets(
                FixedUpdate,
                (
                    BookkeepingSet::Death,
                    BookkeepingSet::Regen,
                    BookkeepingSet::Xp,
                    BookkeepingSet::Respawn,
                    BookkeepingSet::Zone,
                )
                    .chain()
                    .in_set(SimSet::Bookkeeping),
            )
            .add_systems(Update, main_menu_input_system.run_if(in_state(AppState::MainMenu)))
            .add_systems(
                Update,
                session_end_input_system
                    .run_if(in_state(AppState::GameOver).or_else(in_state(AppState::Victory))),
            )
            .add_systems(
                FixedUpdate,
                zone_tracking_system.in_set(BookkeepingSet::Zone),
            )
            .add_systems(OnEnter(AppState::GameOver), (play_defeat_sound, teardown_session))
            .add_systems(OnEnter(AppState::Victory), (play_victory_sound, teardown_session));
    }
}

fn main_menu_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard_input.just_pressed(KeyCode::Enter) {
        next_state.set(AppState::InGame);
    }
}

fn session_end_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard_input.just_pressed(KeyCode::Enter) {
        next_state.set(AppState::MainMenu);
    }
}

fn teardown_session(
    mut commands: Commands,
    session_query: Query<Entity, With<SessionScoped>>,
    mut health_bar: ResMut<HealthBar>,
    mut mana_bar: ResMut<ManaBar>,
    mut experience: ResMut<Experience>,
    mut registry: ResMut<RespawnRegistry>,
    mut traveled: ResMut<Traveled>,
    mut origin: ResMut<SessionOrigin>,
    mut queued_ultimate: ResMut<UltimateQueued>,
    mut current_zone: ResMut<CurrentZone>,
    config: Res<GameConfig>,
) {
    for entity in session_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    *health_bar = HealthBar::default();
    *mana_bar = ManaBar::default();
    *experience = Experience::default();
    *registry = RespawnRegistry::new(config.respawn_delay);
    traveled.0 = Vec2::ZERO;
    origin.0 = Vec2::ZERO;
    queued_ultimate.take();
    current_zone.0 = Zone::Plains;
}

/// The zone is keyed off the accumulated displacement from the spawn
/// point, not the transform; both describe the same world tile.
fn zone_tracking_system(
    origin: Res<SessionOrigin>,
    traveled: Res<Traveled>,
    config: Res<GameConfig>,
    mut current_zone: ResMut<CurrentZone>,
    mut music_events: EventWriter<PlayMusicEvent>,
) {
    let (col, row) = world::world_to_tile(origin.0 + traveled.0);
    let zone = config.zone_for_tile(col, row);
    if zone != current_zone.0 {
        current_zone.0 = zone;
        music_events.send(PlayMusicEvent(zone));
    }
}

fn play_defeat_sound(mut sound_events: EventWriter<PlaySoundEvent>) {
    sound_events.send(PlaySoundEvent(SoundEffect::PlayerDeath));
}

fn play_victory_sound(mut sound_events: EventWriter<PlaySoundEvent>) {
    sound_events.send(PlaySoundEvent(SoundEffect::Victory));
}
