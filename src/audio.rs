use bevy::prelude::*;

use crate::game::{AppState, SessionScoped, Zone};

#[derive(Event)]
pub struct PlaySoundEvent(pub SoundEffect);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    MouseHit,
    DesertHit,
    DesertBossHit,
    BurntHit,
    SuccubusHit,
    FallenAngelHit,
    DragonHit,
    PlayerHurt,
    PlayerDeath,
    LevelUp,
    Victory,
}

/// Swaps the looping background track when the player crosses a zone line.
#[derive(Event)]
pub struct PlayMusicEvent(pub Zone);

#[derive(Component)]
struct MusicChannel;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySoundEvent>()
            .add_event::<PlayMusicEvent>()
            .add_systems(Update, (play_sound_system, play_music_system))
            .add_systems(OnEnter(AppState::InGame), start_music_system.run_if(no_music_playing));
    }
}

fn play_sound_system(
    mut sound_events: EventReader<PlaySoundEvent>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    for event in sound_events.read() {
        let sound_effect = match event.0 {
            SoundEffect::MouseHit => "audio/mouse_hit_placeholder.ogg",
            SoundEffect::DesertHit => "audio/desert_hit_placeholder.ogg",
            SoundEffect::DesertBossHit => "audio/desert_boss_hit_placeholder.ogg",
            SoundEffect::BurntHit => "audio/burnt_hit_placeholder.ogg",
            SoundEffect::SuccubusHit => "audio/succubus_hit_placeholder.ogg",
            SoundEffect::FallenAngelHit => "audio/fallen_angel_hit_placeholder.ogg",
            SoundEffect::DragonHit => "audio/dragon_hit_placeholder.ogg",
            SoundEffect::PlayerHurt => "audio/player_hurt_placeholder.ogg",
            SoundEffect::PlayerDeath => "audio/player_death_placeholder.ogg",
            SoundEffect::LevelUp => "audio/level_up_placeholder.ogg",
            SoundEffect::Victory => "audio/victory_placeholder.ogg",
        };
        commands.spawn(AudioBundle {
            source: asset_server.load(sound_effect),
            settings: PlaybackSettings::DESPAWN,
        });
    }
}

fn no_music_playing(channel_query: Query<(), With<MusicChannel>>) -> bool {
    channel_query.is_empty()
}

fn start_music_system(mut music_events: EventWriter<PlayMusicEvent>) {
    music_events.send(PlayMusicEvent(Zone::Plains));
}

fn play_music_system(
    mut music_events: EventReader<PlayMusicEvent>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    channel_query: Query<Entity, With<MusicChannel>>,
) {
    for event in music_events.read() {
        for entity in channel_query.iter() {
            commands.entity(entity).despawn_recursive();
        }
        let track = match event.0 {
            Zone::Plains => "audio/plains_theme_placeholder.ogg",
            Zone::Desert => "audio/desert_theme_placeholder.ogg",
            Zone::Scorched => "audio/scorched_theme_placeholder.ogg",
            Zone::BossRoom => "audio/boss_theme_placeholder.ogg",
        };
        commands.spawn((
            AudioBundle {
                source: asset_server.load(track),
                settings: PlaybackSettings::LOOP,
            },
            MusicChannel,
            SessionScoped,
        ));
    }
}
