use bevy::prelude::*;

use tilewarden::attacks::AttacksPlugin;
use tilewarden::audio::GameAudioPlugin;
use tilewarden::bars::BarsPlugin;
use tilewarden::camera_systems::{CameraSystemsPlugin, MainCamera};
use tilewarden::enemy::EnemyPlugin;
use tilewarden::game::{GamePlugin, SCREEN_HEIGHT, SCREEN_WIDTH};
use tilewarden::hud::HudPlugin;
use tilewarden::player::PlayerPlugin;
use tilewarden::spawner::SpawnerPlugin;
use tilewarden::visual_effects::VisualEffectsPlugin;
use tilewarden::world::WorldPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tilewarden".into(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            GamePlugin,
            WorldPlugin,
            PlayerPlugin,
            AttacksPlugin,
            EnemyPlugin,
            SpawnerPlugin,
            BarsPlugin,
            VisualEffectsPlugin,
            GameAudioPlugin,
            CameraSystemsPlugin,
            HudPlugin,
        ))
        .add_systems(Startup, setup_global_camera)
        .run();
}

fn setup_global_camera(mut commands: Commands) {
    let mut camera_bundle = Camera2dBundle::default();
    camera_bundle.transform.translation.z = 999.0;
    commands.spawn((camera_bundle, MainCamera));
}
