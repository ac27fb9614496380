use bevy::prelude::*;

use crate::game::AppState;
use crate::player::Player;

const CAMERA_LERP_FACTOR: f32 = 0.05;

#[derive(Component)]
pub struct MainCamera;

pub struct CameraSystemsPlugin;

impl Plugin for CameraSystemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            soft_camera_follow_system.run_if(in_state(AppState::InGame)),
        );
    }
}

fn soft_camera_follow_system(
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, (With<MainCamera>, Without<Player>)>,
) {
    if let Ok(player_transform) = player_query.get_single() {
        if let Ok(mut camera_transform) = camera_query.get_single_mut() {
            let z = camera_transform.translation.z;
            camera_transform.translation = camera_transform
                .translation
                .lerp(player_transform.translation, CAMERA_LERP_FACTOR);
            camera_transform.translation.z = z;
        }
    }
}
