use bevy::prelude::*;

use crate::bars::{Experience, HealthBar, ManaBar};
use crate::game::{AppState, SessionScoped};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarFill {
    Health,
    Mana,
    Exp,
}

#[derive(Component)]
struct HudRoot;

/// Full-screen prompt for the menu and end-of-session states.
#[derive(Component)]
struct ScreenText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_hud.run_if(hud_missing))
            .add_systems(Update, update_bar_fill_system.run_if(in_state(AppState::InGame)))
            .add_systems(OnEnter(AppState::MainMenu), spawn_menu_text)
            .add_systems(OnExit(AppState::MainMenu), despawn_screen_text)
            .add_systems(OnEnter(AppState::SkillChoice), spawn_skill_text)
            .add_systems(OnExit(AppState::SkillChoice), despawn_screen_text)
            .add_systems(OnEnter(AppState::GameOver), spawn_game_over_text)
            .add_systems(OnExit(AppState::GameOver), despawn_screen_text)
            .add_systems(OnEnter(AppState::Victory), spawn_victory_text)
            .add_systems(OnExit(AppState::Victory), despawn_screen_text);
    }
}

fn hud_missing(hud_query: Query<(), With<HudRoot>>) -> bool {
    hud_query.is_empty()
}

fn spawn_hud(mut commands: Commands) {
    let bar = |fill: BarFill, color: Color| {
        (
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Px(12.0),
                    ..default()
                },
                background_color: color.into(),
                ..default()
            },
            fill,
        )
    };
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(10.0),
                    top: Val::Px(10.0),
                    width: Val::Px(220.0),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
                ..default()
            },
            HudRoot,
            SessionScoped,
            Name::new("Hud"),
        ))
        .with_children(|parent| {
            parent.spawn(bar(BarFill::Health, Color::rgb(0.8, 0.2, 0.2)));
            parent.spawn(bar(BarFill::Mana, Color::rgb(0.2, 0.4, 0.9)));
            parent.spawn(bar(BarFill::Exp, Color::rgb(0.9, 0.8, 0.2)));
        });
}

fn update_bar_fill_system(
    health_bar: Res<HealthBar>,
    mana_bar: Res<ManaBar>,
    experience: Res<Experience>,
    mut fill_query: Query<(&mut Style, &BarFill)>,
) {
    for (mut style, fill) in fill_query.iter_mut() {
        let fraction = match fill {
            BarFill::Health => health_bar.fraction(),
            BarFill::Mana => mana_bar.fraction(),
            BarFill::Exp => experience.fraction(),
        };
        style.width = Val::Percent(fraction * 100.0);
    }
}

fn spawn_screen_text(commands: &mut Commands, asset_server: &Res<AssetServer>, message: &str) {
    commands.spawn((
        TextBundle {
            text: Text::from_section(
                message,
                TextStyle {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 36.0,
                    color: Color::WHITE,
                },
            ),
            style: Style {
                position_type: PositionType::Absolute,
                left: Val::Percent(25.0),
                top: Val::Percent(40.0),
                ..default()
            },
            ..default()
        },
        ScreenText,
        Name::new("ScreenText"),
    ));
}

fn spawn_menu_text(mut commands: Commands, asset_server: Res<AssetServer>) {
    spawn_screen_text(&mut commands, &asset_server, "Tilewarden\nPress Enter to start");
}

fn spawn_skill_text(mut commands: Commands, asset_server: Res<AssetServer>) {
    spawn_screen_text(
        &mut commands,
        &asset_server,
        "Level up!\n1: attack  2: ultimate  3: speed  4: vitality",
    );
}

fn spawn_game_over_text(mut commands: Commands, asset_server: Res<AssetServer>) {
    spawn_screen_text(&mut commands, &asset_server, "You died\nPress Enter");
}

fn spawn_victory_text(mut commands: Commands, asset_server: Res<AssetServer>) {
    spawn_screen_text(&mut commands, &asset_server, "The dragon falls\nPress Enter");
}

fn despawn_screen_text(mut commands: Commands, text_query: Query<Entity, With<ScreenText>>) {
    for entity in text_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
