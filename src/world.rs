use bevy::app::AppExit;
use bevy::prelude::*;

use crate::enemy;
use crate::game::{AppState, GameConfig, SessionScoped};
use crate::player::{self, Player, SessionOrigin, Traveled};
use crate::spawner::RespawnRegistry;
use crate::species::SpeciesId;

pub const TILE_SIZE: f32 = 64.0;

/// Built-in map. Rows scan top to bottom, columns left to right.
/// `.` ground, `T` trail, `B`/`O`/`~`/`D` blocks, `P` player spawn,
/// species tag letters seed enemies. The wall at column 32 separates
/// the boss room, with a gap at rows 10-12.
pub const DEFAULT_MAP: &str = "\
BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB
B...............................B......B
B.P.......e.....................B......B
B.............e.....a...........B......B
B.TTTTTTTTTTTTTTTTTTTTTTTTTTTTT.B......B
B.....e.................s.......B......B
B...........a...............m...B......B
B...............OO..............B......B
B.......b.......................B......B
B.................w......B......B......B
B...........b..........................B
B.....................W.............d..B
B..........................M...........B
B.....w.........................B......B
B.........OO..................b.B......B
B...............................B......B
B........i......................B......B
B...................u...........B......B
B.............B.............i...B......B
B.......................f.......B......B
B....i..........................B......B
B...............u...............B......B
B...............................B......B
BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    NoPlayerSpawn,
    MultiplePlayerSpawns { col: i32, row: i32 },
    UnknownTile { glyph: char, col: i32, row: i32 },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NoPlayerSpawn => write!(f, "map has no player spawn tile 'P'"),
            MapError::MultiplePlayerSpawns { col, row } => {
                write!(f, "second player spawn tile 'P' at column {col}, row {row}")
            }
            MapError::UnknownTile { glyph, col, row } => {
                write!(f, "unknown tile '{glyph}' at column {col}, row {row}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    pub player_tile: IVec2,
    pub block_tiles: Vec<IVec2>,
    /// Enemy seeds in scan order (top to bottom, left to right).
    pub seeds: Vec<(SpeciesId, IVec2)>,
}

pub fn parse_tilemap(text: &str) -> Result<ParsedMap, MapError> {
    let mut player_tile = None;
    let mut block_tiles = Vec::new();
    let mut seeds = Vec::new();

    for (row, line) in text.lines().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            let (col, row) = (col as i32, row as i32);
            match glyph {
                '.' | 'T' => {}
                'B' | 'O' | '~' | 'D' => block_tiles.push(IVec2::new(col, row)),
                'P' => {
                    if player_tile.is_some() {
                        return Err(MapError::MultiplePlayerSpawns { col, row });
                    }
                    player_tile = Some(IVec2::new(col, row));
                }
                _ => match SpeciesId::from_tag(glyph) {
                    Some(species) => seeds.push((species, IVec2::new(col, row))),
                    None => return Err(MapError::UnknownTile { glyph, col, row }),
                },
            }
        }
    }

    let player_tile = player_tile.ok_or(MapError::NoPlayerSpawn)?;
    Ok(ParsedMap { player_tile, block_tiles, seeds })
}

/// Center of a tile in world coordinates. Map rows grow downward,
/// world y grows upward.
pub fn tile_to_world(tile: IVec2) -> Vec2 {
    Vec2::new(
        tile.x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        -(tile.y as f32 * TILE_SIZE + TILE_SIZE / 2.0),
    )
}

pub fn world_to_tile(position: Vec2) -> (i32, i32) {
    (
        (position.x / TILE_SIZE).floor() as i32,
        (-position.y / TILE_SIZE).floor() as i32,
    )
}

pub fn aabb_overlap(a: Vec2, a_half: Vec2, b: Vec2, b_half: Vec2) -> bool {
    (a.x - b.x).abs() < a_half.x + b_half.x && (a.y - b.y).abs() < a_half.y + b_half.y
}

/// Axis-separated movement against block rectangles: the x delta is
/// applied and resolved first, then the y delta. Overlaps snap the
/// moving rect to the obstacle's near edge.
pub fn move_and_collide(
    center: Vec2,
    half: Vec2,
    delta: Vec2,
    blocks: &[Vec2],
    block_half: Vec2,
) -> Vec2 {
    let mut position = center;

    position.x += delta.x;
    for &block in blocks {
        if aabb_overlap(position, half, block, block_half) {
            if delta.x > 0.0 {
                position.x = block.x - block_half.x - half.x;
            } else if delta.x < 0.0 {
                position.x = block.x + block_half.x + half.x;
            }
        }
    }

    position.y += delta.y;
    for &block in blocks {
        if aabb_overlap(position, half, block, block_half) {
            if delta.y > 0.0 {
                position.y = block.y - block_half.y - half.y;
            } else if delta.y < 0.0 {
                position.y = block.y + block_half.y + half.y;
            }
        }
    }

    position
}

/// Static obstacle tile.
#[derive(Component)]
pub struct Block;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::InGame),
            setup_world.run_if(no_session_world),
        );
    }
}

/// A SkillChoice round-trip re-enters InGame with the world still alive.
fn no_session_world(player_query: Query<(), With<Player>>) -> bool {
    player_query.is_empty()
}

fn setup_world(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
    mut registry: ResMut<RespawnRegistry>,
    mut origin: ResMut<SessionOrigin>,
    mut traveled: ResMut<Traveled>,
    mut exit_events: EventWriter<AppExit>,
) {
    let map = match parse_tilemap(DEFAULT_MAP) {
        Ok(map) => map,
        Err(err) => {
            error!("failed to load map: {err}");
            exit_events.send(AppExit);
            return;
        }
    };

    *registry = RespawnRegistry::new(config.respawn_delay);
    origin.0 = tile_to_world(map.player_tile);
    traveled.0 = Vec2::ZERO;

    for tile in &map.block_tiles {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: Color::rgb(0.35, 0.3, 0.25),
                    custom_size: Some(Vec2::splat(TILE_SIZE)),
                    ..default()
                },
                texture: asset_server.load("sprites/block_placeholder.png"),
                transform: Transform::from_translation(tile_to_world(*tile).extend(0.0)),
                ..default()
            },
            Block,
            SessionScoped,
            Name::new("Block"),
        ));
    }

    player::spawn_player(
        &mut commands,
        &asset_server,
        tile_to_world(map.player_tile),
        config.basic_fire_cooldown,
    );

    for (species, tile) in &map.seeds {
        let spawn_id = registry.allocate(*species, *tile);
        enemy::spawn_enemy(
            &mut commands,
            &asset_server,
            *species,
            spawn_id,
            tile_to_world(*tile),
        );
    }
}
