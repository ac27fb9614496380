pub mod attacks;
pub mod audio;
pub mod bars;
pub mod camera_systems;
pub mod components;
pub mod enemy;
pub mod game;
pub mod hud;
pub mod player;
pub mod spawner;
pub mod species;
pub mod visual_effects;
pub mod world;
