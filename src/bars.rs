use bevy::prelude::*;

use crate::audio::{PlaySoundEvent, SoundEffect};
use crate::game::{AppState, BookkeepingSet};
use crate::player::Player;

pub const LEVEL_CAP: u32 = 53;
pub const LEVEL_UP_CAPACITY_BONUS: f32 = 10.0;

/// Regenerating scalar gauge (health, mana).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub remaining: f32,
    pub full: f32,
    pub regen: f32,
}

impl Bar {
    pub fn new(full: f32, regen: f32) -> Self {
        Self { remaining: full, full, regen }
    }

    pub fn lose(&mut self, amount: f32) {
        self.remaining = (self.remaining - amount).max(0.0);
    }

    pub fn regen_tick(&mut self) {
        self.remaining = (self.remaining + self.regen).min(self.full);
    }

    pub fn raise_capacity(&mut self, amount: f32) {
        self.full += amount;
    }

    pub fn is_empty(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn fraction(&self) -> f32 {
        (self.remaining / self.full).clamp(0.0, 1.0)
    }
}

/// Experience gauge. An overflowing gain fires exactly one level-up even
/// when the amount spans several thresholds; the surplus carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpBar {
    pub remaining: u32,
    pub full: u32,
}

impl ExpBar {
    pub fn new() -> Self {
        Self { remaining: 0, full: 10 }
    }

    /// Returns true when the gain crosses the threshold.
    pub fn gain(&mut self, amount: u32) -> bool {
        self.remaining += amount;
        if self.remaining >= self.full {
            self.remaining -= self.full;
            true
        } else {
            false
        }
    }

    /// Called with the level reached by the level-up.
    pub fn grow(&mut self, level: u32) {
        self.full += ((level as f32 / 0.65).floor() as u32).pow(2);
    }

    pub fn fraction(&self) -> f32 {
        (self.remaining as f32 / self.full as f32).clamp(0.0, 1.0)
    }
}

impl Default for ExpBar {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Resource, Deref, DerefMut)]
pub struct HealthBar(pub Bar);

impl Default for HealthBar {
    fn default() -> Self {
        Self(Bar::new(10.0, 0.01))
    }
}

#[derive(Resource, Deref, DerefMut)]
pub struct ManaBar(pub Bar);

impl Default for ManaBar {
    fn default() -> Self {
        Self(Bar::new(10.0, 0.01))
    }
}

#[derive(Resource, Deref, DerefMut, Default)]
pub struct Experience(pub ExpBar);

#[derive(Event)]
pub struct XpGained(pub u32);

pub struct BarsPlugin;

impl Plugin for BarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<XpGained>()
            .init_resource::<HealthBar>()
            .init_resource::<ManaBar>()
            .init_resource::<Experience>()
            .add_systems(FixedUpdate, regen_system.in_set(BookkeepingSet::Regen))
            .add_systems(FixedUpdate, apply_xp_system.in_set(BookkeepingSet::Xp));
    }
}

fn regen_system(mut health_bar: ResMut<HealthBar>, mut mana_bar: ResMut<ManaBar>) {
    health_bar.regen_tick();
    mana_bar.regen_tick();
}

fn apply_xp_system(
    mut xp_events: EventReader<XpGained>,
    mut experience: ResMut<Experience>,
    mut health_bar: ResMut<HealthBar>,
    mut mana_bar: ResMut<ManaBar>,
    mut player_query: Query<&mut Player>,
    mut next_state: ResMut<NextState<AppState>>,
    mut sound_events: EventWriter<PlaySoundEvent>,
) {
    let Ok(mut player) = player_query.get_single_mut() else {
        return;
    };
    for XpGained(amount) in xp_events.read() {
        if experience.gain(*amount) {
            player.level += 1;
            experience.grow(player.level);
            health_bar.raise_capacity(LEVEL_UP_CAPACITY_BONUS);
            mana_bar.raise_capacity(LEVEL_UP_CAPACITY_BONUS);
            sound_events.send(PlaySoundEvent(SoundEffect::LevelUp));
            // A pending transition (victory, defeat) outranks the skill menu.
            if player.level < LEVEL_CAP && next_state.0.is_none() {
                next_state.set(AppState::SkillChoice);
            }
        }
    }
}
