use bevy::prelude::*;

#[derive(Component, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

#[derive(Component)]
pub struct Health(pub i32);

impl Health {
    /// Subtracts damage, clamping at zero.
    pub fn take(&mut self, amount: i32) {
        self.0 = (self.0 - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.0 <= 0
    }
}

#[derive(Component)]
pub struct Damage(pub i32);

/// Remaining tick budget for a projectile. Despawn when it runs out.
#[derive(Component)]
pub struct FrameLifetime(pub u32);

impl FrameLifetime {
    /// Burns one tick; returns true when the budget is exhausted.
    pub fn tick(&mut self) -> bool {
        self.0 = self.0.saturating_sub(1);
        self.0 == 0
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::Y,
            Facing::Down => Vec2::NEG_Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// Saturating tick counter for attack cooldowns. Zero means ready;
/// firing sets it to 1 and it counts up until it wraps at `max`.
#[derive(Component, Debug, Clone, Copy)]
pub struct CooldownCounter {
    pub count: u32,
    pub max: u32,
}

impl CooldownCounter {
    pub fn new(max: u32) -> Self {
        Self { count: 0, max }
    }

    pub fn ready(&self) -> bool {
        self.count == 0
    }

    pub fn fire(&mut self) {
        self.count = 1;
    }

    pub fn tick(&mut self) {
        if self.count >= self.max {
            self.count = 0;
        } else if self.count > 0 {
            self.count += 1;
        }
    }
}
