use bevy::math::Vec2;
use tilewarden::attacks::{AttackTier, UltimateAttack};
use tilewarden::components::{CooldownCounter, Facing, FrameLifetime, Health};
use tilewarden::player::{Player, UltimateQueued};
use tilewarden::species::SpeciesId;

#[test]
fn attack_tier_boundaries() {
    let cases = [
        (0, 1, 0.0),
        (3, 2, 0.0),
        (6, 2, 0.05),
        (9, 3, 0.1),
        (12, 4, 0.0),
        (15, 5, 0.25),
        (18, 5, 0.25),
    ];
    for (level, multiplier, slow) in cases {
        let tier = AttackTier::from_level(level);
        assert_eq!(tier.multiplier(), multiplier, "level {level}");
        assert_eq!(tier.slow_penalty(), slow, "level {level}");
    }
}

#[test]
fn tier_holds_within_a_bracket() {
    assert_eq!(AttackTier::from_level(2), AttackTier::from_level(0));
    assert_eq!(AttackTier::from_level(5), AttackTier::from_level(3));
}

#[test]
fn cooldown_counter_fires_and_wraps() {
    let mut cooldown = CooldownCounter::new(3);
    assert!(cooldown.ready());
    cooldown.fire();
    assert!(!cooldown.ready());
    assert_eq!(cooldown.count, 1);
    cooldown.tick();
    cooldown.tick();
    assert_eq!(cooldown.count, 3);
    cooldown.tick();
    assert!(cooldown.ready());
    // Idle counters stay eligible.
    cooldown.tick();
    assert!(cooldown.ready());
}

#[test]
fn ultimate_pierce_counts_every_enemy_in_the_tick() {
    // Ultimate skill level 2 gives a pierce cap of 3.
    let mut attack = UltimateAttack::new(3);
    let mut spent = false;
    for _ in 0..5 {
        if attack.register_hit() {
            spent = true;
        }
    }
    assert!(spent);
    assert_eq!(attack.hits, 5);
}

#[test]
fn ultimate_single_hit_below_cap_survives() {
    let mut attack = UltimateAttack::new(3);
    assert!(!attack.register_hit());
    assert!(!attack.register_hit());
    assert!(attack.register_hit());
}

#[test]
fn grey_mouse_dies_to_five_basic_hits() {
    let def = SpeciesId::GreyMouse.def();
    let mut health = Health(def.health);
    let mut observed = Vec::new();
    for _ in 0..5 {
        health.take(2);
        observed.push(health.0);
    }
    assert_eq!(observed, vec![8, 6, 4, 2, 0]);
    assert!(health.is_dead());
    assert_eq!(def.xp, 2);
}

#[test]
fn health_clamps_at_zero() {
    let mut health = Health(5);
    health.take(100);
    assert_eq!(health.0, 0);
}

#[test]
fn frame_lifetime_strictly_decreases() {
    let mut lifetime = FrameLifetime(3);
    assert!(!lifetime.tick());
    assert_eq!(lifetime.0, 2);
    assert!(!lifetime.tick());
    assert!(lifetime.tick());
    assert_eq!(lifetime.0, 0);
}

#[test]
fn queued_ultimate_is_consumed_exactly_once() {
    let mut queued = UltimateQueued::default();
    assert!(!queued.take());

    // One click may face several simulation ticks in the same frame;
    // only the first tick gets the charge.
    queued.queue();
    queued.queue();
    assert!(queued.take());
    assert!(!queued.take());
    assert!(!queued.take());
}

#[test]
fn facing_unit_vectors_are_cardinal() {
    assert_eq!(Facing::Up.unit(), Vec2::Y);
    assert_eq!(Facing::Down.unit(), Vec2::NEG_Y);
    assert_eq!(Facing::Left.unit(), Vec2::NEG_X);
    assert_eq!(Facing::Right.unit(), Vec2::X);
    assert_eq!(Facing::default(), Facing::Down);
}

#[test]
fn player_damage_formulas_scale_with_skills() {
    let player = Player::default();
    assert_eq!(player.basic_attack_damage(), 3);
    assert_eq!(player.ultimate_attack_damage(), 8);

    let veteran = Player {
        level: 5,
        basic_attack_level: 4,
        ultimate_attack_level: 2,
        speed_level: 8,
        vitality_level: 0,
    };
    assert_eq!(veteran.basic_attack_damage(), 2 + 5 + 12);
    assert_eq!(veteran.ultimate_attack_damage(), 5 + 15 + 10);
    assert_eq!(veteran.speed(), 22.0);
}
