use tilewarden::bars::{Bar, ExpBar};

#[test]
fn bar_lose_clamps_at_zero() {
    let mut bar = Bar::new(10.0, 0.01);
    bar.lose(4.0);
    assert_eq!(bar.remaining, 6.0);
    bar.lose(100.0);
    assert_eq!(bar.remaining, 0.0);
    assert!(bar.is_empty());
}

#[test]
fn bar_regen_caps_at_full() {
    let mut bar = Bar::new(10.0, 0.5);
    bar.lose(1.0);
    for _ in 0..10 {
        bar.regen_tick();
    }
    assert_eq!(bar.remaining, 10.0);
}

#[test]
fn drained_bar_reads_empty_until_a_regen_tick() {
    let mut bar = Bar::new(10.0, 0.01);
    bar.lose(10.0);
    // A lethal hit must be observed while the bar still reads zero;
    // one regen tick would otherwise trickle it back above empty.
    assert!(bar.is_empty());
    bar.regen_tick();
    assert!(!bar.is_empty());
}

#[test]
fn bar_capacity_raise_leaves_remaining_untouched() {
    let mut bar = Bar::new(10.0, 0.01);
    bar.raise_capacity(10.0);
    assert_eq!(bar.full, 20.0);
    assert_eq!(bar.remaining, 10.0);
    assert_eq!(bar.fraction(), 0.5);
}

#[test]
fn exp_gain_below_threshold_does_not_level() {
    let mut exp = ExpBar::new();
    assert!(!exp.gain(9));
    assert_eq!(exp.remaining, 9);
    assert_eq!(exp.full, 10);
}

#[test]
fn exp_overflow_levels_exactly_once_and_carries_surplus() {
    let mut exp = ExpBar::new();
    // 25 xp spans two thresholds of 10 but still fires a single level-up.
    assert!(exp.gain(25));
    assert_eq!(exp.remaining, 15);
    assert_eq!(exp.full, 10);
}

#[test]
fn exp_growth_follows_level_curve() {
    let mut exp = ExpBar::new();
    assert!(exp.gain(10));
    // Reaching level 2: floor(2 / 0.65)^2 = 9 added to the threshold.
    exp.grow(2);
    assert_eq!(exp.full, 19);
    assert_eq!(exp.remaining, 0);
}
