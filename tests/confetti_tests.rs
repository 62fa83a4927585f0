// Host-side tests for confetti burst generation.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use six_seven::core::constants::*;
use six_seven::core::*;

#[test]
fn burst_size_is_within_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let burst = ConfettiBurst::spawn(Vec2::ZERO, &mut rng);
        assert!(
            (24..=35).contains(&burst.len()),
            "unexpected burst size {}",
            burst.len()
        );
    }
}

#[test]
fn particle_parameters_are_within_ranges() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let p = Particle::random(&mut rng);
        assert!((-1.0..=1.0).contains(&p.dx));
        assert!((-1.5..=-0.5).contains(&p.dy));
        assert!((-360.0..=360.0).contains(&p.rot));
        assert!((0.7..=1.4).contains(&p.life));
    }
}

#[test]
fn every_piece_is_removed_after_fixed_delay() {
    let mut rng = StdRng::seed_from_u64(9);
    let burst = ConfettiBurst::spawn(Vec2::new(12.0, 34.0), &mut rng);
    assert_eq!(burst.remove_after_ms, 1600);
    assert_eq!(burst.remove_after_ms, CONFETTI_REMOVE_AFTER_MS);
    // the cleanup does not follow the declared lifetime
    assert!(burst
        .particles
        .iter()
        .all(|p| (p.life * 1000.0) < burst.remove_after_ms as f32));
}

#[test]
fn click_spawns_at_layer_relative_point() {
    let mut stage = Stage::with_seed(Box::new(NoopSpeech), 5);
    let layer = PanelRect::new(100.0, 40.0, 300.0, 300.0);
    let out = stage.click(Side::Right, Vec2::new(150.0, 90.0), &layer, 0.0);
    assert_eq!(out.burst.origin, Vec2::new(50.0, 50.0));
    assert!(!out.burst.is_empty());
}

#[test]
fn style_vars_use_page_precision() {
    let p = Particle {
        dx: 0.12345,
        dy: -1.0,
        rot: 123.456,
        life: 0.7,
    };
    let vars = p.style_vars();
    assert_eq!(vars[0], ("--dx", "0.123".to_string()));
    assert_eq!(vars[1], ("--dy", "-1.000".to_string()));
    assert_eq!(vars[2], ("--rot", "123.5".to_string()));
    assert_eq!(vars[3], ("--life", "0.70".to_string()));
}

#[test]
fn seeded_stages_are_deterministic() {
    let layer = PanelRect::new(0.0, 0.0, 10.0, 10.0);
    let mut a = Stage::with_seed(Box::new(NoopSpeech), 11);
    let mut b = Stage::with_seed(Box::new(NoopSpeech), 11);
    let pa = a.click(Side::Left, Vec2::ZERO, &layer, 0.0).burst.particles;
    let pb = b.click(Side::Left, Vec2::ZERO, &layer, 0.0).burst.particles;
    assert_eq!(pa, pb);
}
