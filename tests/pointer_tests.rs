// Host-side tests for pointer offsets and hover throttling.

use glam::Vec2;
use six_seven::core::*;

fn rect() -> PanelRect {
    PanelRect::new(100.0, 50.0, 400.0, 300.0)
}

#[test]
fn offset_is_centered_on_panel() {
    let o = normalized_offset(Vec2::new(300.0, 200.0), &rect());
    assert_eq!(o, Vec2::ZERO);

    let top_left = normalized_offset(Vec2::new(100.0, 50.0), &rect());
    assert_eq!(top_left, Vec2::new(-0.5, -0.5));

    let bottom_right = normalized_offset(Vec2::new(500.0, 350.0), &rect());
    assert_eq!(bottom_right, Vec2::new(0.5, 0.5));
}

#[test]
fn offset_stays_in_range_inside_bounds() {
    let r = rect();
    for i in 0..=40 {
        for j in 0..=30 {
            let p = Vec2::new(r.left + i as f32 * 10.0, r.top + j as f32 * 10.0);
            let o = normalized_offset(p, &r);
            assert!((-0.5..=0.5).contains(&o.x), "x out of range at {p:?}: {o:?}");
            assert!((-0.5..=0.5).contains(&o.y), "y out of range at {p:?}: {o:?}");
        }
    }
}

#[test]
fn offset_is_rounded_to_three_decimals() {
    // 1/3 of the width -> 0.3333.. - 0.5
    let r = PanelRect::new(0.0, 0.0, 3.0, 3.0);
    let o = normalized_offset(Vec2::new(1.0, 2.0), &r);
    assert_eq!(o, Vec2::new(-0.167, 0.167));
}

#[test]
fn degenerate_rect_gives_zero_offset() {
    let r = PanelRect::new(10.0, 10.0, 0.0, 100.0);
    assert_eq!(normalized_offset(Vec2::new(50.0, 50.0), &r), Vec2::ZERO);
}

#[test]
fn leave_resets_offset_to_zero() {
    let mut stage = Stage::with_seed(Box::new(NoopSpeech), 1);
    let o = stage.pointer_move(Side::Left, Vec2::new(120.0, 60.0), &rect());
    assert_ne!(o, Vec2::ZERO);
    assert_eq!(stage.panel(Side::Left).offset, o);

    assert_eq!(stage.pointer_leave(Side::Left), Vec2::ZERO);
    assert_eq!(stage.panel(Side::Left).offset, Vec2::ZERO);
}

#[test]
fn panels_track_independently() {
    let mut stage = Stage::with_seed(Box::new(NoopSpeech), 1);
    stage.pointer_move(Side::Left, Vec2::new(500.0, 350.0), &rect());
    assert_eq!(stage.panel(Side::Right).offset, Vec2::ZERO);
    stage.pointer_leave(Side::Right);
    assert_eq!(stage.panel(Side::Left).offset, Vec2::new(0.5, 0.5));
}

#[test]
fn hover_throttle_drops_quick_reentries() {
    let mut panel = Panel::new(Side::Left, "6");
    assert!(panel.try_announce(0.0));
    assert!(!panel.try_announce(300.0));
    assert!(!panel.try_announce(699.0));
    assert_eq!(panel.last_spoken_ms(), Some(0.0));
    assert!(panel.try_announce(700.0));
    assert_eq!(panel.last_spoken_ms(), Some(700.0));
}

#[test]
fn hover_throttle_is_per_panel() {
    let mut stage = Stage::with_seed(Box::new(NoopSpeech), 1);
    assert!(stage.pointer_enter(Side::Left, 0.0));
    assert!(stage.pointer_enter(Side::Right, 100.0));
    assert!(!stage.pointer_enter(Side::Left, 200.0));
}
