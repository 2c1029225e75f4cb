use egui::{pos2, vec2};
use sticker_paint::geometry::bounds;

#[test]
fn position_inside_container_is_unchanged() {
    let clamped = bounds::clamp_position(pos2(500.0, 400.0), vec2(1000.0, 1000.0), 120.0);
    assert_eq!(clamped, pos2(500.0, 400.0));
}

#[test]
fn clamp_position_is_idempotent() {
    let container = vec2(1000.0, 800.0);
    for pos in [
        pos2(500.0, 400.0),
        pos2(-200.0, 400.0),
        pos2(1500.0, 900.0),
        pos2(0.0, 0.0),
    ] {
        let once = bounds::clamp_position(pos, container, 120.0);
        let twice = bounds::clamp_position(once, container, 120.0);
        assert_eq!(once, twice);
    }
}

#[test]
fn drag_past_right_edge_clamps_to_margin() {
    // 1000 wide container, 120 effective size: the center may go no
    // further right than 1000 - 60 = 940.
    let clamped = bounds::clamp_position(pos2(1100.0, 500.0), vec2(1000.0, 1000.0), 120.0);
    assert_eq!(clamped, pos2(940.0, 500.0));
}

#[test]
fn scaled_size_shrinks_the_legal_range() {
    // Clamping must use the scaled size. At scale 2.0 the same sticker has
    // a 240 footprint, so the right margin moves in from 940 to 880.
    let container = vec2(1000.0, 1000.0);
    let at_base = bounds::clamp_position(pos2(940.0, 500.0), container, 120.0);
    assert_eq!(at_base, pos2(940.0, 500.0));

    let at_doubled = bounds::clamp_position(pos2(940.0, 500.0), container, 240.0);
    assert_eq!(at_doubled, pos2(880.0, 500.0));
}

#[test]
fn oversized_sticker_pins_at_minimum_legal_point() {
    // Sticker larger than the container: the center pins at half the
    // effective size instead of escaping.
    let clamped = bounds::clamp_position(pos2(90.0, 10.0), vec2(100.0, 100.0), 150.0);
    assert_eq!(clamped, pos2(75.0, 75.0));
}

#[test]
fn non_finite_position_pins_to_margin() {
    let clamped = bounds::clamp_position(pos2(f32::NAN, 500.0), vec2(1000.0, 1000.0), 120.0);
    assert_eq!(clamped, pos2(60.0, 500.0));
}

#[test]
fn clamp_scale_respects_static_range() {
    let container = vec2(10_000.0, 10_000.0);
    assert_eq!(bounds::clamp_scale(3.0, container, 120.0, 0.4, 2.5, 0.8), 2.5);
    assert_eq!(bounds::clamp_scale(0.1, container, 120.0, 0.4, 2.5, 0.8), 0.4);
    assert_eq!(bounds::clamp_scale(1.0, container, 120.0, 0.4, 2.5, 0.8), 1.0);
}

#[test]
fn small_container_caps_scale_below_static_maximum() {
    // 200x200 container, 120 base size: the dynamic ceiling is
    // 200 * 0.8 / 120 = 1.333..., well below the 2.5 static maximum.
    let scale = bounds::clamp_scale(3.0, vec2(200.0, 200.0), 120.0, 0.4, 2.5, 0.8);
    assert!((scale - 4.0 / 3.0).abs() < 1e-4, "got {scale}");
}

#[test]
fn non_finite_scale_falls_back_to_minimum() {
    let container = vec2(1000.0, 1000.0);
    for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(bounds::clamp_scale(bad, container, 120.0, 0.4, 2.5, 0.8), 0.4);
    }
}

#[test]
fn negative_scale_clamps_to_minimum() {
    let scale = bounds::clamp_scale(-1.0, vec2(1000.0, 1000.0), 120.0, 0.4, 2.5, 0.8);
    assert_eq!(scale, 0.4);
}

#[test]
fn degenerate_container_still_returns_minimum_scale() {
    // Dynamic ceiling of 10 * 0.8 / 120 would fall below the minimum; the
    // output range never goes empty.
    let scale = bounds::clamp_scale(1.0, vec2(10.0, 10.0), 120.0, 0.4, 2.5, 0.8);
    assert_eq!(scale, 0.4);
}

#[test]
fn touch_target_reporting() {
    assert!(bounds::touch_target_meets_minimum(48.0, 48.0));
    assert!(bounds::touch_target_meets_minimum(120.0, 48.0));
    assert!(!bounds::touch_target_meets_minimum(47.9, 48.0));
}
