use egui::{pos2, vec2};
use sticker_paint::Sticker;

#[test]
fn creation_assigns_unique_ids_and_defaults() {
    let a = Sticker::new("🐻", pos2(100.0, 100.0), 120.0);
    let b = Sticker::new("🐸", pos2(200.0, 200.0), 120.0);

    assert_ne!(a.id(), b.id());
    assert_eq!(a.glyph(), "🐻");
    assert_eq!(a.scale(), 1.0);
    assert_eq!(a.rotation(), 0.0);
    assert_eq!(a.base_size(), 120.0);
}

#[test]
fn effective_size_follows_scale() {
    let sticker = Sticker::new("🐻", pos2(0.0, 0.0), 120.0);
    assert_eq!(sticker.effective_size(), 120.0);
    assert_eq!(sticker.with_scale(2.0).effective_size(), 240.0);
    assert_eq!(sticker.with_scale(0.4).effective_size(), 48.0);
}

#[test]
fn rect_is_centered_on_the_position() {
    let sticker = Sticker::new("🐻", pos2(500.0, 400.0), 120.0);
    let rect = sticker.rect();
    assert_eq!(rect.center(), pos2(500.0, 400.0));
    assert_eq!(rect.size(), vec2(120.0, 120.0));
}

#[test]
fn builders_keep_identity_and_unrelated_fields() {
    let original = Sticker::new("🐻", pos2(100.0, 100.0), 120.0);
    let moved = original.with_position(pos2(300.0, 300.0));
    let scaled = moved.with_scale(1.5);
    let rotated = scaled.with_rotation(90.0);

    assert_eq!(rotated.id(), original.id());
    assert_eq!(rotated.glyph(), "🐻");
    assert_eq!(rotated.position(), pos2(300.0, 300.0));
    assert_eq!(rotated.scale(), 1.5);
    assert_eq!(rotated.rotation(), 90.0);
    assert_eq!(rotated.base_size(), 120.0);

    // The original value is untouched.
    assert_eq!(original.position(), pos2(100.0, 100.0));
    assert_eq!(original.scale(), 1.0);
}
