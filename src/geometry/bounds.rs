use egui::{Pos2, Vec2};

/// Clamp a sticker center so its rendered bounds stay inside the container.
///
/// `effective_size` must be the scaled size (`base_size * scale`); clamping
/// against the unscaled base size lets an enlarged sticker hang past the
/// edge. When the container is smaller than the sticker the upper bound
/// collapses onto the lower one, pinning the center at the minimum legal
/// point so the sticker may overflow one side but never escapes entirely.
pub fn clamp_position(pos: Pos2, container: Vec2, effective_size: f32) -> Pos2 {
    let half = effective_size / 2.0;
    Pos2::new(
        clamp_axis(pos.x, half, container.x - half),
        clamp_axis(pos.y, half, container.y - half),
    )
}

fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    if !value.is_finite() {
        return lo;
    }
    // max before min keeps the result legal when hi < lo
    value.max(lo).min(hi.max(lo))
}

/// Clamp a scale into `[min_scale, max_scale]`, additionally capped so the
/// sticker never covers more than `max_fraction` of the smaller container
/// dimension.
///
/// Non-finite input is substituted with `min_scale`, not treated as an
/// error.
pub fn clamp_scale(
    scale: f32,
    container: Vec2,
    base_size: f32,
    min_scale: f32,
    max_scale: f32,
    max_fraction: f32,
) -> f32 {
    debug_assert!(base_size > 0.0, "sticker base size must be positive");
    if !scale.is_finite() {
        return min_scale;
    }
    let dynamic_max = (container.x.min(container.y) * max_fraction / base_size).max(min_scale);
    scale.max(min_scale).min(max_scale).min(dynamic_max)
}

/// Whether a rendered size is still a comfortable touch target.
pub fn touch_target_meets_minimum(effective_size: f32, min_touch_target: f32) -> bool {
    effective_size >= min_touch_target
}
