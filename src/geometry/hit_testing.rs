use egui::{Pos2, Rect, Vec2};

use crate::sticker::Sticker;

/// Bounds used for hit testing: the sticker's rect inflated by `tolerance`
/// on every side, so small fingers get a forgiving target.
pub fn hit_rect(sticker: &Sticker, tolerance: f32) -> Rect {
    Rect::from_center_size(
        sticker.position(),
        Vec2::splat(sticker.effective_size() + 2.0 * tolerance),
    )
}

/// Find the topmost sticker under `point`.
///
/// Document order encodes z-stacking, so the search walks the sequence back
/// to front and the first hit wins. The touch point is tested against each
/// candidate's own bounds; candidates are never compared against each
/// other, and the result is stable for an unchanged document.
pub fn find_topmost_at<'a>(
    point: Pos2,
    stickers: &'a [Sticker],
    tolerance: f32,
) -> Option<&'a Sticker> {
    stickers
        .iter()
        .rev()
        .find(|sticker| hit_rect(sticker, tolerance).contains(point))
}
