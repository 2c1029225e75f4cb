use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::id_generator;

/// Unique identifier for a placed sticker.
pub type StickerId = u64;

/// A placed emoji sticker on one page.
///
/// Stickers are immutable values: a transform produces a new copy through
/// the `with_*` builders and the document replaces the old entry wholesale.
/// Nothing hands out `&mut` access to individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    id: StickerId,
    glyph: String,
    position: Pos2,
    scale: f32,
    rotation: f32,
    base_size: f32,
}

impl Sticker {
    /// Create a new sticker centered at `position` with a fresh id,
    /// unit scale, and no rotation.
    pub fn new(glyph: impl Into<String>, position: Pos2, base_size: f32) -> Self {
        Self {
            id: id_generator::generate_id(),
            glyph: glyph.into(),
            position,
            scale: 1.0,
            rotation: 0.0,
            base_size,
        }
    }

    pub fn id(&self) -> StickerId {
        self.id
    }

    /// The emoji grapheme cluster this sticker displays.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Center of the sticker in page-local coordinates.
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rotation in degrees. Accumulates across gestures and is not wrapped.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Unscaled side length, fixed at creation.
    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Current rendered footprint: `base_size * scale`.
    pub fn effective_size(&self) -> f32 {
        self.base_size * self.scale
    }

    /// Axis-aligned bounds of the rendered sticker.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.effective_size()))
    }

    /// Copy of this sticker with a new center position.
    pub fn with_position(&self, position: Pos2) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Copy of this sticker with a new scale.
    pub fn with_scale(&self, scale: f32) -> Self {
        Self {
            scale,
            ..self.clone()
        }
    }

    /// Copy of this sticker with a new rotation in degrees.
    pub fn with_rotation(&self, rotation: f32) -> Self {
        Self {
            rotation,
            ..self.clone()
        }
    }
}
