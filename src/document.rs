use egui::Pos2;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::event::EngineEvent;
use crate::geometry::hit_testing;
use crate::sticker::{Sticker, StickerId};

/// One page of placed stickers.
///
/// Order encodes z-stacking: later entries render on top and win overlap
/// resolution. New stickers are appended, so the newest placement is
/// topmost; nothing restacks on touch. Ids are unique within a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    stickers: Vec<Sticker>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a page from a snapshot of its sticker sequence.
    pub fn from_stickers(stickers: Vec<Sticker>) -> Self {
        Self { stickers }
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    pub fn get(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id() == id)
    }

    /// Append a sticker on top of the stack.
    ///
    /// A duplicate id is a logged no-op.
    pub fn add(&mut self, sticker: Sticker) {
        if self.get(sticker.id()).is_some() {
            warn!("ignoring duplicate sticker id {}", sticker.id());
            return;
        }
        self.stickers.push(sticker);
    }

    /// Replace the sticker with `id` by `f`'s result, in place.
    ///
    /// The relative order of every other sticker is untouched. Returns
    /// whether anything was replaced; an unknown id is a no-op.
    pub fn update_with(&mut self, id: StickerId, f: impl FnOnce(&Sticker) -> Sticker) -> bool {
        match self.stickers.iter().position(|s| s.id() == id) {
            Some(index) => {
                let updated = f(&self.stickers[index]);
                debug_assert_eq!(updated.id(), id, "updates must not reassign sticker ids");
                self.stickers[index] = updated;
                true
            }
            None => false,
        }
    }

    /// Remove and return the sticker with `id`, preserving the order of the
    /// survivors.
    pub fn remove(&mut self, id: StickerId) -> Option<Sticker> {
        let index = self.stickers.iter().position(|s| s.id() == id)?;
        Some(self.stickers.remove(index))
    }

    /// Remove every sticker on the page.
    pub fn clear(&mut self) {
        self.stickers.clear();
    }

    /// The topmost sticker whose tolerance-inflated bounds contain `point`.
    pub fn topmost_at(&self, point: Pos2, tolerance: f32) -> Option<&Sticker> {
        hit_testing::find_topmost_at(point, &self.stickers, tolerance)
    }
}

/// The whole drawing: an ordered set of pages addressed by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pages: Vec<PageDocument>,
}

impl Document {
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: vec![PageDocument::new(); page_count],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&PageDocument> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut PageDocument> {
        self.pages.get_mut(index)
    }

    /// Append an empty page and return its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(PageDocument::new());
        self.pages.len() - 1
    }

    /// Apply one engine event to the document.
    ///
    /// Returns the id of the sticker that was placed, updated, or removed.
    /// Gesture lifecycle signals map to no mutation, and an unknown page or
    /// sticker id degrades to a logged no-op so a stale event can never
    /// crash the input stream.
    pub fn apply(&mut self, event: &EngineEvent) -> Option<StickerId> {
        match event {
            EngineEvent::GestureStarted { .. } | EngineEvent::GestureEnded { .. } => None,
            EngineEvent::PlaceSticker {
                glyph,
                pos,
                base_size,
                page,
            } => {
                let page_doc = self.page_mut_or_warn(*page)?;
                let sticker = Sticker::new(glyph.clone(), *pos, *base_size);
                let id = sticker.id();
                page_doc.add(sticker);
                Some(id)
            }
            EngineEvent::UpdateSticker {
                id,
                position,
                scale,
                rotation,
                page,
            } => {
                let page_doc = self.page_mut_or_warn(*page)?;
                let replaced = page_doc.update_with(*id, |sticker| {
                    let mut next = sticker.clone();
                    if let Some(position) = position {
                        next = next.with_position(*position);
                    }
                    if let Some(scale) = scale {
                        next = next.with_scale(*scale);
                    }
                    if let Some(rotation) = rotation {
                        next = next.with_rotation(*rotation);
                    }
                    next
                });
                if !replaced {
                    debug!("dropping update for unknown sticker {id}");
                }
                replaced.then_some(*id)
            }
            EngineEvent::RemoveSticker { id, page } => {
                let page_doc = self.page_mut_or_warn(*page)?;
                if page_doc.remove(*id).is_none() {
                    debug!("dropping removal for unknown sticker {id}");
                    return None;
                }
                Some(*id)
            }
        }
    }

    fn page_mut_or_warn(&mut self, index: usize) -> Option<&mut PageDocument> {
        if index >= self.pages.len() {
            warn!("dropping event for out-of-range page {index}");
            return None;
        }
        self.pages.get_mut(index)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}
