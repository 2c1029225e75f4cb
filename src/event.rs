use egui::Pos2;

use crate::sticker::StickerId;

/// Outcome of a finished gesture, delivered with [`EngineEvent::GestureEnded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A placement tap inserted a new sticker.
    Placed,
    /// A long-hold removed the target sticker.
    Removed,
    /// A drag or two-finger transform changed the target sticker.
    Transformed,
    /// A tap landed on an existing sticker; the document is unchanged.
    Tap,
    /// The gesture was cancelled. Updates emitted before the cancellation
    /// stand as final.
    Aborted,
}

/// Requests emitted by the gesture engine for the host to apply.
///
/// The engine never mutates the document itself; it describes each mutation
/// as an event and the host routes them into [`crate::Document::apply`] (or
/// its own model). Continuous transforms emit one `UpdateSticker` per touch
/// move, each already clamped, so every intermediate frame is a valid state.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Snapshot signal: emitted immediately before a destructive mutation
    /// (place or remove) so the host can record an undo snapshot. Never
    /// emitted for continuous transforms.
    GestureStarted { page: usize },

    /// Insert a new sticker at `pos`, on top of the page's stack.
    PlaceSticker {
        glyph: String,
        pos: Pos2,
        base_size: f32,
        page: usize,
    },

    /// Replace fields of one sticker. `None` fields are unchanged.
    UpdateSticker {
        id: StickerId,
        position: Option<Pos2>,
        scale: Option<f32>,
        rotation: Option<f32>,
        page: usize,
    },

    /// Delete a sticker.
    RemoveSticker { id: StickerId, page: usize },

    /// The gesture finished. After a [`GestureOutcome::Transformed`] run the
    /// host should persist the document; the last emitted update is final.
    GestureEnded { page: usize, outcome: GestureOutcome },
}
