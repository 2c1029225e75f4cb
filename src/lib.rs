#![warn(clippy::all, rust_2018_idioms)]

pub mod document;
pub mod error;
pub mod event;
pub mod geometry;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod sticker;

pub use document::{Document, PageDocument};
pub use error::{DocumentError, HistoryError};
pub use event::{EngineEvent, GestureOutcome};
pub use history::UndoHistory;
pub use input::gestures::{GestureConfig, GestureEngine, GestureState};
pub use input::{TouchEvent, TouchPhase};
pub use sticker::{Sticker, StickerId};
