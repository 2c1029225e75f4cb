use log::warn;

use crate::document::{Document, PageDocument};
use crate::error::HistoryError;
use crate::sticker::Sticker;

/// One recorded pre-mutation state of a page.
#[derive(Debug, Clone)]
struct PageSnapshot {
    page: usize,
    stickers: Vec<Sticker>,
}

/// Bounded stack of page snapshots for undo.
///
/// The host pushes a snapshot when the engine signals
/// [`crate::EngineEvent::GestureStarted`], which precedes every destructive
/// mutation, and pops the most recent one to undo. When the stack is full
/// the oldest snapshot is evicted.
#[derive(Debug)]
pub struct UndoHistory {
    snapshots: Vec<PageSnapshot>,
    capacity: usize,
}

impl UndoHistory {
    /// Create a history holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record the current state of `page` before a destructive mutation.
    pub fn push_snapshot(&mut self, page: usize, state: &PageDocument) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.remove(0);
        }
        self.snapshots.push(PageSnapshot {
            page,
            stickers: state.stickers().to_vec(),
        });
    }

    /// Restore the most recent snapshot into the document.
    ///
    /// Returns the index of the restored page.
    pub fn undo(&mut self, doc: &mut Document) -> Result<usize, HistoryError> {
        let snapshot = self.snapshots.pop().ok_or(HistoryError::NothingToUndo)?;
        match doc.page_mut(snapshot.page) {
            Some(page_doc) => {
                *page_doc = PageDocument::from_stickers(snapshot.stickers);
                Ok(snapshot.page)
            }
            None => {
                warn!("dropping undo snapshot for missing page {}", snapshot.page);
                Err(HistoryError::PageGone {
                    page: snapshot.page,
                })
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop every recorded snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
