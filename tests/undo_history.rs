use egui::pos2;
use sticker_paint::{Document, HistoryError, Sticker, UndoHistory};

fn sticker(x: f32, y: f32) -> Sticker {
    Sticker::new("🐻", pos2(x, y), 120.0)
}

#[test]
fn undo_restores_the_pre_mutation_state() {
    let mut doc = Document::new(1);
    let mut history = UndoHistory::new(8);

    let placed = sticker(400.0, 400.0);
    let id = placed.id();
    doc.page_mut(0).unwrap().add(placed);

    // Snapshot before the destructive mutation, then clear the page.
    history.push_snapshot(0, doc.page(0).unwrap());
    doc.page_mut(0).unwrap().clear();
    assert!(doc.page(0).unwrap().is_empty());

    let restored_page = history.undo(&mut doc).unwrap();
    assert_eq!(restored_page, 0);
    assert!(doc.page(0).unwrap().get(id).is_some());
    assert!(!history.can_undo());
}

#[test]
fn undo_with_no_snapshots_errors() {
    let mut doc = Document::new(1);
    let mut history = UndoHistory::new(8);
    assert!(matches!(
        history.undo(&mut doc),
        Err(HistoryError::NothingToUndo)
    ));
}

#[test]
fn capacity_evicts_the_oldest_snapshot() {
    let mut doc = Document::new(1);
    let mut history = UndoHistory::new(2);

    // Three snapshots of growing pages: empty, one sticker, two stickers.
    history.push_snapshot(0, doc.page(0).unwrap());
    doc.page_mut(0).unwrap().add(sticker(100.0, 100.0));
    history.push_snapshot(0, doc.page(0).unwrap());
    doc.page_mut(0).unwrap().add(sticker(200.0, 200.0));
    history.push_snapshot(0, doc.page(0).unwrap());
    doc.page_mut(0).unwrap().add(sticker(300.0, 300.0));

    assert_eq!(history.len(), 2);

    // Most recent first: two stickers, then one. The empty snapshot was
    // evicted.
    history.undo(&mut doc).unwrap();
    assert_eq!(doc.page(0).unwrap().len(), 2);
    history.undo(&mut doc).unwrap();
    assert_eq!(doc.page(0).unwrap().len(), 1);
    assert!(matches!(
        history.undo(&mut doc),
        Err(HistoryError::NothingToUndo)
    ));
}

#[test]
fn restoring_into_a_missing_page_errors() {
    let mut doc = Document::new(1);
    doc.page_mut(0).unwrap().add(sticker(100.0, 100.0));

    let mut history = UndoHistory::new(8);
    history.push_snapshot(0, doc.page(0).unwrap());

    // The host swapped in a document without that page.
    let mut empty = Document::new(0);
    assert!(matches!(
        history.undo(&mut empty),
        Err(HistoryError::PageGone { page: 0 })
    ));
}

#[test]
fn clear_discards_all_snapshots() {
    let mut doc = Document::new(1);
    let mut history = UndoHistory::new(8);
    history.push_snapshot(0, doc.page(0).unwrap());
    assert!(history.can_undo());

    history.clear();
    assert!(history.is_empty());
}
