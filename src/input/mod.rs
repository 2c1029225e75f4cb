use egui::{Context, Pos2};

pub mod gestures;

/// Phase of a touch contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl From<egui::TouchPhase> for TouchPhase {
    fn from(phase: egui::TouchPhase) -> Self {
        match phase {
            egui::TouchPhase::Start => Self::Started,
            egui::TouchPhase::Move => Self::Moved,
            egui::TouchPhase::End => Self::Ended,
            egui::TouchPhase::Cancel => Self::Cancelled,
        }
    }
}

/// A single touch-contact event in page-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Stable identifier for the finger across its down/move/up lifetime.
    pub id: u64,
    pub phase: TouchPhase,
    pub pos: Pos2,
    /// Host timestamp in seconds.
    pub time: f64,
}

/// Collect this frame's touch events from egui's raw input.
///
/// Positions pass through unchanged; the caller is responsible for the
/// canvas filling the region the engine treats as the page.
pub fn touch_events_from_egui(ctx: &Context) -> Vec<TouchEvent> {
    ctx.input(|input| {
        let time = input.time;
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch { id, phase, pos, .. } => Some(TouchEvent {
                    id: id.0,
                    phase: TouchPhase::from(*phase),
                    pos: *pos,
                    time,
                }),
                _ => None,
            })
            .collect()
    })
}
