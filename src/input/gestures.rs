use std::f32::consts::{PI, TAU};

use egui::{Pos2, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{TouchEvent, TouchPhase};
use crate::document::PageDocument;
use crate::event::{EngineEvent, GestureOutcome};
use crate::geometry::bounds;
use crate::sticker::{Sticker, StickerId};

/// Smallest allowed sticker scale.
pub const MIN_SCALE: f32 = 0.4;
/// Largest allowed sticker scale before the container cap.
pub const MAX_SCALE: f32 = 2.5;
/// Unscaled sticker side length in points.
pub const BASE_SIZE: f32 = 120.0;
/// Minimum comfortable touch-target side length.
pub const MIN_TOUCH_TARGET: f32 = 48.0;
/// Hold duration that turns a press into a removal, in seconds.
pub const LONG_HOLD_SECS: f64 = 0.5;
/// Movement below this distance still counts as "not moved".
pub const DRAG_EPSILON: f32 = 10.0;
/// Extra hit-test slop around each sticker.
pub const HIT_TOLERANCE: f32 = 20.0;
/// A sticker may cover at most this fraction of the smaller container side.
pub const DYNAMIC_MAX_SCALE_FRACTION: f32 = 0.8;

/// Tunables for gesture recognition and transform clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub base_size: f32,
    pub min_touch_target: f32,
    pub long_hold_secs: f64,
    pub drag_epsilon: f32,
    pub hit_tolerance: f32,
    pub max_container_fraction: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            base_size: BASE_SIZE,
            min_touch_target: MIN_TOUCH_TARGET,
            long_hold_secs: LONG_HOLD_SECS,
            drag_epsilon: DRAG_EPSILON,
            hit_tolerance: HIT_TOLERANCE,
            max_container_fraction: DYNAMIC_MAX_SCALE_FRACTION,
        }
    }
}

/// One tracked finger inside a two-finger transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: u64,
    pub pos: Pos2,
}

/// Current position in the gesture state machine.
///
/// A single variant holds the whole gesture's transient state; it is
/// created when the first finger lands and discarded when the gesture
/// completes, so nothing leaks across gesture instances. Every finishing
/// transition lands back in `Idle` within the same call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No active contact.
    Idle,
    /// First contact is down; tap, drag, and long-hold are still racing.
    Armed {
        contact: u64,
        start: Pos2,
        last: Pos2,
        start_time: f64,
        /// Resolved once, at contact-down. Never re-resolved mid-gesture.
        target: Option<StickerId>,
    },
    /// Single-finger drag of a target sticker.
    Dragging {
        contact: u64,
        last: Pos2,
        target: StickerId,
    },
    /// Two-finger pinch/rotate of a target sticker.
    MultiTouch {
        primary: Contact,
        secondary: Contact,
        target: StickerId,
    },
}

/// The gesture state machine.
///
/// Consumes the page's raw touch stream and emits [`EngineEvent`]s; it
/// never mutates the document itself. The host owns the document and the
/// clock: it calls [`GestureEngine::handle_event`] for every touch event
/// and [`GestureEngine::tick`] once per frame so a pending long-hold can
/// fire. Events always win over the timer: a qualifying movement, a
/// second-finger join, or a release processed in `handle_event` replaces
/// the armed state before the deadline check in `tick` can observe it, so
/// the timer and a transition can never both fire.
#[derive(Debug)]
pub struct GestureEngine {
    config: GestureConfig,
    container: Vec2,
    page: usize,
    glyph: String,
    state: GestureState,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            container: Vec2::ZERO,
            page: 0,
            glyph: "⭐".to_owned(),
            state: GestureState::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Update the page-local container bounds.
    ///
    /// Safe to call between events; all subsequent clamping uses the new
    /// bounds, never a cached copy.
    pub fn set_container_size(&mut self, size: Vec2) {
        self.container = size;
    }

    /// Select the page the engine is manipulating.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Select the glyph used for placement taps.
    pub fn set_glyph(&mut self, glyph: impl Into<String>) {
        self.glyph = glyph.into();
    }

    /// Advance the state machine with one touch event.
    ///
    /// `doc` is the page the engine is manipulating; the returned events
    /// describe the mutations the host should apply to it.
    pub fn handle_event(&mut self, event: &TouchEvent, doc: &PageDocument) -> Vec<EngineEvent> {
        match self.state {
            GestureState::Idle => self.on_idle(event, doc),
            GestureState::Armed {
                contact,
                start,
                last,
                start_time,
                target,
            } => self.on_armed(event, doc, contact, start, last, start_time, target),
            GestureState::Dragging {
                contact,
                last,
                target,
            } => self.on_dragging(event, doc, contact, last, target),
            GestureState::MultiTouch {
                primary,
                secondary,
                target,
            } => self.on_multi_touch(event, doc, primary, secondary, target),
        }
    }

    /// Drive the long-hold timer. Call once per frame with the current
    /// host time.
    ///
    /// The hold fires only here, never inside [`GestureEngine::handle_event`].
    pub fn tick(&mut self, now: f64, doc: &PageDocument) -> Vec<EngineEvent> {
        let GestureState::Armed {
            start_time, target, ..
        } = self.state
        else {
            return Vec::new();
        };
        if now - start_time < self.config.long_hold_secs {
            return Vec::new();
        }
        // The hold elapsed without movement, a join, or a release.
        self.state = GestureState::Idle;
        match target {
            Some(id) if doc.get(id).is_some() => vec![
                EngineEvent::GestureStarted { page: self.page },
                EngineEvent::RemoveSticker {
                    id,
                    page: self.page,
                },
                EngineEvent::GestureEnded {
                    page: self.page,
                    outcome: GestureOutcome::Removed,
                },
            ],
            // Target vanished mid-gesture.
            Some(_) => Vec::new(),
            // Holding empty canvas places nothing; the gesture is consumed.
            None => Vec::new(),
        }
    }

    /// Host-driven cancellation, e.g. a system-level touch cancel.
    ///
    /// Reverts to idle without emitting any further sticker update; the
    /// last emitted state stands as final.
    pub fn cancel(&mut self) -> Vec<EngineEvent> {
        let had_updates = matches!(
            self.state,
            GestureState::Dragging { .. } | GestureState::MultiTouch { .. }
        );
        self.state = GestureState::Idle;
        if had_updates {
            vec![EngineEvent::GestureEnded {
                page: self.page,
                outcome: GestureOutcome::Aborted,
            }]
        } else {
            Vec::new()
        }
    }

    fn on_idle(&mut self, event: &TouchEvent, doc: &PageDocument) -> Vec<EngineEvent> {
        match event.phase {
            TouchPhase::Started => {
                let target = doc
                    .topmost_at(event.pos, self.config.hit_tolerance)
                    .map(|sticker| sticker.id());
                self.state = GestureState::Armed {
                    contact: event.id,
                    start: event.pos,
                    last: event.pos,
                    start_time: event.time,
                    target,
                };
                Vec::new()
            }
            _ => {
                debug!("ignoring {:?} for untracked contact {}", event.phase, event.id);
                Vec::new()
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn on_armed(
        &mut self,
        event: &TouchEvent,
        doc: &PageDocument,
        contact: u64,
        start: Pos2,
        last: Pos2,
        start_time: f64,
        target: Option<StickerId>,
    ) -> Vec<EngineEvent> {
        if event.id != contact {
            if event.phase == TouchPhase::Started {
                self.join_second_finger(doc, contact, last, event, target);
            } else {
                debug!("ignoring {:?} for unknown contact {}", event.phase, event.id);
            }
            return Vec::new();
        }
        match event.phase {
            TouchPhase::Started => {
                debug!("duplicate down for contact {contact}");
                Vec::new()
            }
            TouchPhase::Moved => {
                if (event.pos - start).length() < self.config.drag_epsilon {
                    // Still within the tap/hold window.
                    self.state = GestureState::Armed {
                        contact,
                        start,
                        last: event.pos,
                        start_time,
                        target,
                    };
                    return Vec::new();
                }
                match target.and_then(|id| doc.get(id)) {
                    Some(sticker) => {
                        let events = vec![self.drag_update(sticker, event.pos - last)];
                        self.state = GestureState::Dragging {
                            contact,
                            last: event.pos,
                            target: sticker.id(),
                        };
                        events
                    }
                    // Either the target vanished or the finger is sweeping
                    // empty canvas; page swipes belong to the pager.
                    None => {
                        self.state = GestureState::Idle;
                        Vec::new()
                    }
                }
            }
            TouchPhase::Ended => {
                self.state = GestureState::Idle;
                let is_tap = (event.pos - start).length() < self.config.drag_epsilon
                    && event.time - start_time < self.config.long_hold_secs;
                if !is_tap {
                    // A late release cancels the pending hold rather than
                    // firing it.
                    return Vec::new();
                }
                match target {
                    Some(_) => vec![EngineEvent::GestureEnded {
                        page: self.page,
                        outcome: GestureOutcome::Tap,
                    }],
                    None => self.place_at(start),
                }
            }
            TouchPhase::Cancelled => {
                self.state = GestureState::Idle;
                Vec::new()
            }
        }
    }

    fn on_dragging(
        &mut self,
        event: &TouchEvent,
        doc: &PageDocument,
        contact: u64,
        last: Pos2,
        target: StickerId,
    ) -> Vec<EngineEvent> {
        if event.id != contact {
            if event.phase == TouchPhase::Started {
                self.join_second_finger(doc, contact, last, event, Some(target));
            } else {
                debug!("ignoring {:?} for unknown contact {}", event.phase, event.id);
            }
            return Vec::new();
        }
        match event.phase {
            TouchPhase::Started => {
                debug!("duplicate down for contact {contact}");
                Vec::new()
            }
            TouchPhase::Moved => {
                let Some(sticker) = doc.get(target) else {
                    // Target vanished mid-gesture; terminate silently.
                    self.state = GestureState::Idle;
                    return Vec::new();
                };
                let events = vec![self.drag_update(sticker, event.pos - last)];
                self.state = GestureState::Dragging {
                    contact,
                    last: event.pos,
                    target,
                };
                events
            }
            TouchPhase::Ended => {
                self.state = GestureState::Idle;
                vec![EngineEvent::GestureEnded {
                    page: self.page,
                    outcome: GestureOutcome::Transformed,
                }]
            }
            TouchPhase::Cancelled => {
                self.state = GestureState::Idle;
                vec![EngineEvent::GestureEnded {
                    page: self.page,
                    outcome: GestureOutcome::Aborted,
                }]
            }
        }
    }

    fn on_multi_touch(
        &mut self,
        event: &TouchEvent,
        doc: &PageDocument,
        primary: Contact,
        secondary: Contact,
        target: StickerId,
    ) -> Vec<EngineEvent> {
        let is_primary = if event.id == primary.id {
            true
        } else if event.id == secondary.id {
            false
        } else {
            // A third finger never participates.
            debug!("ignoring {:?} for extra contact {}", event.phase, event.id);
            return Vec::new();
        };
        match event.phase {
            TouchPhase::Started => {
                debug!("duplicate down for contact {}", event.id);
                Vec::new()
            }
            TouchPhase::Moved => {
                let Some(sticker) = doc.get(target) else {
                    // Target vanished mid-gesture; terminate silently.
                    self.state = GestureState::Idle;
                    return Vec::new();
                };
                let mut next_primary = primary;
                let mut next_secondary = secondary;
                if is_primary {
                    next_primary.pos = event.pos;
                } else {
                    next_secondary.pos = event.pos;
                }
                let events = vec![self.pinch_update(
                    sticker,
                    primary,
                    secondary,
                    next_primary,
                    next_secondary,
                )];
                self.state = GestureState::MultiTouch {
                    primary: next_primary,
                    secondary: next_secondary,
                    target,
                };
                events
            }
            TouchPhase::Ended => {
                // Hand the gesture back to the remaining finger without
                // jumping the sticker: the new drag anchors where that
                // finger currently is.
                let remaining = if is_primary { secondary } else { primary };
                self.state = GestureState::Dragging {
                    contact: remaining.id,
                    last: remaining.pos,
                    target,
                };
                Vec::new()
            }
            TouchPhase::Cancelled => {
                self.state = GestureState::Idle;
                vec![EngineEvent::GestureEnded {
                    page: self.page,
                    outcome: GestureOutcome::Aborted,
                }]
            }
        }
    }

    /// Capture a second finger as the reference pair for a two-finger
    /// transform, or abandon the gesture when there is nothing to
    /// transform.
    fn join_second_finger(
        &mut self,
        doc: &PageDocument,
        contact: u64,
        last: Pos2,
        event: &TouchEvent,
        target: Option<StickerId>,
    ) {
        match target.and_then(|id| doc.get(id)) {
            Some(sticker) => {
                self.state = GestureState::MultiTouch {
                    primary: Contact { id: contact, pos: last },
                    secondary: Contact {
                        id: event.id,
                        pos: event.pos,
                    },
                    target: sticker.id(),
                };
            }
            // Two fingers on empty canvas are not ours; page swipes belong
            // to the pager.
            None => {
                self.state = GestureState::Idle;
            }
        }
    }

    fn drag_update(&self, sticker: &Sticker, delta: Vec2) -> EngineEvent {
        let position = bounds::clamp_position(
            sticker.position() + delta,
            self.container,
            sticker.effective_size(),
        );
        EngineEvent::UpdateSticker {
            id: sticker.id(),
            position: Some(position),
            scale: None,
            rotation: None,
            page: self.page,
        }
    }

    fn pinch_update(
        &self,
        sticker: &Sticker,
        prev_primary: Contact,
        prev_secondary: Contact,
        cur_primary: Contact,
        cur_secondary: Contact,
    ) -> EngineEvent {
        let prev_span = prev_secondary.pos - prev_primary.pos;
        let cur_span = cur_secondary.pos - cur_primary.pos;

        // Zero separation would divide to infinity; treat it as no zoom.
        let prev_distance = prev_span.length();
        let zoom = if prev_distance == 0.0 {
            1.0
        } else {
            cur_span.length() / prev_distance
        };
        let scale = bounds::clamp_scale(
            sticker.scale() * zoom,
            self.container,
            sticker.base_size(),
            self.config.min_scale,
            self.config.max_scale,
            self.config.max_container_fraction,
        );

        // Shortest-arc change of the finger-pair angle, in degrees.
        let mut angle_delta = cur_span.angle() - prev_span.angle();
        if angle_delta > PI {
            angle_delta -= TAU;
        } else if angle_delta < -PI {
            angle_delta += TAU;
        }
        let rotation = sticker.rotation() + angle_delta.to_degrees();

        // The centroid never pans the sticker; only the footprint change
        // can push the center back inside the container.
        let position = bounds::clamp_position(
            sticker.position(),
            self.container,
            sticker.base_size() * scale,
        );

        EngineEvent::UpdateSticker {
            id: sticker.id(),
            position: Some(position),
            scale: Some(scale),
            rotation: Some(rotation),
            page: self.page,
        }
    }

    fn place_at(&self, point: Pos2) -> Vec<EngineEvent> {
        // New stickers spawn at unit scale; keep them fully on the page.
        let pos = bounds::clamp_position(point, self.container, self.config.base_size);
        vec![
            EngineEvent::GestureStarted { page: self.page },
            EngineEvent::PlaceSticker {
                glyph: self.glyph.clone(),
                pos,
                base_size: self.config.base_size,
                page: self.page,
            },
            EngineEvent::GestureEnded {
                page: self.page,
                outcome: GestureOutcome::Placed,
            },
        ]
    }
}
