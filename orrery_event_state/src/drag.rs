// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: the anchor of a gesture and the rubber band drawn from it.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`DragState::start`] on pointer down.
//! 2) For incremental gestures (pan, dynamic zoom) call [`DragState::advance`] on
//!    each move. It returns the movement since the anchor and re-anchors at the
//!    new position.
//! 3) For box gestures call [`DragState::extend_box`]. The anchor stays put and the
//!    box grows from it once the pointer has left the tolerance square.
//! 4) End the gesture with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use orrery_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_active());
//!
//! let delta = drag.advance(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! assert_eq!(drag.anchor(), Some(Point::new(15.0, 25.0)));
//!
//! drag.end();
//! assert!(!drag.is_active());
//! ```

use kurbo::{Point, Rect, Vec2};

/// Movement in device pixels, along both axes, that a box gesture must exceed
/// before a rubber band exists.
///
/// Click jitter stays inside this square and never produces a one-pixel box.
pub const AREA_TOLERANCE: f64 = 2.0;

/// Tracks the anchor and rubber band of the gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Point>,
    current_delta: Option<Vec2>,
}

impl DragState {
    /// Starts a new gesture anchored at `pos`, discarding any previous box.
    pub fn start(&mut self, pos: Point) {
        self.anchor = Some(pos);
        self.current_delta = None;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the current anchor, if a gesture is in progress.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Returns the extent of the rubber band from the anchor, if one is drawn.
    #[must_use]
    pub fn current_delta(&self) -> Option<Vec2> {
        self.current_delta
    }

    /// Returns the movement from the anchor to `pos` and re-anchors at `pos`.
    ///
    /// Returns `None` when no gesture is in progress.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let anchor = self.anchor?;
        self.anchor = Some(pos);
        Some(pos - anchor)
    }

    /// Grows the rubber band from the anchor to `pos`.
    ///
    /// If `pos` lies within `tolerance` of the anchor on both axes the box is left
    /// as it was and `false` is returned. Otherwise the box now spans anchor to
    /// `pos` and `true` is returned. The anchor never moves.
    pub fn extend_box(&mut self, pos: Point, tolerance: f64) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        let delta = pos - anchor;
        let within = |v: f64| (-tolerance..=tolerance).contains(&v);
        if within(delta.x) && within(delta.y) {
            return false;
        }
        self.current_delta = Some(delta);
        true
    }

    /// Returns `true` if a rubber band is currently drawn.
    #[must_use]
    pub fn has_box(&self) -> bool {
        self.anchor.is_some() && self.current_delta.is_some()
    }

    /// Returns the normalized rubber band rectangle, if one is drawn.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        let anchor = self.anchor?;
        let delta = self.current_delta?;
        Some(Rect::from_points(anchor, anchor + delta))
    }

    /// Discards the rubber band but keeps the gesture alive.
    ///
    /// Returns `true` if a box was drawn before the call.
    pub fn clear_box(&mut self) -> bool {
        self.current_delta.take().is_some()
    }

    /// Ends the gesture and resets all state.
    pub fn end(&mut self) {
        self.anchor = None;
        self.current_delta = None;
    }
}
