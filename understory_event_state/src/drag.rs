// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: separate plain presses from drags and compute offsets.
//!
//! A pointer press does not become a drag until the pointer travels far enough
//! away from where it went down. [`DragState`] tracks that distinction using a
//! squared-distance slop threshold, so a click with a little jitter is never
//! mistaken for a drag.
//!
//! ## Usage
//!
//! 1) Call [`DragState::press`] with the position of the pointer-down.
//! 2) On each move event, call [`DragState::update`]. It returns a
//!    [`DragMotion`] describing the delta since the previous event, the total
//!    offset from the press, and whether this move is the one that started the
//!    drag.
//! 3) Query [`DragState::is_dragging`] to check whether the slop was exceeded.
//! 4) End the interaction with [`DragState::release`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.press(Point::new(10.0, 20.0));
//! assert!(drag.is_pressed());
//! assert!(!drag.is_dragging());
//!
//! // 3 px of jitter stays below the default 25 px² slop.
//! let motion = drag.update(Point::new(13.0, 20.0)).unwrap();
//! assert!(!motion.started);
//! assert!(!drag.is_dragging());
//!
//! // Moving further starts the drag.
//! let motion = drag.update(Point::new(20.0, 20.0)).unwrap();
//! assert!(motion.started);
//! assert_eq!(motion.total.x, 10.0);
//! assert!(drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Movement reported by [`DragState::update`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragMotion {
    /// Movement since the previous update (or since the press).
    pub delta: Vec2,
    /// Movement since the press.
    pub total: Vec2,
    /// `true` only for the update that crossed the slop threshold.
    pub started: bool,
}

/// Tracks a single press and whether it has turned into a drag.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    slop_squared: f64,
    dragging: bool,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

impl DragState {
    /// Default slop, as a squared distance in logical pixels.
    pub const DEFAULT_SLOP_SQUARED: f64 = 25.0;

    /// Creates an idle state with the default slop.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_slop_squared(Self::DEFAULT_SLOP_SQUARED)
    }

    /// Creates an idle state whose drag starts once the squared displacement
    /// from the press strictly exceeds `slop_squared`.
    #[must_use]
    pub const fn with_slop_squared(slop_squared: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            slop_squared,
            dragging: false,
        }
    }

    /// Squared slop distance.
    #[must_use]
    pub const fn slop_squared(&self) -> f64 {
        self.slop_squared
    }

    /// Begin tracking a press at `pos`, discarding any previous press.
    pub fn press(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.dragging = false;
    }

    /// Feed a pointer move.
    ///
    /// Returns `None` when no press is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<DragMotion> {
        let start = self.start_pos?;
        let last = self.last_pos.unwrap_or(start);
        self.last_pos = Some(pos);

        let total = pos - start;
        let started = !self.dragging && total.hypot2() > self.slop_squared;
        if started {
            self.dragging = true;
        }
        Some(DragMotion {
            delta: pos - last,
            total,
            started,
        })
    }

    /// Get total offset from the press position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Position of the tracked press.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.start_pos
    }

    /// Most recent pointer position seen while pressed.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// End the current press and reset state. Safe to call when idle.
    pub fn release(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.dragging = false;
    }

    /// Returns `true` while a press is being tracked, dragging or not.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the press has exceeded the slop threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
