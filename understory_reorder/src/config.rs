// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use crate::ConfigError;

/// Tunables for a [`ReorderEngine`](crate::ReorderEngine).
///
/// The defaults match common pointer UIs: a press becomes a drag once it moves
/// more than 5 logical pixels, and items can be dropped up to two item heights
/// below the container so the last slot stays reachable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReorderConfig {
    /// Distance the pointer must travel (strictly more than) before a press
    /// turns into a drag.
    pub drag_slop: f64,
    /// How far below the container a drop is still accepted, in multiples of
    /// the dragged item's height.
    pub drop_zone_extension: f64,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            drag_slop: 5.0,
            drop_zone_extension: 2.0,
        }
    }
}

impl ReorderConfig {
    /// Returns a copy with a different drag slop distance.
    #[must_use]
    pub const fn with_drag_slop(mut self, drag_slop: f64) -> Self {
        self.drag_slop = drag_slop;
        self
    }

    /// Returns a copy with a different drop-zone extension factor.
    #[must_use]
    pub const fn with_drop_zone_extension(mut self, drop_zone_extension: f64) -> Self {
        self.drop_zone_extension = drop_zone_extension;
        self
    }

    /// Squared drag slop, as compared against squared pointer displacement.
    #[must_use]
    pub fn slop_squared(&self) -> f64 {
        self.drag_slop * self.drag_slop
    }

    /// Check that every value is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_slop.is_finite() || self.drag_slop < 0.0 {
            return Err(ConfigError::InvalidDragSlop(self.drag_slop));
        }
        if !self.drop_zone_extension.is_finite() || self.drop_zone_extension < 0.0 {
            return Err(ConfigError::InvalidDropZoneExtension(
                self.drop_zone_extension,
            ));
        }
        Ok(())
    }
}
