// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Error returned when a [`ReorderConfig`](crate::ReorderConfig) is rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The drag slop distance was negative or not finite.
    InvalidDragSlop(f64),
    /// The drop-zone extension factor was negative or not finite.
    InvalidDropZoneExtension(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDragSlop(value) => {
                write!(f, "drag slop must be finite and non-negative, got {value}")
            }
            Self::InvalidDropZoneExtension(value) => write!(
                f,
                "drop zone extension must be finite and non-negative, got {value}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned when a reorder cannot be applied to a caller's items.
///
/// This happens when the caller's data is not parallel to the sibling snapshot
/// the engine worked with, for example when items were removed mid-drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwapError {
    /// The offending index.
    pub index: usize,
    /// Length of the slice that was passed in.
    pub len: usize,
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reorder index {} is out of bounds for {} items",
            self.index, self.len
        )
    }
}

impl core::error::Error for SwapError {}
