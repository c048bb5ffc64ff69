// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout strategies: how slots are arranged and how siblings make room.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::capture::DragCapture;
use crate::grid::GridLayout;
use crate::host::{GeometryProvider, ReorderHost};
use crate::list::ListLayout;

/// Geometry rules for one kind of reorderable layout.
///
/// The engine calls [`initialize`](Self::initialize) once when a drag starts,
/// then [`target_index`](Self::target_index) and
/// [`apply_live_transforms`](Self::apply_live_transforms) on every pointer move
/// that lands inside the drop region.
pub trait LayoutStrategy {
    /// Derive spacing from the captured geometry and apply any start-of-drag
    /// styling (for example taking the dragged node out of flow).
    fn initialize<N, H>(&self, capture: &mut DragCapture<N>, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized;

    /// Slot the dragged item hovers over with the pointer at `pointer`.
    ///
    /// The result never exceeds [`DragCapture::max_target`].
    fn target_index<N, G>(&self, capture: &DragCapture<N>, pointer: Point, geometry: &G) -> usize
    where
        N: Clone + PartialEq,
        G: GeometryProvider<N> + ?Sized;

    /// Translate every sibling so that `target` looks vacant.
    ///
    /// Siblings that keep their place get an explicit zero translation.
    fn apply_live_transforms<N, H>(&self, capture: &DragCapture<N>, target: usize, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized;
}

/// Layout chosen at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReorderLayout {
    /// Single column, siblings shift vertically.
    #[default]
    List,
    /// Wrapping rows, siblings shift along both axes.
    Grid,
}

impl LayoutStrategy for ReorderLayout {
    fn initialize<N, H>(&self, capture: &mut DragCapture<N>, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized,
    {
        match self {
            Self::List => ListLayout.initialize(capture, host),
            Self::Grid => GridLayout.initialize(capture, host),
        }
    }

    fn target_index<N, G>(&self, capture: &DragCapture<N>, pointer: Point, geometry: &G) -> usize
    where
        N: Clone + PartialEq,
        G: GeometryProvider<N> + ?Sized,
    {
        match self {
            Self::List => ListLayout.target_index(capture, pointer, geometry),
            Self::Grid => GridLayout.target_index(capture, pointer, geometry),
        }
    }

    fn apply_live_transforms<N, H>(&self, capture: &DragCapture<N>, target: usize, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized,
    {
        match self {
            Self::List => ListLayout.apply_live_transforms(capture, target, host),
            Self::Grid => GridLayout.apply_live_transforms(capture, target, host),
        }
    }
}

/// Which way a sibling moves while the dragged item hovers over a slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Shift {
    /// Moves one slot toward the start.
    Back,
    /// Stays put.
    Stay,
    /// Moves one slot toward the end.
    Forward,
}

impl Shift {
    /// Shift for the sibling at `index` when the item at `origin` hovers over `target`.
    pub(crate) fn of(index: usize, origin: usize, target: usize) -> Self {
        if origin < index && index <= target {
            Self::Back
        } else if target <= index && index < origin {
            Self::Forward
        } else {
            Self::Stay
        }
    }
}

/// Floor a non-negative float to an index. Negative and NaN values give 0.
pub(crate) fn floor_to_index(value: f64) -> usize {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float-to-int casts saturate; callers clamp the index afterwards"
    )]
    {
        value.floor() as usize
    }
}
