// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapping grid reordering.
//!
//! Cells share the dragged item's size. The column count is however many cells
//! fit across the container, and the leftover width is split evenly between
//! columns (rounded to whole pixels); the same gap separates rows.
//!
//! While hovering, siblings between the origin and the target move one slot
//! the way a flowed grid re-flows: a cell moving back out of the first column
//! lands in the last column of the previous row, and a cell moving forward out
//! of the last column lands in the first column of the next row.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::capture::{DragCapture, LayoutMetrics};
use crate::host::{GeometryProvider, ReorderHost};
use crate::layout::{LayoutStrategy, Shift, floor_to_index};

/// Multi-column grid layout with row wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridLayout;

/// Number of `cell`-wide columns fitting in `extent`, at least 1.
pub(crate) fn column_count(extent: f64, cell: f64) -> usize {
    if cell.is_nan() || cell <= 0.0 {
        return 1;
    }
    floor_to_index(extent / cell).max(1)
}

/// Whole-pixel gap between `columns` cells of size `cell` across `extent`.
pub(crate) fn column_gap(extent: f64, cell: f64, columns: usize) -> f64 {
    if columns < 2 {
        return 0.0;
    }
    let gap = ((extent - columns as f64 * cell) / (columns - 1) as f64).round();
    if gap.is_finite() { gap } else { 0.0 }
}

impl LayoutStrategy for GridLayout {
    fn initialize<N, H>(&self, capture: &mut DragCapture<N>, _host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized,
    {
        let cell = capture.dragged_bounds().width();
        let extent = capture.container_bounds().width();
        let columns = column_count(extent, cell);
        capture.set_metrics(LayoutMetrics {
            gap: column_gap(extent, cell, columns),
            columns,
        });
    }

    fn target_index<N, G>(&self, capture: &DragCapture<N>, pointer: Point, _geometry: &G) -> usize
    where
        N: Clone + PartialEq,
        G: GeometryProvider<N> + ?Sized,
    {
        let cell = capture.dragged_bounds().size();
        let columns = capture.metrics().columns;
        let local = pointer - capture.container_bounds().origin();
        let column = floor_to_index(local.x / cell.width).min(columns - 1);
        let row = floor_to_index(local.y / cell.height);
        row.saturating_mul(columns)
            .saturating_add(column)
            .min(capture.max_target())
    }

    fn apply_live_transforms<N, H>(&self, capture: &DragCapture<N>, target: usize, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized,
    {
        let cell = capture.dragged_bounds().size();
        let LayoutMetrics { gap, columns } = capture.metrics();
        let step = Vec2::new(cell.width + gap, cell.height + gap);
        let last_column = columns - 1;
        let row_span = step.x * last_column as f64;
        let left = capture.container_bounds().x0;
        let origin = capture.origin_index();

        for (index, node) in capture.others() {
            let shift = Shift::of(index, origin, target);
            let offset = if shift == Shift::Stay {
                Vec2::ZERO
            } else {
                let x = host.bounds(node).x0 - left;
                let column = floor_to_index((x / step.x).round()).min(last_column);
                match shift {
                    Shift::Back if column == 0 => Vec2::new(row_span, -step.y),
                    Shift::Back => Vec2::new(-step.x, 0.0),
                    Shift::Forward if column == last_column => Vec2::new(-row_span, step.y),
                    Shift::Forward => Vec2::new(step.x, 0.0),
                    Shift::Stay => Vec2::ZERO,
                }
            };
            host.set_translation(node, offset);
        }
    }
}
