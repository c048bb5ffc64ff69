// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-column reordering.
//!
//! All siblings are assumed to share the dragged item's height and to be
//! separated by a uniform gap. The gap is recovered from the container height:
//! `(container_height - item_height * count) / (count - 1)`.
//!
//! When the drag starts the dragged node is pinned out of flow. To keep the
//! remaining siblings from collapsing into the hole it leaves, the neighbor
//! before it gets a bottom margin of one slot (or, for the first item, the
//! neighbor after it gets a top margin). An external item has no hole to fill;
//! instead the last sibling gets a bottom margin so the appended slot exists.

use kurbo::{Point, Vec2};

use crate::capture::{DragCapture, LayoutMetrics};
use crate::host::{GeometryProvider, MarginEdge, ReorderHost};
use crate::layout::{LayoutStrategy, Shift};

/// Vertical list layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListLayout;

/// Uniform gap between `count` items of size `item` filling `extent`.
///
/// Zero when there is no pair of items to measure a gap between.
pub(crate) fn uniform_gap(extent: f64, item: f64, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let gap = (extent - item * count as f64) / (count - 1) as f64;
    if gap.is_finite() { gap } else { 0.0 }
}

impl LayoutStrategy for ListLayout {
    fn initialize<N, H>(&self, capture: &mut DragCapture<N>, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized,
    {
        let height = capture.dragged_bounds().height();
        let count = capture.siblings().len();
        let gap = uniform_gap(capture.container_bounds().height(), height, count);
        capture.set_metrics(LayoutMetrics { gap, columns: 1 });

        host.pin(capture.dragged(), capture.dragged_bounds());

        let room = height + capture.metrics().gap;
        let neighbor = if capture.is_external() {
            capture
                .siblings()
                .last()
                .map(|last| (last.clone(), MarginEdge::Bottom))
        } else {
            capture.dragged_slot().and_then(|slot| {
                if slot > 0 {
                    Some((capture.siblings()[slot - 1].clone(), MarginEdge::Bottom))
                } else {
                    capture
                        .siblings()
                        .get(slot + 1)
                        .map(|next| (next.clone(), MarginEdge::Top))
                }
            })
        };
        if let Some((node, edge)) = neighbor {
            capture.compensate(host, node, edge, room);
        }
    }

    fn target_index<N, G>(&self, capture: &DragCapture<N>, pointer: Point, geometry: &G) -> usize
    where
        N: Clone + PartialEq,
        G: GeometryProvider<N> + ?Sized,
    {
        let center = capture.dragged_origin_at(pointer).y + capture.dragged_bounds().height() / 2.0;
        let passed = capture
            .others()
            .filter(|(_, node)| center > geometry.bounds(node).center().y)
            .count();
        passed.min(capture.max_target())
    }

    fn apply_live_transforms<N, H>(&self, capture: &DragCapture<N>, target: usize, host: &mut H)
    where
        N: Clone + PartialEq,
        H: ReorderHost<N> + ?Sized,
    {
        let step = capture.dragged_bounds().height() + capture.metrics().gap;
        let origin = capture.origin_index();
        for (index, node) in capture.others() {
            let dy = match Shift::of(index, origin, target) {
                Shift::Back => -step,
                Shift::Stay => 0.0,
                Shift::Forward => step,
            };
            host.set_translation(node, Vec2::new(0.0, dy));
        }
    }
}
