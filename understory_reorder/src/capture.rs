// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry snapshot taken when a press turns into a drag.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use crate::host::{GeometryProvider, MarginEdge, StyleMutator};

/// Spacing derived by a [`LayoutStrategy`](crate::LayoutStrategy) at drag start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Space between adjacent items (and between grid rows).
    pub gap: f64,
    /// Number of columns; always 1 in list mode and never 0.
    pub columns: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            gap: 0.0,
            columns: 1,
        }
    }
}

/// Geometry captured once per drag, when the press exceeds the drag slop.
///
/// Nothing here is re-captured mid-drag: the layout is assumed stable until
/// the drop. Sibling indices used throughout the engine are positions in
/// [`DragCapture::siblings`].
#[derive(Clone, Debug)]
pub struct DragCapture<N> {
    dragged: N,
    dragged_bounds: Rect,
    container_bounds: Rect,
    siblings: Vec<N>,
    is_external: bool,
    origin_index: usize,
    pointer_offset: Vec2,
    metrics: LayoutMetrics,
    compensated: Vec<N>,
}

impl<N: Clone + PartialEq> DragCapture<N> {
    /// Snapshot the dragged node, its container and the container's children.
    ///
    /// `press` is where the pointer went down; the pointer-to-node offset is
    /// measured from there so the node keeps its grab point while following
    /// the pointer.
    pub fn capture<G: GeometryProvider<N> + ?Sized>(
        geometry: &G,
        dragged: N,
        container: &N,
        origin_index: usize,
        press: Point,
    ) -> Self {
        let dragged_bounds = geometry.bounds(&dragged);
        let container_bounds = geometry.bounds(container);
        let mut siblings = Vec::new();
        geometry.children(container, &mut siblings);
        let is_external = !siblings.contains(&dragged);
        Self {
            dragged,
            dragged_bounds,
            container_bounds,
            siblings,
            is_external,
            origin_index,
            pointer_offset: press - dragged_bounds.origin(),
            metrics: LayoutMetrics::default(),
            compensated: Vec::new(),
        }
    }

    /// The node being dragged.
    pub fn dragged(&self) -> &N {
        &self.dragged
    }

    /// Layout bounds of the dragged node at drag start.
    pub fn dragged_bounds(&self) -> Rect {
        self.dragged_bounds
    }

    /// Layout bounds of the container at drag start.
    pub fn container_bounds(&self) -> Rect {
        self.container_bounds
    }

    /// The container's children at drag start.
    pub fn siblings(&self) -> &[N] {
        &self.siblings
    }

    /// `true` when the dragged node was not one of the container's children.
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Index of the dragged item in the caller's data before the drag.
    ///
    /// For an external item this is the slot it was appended at.
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Offset from the dragged node's top-left corner to the grab point.
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    /// Spacing computed by the layout strategy.
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Record spacing computed by the layout strategy. Columns clamp to 1.
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = LayoutMetrics {
            gap: if metrics.gap.is_finite() {
                metrics.gap
            } else {
                0.0
            },
            columns: metrics.columns.max(1),
        };
    }

    /// Nodes that received a compensating margin.
    pub fn compensated(&self) -> &[N] {
        &self.compensated
    }

    /// Apply a compensating margin to `node` and remember it for cleanup.
    pub fn compensate<S: StyleMutator<N> + ?Sized>(
        &mut self,
        style: &mut S,
        node: N,
        edge: MarginEdge,
        amount: f64,
    ) {
        style.set_margin(&node, edge, amount);
        if !self.compensated.contains(&node) {
            self.compensated.push(node);
        }
    }

    /// Position of the dragged node among [`DragCapture::siblings`], if present.
    pub fn dragged_slot(&self) -> Option<usize> {
        self.siblings.iter().position(|node| *node == self.dragged)
    }

    /// Number of slots the dragged item can land in.
    ///
    /// An external item adds one slot at the end.
    pub fn slot_count(&self) -> usize {
        self.siblings.len() + usize::from(self.is_external)
    }

    /// Largest valid target index.
    pub fn max_target(&self) -> usize {
        self.slot_count().saturating_sub(1)
    }

    /// Siblings other than the dragged node, paired with their snapshot index.
    pub fn others(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.siblings
            .iter()
            .enumerate()
            .filter(move |(_, node)| **node != self.dragged)
    }

    /// Where the dragged node's top-left corner is when the pointer is at `pointer`.
    pub fn dragged_origin_at(&self, pointer: Point) -> Point {
        pointer - self.pointer_offset
    }

    /// Region in which the pointer may drop: the container, extended downward
    /// by `extension` dragged-item heights.
    pub fn drop_region(&self, extension: f64) -> Rect {
        let c = self.container_bounds;
        Rect::new(
            c.x0,
            c.y0,
            c.x1,
            c.y1 + extension * self.dragged_bounds.height(),
        )
    }

    /// Reset the live translation of every sibling except the dragged node.
    pub fn reset_translations<S: StyleMutator<N> + ?Sized>(&self, style: &mut S) {
        for (_, node) in self.others() {
            style.set_translation(node, Vec2::ZERO);
        }
    }

    /// Strip every temporary override applied during this drag.
    pub fn restore<S: StyleMutator<N> + ?Sized>(&self, style: &mut S) {
        for node in &self.siblings {
            style.clear(node);
        }
        if self.is_external {
            style.clear(&self.dragged);
        }
        for node in &self.compensated {
            if !self.siblings.contains(node) {
                style.clear(node);
            }
        }
    }
}
