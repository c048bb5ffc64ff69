// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host shared by the integration tests.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use std::cell::Cell;
use std::collections::BTreeMap;

use kurbo::{Rect, Vec2};
use understory_reorder::{GeometryProvider, MarginEdge, PointerListeners, StyleMutator};

pub const CONTAINER: u32 = 1000;

/// Fixed geometry plus a log of every style override currently applied.
#[derive(Debug, Default)]
pub struct TestHost {
    pub container: Rect,
    pub nodes: BTreeMap<u32, Rect>,
    pub children: Vec<u32>,
    pub translations: BTreeMap<u32, Vec2>,
    pub margins: BTreeMap<u32, (MarginEdge, f64)>,
    pub pinned: BTreeMap<u32, Rect>,
    pub selection_suppressed: bool,
    pub attached: usize,
    pub attach_calls: usize,
    pub detach_calls: usize,
    pub children_queries: Cell<usize>,
}

impl TestHost {
    /// `count` rows of `height` separated by `gap`, starting at the container's top-left.
    pub fn list(origin: (f64, f64), width: f64, height: f64, gap: f64, count: u32) -> Self {
        let mut host = Self::default();
        let total = f64::from(count) * height + f64::from(count.saturating_sub(1)) * gap;
        host.container = Rect::new(origin.0, origin.1, origin.0 + width, origin.1 + total);
        for index in 0..count {
            let top = origin.1 + f64::from(index) * (height + gap);
            host.nodes
                .insert(index, Rect::new(origin.0, top, origin.0 + width, top + height));
            host.children.push(index);
        }
        host
    }

    /// `count` square cells of `cell` laid out in `columns` columns separated by `gap`.
    pub fn grid(origin: (f64, f64), cell: f64, gap: f64, columns: u32, count: u32) -> Self {
        let mut host = Self::default();
        let rows = count.div_ceil(columns);
        let width = f64::from(columns) * cell + f64::from(columns - 1) * gap;
        let height = f64::from(rows) * cell + f64::from(rows.saturating_sub(1)) * gap;
        host.container = Rect::new(origin.0, origin.1, origin.0 + width, origin.1 + height);
        for index in 0..count {
            let x = origin.0 + f64::from(index % columns) * (cell + gap);
            let y = origin.1 + f64::from(index / columns) * (cell + gap);
            host.nodes
                .insert(index, Rect::new(x, y, x + cell, y + cell));
            host.children.push(index);
        }
        host
    }

    pub fn translation(&self, node: u32) -> Vec2 {
        self.translations.get(&node).copied().unwrap_or(Vec2::ZERO)
    }

    /// `true` when no temporary override is left on any node.
    pub fn is_clean(&self) -> bool {
        self.translations.is_empty()
            && self.margins.is_empty()
            && self.pinned.is_empty()
            && !self.selection_suppressed
    }
}

impl GeometryProvider<u32> for TestHost {
    fn bounds(&self, node: &u32) -> Rect {
        if *node == CONTAINER {
            self.container
        } else {
            self.nodes.get(node).copied().unwrap_or(Rect::ZERO)
        }
    }

    fn children(&self, _container: &u32, out: &mut Vec<u32>) {
        self.children_queries.set(self.children_queries.get() + 1);
        out.extend(self.children.iter().copied());
    }
}

impl StyleMutator<u32> for TestHost {
    fn pin(&mut self, node: &u32, bounds: Rect) {
        self.pinned.insert(*node, bounds);
    }

    fn set_margin(&mut self, node: &u32, edge: MarginEdge, amount: f64) {
        self.margins.insert(*node, (edge, amount));
    }

    fn set_translation(&mut self, node: &u32, offset: Vec2) {
        self.translations.insert(*node, offset);
    }

    fn clear(&mut self, node: &u32) {
        self.translations.remove(node);
        self.margins.remove(node);
        self.pinned.remove(node);
    }

    fn set_selection_suppressed(&mut self, suppressed: bool) {
        self.selection_suppressed = suppressed;
    }
}

impl PointerListeners for TestHost {
    fn attach(&mut self) {
        self.attached += 1;
        self.attach_calls += 1;
    }

    fn detach(&mut self) {
        self.attached -= 1;
        self.detach_calls += 1;
    }
}
