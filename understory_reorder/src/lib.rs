// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: drag-to-reorder for lists and grids.
//!
//! This crate computes what happens while the user drags one item of a
//! container to a new position: which slot it hovers over, how its siblings
//! should be painted to make room, and what the final order is once the
//! pointer is released. It does not render anything and never reorders nodes
//! itself. Hosts plug it into their toolkit through three small capability
//! traits:
//!
//! - [`GeometryProvider`]: layout rectangles and ordered children.
//! - [`StyleMutator`]: temporary inline overrides (pin, margin,
//!   translation, selection suppression) and their removal.
//! - [`PointerListeners`]: subscribe to and unsubscribe from process-wide
//!   pointer-move / pointer-up.
//!
//! A session runs through three calls:
//!
//! 1. [`ReorderEngine::pick`] on pointer-down over a drag handle.
//! 2. [`ReorderEngine::pointer_move`] for every global move. The press becomes a
//!    drag once it exceeds the drag slop (5 px by default); geometry is captured
//!    then, exactly once.
//! 3. [`ReorderEngine::pointer_up`] on release: styling is cleared, listeners are
//!    detached and a [`DropEvent`] is returned. The caller checks
//!    [`ReorderEngine::order_changed`] and applies [`ReorderEngine::swap`] to its
//!    own data.
//!
//! [`ReorderEngine::cancel`] tears a session down from a host's teardown path
//! without reporting a drop.
//!
//! The geometry rules live behind [`LayoutStrategy`]: [`ListLayout`] for a
//! single column and [`GridLayout`] for wrapping rows, or [`ReorderLayout`] to
//! choose at runtime.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_reorder::{
//!     GeometryProvider, MarginEdge, PointerDown, PointerListeners, ReorderEngine, StyleMutator,
//! };
//!
//! const CONTAINER: usize = usize::MAX;
//!
//! // Three 30 px rows separated by 20 px.
//! struct Column;
//!
//! impl GeometryProvider<usize> for Column {
//!     fn bounds(&self, node: &usize) -> Rect {
//!         if *node == CONTAINER {
//!             Rect::new(0.0, 0.0, 100.0, 130.0)
//!         } else {
//!             let top = *node as f64 * 50.0;
//!             Rect::new(0.0, top, 100.0, top + 30.0)
//!         }
//!     }
//!
//!     fn children(&self, _container: &usize, out: &mut Vec<usize>) {
//!         out.extend(0..3);
//!     }
//! }
//!
//! impl StyleMutator<usize> for Column {
//!     fn pin(&mut self, _node: &usize, _bounds: Rect) {}
//!     fn set_margin(&mut self, _node: &usize, _edge: MarginEdge, _amount: f64) {}
//!     fn set_translation(&mut self, _node: &usize, _offset: Vec2) {}
//!     fn clear(&mut self, _node: &usize) {}
//!     fn set_selection_suppressed(&mut self, _suppressed: bool) {}
//! }
//!
//! impl PointerListeners for Column {
//!     fn attach(&mut self) {}
//!     fn detach(&mut self) {}
//! }
//!
//! let mut host = Column;
//! let mut engine = ReorderEngine::list();
//! let mut rows = ["a", "b", "c"];
//!
//! // Grab the first row in its middle and drag it below the last one.
//! assert!(engine.pick(&mut host, PointerDown::primary(Point::new(50.0, 15.0)), 0, CONTAINER, "a", 0));
//! engine.pointer_move(&mut host, Point::new(50.0, 120.0));
//! assert_eq!(engine.target_index(), Some(2));
//!
//! let dropped = engine.pointer_up(&mut host).unwrap();
//! assert_eq!(dropped.key, "a");
//! assert!(engine.order_changed());
//!
//! engine.swap(&mut rows).unwrap();
//! assert_eq!(rows, ["b", "c", "a"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `tracing`: emit `tracing` events for session start, drop, cancellation
//!   and target changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod capture;
mod config;
mod engine;
mod error;
mod grid;
mod host;
mod layout;
mod list;

pub use capture::{DragCapture, LayoutMetrics};
pub use config::ReorderConfig;
pub use engine::{DropEvent, ReorderEngine, move_item};
pub use error::{ConfigError, SwapError};
pub use grid::GridLayout;
pub use host::{
    GeometryProvider, MarginEdge, PointerButton, PointerDown, PointerListeners, Propagation,
    ReorderHost, StyleMutator,
};
pub use layout::{LayoutStrategy, ReorderLayout};
pub use list::ListLayout;
