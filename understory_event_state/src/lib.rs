// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events.
//!
//! - [`drag`]: Tell presses from drags with a slop threshold, and track
//!   movement deltas and total offsets
//!
//! The crate does not assume any particular UI framework, event system, or scene
//! graph structure. Managers accept raw pointer positions and produce state
//! queries that applications (or higher-level crates such as
//! `understory_reorder`) can interpret.
//!
//! ### Drag Operations
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.press(Point::new(10.0, 10.0));
//!
//! // Small moves stay a press.
//! let motion = drag.update(Point::new(12.0, 11.0)).unwrap();
//! assert!(!motion.started);
//!
//! // Larger moves start the drag.
//! let motion = drag.update(Point::new(30.0, 10.0)).unwrap();
//! assert!(motion.started);
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
