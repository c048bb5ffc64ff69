// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities consumed by the reorder engine.
//!
//! The engine never touches a real rendering surface. Everything it needs from
//! the host (geometry, inline visual overrides, global pointer subscriptions)
//! goes through the three small traits in this module. A DOM host would map
//! them onto `getBoundingClientRect`, inline style properties and
//! `window.addEventListener`; a retained-mode toolkit would map them onto its
//! own layout and paint state; tests use a recording double.
//!
//! Node handles `N` are opaque to the engine. They only need to be cloneable
//! and comparable so the engine can snapshot a container's children and tell
//! whether the dragged node is among them.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

/// Pointer button that produced a pointer-down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button, a touch contact, or pen tip.
    Primary,
    /// Secondary button, usually the right mouse button.
    Secondary,
    /// Auxiliary button, usually the wheel or middle button.
    Auxiliary,
    /// Any other button, identified by a host-specific code.
    Other(u16),
}

/// A pointer-down that may start a reorder session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerDown {
    /// Pointer position in the same coordinate space as [`GeometryProvider::bounds`].
    pub position: Point,
    /// Button that went down.
    pub button: PointerButton,
}

impl PointerDown {
    /// A primary-button press at `position`.
    #[must_use]
    pub const fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
        }
    }
}

/// What the host should do with a pointer event after the engine handled it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Propagation {
    /// The engine did not use the event; deliver it normally.
    Continue,
    /// The event drove an active drag: prevent its default action and stop
    /// propagation.
    Stop,
}

/// Edge of a node that receives a compensating margin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarginEdge {
    /// Margin above the node.
    Top,
    /// Margin below the node.
    Bottom,
}

/// Synchronous geometry queries.
pub trait GeometryProvider<N> {
    /// Layout rectangle of `node`.
    ///
    /// This must not include translations applied through
    /// [`StyleMutator::set_translation`]; the engine reasons about where nodes
    /// sit in flow, not where they are currently painted.
    fn bounds(&self, node: &N) -> Rect;

    /// Append the children of `container`, in order, to `out`.
    fn children(&self, container: &N, out: &mut Vec<N>);
}

/// Temporary inline visual overrides.
///
/// Every method must be idempotent: applying the same value twice has the same
/// effect as applying it once, and [`StyleMutator::clear`] on an untouched node
/// is a no-op.
pub trait StyleMutator<N> {
    /// Take `node` out of flow and pin it at `bounds` above its siblings.
    fn pin(&mut self, node: &N, bounds: Rect);

    /// Set a margin of `amount` on one edge of `node`.
    fn set_margin(&mut self, node: &N, edge: MarginEdge, amount: f64);

    /// Paint `node` translated by `offset`. [`Vec2::ZERO`] resets the translation.
    fn set_translation(&mut self, node: &N, offset: Vec2);

    /// Remove every override previously applied to `node`.
    fn clear(&mut self, node: &N);

    /// Enable or disable text selection suppression for the whole surface.
    fn set_selection_suppressed(&mut self, suppressed: bool);
}

/// Process-wide pointer-move / pointer-up subscription.
///
/// While attached, the host forwards every pointer-move to
/// [`ReorderEngine::pointer_move`](crate::ReorderEngine::pointer_move) and
/// every pointer-up to [`ReorderEngine::pointer_up`](crate::ReorderEngine::pointer_up),
/// in delivery order. The engine calls `attach` and `detach` strictly in pairs.
pub trait PointerListeners {
    /// Start forwarding global pointer-move and pointer-up events.
    fn attach(&mut self);

    /// Stop forwarding them.
    fn detach(&mut self);
}

/// Everything the engine needs from its host.
///
/// Implemented automatically for any type providing the three capabilities.
pub trait ReorderHost<N>: GeometryProvider<N> + StyleMutator<N> + PointerListeners {}

impl<N, H> ReorderHost<N> for H where
    H: GeometryProvider<N> + StyleMutator<N> + PointerListeners + ?Sized
{
}
