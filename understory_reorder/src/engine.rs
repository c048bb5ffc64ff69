// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-reorder session engine.

use kurbo::Point;
use understory_event_state::drag::DragState;

use crate::capture::DragCapture;
use crate::config::ReorderConfig;
use crate::error::{ConfigError, SwapError};
use crate::grid::GridLayout;
use crate::host::{PointerButton, PointerDown, Propagation, ReorderHost};
use crate::layout::LayoutStrategy;
use crate::list::ListLayout;

/// Reported by [`ReorderEngine::pointer_up`] once per pick/drop cycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DropEvent<K> {
    /// Key passed to [`ReorderEngine::pick`].
    pub key: K,
    /// Slot the item was released over, or `None` when it was released
    /// outside the drop region or never dragged.
    pub target: Option<usize>,
}

#[derive(Clone, Debug)]
struct Session<N, K> {
    dragged: N,
    container: N,
    key: K,
    origin_index: usize,
    pointer: DragState,
    target: Option<usize>,
    capture: Option<DragCapture<N>>,
}

/// Final state of the last dropped session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Settled {
    origin_index: usize,
    target: Option<usize>,
}

/// Drives pointer-based reordering of a container's children.
///
/// One engine owns at most one session at a time. The host forwards pointer
/// events while [`ReorderEngine::is_listening`] is true and applies the final
/// order to its own data with [`ReorderEngine::swap`]; the engine itself never
/// moves nodes, it only paints them where they would go.
#[derive(Clone, Debug)]
pub struct ReorderEngine<N, K, L = ListLayout> {
    layout: L,
    config: ReorderConfig,
    session: Option<Session<N, K>>,
    settled: Option<Settled>,
    listening: bool,
}

impl<N, K> ReorderEngine<N, K, ListLayout>
where
    N: Clone + PartialEq,
{
    /// Engine for a vertical list with the default configuration.
    #[must_use]
    pub fn list() -> Self {
        Self::with_layout(ListLayout)
    }
}

impl<N, K> ReorderEngine<N, K, GridLayout>
where
    N: Clone + PartialEq,
{
    /// Engine for a wrapping grid with the default configuration.
    #[must_use]
    pub fn grid() -> Self {
        Self::with_layout(GridLayout)
    }
}

impl<N, K, L> ReorderEngine<N, K, L>
where
    N: Clone + PartialEq,
    L: LayoutStrategy,
{
    /// Engine using `layout` and a validated `config`.
    pub fn new(layout: L, config: ReorderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            layout,
            config,
            session: None,
            settled: None,
            listening: false,
        })
    }

    /// Engine using `layout` and the default configuration.
    #[must_use]
    pub fn with_layout(layout: L) -> Self {
        Self {
            layout,
            config: ReorderConfig::default(),
            session: None,
            settled: None,
            listening: false,
        }
    }

    /// The layout strategy.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The configuration.
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Start tracking a press on `dragged`, a node inside `container`.
    ///
    /// `key` identifies the item in the caller's data and is handed back on
    /// drop; `origin_index` is its current position there. Returns `false`
    /// without doing anything unless the press came from the primary button.
    ///
    /// Any unfinished previous session is discarded first: its styling is
    /// removed and its listeners detached before new ones are attached.
    pub fn pick<H>(
        &mut self,
        host: &mut H,
        event: PointerDown,
        dragged: N,
        container: N,
        key: K,
        origin_index: usize,
    ) -> bool
    where
        H: ReorderHost<N> + ?Sized,
    {
        if event.button != PointerButton::Primary {
            return false;
        }

        #[cfg(feature = "tracing")]
        if self.session.is_some() {
            tracing::debug!("discarding unreleased reorder session");
        }
        self.teardown(host);

        let mut pointer = DragState::with_slop_squared(self.config.slop_squared());
        pointer.press(event.position);
        self.session = Some(Session {
            dragged,
            container,
            key,
            origin_index,
            pointer,
            target: None,
            capture: None,
        });
        self.settled = None;

        host.attach();
        self.listening = true;
        true
    }

    /// Handle a global pointer-move.
    ///
    /// Before the press exceeds the drag slop this only tracks the pointer.
    /// The move that exceeds it captures geometry and starts the drag; from then
    /// on every move repaints the dragged node and its siblings and returns
    /// [`Propagation::Stop`].
    pub fn pointer_move<H>(&mut self, host: &mut H, position: Point) -> Propagation
    where
        H: ReorderHost<N> + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return Propagation::Continue;
        };
        let Some(motion) = session.pointer.update(position) else {
            return Propagation::Continue;
        };

        if motion.started {
            let press = position - motion.total;
            let mut capture = DragCapture::capture(
                &*host,
                session.dragged.clone(),
                &session.container,
                session.origin_index,
                press,
            );
            self.layout.initialize(&mut capture, host);
            host.set_selection_suppressed(true);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                origin = session.origin_index,
                siblings = capture.siblings().len(),
                external = capture.is_external(),
                gap = capture.metrics().gap,
                columns = capture.metrics().columns,
                "reorder drag started"
            );
            session.capture = Some(capture);
        }
        let Some(capture) = session.capture.as_ref() else {
            return Propagation::Continue;
        };

        host.set_translation(&session.dragged, motion.total);

        let previous = session.target.take();
        if !capture
            .drop_region(self.config.drop_zone_extension)
            .contains(position)
        {
            if previous.is_some() {
                capture.reset_translations(host);
                #[cfg(feature = "tracing")]
                tracing::trace!("reorder pointer left drop region");
            }
            return Propagation::Stop;
        }

        let target = self.layout.target_index(capture, position, &*host);
        self.layout.apply_live_transforms(capture, target, host);
        session.target = Some(target);
        #[cfg(feature = "tracing")]
        if previous != Some(target) {
            tracing::trace!(slot = target, "reorder target changed");
        }
        Propagation::Stop
    }

    /// Handle the global pointer-up that ends a session (the drop).
    ///
    /// Clears every temporary style, detaches the listeners and returns the
    /// drop for the caller to act on. Returns `None` when no session is
    /// active, so a repeated drop is a no-op.
    pub fn pointer_up<H>(&mut self, host: &mut H) -> Option<DropEvent<K>>
    where
        H: ReorderHost<N> + ?Sized,
    {
        let session = self.session.take();
        if let Some(capture) = session.as_ref().and_then(|s| s.capture.as_ref()) {
            capture.restore(host);
            host.set_selection_suppressed(false);
        }
        self.release_listeners(host);

        let session = session?;
        self.settled = Some(Settled {
            origin_index: session.origin_index,
            target: session.target,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(
            origin = session.origin_index,
            slot = ?session.target,
            dragged = session.capture.is_some(),
            "reorder dropped"
        );
        Some(DropEvent {
            key: session.key,
            target: session.target,
        })
    }

    /// Abandon any session without reporting a drop.
    ///
    /// Call this from the host's teardown path; it removes listeners and every
    /// temporary style just like a drop would, and resets
    /// [`ReorderEngine::order_changed`].
    pub fn cancel<H>(&mut self, host: &mut H)
    where
        H: ReorderHost<N> + ?Sized,
    {
        #[cfg(feature = "tracing")]
        if self.session.is_some() {
            tracing::debug!("reorder session cancelled");
        }
        self.teardown(host);
        self.settled = None;
    }

    /// `true` when the last dropped session landed on a slot other than the
    /// one it started from.
    pub fn order_changed(&self) -> bool {
        matches!(
            self.settled,
            Some(Settled { origin_index, target: Some(target) }) if target != origin_index
        )
    }

    /// Apply the last drop to `items`, a slice parallel to the container's
    /// children: the element at the origin index moves to the target index
    /// and the elements in between shift by one.
    ///
    /// Does nothing when [`ReorderEngine::order_changed`] is false. Call it
    /// once for every parallel slice that must stay in sync.
    pub fn swap<T>(&self, items: &mut [T]) -> Result<(), SwapError> {
        match self.settled {
            Some(Settled {
                origin_index,
                target: Some(target),
            }) => move_item(items, origin_index, target),
            _ => Ok(()),
        }
    }

    /// `true` while global pointer events should be forwarded.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// `true` between a successful pick and the following drop or cancel.
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// `true` once the active press has exceeded the drag slop.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.capture.is_some())
    }

    /// Slot the dragged item currently hovers over or, after a drop, the slot
    /// it was released over.
    pub fn target_index(&self) -> Option<usize> {
        match &self.session {
            Some(session) => session.target,
            None => self.settled.and_then(|s| s.target),
        }
    }

    /// Origin index of the active or last dropped session.
    pub fn origin_index(&self) -> Option<usize> {
        match &self.session {
            Some(session) => Some(session.origin_index),
            None => self.settled.map(|s| s.origin_index),
        }
    }

    /// Key of the active session's item.
    pub fn item_key(&self) -> Option<&K> {
        self.session.as_ref().map(|s| &s.key)
    }

    /// Geometry captured for the active drag.
    pub fn capture(&self) -> Option<&DragCapture<N>> {
        self.session.as_ref().and_then(|s| s.capture.as_ref())
    }

    fn teardown<H>(&mut self, host: &mut H)
    where
        H: ReorderHost<N> + ?Sized,
    {
        if let Some(capture) = self.session.take().and_then(|s| s.capture) {
            capture.restore(host);
            host.set_selection_suppressed(false);
        }
        self.release_listeners(host);
    }

    fn release_listeners<H>(&mut self, host: &mut H)
    where
        H: ReorderHost<N> + ?Sized,
    {
        if self.listening {
            host.detach();
            self.listening = false;
        }
    }
}

/// Move the element at `from` to `to`, shifting the elements in between by one.
///
/// Both indices must be in bounds; the slice is left untouched otherwise.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> Result<(), SwapError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(SwapError { index, len });
        }
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
    Ok(())
}
