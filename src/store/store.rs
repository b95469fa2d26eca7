//! Store: dispatch, subscribe, snapshot access.
//!
//! [`Store`] holds the application state behind an [`Arc`] and applies a pure
//! transition function to produce a new snapshot from each dispatched event.
//! Snapshots are immutable by construction — the store never hands out a
//! mutable reference, and a clone of the `Arc` stays valid regardless of what
//! the store does afterwards. This replaces the deep-copy-and-freeze scheme
//! a dynamic runtime would need: sharing is O(1) and cannot be subverted.
//!
//! Everything is single-threaded and synchronous. Dispatch runs the
//! transition, swaps the snapshot, and invokes every listener before
//! returning; re-entrant dispatch from inside a listener is ruled out by the
//! `&mut self` borrow.

use std::fmt;
use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// Handle for a registered listener, returned by [`Store::subscribe`].
    pub struct ListenerId;
}

type Listener<S> = Box<dyn FnMut(Arc<S>)>;
type Transition<S, E> = Box<dyn Fn(&Arc<S>, &E) -> Arc<S>>;

/// Event-driven state container.
///
/// The transition function receives the current snapshot and the event and
/// returns the next snapshot. Returning a clone of the incoming `Arc` (the
/// same allocation) marks the event as a no-op: the state is not swapped and
/// listeners are not invoked. Returning a fresh allocation commits it and
/// notifies every subscriber with its own handle to the new snapshot.
pub struct Store<S: 'static, E: 'static> {
    state: Arc<S>,
    transition: Transition<S, E>,
    listeners: SlotMap<ListenerId, Listener<S>>,
}

impl<S: 'static, E: 'static> Store<S, E> {
    /// Create a store with an initial state and a transition function.
    pub fn new(initial: S, transition: impl Fn(&Arc<S>, &E) -> Arc<S> + 'static) -> Self {
        Self {
            state: Arc::new(initial),
            transition: Box::new(transition),
            listeners: SlotMap::with_key(),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    /// Register a listener, invoked with a snapshot handle after every
    /// accepted transition. Returns an id for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, listener: impl FnMut(Arc<S>) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if the id was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Apply the transition function to `event`.
    ///
    /// If the transition returns the same allocation as the current snapshot
    /// the dispatch is a no-op and listeners are skipped. Otherwise the new
    /// snapshot is committed and every listener is invoked with a handle to
    /// it. Returns whether the snapshot changed.
    pub fn dispatch(&mut self, event: E) -> bool {
        let next = (self.transition)(&self.state, &event);

        if Arc::ptr_eq(&next, &self.state) {
            trace!("transition returned previous state, skipping listeners");
            return false;
        }

        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(Arc::clone(&self.state));
        }
        true
    }
}

impl<S: fmt::Debug + 'static, E: 'static> fmt::Debug for Store<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
