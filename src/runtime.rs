//! Runtime: store, registry, and reconciler tied into one render pass.
//!
//! [`Runtime`] owns the live document, the component registry, and the state
//! store, and drives the full update cycle: dispatch an event, and — when the
//! snapshot actually changed — expand a fresh virtual tree from the live root
//! and reconcile the live tree against it.
//!
//! The two steps of a pass are deliberately separated: expansion works on a
//! detached clone and never touches the live document, so a failed expansion
//! (e.g. a cyclic component graph) aborts the pass with the live tree intact;
//! only the reconcile step mutates it. Everything is synchronous — a pass
//! runs to completion before `dispatch` returns, so passes can never overlap.

use tracing::debug;

use crate::component::{Registry, RenderError};
use crate::dom::{Dom, NodeId};
use crate::reconcile;
use crate::store::Store;

/// The driving entry point for a trellis application.
pub struct Runtime<S: 'static, E: 'static> {
    dom: Dom,
    root: NodeId,
    registry: Registry<S>,
    store: Store<S, E>,
}

impl<S: 'static, E: 'static> Runtime<S, E> {
    /// Create a runtime over a document, a registry, and a store.
    ///
    /// The document's current root becomes the live mount point. There is no
    /// terminal or browser to drive: the runtime is headless by nature and
    /// fully deterministic, which is also what makes it testable.
    ///
    /// # Panics
    ///
    /// Panics if `dom` has no root.
    pub fn new(dom: Dom, registry: Registry<S>, store: Store<S, E>) -> Self {
        let root = dom.root().expect("runtime requires a mounted root");
        Self {
            dom,
            root,
            registry,
            store,
        }
    }

    /// Dispatch an event through the store.
    ///
    /// If the transition produced a new snapshot, one full render+reconcile
    /// pass runs before this returns. Returns whether a pass ran.
    pub fn dispatch(&mut self, event: E) -> Result<bool, RenderError> {
        if self.store.dispatch(event) {
            self.render_pass()?;
            return Ok(true);
        }
        debug!("dispatch was a no-op, skipping render pass");
        Ok(false)
    }

    /// Run one render+reconcile pass with the current snapshot.
    ///
    /// Useful for the initial paint, before any event has been dispatched.
    pub fn render_pass(&mut self) -> Result<(), RenderError> {
        let state = self.store.state();

        // Pure step: expand a virtual tree from the live root.
        let virtual_root = self.registry.render_root(&mut self.dom, self.root, &state)?;

        // Destructive step: patch the live tree to match it.
        reconcile::apply_root(&mut self.dom, self.root, virtual_root);

        // The pass may have replaced the root wholesale.
        self.root = self
            .dom
            .root()
            .expect("live root survives a render pass");
        Ok(())
    }

    /// The live document.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Mutable access to the live document.
    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// The live root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The component registry.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Mutable access to the registry (e.g. late registration).
    pub fn registry_mut(&mut self) -> &mut Registry<S> {
        &mut self.registry
    }

    /// The state store.
    pub fn store(&self) -> &Store<S, E> {
        &self.store
    }

    /// Mutable access to the store (e.g. external subscriptions).
    pub fn store_mut(&mut self) -> &mut Store<S, E> {
        &mut self.store
    }
}

// ===========================================================================
// Tests
// ===========================================================================
