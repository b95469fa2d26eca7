//! Harness: programmatic interaction with a headless Runtime.
//!
//! The `Harness` wraps a [`Runtime`](crate::runtime::Runtime) and provides a
//! compact API for driving it from tests: paint, dispatch events, and read
//! the live tree back as text.

use crate::component::Registry;
use crate::dom::{Dom, NodeId};
use crate::runtime::Runtime;
use crate::store::Store;

use super::snapshot::tree_to_string;

/// A headless runtime driver for testing.
///
/// # Examples
///
/// ```ignore
/// use trellis_ui::testing::Harness;
///
/// let mut harness = Harness::new(dom, registry, store);
/// harness.paint();
/// harness.dispatch(MyEvent::Increment);
/// assert!(harness.tree().contains("\"1\""));
/// ```
pub struct Harness<S: 'static, E: 'static> {
    runtime: Runtime<S, E>,
}

impl<S: 'static, E: 'static> Harness<S, E> {
    /// Create a harness over a document, registry, and store.
    ///
    /// # Panics
    ///
    /// Panics if `dom` has no root (see [`Runtime::new`]).
    pub fn new(dom: Dom, registry: Registry<S>, store: Store<S, E>) -> Self {
        Self {
            runtime: Runtime::new(dom, registry, store),
        }
    }

    /// Wrap an already-built runtime.
    pub fn from_runtime(runtime: Runtime<S, E>) -> Self {
        Self { runtime }
    }

    // ── Driving ──────────────────────────────────────────────────────

    /// Run the initial render pass.
    ///
    /// # Panics
    ///
    /// Panics if expansion fails (e.g. a cyclic component graph) — in a test
    /// that is a bug worth failing loudly on.
    pub fn paint(&mut self) {
        self.runtime
            .render_pass()
            .expect("render pass failed in harness");
    }

    /// Dispatch an event; returns whether a render pass ran.
    ///
    /// # Panics
    ///
    /// Panics if the triggered pass fails to expand.
    pub fn dispatch(&mut self, event: E) -> bool {
        self.runtime
            .dispatch(event)
            .expect("render pass failed in harness")
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying runtime immutably.
    pub fn runtime(&self) -> &Runtime<S, E> {
        &self.runtime
    }

    /// Borrow the underlying runtime mutably.
    pub fn runtime_mut(&mut self) -> &mut Runtime<S, E> {
        &mut self.runtime
    }

    /// The live root node.
    pub fn root(&self) -> NodeId {
        self.runtime.root()
    }

    /// Serialize the live tree to text.
    pub fn tree(&self) -> String {
        tree_to_string(self.runtime.dom(), self.runtime.root())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
