//! Component registry: named components and recursive marker expansion.
//!
//! The registry owns a name-to-component mapping and the expansion pass that
//! replaces marker nodes (nodes carrying [`COMPONENT_ATTR`]) with the output
//! of the named component. Expansion re-enters [`Registry::render`] for every
//! marker it resolves, so nesting cascades by construction: when component
//! X's output references component Y, Y's expansion runs inside X's, and so
//! on until a produced subtree carries no resolvable markers.
//!
//! The registry is an owned value, not process-global state: tests and
//! embedders create as many isolated instances as they need.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::traits::Component;
use crate::dom::{Dom, NodeId};

/// The reserved marker attribute. Its value names the registered component
/// that should replace the node carrying it.
pub const COMPONENT_ATTR: &str = "data-component";

/// Maximum nesting depth for component expansion.
///
/// A component graph deeper than this — in practice, a cycle — fails with
/// [`RenderError::RecursionLimit`] instead of recursing unboundedly.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Errors raised while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("component expansion exceeded depth {limit} at \"{name}\"")]
    RecursionLimit { name: String, limit: usize },
}

/// Owned mapping from component name to rendering component.
pub struct Registry<S: 'static> {
    components: HashMap<String, Box<dyn Component<S>>>,
}

impl<S: 'static> Registry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Register a component under `name`.
    ///
    /// Re-registering a name silently overwrites the previous entry — last
    /// write wins.
    pub fn register(&mut self, name: impl Into<String>, component: impl Component<S> + 'static) {
        self.components.insert(name.into(), Box::new(component));
    }

    /// Borrow the component registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&dyn Component<S>> {
        self.components.get(name).map(|component| component.as_ref())
    }

    /// Whether a component is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Render the component registered under `name` into `target`, then
    /// expand every marker its output contains.
    ///
    /// Returns `Ok(None)` if no component is registered under `name`.
    pub fn render(
        &self,
        dom: &mut Dom,
        name: &str,
        target: NodeId,
        state: &S,
    ) -> Result<Option<NodeId>, RenderError> {
        match self.lookup(name) {
            Some(component) => self
                .render_nested(dom, component, target, state, 0)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Clone `root` into a detached virtual tree and expand every marker it
    /// contains, returning the fully expanded virtual root.
    ///
    /// The live tree under `root` is never touched: expansion works entirely
    /// on the clone, so the result can be discarded — or handed to the
    /// reconciler — without side effects.
    ///
    /// # Panics
    ///
    /// Panics if `root` does not exist in the arena.
    pub fn render_root(&self, dom: &mut Dom, root: NodeId, state: &S) -> Result<NodeId, RenderError> {
        let copy = dom
            .clone_subtree(root)
            .expect("render root must exist in the arena");
        self.expand(dom, copy, state, 0)?;
        Ok(copy)
    }

    /// Run one component and expand its output at the given nesting depth.
    fn render_nested(
        &self,
        dom: &mut Dom,
        component: &dyn Component<S>,
        target: NodeId,
        state: &S,
        depth: usize,
    ) -> Result<NodeId, RenderError> {
        let element = component.render(dom, target, state);
        self.expand(dom, element, state, depth)?;
        Ok(element)
    }

    /// Replace every resolvable marker below `element`, in document order.
    ///
    /// Unregistered names are skipped silently; the marker node is left in
    /// the tree untouched. Markers that disappear because an earlier
    /// expansion replaced an enclosing subtree are skipped as well.
    fn expand(&self, dom: &mut Dom, element: NodeId, state: &S, depth: usize) -> Result<(), RenderError> {
        let markers = dom.marked(element, COMPONENT_ATTR);
        for marker in markers {
            // An earlier replacement in this loop may have discarded the
            // subtree this marker lived in.
            if !dom.contains(marker) {
                continue;
            }

            // A component render can legally rewrite sibling markers, so the
            // attribute is re-read rather than trusted from the scan.
            let Some(name) = dom
                .get(marker)
                .and_then(|data| data.attr(COMPONENT_ATTR))
                .map(str::to_owned)
            else {
                continue;
            };

            let Some(component) = self.lookup(&name) else {
                debug!(%name, "skipping unregistered component");
                continue;
            };

            if depth + 1 > MAX_RENDER_DEPTH {
                return Err(RenderError::RecursionLimit {
                    name,
                    limit: MAX_RENDER_DEPTH,
                });
            }

            debug!(%name, depth = depth + 1, "expanding component");
            let replacement = self.render_nested(dom, component, marker, state, depth + 1)?;
            if replacement != marker {
                dom.replace(marker, replacement);
            }
        }
        Ok(())
    }
}

impl<S: 'static> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("components", &names).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;

    /// A leaf component rendering `<span>{text}</span>`.
    fn leaf(text: &'static str) -> impl Component<()> {
        move |dom: &mut Dom, _target: NodeId, _state: &()| {
            dom.insert(NodeData::new("span").with_text(text))
        }
    }

    /// A component whose output embeds a marker for `child`.
    fn wrapping(tag: &'static str, child: &'static str) -> impl Component<()> {
        move |dom: &mut Dom, _target: NodeId, _state: &()| {
            let root = dom.insert(NodeData::new(tag));
            dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, child));
            root
        }
    }

    // ── Registration ─────────────────────────────────────────────────

    #[test]
    fn register_and_has() {
        let mut registry: Registry<()> = Registry::new();
        assert!(registry.is_empty());
        registry.register("leaf", leaf("x"));
        assert!(registry.has("leaf"));
        assert!(!registry.has("other"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_returns_registered_component() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("leaf", leaf("via lookup"));
        let component = registry.lookup("leaf").unwrap();

        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div"));
        let out = component.render(&mut dom, target, &());
        assert_eq!(dom.get(out).unwrap().text.as_deref(), Some("via lookup"));
        assert!(registry.lookup("other").is_none());
    }

    #[test]
    fn reregistration_last_write_wins() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("leaf", leaf("first"));
        registry.register("leaf", leaf("second"));
        assert_eq!(registry.len(), 1);

        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div"));
        let out = registry.render(&mut dom, "leaf", target, &()).unwrap().unwrap();
        assert_eq!(dom.get(out).unwrap().text.as_deref(), Some("second"));
    }

    // ── render ───────────────────────────────────────────────────────

    #[test]
    fn render_unknown_name_is_none() {
        let registry: Registry<()> = Registry::new();
        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div"));
        assert!(registry.render(&mut dom, "ghost", target, &()).unwrap().is_none());
    }

    #[test]
    fn render_passes_state() {
        let mut registry: Registry<u32> = Registry::new();
        registry.register("counter", |dom: &mut Dom, _t: NodeId, state: &u32| {
            dom.insert(NodeData::new("span").with_text(state.to_string()))
        });

        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div"));
        let out = registry.render(&mut dom, "counter", target, &41).unwrap().unwrap();
        assert_eq!(dom.get(out).unwrap().text.as_deref(), Some("41"));
    }

    #[test]
    fn render_passes_marker_as_target() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("greeting", |dom: &mut Dom, target: NodeId, _s: &()| {
            let who = dom
                .get(target)
                .and_then(|data| data.attr("who"))
                .unwrap_or("world")
                .to_owned();
            dom.insert(NodeData::new("p").with_text(who))
        });

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.insert_child(
            root,
            NodeData::new("div")
                .with_attr(COMPONENT_ATTR, "greeting")
                .with_attr("who", "trellis"),
        );

        let out = registry.render_root(&mut dom, root, &()).unwrap();
        let kids = dom.children(out).to_vec();
        assert_eq!(kids.len(), 1);
        assert_eq!(dom.get(kids[0]).unwrap().text.as_deref(), Some("trellis"));
    }

    // ── render_root ──────────────────────────────────────────────────

    #[test]
    fn render_root_leaves_live_tree_untouched() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("leaf", leaf("rendered"));

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        let marker = dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "leaf"));

        let out = registry.render_root(&mut dom, root, &()).unwrap();
        assert_ne!(out, root);
        // Live marker still in place, expansion happened on the clone only.
        assert_eq!(dom.children(root), &[marker]);
        assert!(dom.get(marker).unwrap().has_attr(COMPONENT_ATTR));
        let out_kids = dom.children(out).to_vec();
        assert_eq!(dom.get(out_kids[0]).unwrap().text.as_deref(), Some("rendered"));
    }

    #[test]
    fn render_root_keeps_marker_position() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("leaf", leaf("mid"));

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.insert_child(root, NodeData::new("header"));
        dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "leaf"));
        dom.insert_child(root, NodeData::new("footer"));

        let out = registry.render_root(&mut dom, root, &()).unwrap();
        let kids = dom.children(out).to_vec();
        assert_eq!(kids.len(), 3);
        assert_eq!(dom.get(kids[0]).unwrap().tag, "header");
        assert_eq!(dom.get(kids[1]).unwrap().tag, "span");
        assert_eq!(dom.get(kids[1]).unwrap().text.as_deref(), Some("mid"));
        assert_eq!(dom.get(kids[2]).unwrap().tag, "footer");
    }

    #[test]
    fn unknown_component_is_inert() {
        let registry: Registry<()> = Registry::new();

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "ghost"));

        let out = registry.render_root(&mut dom, root, &()).unwrap();
        let kids = dom.children(out).to_vec();
        assert_eq!(kids.len(), 1);
        // Marker structurally untouched in the output.
        assert_eq!(
            dom.get(kids[0]).unwrap().attr(COMPONENT_ATTR),
            Some("ghost")
        );
    }

    #[test]
    fn nested_expansion_terminates_in_document_order() {
        // A -> B -> C, no cycle: one render_root call expands the chain with
        // C's output nested inside B's inside A's.
        let mut registry: Registry<()> = Registry::new();
        registry.register("a", wrapping("section", "b"));
        registry.register("b", wrapping("article", "c"));
        registry.register("c", leaf("deepest"));

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "a"));

        let out = registry.render_root(&mut dom, root, &()).unwrap();

        let a_out = dom.children(out)[0];
        assert_eq!(dom.get(a_out).unwrap().tag, "section");
        let b_out = dom.children(a_out)[0];
        assert_eq!(dom.get(b_out).unwrap().tag, "article");
        let c_out = dom.children(b_out)[0];
        assert_eq!(dom.get(c_out).unwrap().tag, "span");
        assert_eq!(dom.get(c_out).unwrap().text.as_deref(), Some("deepest"));
    }

    #[test]
    fn sibling_markers_expand_independently() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("first", leaf("one"));
        registry.register("second", leaf("two"));

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "first"));
        dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "second"));

        let out = registry.render_root(&mut dom, root, &()).unwrap();
        let kids = dom.children(out).to_vec();
        assert_eq!(dom.get(kids[0]).unwrap().text.as_deref(), Some("one"));
        assert_eq!(dom.get(kids[1]).unwrap().text.as_deref(), Some("two"));
    }

    #[test]
    fn self_reference_hits_recursion_limit() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("loop", wrapping("div", "loop"));

        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.insert_child(root, NodeData::new("div").with_attr(COMPONENT_ATTR, "loop"));

        let err = registry.render_root(&mut dom, root, &()).unwrap_err();
        match err {
            RenderError::RecursionLimit { name, limit } => {
                assert_eq!(name, "loop");
                assert_eq!(limit, MAX_RENDER_DEPTH);
            }
        }
    }

    #[test]
    fn debug_lists_component_names() {
        let mut registry: Registry<()> = Registry::new();
        registry.register("beta", leaf("b"));
        registry.register("alpha", leaf("a"));
        let dbg = format!("{registry:?}");
        assert!(dbg.contains("alpha"));
        assert!(dbg.contains("beta"));
    }
}
