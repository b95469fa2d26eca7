//! Document queries: by tag, by attribute, marker scan, generic predicate.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find all nodes whose tag matches the given string.
    ///
    /// Iterates all nodes in the arena (live and detached).
    pub fn query_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.tag == tag)
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes that carry the given attribute, regardless of value.
    pub fn query_by_attr(&self, name: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.has_attr(name))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find the descendants of `root` that carry the `marker` attribute, in
    /// document order (pre-order, siblings first to last).
    ///
    /// `root` itself is excluded, matching a descendant selector scan.
    pub fn marked(&self, root: NodeId, marker: &str) -> Vec<NodeId> {
        self.walk_depth_first(root)
            .into_iter()
            .skip(1)
            .filter(|&id| {
                self.get(id)
                    .is_some_and(|data| data.has_attr(marker))
            })
            .collect()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// This is a helper used by the query methods. It iterates in slotmap
    /// insertion order, which is deterministic but not tree-order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
