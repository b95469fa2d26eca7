//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single document node.
///
/// Attributes are ordered name/value pairs; names are unique within a node.
/// Whether a node is "live" or "virtual" is a role, not a type: virtual
/// nodes carry the same data, they are just not reachable from the live root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Element tag name (e.g. "div", "span").
    pub tag: String,
    /// Ordered attribute pairs. Names are unique; setting an existing name
    /// overwrites its value in place.
    attrs: Vec<(String, String)>,
    /// Text payload for leaf-like nodes.
    pub text: Option<String>,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and no attributes or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
        }
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the text payload (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present, regardless of its value.
    ///
    /// A present attribute with an empty value is distinct from an absent one.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Set an attribute. Overwrites in place if the name is already present,
    /// preserving attribute order.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Remove an attribute. No-op if not present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    /// Number of attributes on this node.
    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }

    /// Iterate attribute pairs in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
