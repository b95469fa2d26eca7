//! Snapshot helpers: tree-to-text serialization.
//!
//! Converts a subtree into a deterministic, indented plain-text form suitable
//! for snapshot testing and assertions.

use crate::dom::{Dom, NodeId};

/// Serialize the subtree rooted at `root` to an indented text string.
///
/// One node per line: tag, attributes in insertion order as `name="value"`,
/// then the text payload in quotes if present. Children are indented by two
/// spaces per level. Lines are separated by `'\n'`; the final line has no
/// trailing newline. A missing `root` serializes to the empty string.
///
/// # Examples
///
/// ```ignore
/// use trellis_ui::testing::tree_to_string;
///
/// let output = tree_to_string(&dom, root);
/// assert!(output.contains("span class=\"a\""));
/// ```
pub fn tree_to_string(dom: &Dom, root: NodeId) -> String {
    let mut lines = Vec::new();
    collect_lines(dom, root, 0, &mut lines);
    lines.join("\n")
}

fn collect_lines(dom: &Dom, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(id) else {
        return;
    };

    let mut line = String::new();
    line.push_str(&"  ".repeat(depth));
    line.push_str(&data.tag);
    for (name, value) in data.attrs() {
        line.push_str(&format!(" {name}={value:?}"));
    }
    if let Some(text) = &data.text {
        line.push_str(&format!(" {text:?}"));
    }
    lines.push(line);

    for &child in dom.children(id) {
        collect_lines(dom, child, depth + 1, lines);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
