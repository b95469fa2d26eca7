//! Node-pair change detection.

use crate::dom::{Dom, NodeId};

/// Decide whether a live/incoming node pair differs enough to force a
/// wholesale replacement.
///
/// A pair is changed when:
/// - the tags differ,
/// - the attribute counts differ,
/// - any attribute name present on either node is absent, or differently
///   valued, on the other (checked in both directions; a present attribute
///   with an empty value is not the same as an absent one),
/// - both nodes are leaves (no children) and their text payloads differ.
///
/// Attribute *order* does not participate: two nodes carrying the same
/// name/value pairs in different orders are unchanged. Text payloads are
/// compared only on leaf pairs — a node with children never triggers the
/// text branch, stray payload or not.
pub fn changed(dom: &Dom, a: NodeId, b: NodeId) -> bool {
    let (Some(a_data), Some(b_data)) = (dom.get(a), dom.get(b)) else {
        // A vanished node can't be patched in place.
        return true;
    };

    if a_data.tag != b_data.tag {
        return true;
    }

    if a_data.attr_count() != b_data.attr_count() {
        return true;
    }

    for (name, value) in a_data.attrs() {
        if b_data.attr(name) != Some(value) {
            return true;
        }
    }
    for (name, value) in b_data.attrs() {
        if a_data.attr(name) != Some(value) {
            return true;
        }
    }

    if dom.children(a).is_empty() && dom.children(b).is_empty() && a_data.text != b_data.text {
        return true;
    }

    false
}
