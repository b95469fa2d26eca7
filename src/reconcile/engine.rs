//! The diff/apply engine.
//!
//! [`apply`] walks a live node and an incoming (virtual) node in lockstep and
//! mutates the live tree minimally: remove what the incoming tree dropped,
//! adopt what it added, replace wholesale what [`changed`] flags, and recurse
//! by child position everywhere else. There is no key-based matching and no
//! move detection: behavior is fully defined by structural position.
//!
//! Both trees must live in the same [`Dom`] arena. The engine never copies
//! node data; it only rewires parent/child links, so an incoming subtree is
//! *moved* into the live tree when inserted or used as a replacement. Spent
//! incoming shells are removed from the arena as the walk unwinds.

use tracing::trace;

use super::changed::changed;
use crate::dom::{Dom, NodeId};

/// Reconcile one (possibly absent) live/incoming node pair under `parent`.
///
/// 1. Live present, incoming absent: the live subtree is removed.
/// 2. Live absent, incoming present: the incoming subtree is adopted as a
///    new child of `parent`.
/// 3. Both present and changed: the live subtree is replaced wholesale at
///    its position.
/// 4. Both present and unchanged: recurse positionally over child indices up
///    to the longer child list; an index past one list's end is absent on
///    that side.
pub fn apply(dom: &mut Dom, parent: NodeId, live: Option<NodeId>, incoming: Option<NodeId>) {
    match (live, incoming) {
        (Some(live), None) => {
            trace!(?live, "removing dropped node");
            dom.remove(live);
        }
        (None, Some(incoming)) => {
            trace!(?incoming, ?parent, "adopting new node");
            dom.adopt(parent, incoming);
        }
        (Some(live), Some(incoming)) => {
            apply_pair(dom, live, incoming);
        }
        (None, None) => {}
    }
}

/// Reconcile the tree roots directly.
///
/// The root has no parent to hang an insertion off, so both sides must be
/// present here. If the roots themselves differ the arena is re-rooted onto
/// the incoming tree.
pub fn apply_root(dom: &mut Dom, live: NodeId, incoming: NodeId) {
    apply_pair(dom, live, incoming);
}

fn apply_pair(dom: &mut Dom, live: NodeId, incoming: NodeId) {
    if changed(dom, live, incoming) {
        trace!(?live, ?incoming, "replacing changed node");
        dom.replace(live, incoming);
        return;
    }

    // Snapshot both child lists: the walk below mutates them.
    let live_kids: Vec<NodeId> = dom.children(live).to_vec();
    let incoming_kids: Vec<NodeId> = dom.children(incoming).to_vec();

    let max = live_kids.len().max(incoming_kids.len());
    for i in 0..max {
        apply(
            dom,
            live,
            live_kids.get(i).copied(),
            incoming_kids.get(i).copied(),
        );
    }

    // The incoming shell is spent: each of its children has been adopted,
    // used as a replacement, or discarded by the recursion above.
    dom.remove(incoming);
}
