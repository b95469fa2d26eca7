//! Component trait: the rendering-function capability.
//!
//! Anything callable as `(target, state) -> node` can act as a component.
//! [`Component`] makes that capability an explicit, object-safe trait,
//! enforced at registration time, with a blanket impl so plain closures
//! satisfy it without ceremony.

use crate::dom::{Dom, NodeId};

/// Core capability implemented by everything that can be registered.
///
/// A component takes the node it is being rendered into (`target` — for a
/// marker expansion this is the marker node itself, so its attributes act as
/// the component's inputs) and an immutable state snapshot, and returns the
/// root of a freshly built subtree in the same arena. The returned subtree
/// should be detached; the registry wires it into place.
///
/// Rendering must be deterministic for a given `(target, state)` pair.
pub trait Component<S> {
    /// Build this component's output tree.
    fn render(&self, dom: &mut Dom, target: NodeId, state: &S) -> NodeId;
}

// Blanket implementation: any matching closure is a component.
impl<S, F> Component<S> for F
where
    F: Fn(&mut Dom, NodeId, &S) -> NodeId,
{
    fn render(&self, dom: &mut Dom, target: NodeId, state: &S) -> NodeId {
        self(dom, target, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;

    #[test]
    fn closure_is_a_component() {
        let component = |dom: &mut Dom, _target: NodeId, state: &u32| {
            dom.insert(NodeData::new("span").with_text(state.to_string()))
        };

        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div"));
        let out = Component::render(&component, &mut dom, target, &7);
        assert_eq!(dom.get(out).unwrap().text.as_deref(), Some("7"));
    }

    #[test]
    fn component_is_object_safe() {
        let component = |dom: &mut Dom, _target: NodeId, _state: &()| {
            dom.insert(NodeData::new("p"))
        };
        let boxed: Box<dyn Component<()>> = Box::new(component);

        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div"));
        let out = boxed.render(&mut dom, target, &());
        assert_eq!(dom.get(out).unwrap().tag, "p");
    }

    #[test]
    fn component_can_read_target_attrs() {
        // The marker node's attributes act as component inputs.
        let component = |dom: &mut Dom, target: NodeId, _state: &()| {
            let label = dom
                .get(target)
                .and_then(|data| data.attr("label"))
                .unwrap_or("?")
                .to_owned();
            dom.insert(NodeData::new("button").with_text(label))
        };

        let mut dom = Dom::new();
        let target = dom.insert(NodeData::new("div").with_attr("label", "OK"));
        let out = component.render(&mut dom, target, &());
        assert_eq!(dom.get(out).unwrap().text.as_deref(), Some("OK"));
    }
}
