//! Ancestor path resolution.

use studytrace_core_types::PathNode;

use crate::model::Element;
use crate::registry::ElementRegistry;

/// Resolve the chain of ancestors from an element up to the collection root.
///
/// The walk starts at the element's immediate parent (the element itself is
/// excluded) and follows parent pointers upward until a node with no parent
/// is reached. The returned path is nearest-ancestor-first, root-last; that
/// order is part of this interface's contract and consumers wanting
/// root-first breadcrumbs reverse it themselves.
///
/// The walk is iterative, so hierarchy depth is bounded only by the tree.
/// A `None` element yields an empty path, and a parent id the registry
/// cannot resolve ends the walk at that point - a missing path is valid
/// domain data, never an error.
pub fn resolve_full_path(registry: &dyn ElementRegistry, element: Option<&Element>) -> Vec<PathNode> {
    let mut full_path = Vec::new();

    let Some(element) = element else {
        return full_path;
    };

    let mut current = element.parent_id;
    while let Some(id) = current {
        let Some(parent) = registry.element(id) else {
            break;
        };
        full_path.push(PathNode {
            title: parent.title.clone(),
            element_id: parent.id,
            element_type: parent.element_type,
        });
        current = parent.parent_id;
    }

    full_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use studytrace_core_types::ElementType;

    #[test]
    fn test_root_element_has_empty_path() {
        let mut registry = InMemoryRegistry::new();
        let root = Element::new(1, "Root", ElementType::ConceptGroup);
        registry.insert(root.clone());

        let path = resolve_full_path(&registry, Some(&root));

        assert!(path.is_empty());
    }

    #[test]
    fn test_chain_is_nearest_first() {
        let mut registry = InMemoryRegistry::new();
        let root = Element::new(1, "Root", ElementType::ConceptGroup);
        let mut middle = Element::new(2, "Middle", ElementType::Topic);
        let mut leaf = Element::new(3, "Leaf", ElementType::Item);
        middle.parent_id = Some(1);
        leaf.parent_id = Some(2);
        registry.insert(root);
        registry.insert(middle);
        registry.insert(leaf.clone());

        let path = resolve_full_path(&registry, Some(&leaf));

        assert_eq!(path.len(), 2);
        assert_eq!(path[0].element_id, 2);
        assert_eq!(path[1].element_id, 1);
    }

    #[test]
    fn test_none_element_yields_empty_path() {
        let registry = InMemoryRegistry::new();

        assert!(resolve_full_path(&registry, None).is_empty());
    }

    #[test]
    fn test_dangling_parent_ends_walk() {
        let mut registry = InMemoryRegistry::new();
        let mut leaf = Element::new(3, "Leaf", ElementType::Item);
        leaf.parent_id = Some(99);
        registry.insert(leaf.clone());

        let path = resolve_full_path(&registry, Some(&leaf));

        assert!(path.is_empty());
    }
}
