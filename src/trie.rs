//! Prefix tree over chord sequences, arena-backed
//!
//! Each path from the root to a terminal node spells one registered
//! sequence; terminal nodes carry the targets bound to exactly that
//! sequence. Nodes live in a generational arena so parent back-references
//! are plain handles rather than ownership cycles, and a handle to a
//! deleted node is inert instead of aliasing a reused slot.

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a node in a [`SequenceTree`]
    pub struct NodeId;
}

#[derive(Debug)]
enum NodeKind<T> {
    /// Shared prefix of one or more longer sequences
    Internal { children: HashMap<String, NodeId> },
    /// End of at least one registered sequence (insertion order preserved)
    Terminal { targets: Vec<T> },
}

#[derive(Debug)]
struct Node<T> {
    parent: Option<NodeId>,
    kind: NodeKind<T>,
}

/// The tree of registered chord sequences.
///
/// Invariants:
/// - the root is always internal and is never deleted
/// - an internal node with no children, or a terminal with no targets, is
///   unlinked from its parent, cascading upward until a non-empty ancestor
///   (or the root) is reached
/// - each edge leads to either a continuation (internal) or a completed
///   sequence (terminal), never both; insertion replaces one with the other
#[derive(Debug)]
pub struct SequenceTree<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    root: NodeId,
}

impl<T> SequenceTree<T> {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            parent: None,
            kind: NodeKind::Internal {
                children: HashMap::new(),
            },
        });
        Self { nodes, root }
    }

    /// Handle of the root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Whether the tree has no registered sequences
    pub fn is_empty(&self) -> bool {
        match &self.nodes[self.root].kind {
            NodeKind::Internal { children } => children.is_empty(),
            NodeKind::Terminal { .. } => unreachable!("root is always internal"),
        }
    }

    /// Whether the handle refers to a live terminal node
    pub fn is_terminal(&self, node: NodeId) -> bool {
        matches!(
            self.nodes.get(node),
            Some(Node {
                kind: NodeKind::Terminal { .. },
                ..
            })
        )
    }

    /// Single-edge traversal: follow `chord` out of `node`.
    ///
    /// Returns `None` from terminals, from dead handles, and when the edge
    /// is absent.
    pub fn lookup(&self, node: NodeId, chord: &str) -> Option<NodeId> {
        match &self.nodes.get(node)?.kind {
            NodeKind::Internal { children } => children.get(chord).copied(),
            NodeKind::Terminal { .. } => None,
        }
    }

    /// Insert a sequence and return its terminal node.
    ///
    /// Walking a non-final chord through an existing terminal discards that
    /// terminal and its targets; walking the final chord onto an existing
    /// internal node discards that node's subtree. A sequence is never
    /// simultaneously "complete at chord i" and "continuing past chord i"
    /// through the same edge. The final chord onto an existing terminal
    /// reuses it, so multiple targets can share one sequence.
    ///
    /// Returns `None` for an empty sequence (nothing inserted).
    pub fn insert(&mut self, sequence: &[String]) -> Option<NodeId> {
        let (last, prefix) = sequence.split_last()?;
        let mut current = self.root;
        for chord in prefix {
            current = match self.lookup(current, chord) {
                Some(id) if !self.is_terminal(id) => id,
                existing => {
                    if let Some(id) = existing {
                        self.unlink(current, id);
                    }
                    self.attach(
                        current,
                        chord,
                        NodeKind::Internal {
                            children: HashMap::new(),
                        },
                    )
                }
            };
        }
        let leaf = match self.lookup(current, last) {
            Some(id) if self.is_terminal(id) => id,
            existing => {
                if let Some(id) = existing {
                    self.unlink(current, id);
                }
                self.attach(current, last, NodeKind::Terminal { targets: Vec::new() })
            }
        };
        Some(leaf)
    }

    /// Remove the edge of `parent` that points at `child`, freeing the
    /// child's subtree. If `parent` becomes childless and is not the root,
    /// removal cascades upward. Returns whether an edge was found.
    pub fn remove_edge_to(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(Node {
            kind: NodeKind::Internal { children },
            ..
        }) = self.nodes.get_mut(parent)
        else {
            return false;
        };
        let Some(edge) = children
            .iter()
            .find(|(_, id)| **id == child)
            .map(|(edge, _)| edge.clone())
        else {
            return false;
        };
        children.remove(&edge);
        let emptied = children.is_empty();
        self.free_subtree(child);
        if emptied && parent != self.root {
            if let Some(grandparent) = self.parent(parent) {
                self.remove_edge_to(grandparent, parent);
            }
        }
        true
    }

    /// Parent handle of a node, if live and not the root
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node)?.parent
    }

    /// Append a target to a terminal's list. Returns false for dead or
    /// internal handles.
    pub fn push_target(&mut self, leaf: NodeId, target: T) -> bool {
        match self.nodes.get_mut(leaf) {
            Some(Node {
                kind: NodeKind::Terminal { targets },
                ..
            }) => {
                targets.push(target);
                true
            }
            _ => false,
        }
    }

    /// Targets bound at a terminal, in registration order
    pub fn targets(&self, leaf: NodeId) -> &[T] {
        match self.nodes.get(leaf) {
            Some(Node {
                kind: NodeKind::Terminal { targets },
                ..
            }) => targets,
            _ => &[],
        }
    }

    /// Remove the first occurrence of `target` from a terminal's list.
    /// When the list empties, the terminal is unlinked and deletion
    /// cascades upward. Returns whether a target was removed.
    pub fn remove_target(&mut self, leaf: NodeId, target: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(Node {
            parent,
            kind: NodeKind::Terminal { targets },
        }) = self.nodes.get_mut(leaf)
        else {
            return false;
        };
        let Some(index) = targets.iter().position(|t| t == target) else {
            return false;
        };
        targets.remove(index);
        let emptied = targets.is_empty();
        let parent = *parent;
        if emptied {
            if let Some(parent) = parent {
                self.remove_edge_to(parent, leaf);
            }
        }
        true
    }

    /// Create a node of the given kind under `parent` along `chord`.
    /// The caller must have cleared any previous edge for `chord`.
    fn attach(&mut self, parent: NodeId, chord: &str, kind: NodeKind<T>) -> NodeId {
        let id = self.nodes.insert(Node {
            parent: Some(parent),
            kind,
        });
        if let Some(Node {
            kind: NodeKind::Internal { children },
            ..
        }) = self.nodes.get_mut(parent)
        {
            children.insert(chord.to_owned(), id);
        }
        id
    }

    /// Remove the edge from `parent` to `child` and free the child's
    /// subtree, without cascading: used when a replacement node is about to
    /// be attached under the same parent, which must stay linked.
    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Node {
            kind: NodeKind::Internal { children },
            ..
        }) = self.nodes.get_mut(parent)
        {
            children.retain(|_, id| *id != child);
        }
        self.free_subtree(child);
    }

    fn free_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(id) {
            if let NodeKind::Internal { children } = node.kind {
                for (_, child) in children {
                    self.free_subtree(child);
                }
            }
        }
    }
}

impl<T> Default for SequenceTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(chords: &[&str]) -> Vec<String> {
        chords.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let leaf = tree.insert(&seq(&["g", "i"])).unwrap();

        let g = tree.lookup(tree.root(), "g").expect("edge g");
        assert!(!tree.is_terminal(g));
        let i = tree.lookup(g, "i").expect("edge i");
        assert_eq!(i, leaf);
        assert!(tree.is_terminal(i));
        assert!(tree.lookup(tree.root(), "x").is_none());
    }

    #[test]
    fn test_empty_sequence_is_noop() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        assert!(tree.insert(&[]).is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_shared_terminal_for_same_sequence() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let first = tree.insert(&seq(&["Control+k"])).unwrap();
        let second = tree.insert(&seq(&["Control+k"])).unwrap();
        assert_eq!(first, second);

        tree.push_target(first, "a");
        tree.push_target(second, "b");
        assert_eq!(tree.targets(first), &["a", "b"]);
    }

    #[test]
    fn test_lookup_from_terminal_is_none() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let leaf = tree.insert(&seq(&["g"])).unwrap();
        assert!(tree.lookup(leaf, "i").is_none());
    }

    #[test]
    fn test_shorter_sequence_replaces_internal() {
        // "g i" exists; inserting "g" discards the continuation subtree
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let gi = tree.insert(&seq(&["g", "i"])).unwrap();
        tree.push_target(gi, "issues");

        let g = tree.insert(&seq(&["g"])).unwrap();
        assert!(tree.is_terminal(g));
        assert!(!tree.contains(gi));
        assert_eq!(tree.lookup(tree.root(), "g"), Some(g));
    }

    #[test]
    fn test_longer_sequence_replaces_terminal() {
        // "g" exists with a target; inserting "g i" discards that terminal
        // and its targets (documented collision behavior)
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let g = tree.insert(&seq(&["g"])).unwrap();
        tree.push_target(g, "goto");

        let gi = tree.insert(&seq(&["g", "i"])).unwrap();
        assert!(!tree.contains(g));

        let new_g = tree.lookup(tree.root(), "g").unwrap();
        assert!(!tree.is_terminal(new_g));
        assert_eq!(tree.lookup(new_g, "i"), Some(gi));
    }

    #[test]
    fn test_splice_keeps_parent_linked() {
        // Replacing the only child of an internal node must not cascade
        // that node away before the replacement is attached
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        tree.insert(&seq(&["g", "i", "x"])).unwrap();
        let gi = tree.insert(&seq(&["g", "i"])).unwrap();

        let g = tree.lookup(tree.root(), "g").expect("g still reachable");
        assert_eq!(tree.lookup(g, "i"), Some(gi));
        assert!(tree.is_terminal(gi));
    }

    #[test]
    fn test_remove_target_first_occurrence() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let leaf = tree.insert(&seq(&["x"])).unwrap();
        tree.push_target(leaf, "a");
        tree.push_target(leaf, "b");
        tree.push_target(leaf, "a");

        assert!(tree.remove_target(leaf, &"a"));
        assert_eq!(tree.targets(leaf), &["b", "a"]);
    }

    #[test]
    fn test_remove_missing_target_is_noop() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let leaf = tree.insert(&seq(&["x"])).unwrap();
        tree.push_target(leaf, "a");

        assert!(!tree.remove_target(leaf, &"z"));
        assert_eq!(tree.targets(leaf), &["a"]);
    }

    #[test]
    fn test_last_target_removal_cascades_to_root() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let leaf = tree.insert(&seq(&["g", "i", "x"])).unwrap();
        tree.push_target(leaf, "t");

        assert!(tree.remove_target(leaf, &"t"));
        assert!(tree.is_empty());
        assert!(tree.contains(tree.root()));
    }

    #[test]
    fn test_cascade_stops_at_shared_prefix() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let gi = tree.insert(&seq(&["g", "i"])).unwrap();
        let gu = tree.insert(&seq(&["g", "u"])).unwrap();
        tree.push_target(gi, "issues");
        tree.push_target(gu, "user");

        tree.remove_target(gi, &"issues");
        assert!(!tree.contains(gi));
        let g = tree.lookup(tree.root(), "g").expect("shared prefix stays");
        assert_eq!(tree.lookup(g, "u"), Some(gu));
    }

    #[test]
    fn test_stale_handle_is_inert() {
        let mut tree: SequenceTree<&str> = SequenceTree::new();
        let leaf = tree.insert(&seq(&["x"])).unwrap();
        tree.push_target(leaf, "t");
        tree.remove_target(leaf, &"t");

        assert!(!tree.contains(leaf));
        assert!(!tree.push_target(leaf, "again"));
        assert!(!tree.remove_target(leaf, &"t"));
        assert!(tree.targets(leaf).is_empty());
    }
}
