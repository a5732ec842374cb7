//! Bottom-up minimization: collapses subtree-isomorphic trie nodes into a
//! single canonical representative, turning the tree into a DAG.
//!
//! Equivalence is positional: two nodes merge iff their 26-tuples of
//! `(canonical child, edge-terminal)` pairs agree slot by slot. Because
//! children are canonicalized before their parent is looked up, the first
//! visitor of each class becomes its representative, and no node is ever
//! mutated after it has been inserted into the table.

use hashbrown::HashMap;

use super::flatten::{self, CapacityError};
use super::packed::PackedDawg;
use super::trie::{NodeId, Trie, ALPHABET_LEN};

/// Equivalence key for a node: the ordered 26-tuple of canonical child
/// handles plus the matching edge-terminal flags. Empty slots stay `None`
/// with a `false` flag, so slot position is part of the comparison.
#[derive(PartialEq, Eq, Hash)]
struct Signature {
    children: [Option<NodeId>; ALPHABET_LEN],
    edge_terminal: [bool; ALPHABET_LEN],
}

impl Signature {
    fn of(trie: &Trie, id: NodeId) -> Self {
        let node = trie.node(id);
        Signature {
            children: node.children,
            edge_terminal: node.edge_terminal,
        }
    }
}

/// A minimized word graph, ready to be flattened.
///
/// Produced by [`Builder::finish`](super::Builder::finish) or directly via
/// [`Dawg::from_trie`]. The graph is frozen: nothing mutates it after
/// construction.
pub struct Dawg {
    trie: Trie,
    node_count: usize,
}

impl Dawg {
    /// Minimizes a trie: migrates end-of-word flags onto edges, then merges
    /// equivalent subtrees bottom-up.
    pub fn from_trie(mut trie: Trie) -> Self {
        trie.move_word_flags_to_edges();
        let classes = minimize(&mut trie);
        Dawg {
            trie,
            node_count: classes + 1,
        }
    }

    /// Number of nodes in the minimized graph, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Flattens the graph into the packed record array.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the layout would exceed the format's
    /// 2²⁵-record ceiling. Nothing is written in that case.
    pub fn flatten(&self) -> Result<PackedDawg, CapacityError> {
        flatten::flatten(self)
    }

    pub(crate) fn trie(&self) -> &Trie {
        &self.trie
    }
}

/// Canonicalizes everything below the root and returns the number of
/// equivalence classes.
///
/// The root's child slots are rewritten to the representatives, but the root
/// itself is never looked up in the table: it must stay the unique entry
/// point even when some interior node happens to share its signature.
fn minimize(trie: &mut Trie) -> usize {
    let mut classes: HashMap<Signature, NodeId> = HashMap::new();
    let root = trie.root();
    for slot in 0..ALPHABET_LEN {
        if let Some(child) = trie.child(root, slot) {
            let canonical = canonicalize(trie, &mut classes, child);
            trie.set_child(root, slot, canonical);
        }
    }
    classes.len()
}

/// Post-order canonicalization of one subtree.
///
/// Recursion depth is bounded by the longest accepted word
/// ([`MAX_WORD_LEN`](super::MAX_WORD_LEN)), not by the input size.
fn canonicalize(
    trie: &mut Trie,
    classes: &mut HashMap<Signature, NodeId>,
    id: NodeId,
) -> NodeId {
    // A slot rewritten earlier in the walk may already reference a
    // representative; representatives pass through unchanged.
    if trie.node(id).canonical {
        return id;
    }
    trie.node_mut(id).canonical = true;

    for slot in 0..ALPHABET_LEN {
        if let Some(child) = trie.child(id, slot) {
            let canonical = canonicalize(trie, classes, child);
            trie.set_child(id, slot, canonical);
        }
    }

    // The node's slots are frozen from here on: it enters the table only
    // after all of its children have been rewritten.
    *classes.entry(Signature::of(trie, id)).or_insert(id)
}
