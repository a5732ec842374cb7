use std::fmt;

/// Number of distinct edge labels: the lowercase ASCII letters `a..z`.
pub(crate) const ALPHABET_LEN: usize = 26;

/// Stable handle to a node in a [`Trie`]'s backing store.
///
/// Comparing two `NodeId`s is reference equality on the graph: they are
/// equal iff they denote the same stored node. Structural equality lives in
/// the minimizer's signature table, not here.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One outgoing edge of a node: letter slot, target, and terminal flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    /// Letter slot, 0 = `a` .. 25 = `z`.
    pub(crate) slot: u8,
    pub(crate) child: NodeId,
    pub(crate) terminal: bool,
}

/// A node: 26 child slots and the matching per-edge terminal flags.
///
/// The `word` flag is meaningful only between insertion and
/// [`Trie::move_word_flags_to_edges`]; after the migration the per-edge
/// flags are authoritative and `word` is never read again.
pub(crate) struct Node {
    pub(crate) children: [Option<NodeId>; ALPHABET_LEN],
    pub(crate) edge_terminal: [bool; ALPHABET_LEN],
    pub(crate) word: bool,
    pub(crate) canonical: bool,
}

impl Node {
    fn new() -> Self {
        Node {
            children: [None; ALPHABET_LEN],
            edge_terminal: [false; ALPHABET_LEN],
            word: false,
            canonical: false,
        }
    }
}

/// A mutable letter trie over `a..z`, rooted at a single anonymous node.
///
/// Nodes live in one `Vec` owned by the trie; handles are indices into that
/// store, so identity is a small integer and survives child-slot rewrites
/// during minimization.
pub struct Trie {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Trie {
    /// Creates an empty trie containing only the root node.
    pub fn new() -> Self {
        Trie {
            nodes: vec![Node::new()],
            root: NodeId(0),
        }
    }

    /// Inserts a word given as lowercase ASCII bytes.
    ///
    /// Inserting the same word twice is a no-op beyond the first call.
    ///
    /// # Panics
    ///
    /// Panics if `word` contains a byte outside `a..=z`. Input normalization
    /// is the caller's job; see [`normalize_word`](super::normalize_word).
    pub fn insert(&mut self, word: &[u8]) {
        let mut current = self.root;
        for &b in word {
            assert!(b.is_ascii_lowercase(), "trie words must be lowercase a-z");
            let slot = (b - b'a') as usize;
            current = match self.nodes[current.index()].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.alloc();
                    self.nodes[current.index()].children[slot] = Some(child);
                    child
                }
            };
        }
        self.nodes[current.index()].word = true;
    }

    /// Total number of allocated nodes, root included.
    ///
    /// Before minimization this is the trie node count (one node per unique
    /// prefix); nodes orphaned by merging are still counted afterwards.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Rewrites every end-of-word flag onto the incoming edge of its node.
    ///
    /// For each parent `p` and non-empty slot `i`, sets
    /// `edge_terminal[p][i]` to the `word` flag of `children[p][i]`. Writes
    /// touch a parent using only its children's read-only flags, so a plain
    /// sweep over the store is as good as any traversal order.
    pub(crate) fn move_word_flags_to_edges(&mut self) {
        for i in 0..self.nodes.len() {
            for slot in 0..ALPHABET_LEN {
                if let Some(child) = self.nodes[i].children[slot] {
                    let terminal = self.nodes[child.index()].word;
                    self.nodes[i].edge_terminal[slot] = terminal;
                }
            }
        }
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node store overflow"));
        self.nodes.push(Node::new());
        id
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn child(&self, id: NodeId, slot: usize) -> Option<NodeId> {
        self.nodes[id.index()].children[slot]
    }

    pub(crate) fn set_child(&mut self, id: NodeId, slot: usize, child: NodeId) {
        self.nodes[id.index()].children[slot] = Some(child);
    }

    /// Number of non-empty child slots of `id`.
    pub(crate) fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id.index()]
            .children
            .iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Iterates the non-empty child slots of `id` in letter order.
    pub(crate) fn children(&self, id: NodeId) -> impl Iterator<Item = Edge> + '_ {
        let node = self.node(id);
        (0..ALPHABET_LEN).filter_map(move |slot| {
            node.children[slot].map(|child| Edge {
                slot: slot as u8,
                child,
                terminal: node.edge_terminal[slot],
            })
        })
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
