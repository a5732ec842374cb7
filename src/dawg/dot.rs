//! Graphviz export for small graphs.
//!
//! Node ids follow breadth-first discovery order from the root, matching
//! the order the flattener assigns base offsets, so a rendering lines up
//! with a record dump of the same graph.

use std::collections::VecDeque;
use std::io::{self, Write};

use hashbrown::HashMap;

use super::minimize::Dawg;
use super::trie::NodeId;

/// Node-count cutoff the CLI uses before writing a rendering.
pub const DOT_NODE_LIMIT: usize = 100;

/// Writes the minimized graph in Graphviz DOT format.
///
/// Terminal edges are drawn green; the root is a double circle with no
/// label.
///
/// # Errors
///
/// Propagates the first write failure.
pub fn export_dot<W: Write>(dawg: &Dawg, w: &mut W) -> io::Result<()> {
    writeln!(w, "digraph dawg {{")?;
    writeln!(w, "  rankdir=TB;")?;
    writeln!(w, "  node [shape=circle width=0.3 fontsize=10];")?;
    writeln!(w, "  edge [fontsize=12];")?;
    writeln!(w, "  n0 [label=\"\" shape=doublecircle];")?;

    let trie = dawg.trie();
    let root = trie.root();

    let mut ids: HashMap<NodeId, usize> = HashMap::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    ids.insert(root, 0);
    order.push(root);
    queue.push_back(root);
    while let Some(id) = queue.pop_front() {
        for edge in trie.children(id) {
            if !ids.contains_key(&edge.child) {
                ids.insert(edge.child, order.len());
                order.push(edge.child);
                queue.push_back(edge.child);
            }
        }
    }

    for i in 1..order.len() {
        writeln!(w, "  n{i} [label=\"{i}\"];")?;
    }
    for &id in &order {
        let from = ids[&id];
        for edge in trie.children(id) {
            let to = ids[&edge.child];
            let letter = (b'a' + edge.slot) as char;
            if edge.terminal {
                writeln!(
                    w,
                    "  n{from} -> n{to} [label=\"{letter}\" color=green fontcolor=green penwidth=2.0];"
                )?;
            } else {
                writeln!(w, "  n{from} -> n{to} [label=\"{letter}\"];")?;
            }
        }
    }

    writeln!(w, "}}")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dawg::{Builder, Dawg};

    fn dawg_of(words: &[&str]) -> Dawg {
        let mut builder = Builder::new();
        for word in words {
            builder.add_line(word);
        }
        builder.finish()
    }

    fn dot_of(words: &[&str]) -> String {
        let mut out = Vec::new();
        export_dot(&dawg_of(words), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_graph_renders_just_the_root() {
        let dot = dot_of(&[]);
        assert!(dot.starts_with("digraph dawg {"));
        assert!(dot.contains("n0 [label=\"\" shape=doublecircle];"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn terminal_edges_are_green() {
        let dot = dot_of(&["at"]);
        assert!(dot.contains("n0 -> n1 [label=\"a\"];"));
        assert!(dot.contains("n1 -> n2 [label=\"t\" color=green fontcolor=green penwidth=2.0];"));
    }

    #[test]
    fn shared_nodes_are_rendered_once() {
        let dot = dot_of(&["a", "b"]);
        // root plus one shared leaf
        assert!(dot.contains("n0 -> n1 [label=\"a\" color=green"));
        assert!(dot.contains("n0 -> n1 [label=\"b\" color=green"));
        assert!(!dot.contains("n2"));
    }
}
