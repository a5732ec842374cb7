//! # dawgpack
//!
//! Compiles plain-text word lists into compact, immutable
//! [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) images with a fixed binary layout.
//!
//! The pipeline builds a mutable trie over `a..z`, moves the end-of-word
//! flags from nodes onto their incoming edges, collapses isomorphic
//! subtrees bottom-up, and flattens the resulting DAG into an array of
//! packed 32-bit edge records. The array is written to disk verbatim as
//! little-endian words, with no header, and supports membership and prefix
//! queries in place.
//!
//! ## Quick Start
//!
//! ```
//! use dawgpack::dawg::compile;
//!
//! let packed = compile(["bake", "cake", "fake", "lake", "make"]).unwrap();
//!
//! assert!(packed.contains("cake"));
//! assert!(!packed.contains("ake"));
//! assert!(packed.has_prefix("ba"));
//! assert_eq!(packed.count_words(), 5);
//! ```
//!
//! ## The on-disk form
//!
//! Walking the image starts at record 0 and is defined by
//! [`PackedDawg::words`](dawg::PackedDawg::words); see [`dawg::Record`] for
//! the bit layout. Given the same word set, the bytes are identical across
//! runs:
//!
//! ```
//! use dawgpack::dawg::compile;
//!
//! let packed = compile(["can", "car", "cat"]).unwrap();
//! let words: Vec<String> = packed.words().collect();
//! assert_eq!(words, ["can", "car", "cat"]);
//! ```
//!
//! Input lines are normalized the way the `dawgpack` binary does it: ASCII
//! uppercase folds to lowercase and anything outside `a..z` is rejected,
//! so the library accepts raw word-list lines directly.

#![warn(missing_docs)]

/// Core pipeline: trie, minimization, flattening, packed form, and walker.
pub mod dawg;
