/// Word ingestion and the build pipeline front end.
pub mod builder;
/// Graphviz export for small graphs.
pub mod dot;
/// Two-pass layout of the minimized graph.
pub mod flatten;
/// Bottom-up minimization of the trie into a DAG.
pub mod minimize;
/// The packed record codec and on-disk form.
pub mod packed;
/// The mutable input trie.
pub mod trie;
/// Read-side walker over the packed form.
pub mod walk;

pub use builder::{compile, compile_file, normalize_word, Builder, MAX_WORD_LEN};
pub use flatten::CapacityError;
pub use minimize::Dawg;
pub use packed::{PackedDawg, ReadError, Record, MAX_RECORDS};
pub use trie::Trie;
pub use walk::Words;
