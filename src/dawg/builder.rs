//! Word ingestion: line normalization and the front half of the build
//! pipeline.
//!
//! A [`Builder`] accepts raw input lines, folds and filters them, and
//! accumulates the accepted words in a [`Trie`]. `finish` hands the trie to
//! the minimizer. The free functions [`compile`] and [`compile_file`] run
//! the whole pipeline in one call.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;

use super::flatten::CapacityError;
use super::minimize::Dawg;
use super::packed::PackedDawg;
use super::trie::Trie;

/// Longest accepted word, in characters.
///
/// Longer candidates are rejected like any other malformed line. The bound
/// also caps the minimizer's recursion depth and the walker's prefix
/// buffer.
pub const MAX_WORD_LEN: usize = 256;

/// Normalizes one candidate word.
///
/// ASCII uppercase folds to lowercase; the result is accepted iff every
/// byte is then in `a..=z` and the length is at most [`MAX_WORD_LEN`].
/// Returns `None` for rejected candidates. The caller is expected to have
/// trimmed trailing whitespace already. Words longer than the inline
/// buffer capacity spill to the heap.
pub fn normalize_word(line: &str) -> Option<SmallVec<[u8; 32]>> {
    if line.len() > MAX_WORD_LEN {
        return None;
    }
    let mut word = SmallVec::new();
    for &b in line.as_bytes() {
        let b = b.to_ascii_lowercase();
        if !b.is_ascii_lowercase() {
            return None;
        }
        word.push(b);
    }
    Some(word)
}

/// Accumulates accepted words into a trie, counting what it accepts and
/// rejects along the way.
///
/// ```
/// use dawgpack::dawg::Builder;
///
/// let mut builder = Builder::new();
/// for line in ["Cat", "CAT", "cat", "c-at", "123", ""] {
///     builder.add_line(line);
/// }
/// assert_eq!(builder.words_loaded(), 3);
/// assert_eq!(builder.words_skipped(), 2);
///
/// let packed = builder.finish().flatten().unwrap();
/// assert_eq!(packed.words().collect::<Vec<_>>(), ["cat"]);
/// ```
pub struct Builder {
    trie: Trie,
    loaded: usize,
    skipped: usize,
}

impl Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Builder {
            trie: Trie::new(),
            loaded: 0,
            skipped: 0,
        }
    }

    /// Feeds one raw input line.
    ///
    /// Trailing whitespace is trimmed first. An empty line is dropped
    /// without counting as skipped; a line that fails normalization counts
    /// as skipped; an accepted line counts as loaded even when the word is
    /// already present.
    pub fn add_line(&mut self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        match normalize_word(line) {
            Some(word) => {
                self.trie.insert(&word);
                self.loaded += 1;
            }
            None => self.skipped += 1,
        }
    }

    /// Reads a word list, one candidate per line.
    ///
    /// Reuses a single line buffer instead of allocating a fresh string per
    /// line. The file must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns any open or read failure.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut builder = Builder::new();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut buf = String::with_capacity(80);
        loop {
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => return Err(e),
            }
            builder.add_line(&buf);
            buf.clear();
        }
        Ok(builder)
    }

    /// Number of accepted lines so far, duplicates included.
    pub fn words_loaded(&self) -> usize {
        self.loaded
    }

    /// Number of rejected lines so far.
    pub fn words_skipped(&self) -> usize {
        self.skipped
    }

    /// Nodes in the trie so far, root included: one per unique prefix.
    pub fn trie_node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Consumes the builder and minimizes the accumulated trie.
    pub fn finish(self) -> Dawg {
        Dawg::from_trie(self.trie)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot pipeline: candidate words in, packed image out.
///
/// Each candidate goes through the same normalization as file input;
/// rejected candidates are silently dropped.
///
/// ```
/// use dawgpack::dawg::compile;
///
/// let packed = compile(["can", "car", "cat"]).unwrap();
/// assert!(packed.contains("car"));
/// assert_eq!(packed.count_words(), 3);
/// ```
///
/// # Errors
///
/// Returns [`CapacityError`] if the layout would exceed the format limit.
pub fn compile<I, S>(words: I) -> Result<PackedDawg, CapacityError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_line(word.as_ref());
    }
    builder.finish().flatten()
}

/// Builds a packed image straight from a word-list file.
///
/// # Errors
///
/// Returns the open/read failure or the capacity error, whichever stops
/// the pipeline first.
pub fn compile_file(path: impl AsRef<Path>) -> Result<PackedDawg, Box<dyn Error>> {
    Ok(Builder::from_file(path)?.finish().flatten()?)
}

#[cfg(test)]
mod test {
    use super::*;

    fn normalized(line: &str) -> Option<Vec<u8>> {
        normalize_word(line).map(|w| w.to_vec())
    }

    #[test]
    fn lowercase_words_pass_through() {
        assert_eq!(normalized("cat").as_deref(), Some(b"cat".as_slice()));
    }

    #[test]
    fn uppercase_folds() {
        assert_eq!(normalized("CaT").as_deref(), Some(b"cat".as_slice()));
    }

    #[test]
    fn punctuation_digits_and_unicode_reject() {
        assert_eq!(normalized("c-at"), None);
        assert_eq!(normalized("123"), None);
        assert_eq!(normalized("cat's"), None);
        assert_eq!(normalized("naïve"), None);
    }

    #[test]
    fn length_limit_is_inclusive() {
        let longest = "a".repeat(MAX_WORD_LEN);
        assert!(normalized(&longest).is_some());
        let too_long = "a".repeat(MAX_WORD_LEN + 1);
        assert_eq!(normalized(&too_long), None);
    }

    #[test]
    fn add_line_trims_and_counts() {
        let mut builder = Builder::new();
        builder.add_line("cat\n");
        builder.add_line("dog\r\n");
        builder.add_line("   \n");
        builder.add_line("\n");
        builder.add_line("c4t\n");
        assert_eq!(builder.words_loaded(), 2);
        assert_eq!(builder.words_skipped(), 1);
    }

    #[test]
    fn duplicates_load_but_do_not_grow_the_trie() {
        let mut builder = Builder::new();
        builder.add_line("cat");
        let nodes = builder.trie_node_count();
        builder.add_line("cat");
        assert_eq!(builder.words_loaded(), 2);
        assert_eq!(builder.trie_node_count(), nodes);
    }

    #[test]
    fn compile_drops_rejected_candidates() {
        let packed = compile(["ok", "not ok", "fine"]).unwrap();
        let words: Vec<String> = packed.words().collect();
        assert_eq!(words, ["fine", "ok"]);
    }
}
