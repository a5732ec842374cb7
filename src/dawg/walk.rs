//! Read-side walker: the authoritative definition of what a packed image
//! means.
//!
//! Traversal starts at record 0 and reads a sibling list until the
//! end-of-node bit; every end-of-word bit yields the prefix walked so far,
//! and a non-zero next pointer descends into the target's list. The walk
//! uses an explicit stack, so arbitrarily deep images cannot overflow the
//! call stack.

use smallvec::SmallVec;

use super::packed::PackedDawg;

struct Frame {
    index: usize,
    depth: usize,
}

/// Iterator over the words encoded in a packed image, in lexicographic
/// order.
///
/// Created by [`PackedDawg::words`]. A malformed image (out-of-range next
/// pointer) ends the iteration early rather than panicking.
pub struct Words<'a> {
    packed: &'a PackedDawg,
    stack: Vec<Frame>,
    prefix: SmallVec<[u8; 32]>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(Frame { index, depth }) = self.stack.pop() {
            let record = *self.packed.records().get(index)?;
            self.prefix.truncate(depth);
            self.prefix.push(record.letter_ascii());
            // Sibling continues after this record's whole subtree; push it
            // first so the subtree frame is popped before it.
            if !record.is_end_of_node() {
                self.stack.push(Frame {
                    index: index + 1,
                    depth,
                });
            }
            if record.next() != 0 {
                self.stack.push(Frame {
                    index: record.next() as usize,
                    depth: depth + 1,
                });
            }
            if record.is_end_of_word() {
                return Some(self.prefix.iter().map(|&b| b as char).collect());
            }
        }
        None
    }
}

impl PackedDawg {
    /// Walks the image and yields every member word.
    pub fn words(&self) -> Words<'_> {
        let mut stack = Vec::new();
        if !self.is_empty() {
            stack.push(Frame { index: 0, depth: 0 });
        }
        Words {
            packed: self,
            stack,
            prefix: SmallVec::new(),
        }
    }

    /// Counts member words without materializing them.
    ///
    /// Shared sublists are re-walked once per referencing path, so the cost
    /// is proportional to the word count, not the record count.
    pub fn count_words(&self) -> usize {
        let records = self.records();
        let mut count = 0;
        let mut stack: Vec<usize> = Vec::new();
        if !records.is_empty() {
            stack.push(0);
        }
        while let Some(start) = stack.pop() {
            let mut index = start;
            loop {
                let Some(record) = records.get(index) else {
                    return count;
                };
                if record.is_end_of_word() {
                    count += 1;
                }
                if record.next() != 0 {
                    stack.push(record.next() as usize);
                }
                if record.is_end_of_node() {
                    break;
                }
                index += 1;
            }
        }
        count
    }
}
