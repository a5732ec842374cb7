//! Two-pass breadth-first layout: turns the minimized pointer graph into
//! the position-encoded record array.
//!
//! Every record needs the base offset of its *target*, and breadth-first
//! search discovers targets after the edges that reference them. Pass 1
//! therefore only assigns offsets; pass 2 fills records from the completed
//! offset table. Offsets follow discovery order from the root, so the
//! output depends on the canonical graph alone, never on hash-table
//! iteration order.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use hashbrown::{HashMap, HashSet};
use mark_last::MarkLastIterator;

use super::minimize::Dawg;
use super::packed::{PackedDawg, Record, MAX_RECORDS};
use super::trie::{NodeId, Trie};

/// The layout would not fit the on-disk record format.
///
/// The next-pointer field is 25 bits wide, capping an image at
/// [`MAX_RECORDS`] records. The error is raised before any record is
/// materialized, so no partial output can exist.
#[derive(Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Number of records the layout had reached when the limit was hit.
    pub records: u64,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "packed DAWG needs at least {} records, format limit is {}",
            self.records, MAX_RECORDS
        )
    }
}

impl Error for CapacityError {}

struct Layout {
    offsets: HashMap<NodeId, u32>,
    len: usize,
}

pub(crate) fn flatten(dawg: &Dawg) -> Result<PackedDawg, CapacityError> {
    let trie = dawg.trie();
    let layout = assign_offsets(trie)?;
    Ok(fill_records(trie, &layout))
}

/// Pass 1: breadth-first from the root, handing every internal node the
/// running sum of child counts as its base offset. Leaves get the 0
/// sentinel and are never enqueued.
fn assign_offsets(trie: &Trie) -> Result<Layout, CapacityError> {
    let root = trie.root();
    let mut offsets: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut total = trie.child_count(root) as u64;

    offsets.insert(root, 0);
    queue.push_back(root);

    while let Some(id) = queue.pop_front() {
        for edge in trie.children(id) {
            if offsets.contains_key(&edge.child) {
                continue;
            }
            let count = trie.child_count(edge.child) as u64;
            if count == 0 {
                offsets.insert(edge.child, 0);
            } else {
                if total >= u64::from(MAX_RECORDS) {
                    return Err(CapacityError {
                        records: total + count,
                    });
                }
                offsets.insert(edge.child, total as u32);
                total += count;
                queue.push_back(edge.child);
            }
        }
    }

    if total > u64::from(MAX_RECORDS) {
        return Err(CapacityError { records: total });
    }
    Ok(Layout {
        offsets,
        len: total as usize,
    })
}

/// Pass 2: breadth-first again, visiting each internal node once and
/// writing its sibling list at its assigned base offset, in letter order.
fn fill_records(trie: &Trie, layout: &Layout) -> PackedDawg {
    let root = trie.root();
    let mut records = vec![Record::default(); layout.len];
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(root);
    queue.push_back(root);

    while let Some(id) = queue.pop_front() {
        let base = layout.offsets[&id] as usize;
        for (last, (position, edge)) in trie.children(id).enumerate().mark_last() {
            let next = layout.offsets[&edge.child];
            records[base + position] = Record::pack(edge.slot + 1, edge.terminal, last, next);
            // Leaves have no sibling list to fill.
            if next != 0 && visited.insert(edge.child) {
                queue.push_back(edge.child);
            }
        }
    }

    PackedDawg::from_records(records)
}
