//! End-to-end round trips through the packed binary format, including the
//! file system.

use std::collections::BTreeSet;
use std::fs;

use dawgpack::dawg::{compile, Builder, PackedDawg};
use tempfile::tempdir;

/// A deterministic word set with heavy prefix and suffix sharing,
/// `count` unique words or slightly fewer.
fn synthetic_words(count: usize) -> Vec<String> {
    const ONSETS: [&str; 12] = [
        "b", "br", "c", "ch", "d", "f", "gr", "k", "pl", "s", "st", "tr",
    ];
    const VOWELS: [&str; 5] = ["a", "e", "i", "o", "u"];
    const CODAS: [&str; 8] = ["ck", "ll", "mp", "nd", "ng", "nt", "st", "t"];
    const ENDINGS: [&str; 6] = ["", "ed", "er", "ing", "ly", "s"];

    let mut set = BTreeSet::new();
    'outer: for onset in ONSETS {
        for vowel in VOWELS {
            for coda in CODAS {
                for ending in ENDINGS {
                    set.insert(format!("{onset}{vowel}{coda}{ending}"));
                    if set.len() >= count {
                        break 'outer;
                    }
                }
            }
        }
    }
    set.into_iter().collect()
}

#[test]
fn file_round_trip_preserves_the_word_set() {
    let words = ["an", "ant", "bat", "cat", "dog"];
    let packed = compile(words).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("dawg.bin");
    packed.write_to_file(&path).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(written.len(), packed.byte_len());

    let image = PackedDawg::read_from_file(&path).unwrap();
    assert_eq!(image.records(), packed.records());
    let walked: Vec<String> = image.words().collect();
    assert_eq!(walked, words);
}

#[test]
fn empty_input_writes_a_zero_byte_file() {
    let packed = compile::<_, &str>([]).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    packed.write_to_file(&path).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    let image = PackedDawg::read_from_file(&path).unwrap();
    assert_eq!(image.count_words(), 0);
}

#[test]
fn rejected_only_word_list_writes_a_zero_byte_file() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("digits.txt");
    fs::write(&list, "123\n456\n789\n").unwrap();

    let builder = Builder::from_file(&list).unwrap();
    assert_eq!(builder.words_loaded(), 0);
    assert_eq!(builder.words_skipped(), 3);

    let packed = builder.finish().flatten().unwrap();
    assert!(packed.is_empty());
}

#[test]
fn word_list_file_goes_through_normalization() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, "Cat\nCAT\ncat\nc-at\n123\n\n").unwrap();

    let builder = Builder::from_file(&list).unwrap();
    assert_eq!(builder.words_loaded(), 3);
    assert_eq!(builder.words_skipped(), 2);

    let packed = builder.finish().flatten().unwrap();
    let walked: Vec<String> = packed.words().collect();
    assert_eq!(walked, ["cat"]);
}

#[test]
fn truncated_file_is_rejected_on_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ragged.bin");
    fs::write(&path, [0x61, 0x00, 0x00, 0x00, 0x61]).unwrap();

    let err = PackedDawg::read_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("not a multiple"));
}

#[test]
fn large_generated_set_survives_the_whole_pipeline() {
    let words = synthetic_words(2_500);
    assert!(words.len() > 2_000, "generator should reach the target size");

    let packed = compile(&words).unwrap();
    assert_eq!(packed.count_words(), words.len());

    let dir = tempdir().unwrap();
    let path = dir.path().join("big.bin");
    packed.write_to_file(&path).unwrap();
    let image = PackedDawg::read_from_file(&path).unwrap();

    let walked: Vec<String> = image.words().collect();
    assert_eq!(walked, words, "walker yields the sorted unique input");

    for word in &words {
        assert!(image.contains(word));
    }
    assert!(!image.contains("zzzz"));
}

#[test]
fn two_builds_of_the_same_file_are_byte_identical() {
    let words = synthetic_words(500);
    let dir = tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, words.join("\n")).unwrap();

    let first = Builder::from_file(&list).unwrap().finish().flatten().unwrap();
    let second = Builder::from_file(&list).unwrap().finish().flatten().unwrap();

    let mut a = Vec::new();
    let mut b = Vec::new();
    first.write_to(&mut a).unwrap();
    second.write_to(&mut b).unwrap();
    assert_eq!(a, b);
}
