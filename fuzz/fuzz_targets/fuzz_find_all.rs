#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stx::tree::{SuffixTree, TreeConfig};

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Fold into a small alphabet so patterns actually hit
    let fold = |b: &u8| b"abc"[(*b % 3) as usize];
    let text: Vec<u8> = input.text.iter().map(fold).collect();
    let pattern: Vec<u8> = input.pattern.iter().take(8).map(fold).collect();
    if pattern.is_empty() {
        return;
    }

    let tree = SuffixTree::from_content(&text, &TreeConfig::default()).unwrap();
    let expected: Vec<usize> = if pattern.len() > text.len() {
        Vec::new()
    } else {
        text.windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == &pattern[..])
            .map(|(i, _)| i)
            .collect()
    };

    assert_eq!(tree.find_all(&pattern).unwrap(), expected);
});
