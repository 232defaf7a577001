#![no_main]

use libfuzzer_sys::fuzz_target;
use stx::tree::{SuffixTree, TreeConfig};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: most inputs are rejected, none may panic
    let config = TreeConfig::default();
    let _ = SuffixTree::build(data, &config);

    let Ok(tree) = SuffixTree::from_content(data, &config) else {
        return;
    };

    let n = tree.text().len();
    let mut indices = tree.suffix_array();
    assert_eq!(indices.len(), n);
    indices.sort_unstable();
    assert!(indices.iter().copied().eq(0..n));
});
