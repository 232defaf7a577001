//! Structural and search properties of built suffix trees.
//!
//! Randomized texts are cross-checked against naive scanning. Seeds are fixed
//! so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use stx::tree::{EdgeView, InvalidInputError, ROOT, SuffixTree, TreeConfig, build_tree, find_all};

fn naive_find(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn random_content(rng: &mut StdRng, alphabet: &[u8], max_len: usize) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

fn tree(content: &[u8]) -> SuffixTree {
    SuffixTree::from_content(content, &TreeConfig::default()).unwrap()
}

/// Root-to-leaf labels and leaf offsets, independent of node numbering
fn shape(tree: &SuffixTree) -> Vec<(usize, Vec<u8>, Vec<u8>, Option<usize>)> {
    tree.edges()
        .iter()
        .map(|v| (v.level, v.label.to_vec(), v.path.to_vec(), v.suffix_index))
        .collect()
}

#[test]
fn leaves_cover_every_suffix_exactly_once() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let content = random_content(&mut rng, b"abc", 60);
        let tree = tree(&content);
        let n = tree.text().len();

        let mut indices = tree.suffix_array();
        assert_eq!(indices.len(), n);
        assert_eq!(tree.leaf_count(), n);

        indices.sort_unstable();
        assert_eq!(indices, (0..n).collect::<Vec<_>>(), "text {:?}", content);
    }
}

#[test]
fn leaf_paths_spell_their_suffixes() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let content = random_content(&mut rng, b"acgt", 80);
        let tree = tree(&content);
        let text = tree.text().as_bytes();

        for view in tree.edges() {
            assert!(!view.label.is_empty());
            if let Some(index) = view.suffix_index {
                assert_eq!(view.path, &text[index..], "text {:?}", content);
            }
        }
    }
}

#[test]
fn suffix_array_matches_sorted_suffixes() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let content = random_content(&mut rng, b"ab", 40);
        let tree = tree(&content);
        let text = tree.text().as_bytes();

        let mut expected: Vec<usize> = (0..text.len()).collect();
        expected.sort_by(|&a, &b| text[a..].cmp(&text[b..]));

        assert_eq!(tree.suffix_array(), expected, "text {:?}", content);
    }
}

#[test]
fn internal_nodes_branch_and_link_correctly() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..100 {
        let content = random_content(&mut rng, b"ab", 50);
        let tree = tree(&content);
        let edges: Vec<EdgeView<'_>> = tree.edges();

        for view in &edges {
            if view.suffix_index.is_some() {
                continue;
            }

            let node = tree.node(view.dest).unwrap();
            assert!(node.edge_count() >= 2, "unary internal node in {:?}", content);

            let link = tree.suffix_link(view.dest).unwrap();
            let link_path: &[u8] = if link == ROOT {
                &[]
            } else {
                edges.iter().find(|e| e.dest == link).unwrap().path
            };
            assert_eq!(link_path, &view.path[1..], "bad suffix link in {:?}", content);
        }
    }
}

#[test]
fn find_all_matches_naive_scan() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..150 {
        let content = random_content(&mut rng, b"abcd", 100);
        let tree = tree(&content);

        for _ in 0..20 {
            // Half the patterns are cut from the text so most have hits
            let pattern = if !content.is_empty() && rng.random_bool(0.5) {
                let start = rng.random_range(0..content.len());
                let len = rng.random_range(1..=(content.len() - start).min(6));
                content[start..start + len].to_vec()
            } else {
                let mut p = random_content(&mut rng, b"abcd", 5);
                if p.is_empty() {
                    p.push(b'a');
                }
                p
            };

            assert_eq!(
                tree.find_all(&pattern).unwrap(),
                naive_find(&content, &pattern),
                "pattern {:?} in {:?}",
                pattern,
                content
            );
        }
    }
}

#[test]
fn rebuilding_gives_the_same_tree() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..50 {
        let content = random_content(&mut rng, b"xyz", 60);
        assert_eq!(shape(&tree(&content)), shape(&tree(&content)));
    }
}

#[test]
fn banana_scenario() {
    let tree = build_tree(b"banana$", &TreeConfig::default()).unwrap();

    let offsets: BTreeSet<usize> = tree.suffix_array().into_iter().collect();
    assert_eq!(offsets, (0..7).collect::<BTreeSet<_>>());

    assert_eq!(find_all(&tree, b"ana").unwrap(), vec![1, 3]);
    assert_eq!(find_all(&tree, b"na").unwrap(), vec![2, 4]);
    assert!(find_all(&tree, b"xyz").unwrap().is_empty());
}

#[test]
fn repeated_symbol_scenario() {
    let tree = build_tree(b"aaaa$", &TreeConfig::default()).unwrap();
    assert_eq!(find_all(&tree, b"aa").unwrap(), vec![0, 1, 2]);
    assert_eq!(find_all(&tree, b"a").unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn whole_text_and_empty_pattern() {
    let tree = build_tree(b"mississippi$", &TreeConfig::default()).unwrap();
    assert_eq!(find_all(&tree, b"mississippi$").unwrap(), vec![0]);
    assert_eq!(find_all(&tree, b"").unwrap(), (0..11).collect::<Vec<_>>());
}

#[test]
fn only_terminator_is_a_single_leaf() {
    let tree = build_tree(b"$", &TreeConfig::default()).unwrap();
    assert_eq!(tree.leaf_count(), 1);
    assert!(find_all(&tree, b"a").unwrap().is_empty());
    assert!(find_all(&tree, b"").unwrap().is_empty());
    assert_eq!(find_all(&tree, b"$").unwrap(), vec![0]);
}

#[test]
fn pattern_longer_than_text() {
    let tree = build_tree(b"ab$", &TreeConfig::default()).unwrap();
    assert!(find_all(&tree, b"abab").unwrap().is_empty());
}

#[test]
fn malformed_input_is_rejected() {
    let config = TreeConfig::default();

    assert_eq!(
        build_tree(b"abc", &config).unwrap_err(),
        InvalidInputError::MissingTerminator
    );
    assert_eq!(
        build_tree(b"a$c$", &config).unwrap_err(),
        InvalidInputError::MisplacedTerminator { position: 1 }
    );
    assert!(matches!(
        build_tree(&[b'a', 0x80, b'$'], &config).unwrap_err(),
        InvalidInputError::SymbolOutOfAlphabet { symbol: 0x80, position: 1, .. }
    ));

    let tree = build_tree(b"abc$", &config).unwrap();
    assert!(matches!(
        find_all(&tree, &[0xFF]).unwrap_err(),
        InvalidInputError::SymbolOutOfAlphabet { .. }
    ));
}

#[test]
fn custom_alphabet_and_terminator() {
    // DNA over codes 1..=4 with 0 as terminator
    let config = TreeConfig::new(5, 0).unwrap();
    let text: [u8; 9] = [1, 2, 3, 1, 2, 4, 1, 2, 0];
    let tree = build_tree(&text, &config).unwrap();

    assert_eq!(find_all(&tree, &[1, 2]).unwrap(), vec![0, 3, 6]);
    assert_eq!(find_all(&tree, &[2, 4]).unwrap(), vec![4]);
    assert!(find_all(&tree, &[5]).is_err());
}

#[test]
fn long_text_does_not_recurse() {
    // A deep chain of nested internal nodes
    let content = vec![b'a'; 100_000];
    let tree = tree(&content);

    assert_eq!(tree.leaf_count(), 100_001);
    assert_eq!(tree.count_matches(b"aaaa").unwrap(), 100_000 - 3);
    // root -> a -> aa -> ... -> a^(n-1) -> a$
    assert_eq!(tree.stats().max_depth, 100_000);
}
