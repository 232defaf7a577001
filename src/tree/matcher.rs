//! Exact pattern matching against a built suffix tree
//!
//! A pattern occurs at offset `o` exactly when it spells a prefix of the
//! suffix starting at `o`, so matching is a single descent from the root
//! followed by collecting every leaf below the point where the pattern ends.
//! Lookup is O(m) for the descent plus O(k) for k occurrences.

use super::error::Result;
use super::suffix_tree::SuffixTree;
use super::types::{NodeId, ROOT, TextPosition};

impl SuffixTree {
    /// Find every offset at which `pattern` occurs, in ascending order
    ///
    /// The empty pattern matches at every offset of the content
    /// (`0..content_len`); it never matches at the terminator.
    pub fn find_all(&self, pattern: &[u8]) -> Result<Vec<TextPosition>> {
        self.config().check_symbols(pattern)?;

        if pattern.is_empty() {
            return Ok((0..self.text().content_len()).collect());
        }

        let Some(node) = self.locate(pattern) else {
            return Ok(Vec::new());
        };

        let mut positions = self.collect_leaves(node);
        positions.sort_unstable();
        Ok(positions)
    }

    /// Get the number of occurrences of `pattern` without sorting them
    pub fn count_matches(&self, pattern: &[u8]) -> Result<usize> {
        self.config().check_symbols(pattern)?;

        if pattern.is_empty() {
            return Ok(self.text().content_len());
        }

        Ok(self
            .locate(pattern)
            .map(|node| self.collect_leaves(node).len())
            .unwrap_or(0))
    }

    /// Check if `pattern` occurs anywhere in the text
    pub fn contains(&self, pattern: &[u8]) -> Result<bool> {
        self.config().check_symbols(pattern)?;

        if pattern.is_empty() {
            return Ok(self.text().content_len() > 0);
        }

        Ok(self.locate(pattern).is_some())
    }

    /// Descend from the root along `pattern`
    ///
    /// Returns the node at or below the point where the pattern ends, or
    /// `None` on the first mismatch or missing edge.
    fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let mut node = ROOT;
        let mut matched = 0;

        loop {
            // At most one edge starts with a given symbol
            let edge = self.node(node)?.edge(pattern[matched])?;
            let label = self.edge_label(edge);
            let rest = &pattern[matched..];
            let k = label.len().min(rest.len());

            if label[..k] != rest[..k] {
                return None;
            }

            matched += k;
            if matched == pattern.len() {
                return Some(edge.dest);
            }

            // Edge fully consumed, keep matching below it
            node = edge.dest;
        }
    }

    /// Suffix indices of every leaf in the subtree rooted at `node`
    fn collect_leaves(&self, node: NodeId) -> Vec<TextPosition> {
        let mut positions = Vec::new();
        let mut stack = vec![node];

        while let Some(id) = stack.pop() {
            let Some(current) = self.node(id) else {
                continue;
            };

            if let Some(index) = current.suffix_index() {
                positions.push(index);
                continue;
            }

            stack.extend(current.edges.values().map(|edge| edge.dest));
        }

        positions
    }
}

/// Find every occurrence of `pattern` in the text `tree` was built over
pub fn find_all(tree: &SuffixTree, pattern: &[u8]) -> Result<Vec<TextPosition>> {
    tree.find_all(pattern)
}
