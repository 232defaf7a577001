//! Built suffix tree
//!
//! Owns the text and the node arena produced by the builder. After
//! construction the tree is immutable: the global end is frozen at the text
//! length and every open leaf edge resolves against it.

use super::builder::SuffixTreeBuilder;
use super::error::Result;
use super::node::{Edge, Node};
use super::text::Text;
use super::types::{NodeId, ROOT, TextPosition, TreeConfig, TreeStats};

/// A suffix tree over one terminated text
#[derive(Debug, Clone)]
pub struct SuffixTree {
    text: Text,
    nodes: Vec<Node>,
}

/// One edge as seen by a depth-first walk of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<'a> {
    pub origin: NodeId,
    pub dest: NodeId,
    /// Number of edges between the root and `origin`
    pub level: usize,
    /// Symbols on this edge
    pub label: &'a [u8],
    /// Symbols spelled from the root to `dest`
    pub path: &'a [u8],
    /// Set when `dest` is a leaf
    pub suffix_index: Option<TextPosition>,
}

impl SuffixTree {
    /// Build a tree over `symbols`, which must already end with the
    /// configured terminator
    pub fn build(symbols: &[u8], config: &TreeConfig) -> Result<Self> {
        let text = Text::new(symbols.to_vec(), config)?;
        Ok(Self::from_text(text))
    }

    /// Build a tree over raw content, appending the terminator
    pub fn from_content(content: &[u8], config: &TreeConfig) -> Result<Self> {
        let text = Text::terminated(content, config)?;
        Ok(Self::from_text(text))
    }

    /// Build a tree over an already validated text, keeping the
    /// configuration it was validated with
    pub fn from_text(text: Text) -> Self {
        let nodes = SuffixTreeBuilder::new(&text).build();
        Self { text, nodes }
    }

    #[inline]
    pub fn text(&self) -> &Text {
        &self.text
    }

    #[inline]
    pub fn config(&self) -> &TreeConfig {
        self.text.config()
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Suffix link of `id`; the root links to itself
    pub fn suffix_link(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).map(Node::suffix_link)
    }

    /// Frozen global end every leaf edge resolves to
    #[inline]
    pub fn leaf_end(&self) -> TextPosition {
        self.text.len()
    }

    /// Symbols on `edge`
    #[inline]
    pub fn edge_label(&self, edge: &Edge) -> &[u8] {
        self.text.slice(edge.start, edge.end(self.leaf_end()))
    }

    /// Number of leaves, one per suffix of the text
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Every edge in depth-first, lexicographic order
    pub fn edges(&self) -> Vec<EdgeView<'_>> {
        let mut views = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        // (origin, level, path length of origin, edge)
        let mut stack: Vec<(NodeId, usize, usize, Edge)> = Vec::new();
        self.push_children(&mut stack, ROOT, 0, 0);

        while let Some((origin, level, depth, edge)) = stack.pop() {
            let end = edge.end(self.leaf_end());
            let path_len = depth + edge.len(self.leaf_end());
            let dest = &self.nodes[edge.dest];

            views.push(EdgeView {
                origin,
                dest: edge.dest,
                level,
                label: self.text.slice(edge.start, end),
                path: self.text.slice(end - path_len, end),
                suffix_index: dest.suffix_index(),
            });

            self.push_children(&mut stack, edge.dest, level + 1, path_len);
        }

        views
    }

    fn push_children(
        &self,
        stack: &mut Vec<(NodeId, usize, usize, Edge)>,
        id: NodeId,
        level: usize,
        depth: usize,
    ) {
        // Reverse so the smallest symbol is popped first
        for (_, edge) in self.nodes[id].sorted_edges().into_iter().rev() {
            stack.push((id, level, depth, edge));
        }
    }

    /// Leaf suffix indices in lexicographic order of their suffixes
    pub fn suffix_array(&self) -> Vec<TextPosition> {
        self.edges()
            .iter()
            .filter_map(|view| view.suffix_index)
            .collect()
    }

    /// Get statistics about this tree
    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.leaf_count();
        let max_depth = self
            .edges()
            .iter()
            .map(|view| view.level + 1)
            .max()
            .unwrap_or(0);

        TreeStats {
            text_len: self.text.len(),
            node_count: self.nodes.len(),
            internal_count: self.nodes.len() - leaf_count - 1,
            leaf_count,
            edge_count: self.nodes.len() - 1,
            max_depth,
        }
    }
}

/// Build a tree over a terminated text
pub fn build_tree(text: &[u8], config: &TreeConfig) -> Result<SuffixTree> {
    SuffixTree::build(text, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::error::InvalidInputError;

    fn banana() -> SuffixTree {
        SuffixTree::build(b"banana$", &TreeConfig::default()).unwrap()
    }

    fn path_of<'a>(edges: &[EdgeView<'a>], id: NodeId) -> &'a [u8] {
        if id == ROOT {
            return &[];
        }
        edges.iter().find(|v| v.dest == id).map(|v| v.path).unwrap()
    }

    #[test]
    fn test_suffix_array_banana() {
        // Same order as sorting the suffixes: "$" sorts before letters
        assert_eq!(banana().suffix_array(), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_leaf_paths_are_suffixes() {
        let tree = banana();
        let text = tree.text().as_bytes();

        for view in tree.edges() {
            if let Some(index) = view.suffix_index {
                assert_eq!(view.path, &text[index..]);
            }
        }
    }

    #[test]
    fn test_edges_lexicographic() {
        let tree = banana();
        let top: Vec<&[u8]> = tree
            .edges()
            .iter()
            .filter(|v| v.level == 0)
            .map(|v| v.label)
            .collect();

        assert_eq!(top, vec![&b"$"[..], &b"a"[..], &b"banana$"[..], &b"na"[..]]);
    }

    #[test]
    fn test_stats_banana() {
        let stats = banana().stats();
        assert_eq!(stats.text_len, 7);
        assert_eq!(stats.leaf_count, 7);
        assert_eq!(stats.internal_count, 3);
        assert_eq!(stats.node_count, 11);
        assert_eq!(stats.edge_count, 10);
        // a -> na -> na$
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_suffix_links_drop_first_symbol() {
        let tree = SuffixTree::from_content(b"mississippi", &TreeConfig::default()).unwrap();
        let edges = tree.edges();

        for view in &edges {
            if view.suffix_index.is_none() {
                let link = tree.suffix_link(view.dest).unwrap();
                assert_eq!(path_of(&edges, link), &view.path[1..]);
            }
        }
        assert_eq!(tree.suffix_link(ROOT), Some(ROOT));
    }

    #[test]
    fn test_build_rejects_unterminated() {
        let err = SuffixTree::build(b"banana", &TreeConfig::default()).unwrap_err();
        assert_eq!(err, InvalidInputError::MissingTerminator);
    }

    #[test]
    fn test_from_text_keeps_text_config() {
        let wide = TreeConfig::new(256, b'$').unwrap();
        let text = Text::terminated(&[b'a', 0xC3, b'b'], &wide).unwrap();
        let tree = SuffixTree::from_text(text);

        assert_eq!(tree.config(), &wide);
        assert_eq!(tree.find_all(&[0xC3]).unwrap(), vec![1]);

        let hash = TreeConfig::new(128, b'#').unwrap();
        let tree = SuffixTree::from_text(Text::terminated(b"a$b", &hash).unwrap());
        assert_eq!(tree.find_all(b"#").unwrap(), vec![3]);
        assert_eq!(tree.find_all(b"$").unwrap(), vec![1]);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = SuffixTree::build(b"$", &TreeConfig::default()).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.suffix_array(), vec![0]);
        assert_eq!(tree.stats().max_depth, 1);
    }
}
