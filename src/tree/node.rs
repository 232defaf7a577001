//! Nodes and edges of the suffix tree
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by
//! [`NodeId`]. Edges are owned by their origin node and store a half-open
//! range into the text instead of a copy of their label.

use super::types::{NodeId, ROOT, TextPosition};
use rustc_hash::FxHashMap;

/// End of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Frozen when the edge was split (exclusive)
    Fixed(TextPosition),
    /// Leaf edge: ends wherever the tree's global end currently is
    Open,
}

/// Transition from one node to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// First text position of the label
    pub start: TextPosition,
    pub end: EdgeEnd,
    /// Destination node, owned exclusively through this edge
    pub dest: NodeId,
}

impl Edge {
    pub(crate) fn leaf(start: TextPosition, dest: NodeId) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
            dest,
        }
    }

    /// Exclusive end, resolving open edges against `global_end`
    #[inline]
    pub fn end(&self, global_end: TextPosition) -> TextPosition {
        match self.end {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open => global_end,
        }
    }

    /// Number of symbols on the edge
    #[inline]
    pub fn len(&self, global_end: TextPosition) -> usize {
        self.end(global_end) - self.start
    }

    /// Whether the edge leads to a leaf
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end == EdgeEnd::Open
    }
}

/// A branching point or leaf of the tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Outgoing edges keyed by the first symbol of their label
    pub(crate) edges: FxHashMap<u8, Edge>,
    /// Node spelling this node's path minus its first symbol.
    /// Not an ownership edge; the root links to itself.
    pub(crate) suffix_link: NodeId,
    pub(crate) leaf: bool,
    /// Start of the suffix spelled by a leaf, assigned after construction
    pub(crate) suffix_index: Option<TextPosition>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self::internal()
    }

    /// Fresh internal node; its suffix link points at the root until the
    /// next extension resolves it
    pub(crate) fn internal() -> Self {
        Self {
            edges: FxHashMap::default(),
            suffix_link: ROOT,
            leaf: false,
            suffix_index: None,
        }
    }

    pub(crate) fn leaf() -> Self {
        Self {
            edges: FxHashMap::default(),
            suffix_link: ROOT,
            leaf: true,
            suffix_index: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    #[inline]
    pub fn suffix_link(&self) -> NodeId {
        self.suffix_link
    }

    #[inline]
    pub fn suffix_index(&self) -> Option<TextPosition> {
        self.suffix_index
    }

    /// Outgoing edge whose label starts with `symbol`
    #[inline]
    pub fn edge(&self, symbol: u8) -> Option<&Edge> {
        self.edges.get(&symbol)
    }

    /// Outgoing edges ordered by first symbol
    pub fn sorted_edges(&self) -> Vec<(u8, Edge)> {
        let mut edges: Vec<(u8, Edge)> = self.edges.iter().map(|(&s, &e)| (s, e)).collect();
        edges.sort_unstable_by_key(|&(symbol, _)| symbol);
        edges
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
