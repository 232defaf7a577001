//! Suffix tree builder
//!
//! Builds a suffix tree online in linear time (Ukkonen's algorithm):
//! 1. One phase per text position; each phase first extends every leaf by
//!    bumping the shared global end (rule 1)
//! 2. Pending suffixes are then inserted explicitly (rule 2) until one is
//!    found to be already present (rule 3), which ends the phase
//! 3. A final pass assigns each leaf the start of the suffix it spells
//!
//! The active point survives across phases and is relocated with suffix
//! links, so the text is never re-scanned.

use super::node::{Edge, EdgeEnd, Node};
use super::text::Text;
use super::types::{NodeId, ROOT, TextPosition};
use tracing::debug;

/// Where the next symbol is conceptually inserted: `length` symbols down the
/// edge leaving `node` whose label starts with the symbol at `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoint {
    node: NodeId,
    edge: TextPosition,
    length: usize,
}

/// Construction engine for a single text
pub struct SuffixTreeBuilder<'t> {
    text: &'t Text,
    nodes: Vec<Node>,
    active: ActivePoint,
    /// Suffixes still to be inserted explicitly
    remainder: usize,
    /// Exclusive end shared by every open leaf edge
    global_end: TextPosition,
    /// Internal node created by the previous extension of this phase,
    /// waiting for its suffix link
    pending: Option<NodeId>,
}

impl<'t> SuffixTreeBuilder<'t> {
    /// Create a builder over a validated text
    pub fn new(text: &'t Text) -> Self {
        // A suffix tree over n symbols has at most 2n nodes
        let mut nodes = Vec::with_capacity(2 * text.len() + 1);
        nodes.push(Node::root());

        Self {
            text,
            nodes,
            active: ActivePoint {
                node: ROOT,
                edge: 0,
                length: 0,
            },
            remainder: 0,
            global_end: 0,
            pending: None,
        }
    }

    /// Run every phase and assign suffix indices
    ///
    /// Returns the node arena; the root is at [`ROOT`].
    pub fn build(mut self) -> Vec<Node> {
        let n = self.text.len();

        // global_end counts the phases already run
        for i in self.global_end..n {
            self.extend(i);
        }

        // The terminator is unique, so its phase inserts every pending suffix
        debug_assert_eq!(self.remainder, 0);

        assign_suffix_indices(&mut self.nodes, n, self.global_end);

        debug!(
            text_len = n,
            nodes = self.nodes.len(),
            "built suffix tree"
        );

        self.nodes
    }

    /// Phase `i`: make every suffix of `text[..=i]` explicit or implicit
    fn extend(&mut self, i: TextPosition) {
        let symbol = self.text.at(i);

        // Rule 1 for every open leaf at once
        self.global_end += 1;
        self.remainder += 1;
        self.pending = None;

        while self.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = i;
            }

            let key = self.text.at(self.active.edge);
            let Some(edge) = self.nodes[self.active.node].edge(key).copied() else {
                // Rule 2: hang a new leaf off the active node
                debug_assert_eq!(self.active.length, 0);
                let leaf = self.push(Node::leaf());
                self.nodes[self.active.node]
                    .edges
                    .insert(symbol, Edge::leaf(i, leaf));
                self.remainder -= 1;

                if let Some(pending) = self.pending.take() {
                    self.nodes[pending].suffix_link = self.active.node;
                }

                self.relocate();
                continue;
            };

            // Skip/count: hop over whole edges without comparing symbols
            let edge_len = edge.len(self.global_end);
            if self.active.length >= edge_len {
                self.active.node = edge.dest;
                self.active.edge += edge_len;
                self.active.length -= edge_len;
                continue;
            }

            if self.text.at(edge.start + self.active.length) == symbol {
                // Rule 3: already present, the rest of the phase is implicit
                self.active.length += 1;
                if self.active.node != ROOT {
                    if let Some(pending) = self.pending.take() {
                        self.nodes[pending].suffix_link = self.active.node;
                    }
                }
                break;
            }

            // Rule 2: split the edge and hang a new leaf off the split point
            let split = self.split(key, edge, i);
            self.remainder -= 1;

            if let Some(pending) = self.pending {
                self.nodes[pending].suffix_link = split;
            }
            self.pending = Some(split);

            self.relocate();
        }
    }

    /// Split `edge` (keyed by `key` at the active node) `active.length`
    /// symbols in, returning the new internal node
    fn split(&mut self, key: u8, edge: Edge, i: TextPosition) -> NodeId {
        let split_at = edge.start + self.active.length;
        let continuation_key = self.text.at(split_at);
        let leaf_key = self.text.at(i);

        let split = self.push(Node::internal());
        let leaf = self.push(Node::leaf());

        let node = &mut self.nodes[split];
        node.edges.insert(
            continuation_key,
            Edge {
                start: split_at,
                end: edge.end,
                dest: edge.dest,
            },
        );
        node.edges.insert(leaf_key, Edge::leaf(i, leaf));

        self.nodes[self.active.node].edges.insert(
            key,
            Edge {
                start: edge.start,
                end: EdgeEnd::Fixed(split_at),
                dest: split,
            },
        );

        split
    }

    /// Move the active point to the next shorter pending suffix
    fn relocate(&mut self) {
        if self.active.node == ROOT {
            if self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge += 1;
            }
        } else {
            self.active.node = self.nodes[self.active.node].suffix_link;
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Give each leaf the start of its suffix: text length minus path length
///
/// Walks the tree with an explicit stack; depth is bounded by the text
/// length, which would overflow the call stack on long texts.
fn assign_suffix_indices(nodes: &mut [Node], text_len: usize, global_end: TextPosition) {
    let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

    while let Some((id, depth)) = stack.pop() {
        if nodes[id].leaf {
            nodes[id].suffix_index = Some(text_len - depth);
            continue;
        }

        for edge in nodes[id].edges.values() {
            stack.push((edge.dest, depth + edge.len(global_end)));
        }
    }
}
