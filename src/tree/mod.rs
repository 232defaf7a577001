//! Suffix tree module
//!
//! This module provides online, linear-time suffix tree construction
//! (Ukkonen's algorithm) and O(m + k) exact substring search.
//!
//! ## Architecture
//!
//! - `types`: Configuration and shared type definitions
//! - `error`: The input validation error taxonomy
//! - `text`: Validated, terminated text buffer
//! - `node`: Arena nodes and range-labelled edges
//! - `builder`: The construction engine (phases, active point, suffix links)
//! - `suffix_tree`: The built tree and its inspection helpers
//! - `matcher`: Pattern search over a built tree
//!
//! ## Quick Start
//!
//! ```
//! use stx::tree::{build_tree, find_all, TreeConfig};
//!
//! let tree = build_tree(b"banana$", &TreeConfig::default()).unwrap();
//! assert_eq!(find_all(&tree, b"ana").unwrap(), vec![1, 3]);
//! ```

pub mod builder;
pub mod error;
pub mod matcher;
pub mod node;
pub mod suffix_tree;
pub mod text;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use error::{InvalidInputError, Result};
pub use matcher::find_all;
pub use node::{Edge, EdgeEnd, Node};
pub use suffix_tree::{EdgeView, SuffixTree, build_tree};
pub use text::Text;
pub use types::{NodeId, ROOT, TextPosition, TreeConfig, TreeStats};
