//! # STX - Suffix Tree Search
//!
//! STX builds a suffix tree over each input text in linear time with
//! Ukkonen's online algorithm, then answers exact substring queries by
//! walking the tree once per pattern.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Suffix tree construction and exact pattern matching
//! - [`driver`] - Multi-text, multi-pattern runs (one tree per text)
//! - [`output`] - Result formatting (plain, colored, JSON)
//! - [`utils`] - Logging and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use stx::tree::{SuffixTree, TreeConfig};
//!
//! // The terminator ('$' by default) is appended for you
//! let tree = SuffixTree::from_content(b"banana", &TreeConfig::default()).unwrap();
//!
//! assert_eq!(tree.find_all(b"ana").unwrap(), vec![1, 3]);
//! assert_eq!(tree.find_all(b"na").unwrap(), vec![2, 4]);
//! assert!(tree.find_all(b"xyz").unwrap().is_empty());
//! ```
//!
//! ## Performance
//!
//! Construction is O(n) for a text of length n: every open leaf edge shares
//! one end marker, suffix links relocate the active point without
//! re-scanning, and skip/count hops over whole edges. A query for a pattern
//! of length m with k occurrences costs O(m + k), plus the sort of the
//! returned offsets.

pub mod driver;
pub mod output;
pub mod tree;
pub mod utils;
