//! Types for suffix tree construction
//!
//! This module defines the configuration and the small shared types used by
//! the construction engine, the matcher and the inspection helpers.

use super::error::{InvalidInputError, Result};
use serde::{Deserialize, Serialize};

/// Offset into the terminated text buffer
pub type TextPosition = usize;

/// Index of a node in the tree's arena
pub type NodeId = usize;

/// The root is always the first node allocated
pub const ROOT: NodeId = 0;

/// Default number of symbols: 7-bit ASCII, terminator included
pub const DEFAULT_ALPHABET_SIZE: usize = 128;

/// Default terminator symbol
pub const DEFAULT_TERMINATOR: u8 = b'$';

/// Largest alphabet a byte-oriented tree can address
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Configuration for suffix tree building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Symbols are the byte values `0..alphabet_size` (default: 128)
    pub alphabet_size: usize,
    /// Symbol reserved for the end of the text (default: `$`)
    pub terminator: u8,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            terminator: DEFAULT_TERMINATOR,
        }
    }
}

impl TreeConfig {
    /// Create a configuration, checking that it describes a usable alphabet
    pub fn new(alphabet_size: usize, terminator: u8) -> Result<Self> {
        let config = Self {
            alphabet_size,
            terminator,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the alphabet bounds and that the terminator belongs to it
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size == 0 || self.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(InvalidInputError::InvalidAlphabet {
                alphabet_size: self.alphabet_size,
                terminator: self.terminator,
            });
        }
        if !self.contains(self.terminator) {
            return Err(InvalidInputError::InvalidAlphabet {
                alphabet_size: self.alphabet_size,
                terminator: self.terminator,
            });
        }
        Ok(())
    }

    /// Whether `symbol` is part of the configured alphabet
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        (symbol as usize) < self.alphabet_size
    }

    /// Reject the first symbol of `symbols` that falls outside the alphabet
    pub fn check_symbols(&self, symbols: &[u8]) -> Result<()> {
        match symbols.iter().position(|&s| !self.contains(s)) {
            Some(position) => Err(InvalidInputError::SymbolOutOfAlphabet {
                symbol: symbols[position],
                position,
                alphabet_size: self.alphabet_size,
            }),
            None => Ok(()),
        }
    }
}

/// Statistics about a built suffix tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Length of the text, terminator included
    pub text_len: usize,
    /// All nodes, root included
    pub node_count: usize,
    /// Branching nodes other than the root
    pub internal_count: usize,
    /// One per suffix
    pub leaf_count: usize,
    /// Every node but the root has exactly one incoming edge
    pub edge_count: usize,
    /// Longest root-to-leaf path measured in edges
    pub max_depth: usize,
}
