//! Text buffer
//!
//! An immutable, validated symbol sequence whose last symbol is the
//! terminator and whose other symbols never are.

use super::error::{InvalidInputError, Result};
use super::types::{TextPosition, TreeConfig};

/// Terminated text a suffix tree is built over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    symbols: Box<[u8]>,
    config: TreeConfig,
}

impl Text {
    /// Validate a sequence that already carries its terminator
    pub fn new(symbols: Vec<u8>, config: &TreeConfig) -> Result<Self> {
        config.validate()?;
        config.check_symbols(&symbols)?;

        match memchr::memchr(config.terminator, &symbols) {
            None => return Err(InvalidInputError::MissingTerminator),
            Some(position) if position + 1 != symbols.len() => {
                return Err(InvalidInputError::MisplacedTerminator { position });
            }
            Some(_) => {}
        }

        Ok(Self {
            symbols: symbols.into_boxed_slice(),
            config: *config,
        })
    }

    /// Append the terminator to raw content and validate the result
    pub fn terminated(content: &[u8], config: &TreeConfig) -> Result<Self> {
        let mut symbols = Vec::with_capacity(content.len() + 1);
        symbols.extend_from_slice(content);
        symbols.push(config.terminator);
        Self::new(symbols, config)
    }

    /// Alphabet and terminator this text was validated against
    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// All symbols, terminator included
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbols before the terminator
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.symbols[..self.content_len()]
    }

    /// Length including the terminator (always at least 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true: a valid text holds at least the terminator
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Length of the content, terminator excluded
    #[inline]
    pub fn content_len(&self) -> usize {
        self.symbols.len() - 1
    }

    #[inline]
    pub(crate) fn at(&self, pos: TextPosition) -> u8 {
        self.symbols[pos]
    }

    #[inline]
    pub(crate) fn slice(&self, start: TextPosition, end: TextPosition) -> &[u8] {
        &self.symbols[start..end]
    }
}
