//! Errors for malformed texts, patterns and alphabets

use thiserror::Error;

/// Malformed input rejected by construction or by a query.
///
/// Nothing else can fail: once the input is well formed, building and
/// matching are deterministic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("text does not end with the terminator symbol")]
    MissingTerminator,

    #[error("terminator symbol found at position {position} before the end of the text")]
    MisplacedTerminator { position: usize },

    #[error("symbol {symbol:#04x} at position {position} is outside the alphabet of size {alphabet_size}")]
    SymbolOutOfAlphabet {
        symbol: u8,
        position: usize,
        alphabet_size: usize,
    },

    #[error("invalid alphabet: size {alphabet_size} with terminator {terminator:#04x}")]
    InvalidAlphabet { alphabet_size: usize, terminator: u8 },
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
