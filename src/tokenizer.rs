//! Tokenizer for Hebrew verse text
//!
//! This module orchestrates the tokenization pipeline for verse documents.
//! The pipeline consists of:
//! 1. Raw tokenization using a logos lexer (word / maqaf / whitespace)
//! 2. A grouping transformation that joins maqaf-linked words into
//!    unbreakable groups and assigns word indices
//!
//! Maqaf Handling
//!
//! The maqaf (U+05BE) binds two words into one visually unbroken unit
//! without being a word itself. The raw lexer keeps the maqaf as its own
//! token rather than discarding it or merging it into a neighbor. The
//! grouping pass then collects every run of word/maqaf/word/... pieces
//! between whitespace boundaries into a single [`MaqafGroup`].
//!
//! Word indices are assigned by a single running counter over the whole
//! document, incremented only for real words. The resulting index space is
//! dense and zero-based; it is the coordinate system that highlight
//! catalogs reference.

pub mod grouping;
pub mod tokens;

pub use grouping::group_tokens;
pub use tokens::{MaqafGroup, Token, TokenKind};

use logos::Logos;
use tokens::RawToken;

/// Tokenize raw verse text into maqaf groups with assigned word indices.
///
/// Empty input yields an empty sequence. A token consisting solely of a
/// maqaf still emits a maqaf token and consumes no word index. The output
/// is fully deterministic for identical input.
pub fn tokenize(source: &str) -> Vec<MaqafGroup> {
    let lexer = RawToken::lexer(source);
    let mut pieces = Vec::new();
    for (result, span) in lexer.spanned() {
        // The raw patterns cover every character, so lexing cannot fail;
        // treat a stray error as word text to keep degrading soft.
        let token = result.unwrap_or(RawToken::Word);
        pieces.push((token, source[span].to_string()));
    }
    group_tokens(pieces)
}
