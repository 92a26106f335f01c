//! Token definitions for verse text
//!
//! This module defines the raw tokens produced by the logos lexer and the
//! processed tokens consumed by the rest of the pipeline. Raw tokens are a
//! lexing detail; processed tokens carry the word index that highlight
//! catalogs reference.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The maqaf character (U+05BE), the hyphen-like joiner.
pub const MAQAF: char = '\u{05BE}';

/// Raw tokens emitted by the logos lexer.
///
/// The three patterns partition the input: every character is whitespace,
/// a maqaf, or part of a word run.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    #[token("\u{05BE}")]
    Maqaf,

    #[regex(r"\s+")]
    Whitespace,

    // Catch-all word run (anything that is neither whitespace nor maqaf)
    #[regex(r"[^\s\u{05BE}]+")]
    Word,
}

/// Classification of a processed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A real word carrying its position in the document-wide index space.
    Word { index: usize },
    /// A maqaf joiner; never indexable, never highlightable.
    Maqaf,
}

/// A processed token: a word with its stable index, or a maqaf.
///
/// The invariant "maqaf tokens have no word index" holds by construction:
/// [`Token::word_index`] is `None` exactly when [`Token::is_maqaf`] is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    pub fn word(text: impl Into<String>, index: usize) -> Self {
        Token {
            text: text.into(),
            kind: TokenKind::Word { index },
        }
    }

    pub fn maqaf() -> Self {
        Token {
            text: MAQAF.to_string(),
            kind: TokenKind::Maqaf,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's position in the document-wide word index space, or
    /// `None` for maqaf tokens.
    pub fn word_index(&self) -> Option<usize> {
        match self.kind {
            TokenKind::Word { index } => Some(index),
            TokenKind::Maqaf => None,
        }
    }

    pub fn is_maqaf(&self) -> bool {
        matches!(self.kind, TokenKind::Maqaf)
    }

    /// Whether this token is a verse number: one or two ASCII digits.
    ///
    /// Verse numbers keep their word index but are rendered as metadata,
    /// never highlighted and never interactive.
    pub fn is_verse_number(&self) -> bool {
        static VERSE_NUM: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[0-9]{1,2}$").expect("verse number regex is valid"));
        !self.is_maqaf() && VERSE_NUM.is_match(&self.text)
    }
}

/// An ordered, non-empty run of tokens that must render with no line break
/// between them: one or more words joined by maqaf tokens. A group of
/// length one is a standalone word. Immutable after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaqafGroup {
    tokens: Vec<Token>,
}

impl MaqafGroup {
    /// Build a group from tokens. Panics on an empty token list; the
    /// grouping pass never produces one.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "MaqafGroup must not be empty");
        MaqafGroup { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of real (non-maqaf) words in this group.
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_maqaf()).count()
    }

    /// Concatenated display text of the group, maqaf included.
    pub fn display_text(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }
}
