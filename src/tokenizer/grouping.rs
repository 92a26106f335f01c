//! Grouping transformation for raw tokens
//!
//! Takes the raw token stream (word / maqaf / whitespace pieces, in source
//! order) and produces maqaf groups with word indices assigned. Whitespace
//! pieces act purely as group boundaries; they are dropped from the output
//! and never touch the word counter.

use super::tokens::{MaqafGroup, RawToken, Token};

/// Group raw pieces into maqaf groups, assigning word indices from a single
/// running counter in scan order.
pub fn group_tokens(pieces: Vec<(RawToken, String)>) -> Vec<MaqafGroup> {
    let mut groups = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut next_index = 0usize;

    for (raw, text) in pieces {
        match raw {
            RawToken::Whitespace => {
                if !current.is_empty() {
                    groups.push(MaqafGroup::new(std::mem::take(&mut current)));
                }
            }
            RawToken::Maqaf => {
                current.push(Token::maqaf());
            }
            RawToken::Word => {
                current.push(Token::word(text, next_index));
                next_index += 1;
            }
        }
    }

    if !current.is_empty() {
        groups.push(MaqafGroup::new(current));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> (RawToken, String) {
        (RawToken::Word, text.to_string())
    }

    fn maqaf() -> (RawToken, String) {
        (RawToken::Maqaf, "־".to_string())
    }

    fn ws() -> (RawToken, String) {
        (RawToken::Whitespace, " ".to_string())
    }

    #[test]
    fn test_whitespace_bounds_groups() {
        let groups = group_tokens(vec![word("א"), ws(), word("ב")]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tokens()[0].word_index(), Some(0));
        assert_eq!(groups[1].tokens()[0].word_index(), Some(1));
    }

    #[test]
    fn test_maqaf_keeps_group_open() {
        let groups = group_tokens(vec![word("א"), maqaf(), word("ב"), ws(), word("ג")]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tokens().len(), 3);
        assert_eq!(groups[0].word_count(), 2);
    }

    #[test]
    fn test_leading_and_trailing_whitespace_ignored() {
        let groups = group_tokens(vec![ws(), word("א"), ws()]);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_maqaf_only_group_has_no_words() {
        let groups = group_tokens(vec![maqaf()]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].word_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_tokens(Vec::new()).is_empty());
    }
}
