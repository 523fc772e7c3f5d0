use crate::parser::WordComparer;

#[derive(Debug)]
pub struct QueryComparers {
    pub eq: WordComparer,
    pub desc: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            eq: WordComparer::new("eq").with_whitespace_postfix(),
            desc: WordComparer::new("desc").with_whitespace_postfix().with_eof(),
        }
    }

    /// `\w` in the ASCII sense.
    pub fn is_word_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }
}
