use crate::parser::QueryParser;

/// Matches a fixed keyword at the parser cursor.
///
/// OData keywords are case-sensitive, so the comparison is exact. Postfix
/// rules decide what may follow the keyword for it to count as a match.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    whitespace_postfix: bool,
    eof: bool,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        Self {
            length: word.len(),
            word,
            whitespace_postfix: false,
            eof: false,
        }
    }

    pub fn reach_eof(&self, parser: &QueryParser) -> bool {
        parser.position + self.length >= parser.length
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length ||
                self.word[position] != parser.text_v[parser.position + position] {
                return false;
            }
            position += 1;
        }

        if self.reach_eof(parser) {
             return self.eof;
        }

        if !self.whitespace_postfix {
            return true;
        }

        Self::is_block_delimiter(parser.text_v[parser.position + position])
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
}
