use crate::parser::{ParseError, QueryComparers};

/// Character cursor over one query option value (`$filter`, `$orderby`).
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub text: String,

    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            text: query.to_string(),
            comparers: QueryComparers::new(),
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.position < self.length {
            return self.text_v[self.position];
        }

        '\0'
    }

    pub fn next(&mut self) {
        if self.position < self.length {
            self.position += 1;
        }
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Everything from the cursor to the end of the input.
    pub fn rest(&self) -> String {
        self.text_from_range(self.position, self.length)
    }

    /// Consume a run of ASCII word characters (`[A-Za-z0-9_]`), at least one.
    pub fn read_word(&mut self) -> Result<String, ParseError> {
        let pivot = self.position;
        while !self.eof() && QueryComparers::is_word_char(self.current()) {
            self.next();
        }

        if self.position == pivot {
            return ParseError::new("Expected a field name", pivot, self).err();
        }

        Ok(self.text_from_pivot(pivot))
    }

    /// Consume a run of anything but whitespace, at least one character.
    pub fn read_token(&mut self) -> Result<String, ParseError> {
        let pivot = self.position;
        while !self.eof() && !self.current().is_whitespace() {
            self.next();
        }

        if self.position == pivot {
            return ParseError::new("Expected a token", pivot, self).err();
        }

        Ok(self.text_from_pivot(pivot))
    }

    /// Require at least one whitespace character and skip the whole run.
    pub fn expect_whitespace(&mut self) -> Result<(), ParseError> {
        if self.eof() || !self.current().is_whitespace() {
            return ParseError::new("Expected whitespace", self.position, self).err();
        }
        self.next_non_whitespace();
        Ok(())
    }
}
