use crate::parser::QueryParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

impl OrderBy {
    /// Parse `<field> [asc|desc]`.
    ///
    /// Only the exact token `desc` sorts descending; a missing or unknown
    /// direction sorts ascending. Tokens after the direction are ignored.
    /// Blank input yields no ordering.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parser = QueryParser::new(text.trim());

        let field = parser.read_token().ok()?;
        parser.next_non_whitespace();

        if parser.comparers.desc.compare(&parser) {
            return Some(OrderBy { field, ascending: false });
        }

        Some(OrderBy { field, ascending: true })
    }
}
