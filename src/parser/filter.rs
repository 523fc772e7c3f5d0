use ordered_float::OrderedFloat;

use crate::parser::{Literal, ParseError, QueryParser};

/// A parsed single-clause `$filter`.
///
/// The grammar is `<field> eq <literal>`; each literal shape maps to one
/// variant. Supporting a new clause shape means adding a variant here and an
/// arm in the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPredicate {
    /// `field eq 'text'`: exact match on the field's text form
    StringEq { field: String, value: String },
    /// `field eq 42`: exact numeric match
    NumberEq { field: String, value: OrderedFloat<f64> },
    /// `field eq 2025-08-01`: the field's text form starts with the date
    DatePrefix { field: String, value: String },
}

impl FilterPredicate {
    /// Lenient parse: anything outside the grammar is treated as no filter.
    pub fn parse(text: &str) -> Option<FilterPredicate> {
        Self::try_parse(text).ok()
    }

    /// Strict parse, reporting where the input left the grammar.
    pub fn try_parse(text: &str) -> Result<FilterPredicate, ParseError> {
        let mut parser = QueryParser::new(text.trim());

        let field = parser.read_word()?;
        parser.expect_whitespace()?;

        if !parser.comparers.eq.compare(&parser) {
            return ParseError::new("Expected 'eq'", parser.position, &parser).err();
        }
        parser.jump(parser.comparers.eq.length);
        parser.expect_whitespace()?;

        let predicate = match Literal::parse(&mut parser)? {
            Literal::String(value) => FilterPredicate::StringEq { field, value },
            Literal::Number(value) => FilterPredicate::NumberEq { field, value },
            Literal::Date(value) => FilterPredicate::DatePrefix { field, value },
        };

        Ok(predicate)
    }

    pub fn field(&self) -> &str {
        match self {
            FilterPredicate::StringEq { field, .. }
            | FilterPredicate::NumberEq { field, .. }
            | FilterPredicate::DatePrefix { field, .. } => field,
        }
    }
}
