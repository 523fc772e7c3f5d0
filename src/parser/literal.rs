use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use regex::Regex;

use crate::parser::{ParseError, QueryParser};

static NUMBER_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").unwrap());
static DATE_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Right-hand side of an `eq` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `'...'`, quotes stripped, no escapes
    String(String),
    /// signed decimal
    Number(OrderedFloat<f64>),
    /// `YYYY-MM-DD`, kept verbatim
    Date(String),
}

impl Literal {
    /// Classify the remaining input of `parser` as one literal.
    ///
    /// Forms are tried in order (quoted string, number, date) and the first
    /// one that matches the whole remainder wins.
    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;

        if parser.current() == '\'' {
            if let Some(value) = StringParser::parse(parser) {
                return Ok(Literal::String(value));
            }
            parser.position = pivot;
        }

        let raw = parser.rest();
        if NUMBER_LITERAL.is_match(&raw) {
            if let Ok(number) = raw.parse::<f64>() {
                parser.jump(parser.length);
                return Ok(Literal::Number(OrderedFloat(number)));
            }
        }

        if DATE_LITERAL.is_match(&raw) {
            parser.jump(parser.length);
            return Ok(Literal::Date(raw));
        }

        parser.jump(parser.length);
        ParseError::new("Invalid literal", pivot, parser).err()
    }
}

/// Single-quoted string that must close exactly at end of input.
pub struct StringParser;

impl StringParser {
    pub fn parse(parser: &mut QueryParser) -> Option<String> {
        if parser.current() != '\'' {
            return None;
        }
        parser.next();
        let pivot = parser.position;

        while !parser.eof() && parser.current() != '\'' {
            parser.next();
        }
        if parser.eof() {
            return None;
        }

        let value = parser.text_from_pivot(pivot);
        parser.next();

        // anything after the closing quote (including another quote) is not a string literal
        if !parser.eof() {
            return None;
        }

        Some(value)
    }
}
