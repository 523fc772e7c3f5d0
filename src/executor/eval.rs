use crate::{parser::FilterPredicate, schema::Record};

pub struct Eval;

impl Eval {
    /// Whether `row` satisfies `predicate`.
    ///
    /// Null fields and fields the record does not carry never match. Null is
    /// not coerced first, so it equals neither `'null'` nor `0`, even though
    /// other non-numeric inputs (whitespace, booleans) do coerce for
    /// number equality.
    pub fn eval_predicate(predicate: &FilterPredicate, row: &Record) -> bool {
        let value = match row.get(predicate.field()) {
            Some(value) if !value.is_null() => value,
            _ => return false,
        };

        match predicate {
            FilterPredicate::StringEq { value: expected, .. } => {
                value.as_text().is_some_and(|text| text == *expected)
            }
            // NaN != NaN, so the sentinel never matches
            FilterPredicate::NumberEq { value: expected, .. } => {
                value.as_number().is_some_and(|n| n == expected.0)
            }
            FilterPredicate::DatePrefix { value: prefix, .. } => {
                value.as_text().is_some_and(|text| text.starts_with(prefix.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ordered_float::OrderedFloat;
    use serde_json::json;

    use crate::{executor::eval::Eval, parser::FilterPredicate, schema::{Normalizer, Record, SchemaDict}};

    fn row(raw: serde_json::Value) -> Record {
        Normalizer::normalize(&raw, SchemaDict::transactions())
    }

    fn string_eq(field: &str, value: &str) -> FilterPredicate {
        FilterPredicate::StringEq { field: field.into(), value: value.into() }
    }

    fn number_eq(field: &str, value: f64) -> FilterPredicate {
        FilterPredicate::NumberEq { field: field.into(), value: OrderedFloat(value) }
    }

    fn date_prefix(field: &str, value: &str) -> FilterPredicate {
        FilterPredicate::DatePrefix { field: field.into(), value: value.into() }
    }

    #[test]
    fn string_equality_is_exact() {
        let r = row(json!({"outlet": "Airport"}));

        assert!(Eval::eval_predicate(&string_eq("outlet", "Airport"), &r));
        assert!(!Eval::eval_predicate(&string_eq("outlet", "airport"), &r));
        assert!(!Eval::eval_predicate(&string_eq("outlet", "Air"), &r));
    }

    #[test]
    fn string_equality_uses_text_form_of_numbers() {
        let r = row(json!({"id": 42, "profit": 2.5}));

        assert!(Eval::eval_predicate(&string_eq("id", "42"), &r));
        assert!(Eval::eval_predicate(&string_eq("profit", "2.5"), &r));
        assert!(!Eval::eval_predicate(&string_eq("id", "42.0"), &r));
    }

    #[test]
    fn number_equality_coerces_field() {
        let r = row(json!({"id": "42", "outlet": "7", "quantity": 1.5}));

        assert!(Eval::eval_predicate(&number_eq("id", 42.0), &r));
        assert!(Eval::eval_predicate(&number_eq("outlet", 7.0), &r));
        assert!(Eval::eval_predicate(&number_eq("quantity", 1.5), &r));
        assert!(!Eval::eval_predicate(&number_eq("quantity", 1.0), &r));
    }

    #[test]
    fn number_equality_never_matches_nan() {
        let r = row(json!({"quantity": "abc", "outlet": "abc"}));

        assert!(!Eval::eval_predicate(&number_eq("quantity", 0.0), &r));
        assert!(!Eval::eval_predicate(&number_eq("outlet", 0.0), &r));
    }

    #[test]
    fn date_prefix_matches_timestamps() {
        let r = row(json!({"date": "2025-08-01T12:30:00Z"}));

        assert!(Eval::eval_predicate(&date_prefix("date", "2025-08-01"), &r));
        assert!(!Eval::eval_predicate(&date_prefix("date", "2025-08-02"), &r));
    }

    #[test]
    fn null_and_unknown_fields_never_match() {
        let r = row(json!({}));

        assert!(!Eval::eval_predicate(&string_eq("outlet", "null"), &r));
        assert!(!Eval::eval_predicate(&number_eq("id", 0.0), &r));
        assert!(!Eval::eval_predicate(&date_prefix("date", "2025-08-01"), &r));
        assert!(!Eval::eval_predicate(&string_eq("nope", "x"), &r));
    }

    #[test]
    fn null_is_not_coerced_to_zero() {
        let r = row(json!({"id": 1, "outlet": null, "quantity": null}));

        assert!(!Eval::eval_predicate(&number_eq("outlet", 0.0), &r));
        assert!(!Eval::eval_predicate(&number_eq("quantity", 0.0), &r));
        assert!(!Eval::eval_predicate(&string_eq("quantity", "null"), &r));
    }
}
