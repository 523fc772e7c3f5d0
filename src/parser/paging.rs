use crate::schema::FieldValue;

/// Converts raw `$skip` / `$top` values into slice bounds.
///
/// Neither conversion fails: values that are not numbers degrade to a no-op
/// for their stage instead of rejecting the request.
pub struct Paging;

impl Paging {
    /// Leading records to drop. Blank input is `None`; NaN or negative values
    /// clamp to zero; fractions are truncated.
    pub fn skip(raw: Option<&str>) -> Option<usize> {
        let number = Self::number(raw)?;
        if number.is_nan() || number <= 0.0 {
            return Some(0);
        }
        Some(number.trunc() as usize)
    }

    /// Records to keep after skipping. Blank or non-numeric input is `None`
    /// (the collection passes through); negative values clamp to zero;
    /// fractions are truncated.
    pub fn top(raw: Option<&str>) -> Option<usize> {
        let number = Self::number(raw)?;
        if number.is_nan() {
            return None;
        }
        if number <= 0.0 {
            return Some(0);
        }
        Some(number.trunc() as usize)
    }

    fn number(raw: Option<&str>) -> Option<f64> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(FieldValue::parse_number(raw))
    }
}
