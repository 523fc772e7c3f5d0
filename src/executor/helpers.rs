use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::schema::FieldValue;

pub struct Helpers;

impl Helpers {
    // NULLS LAST comparator helper (ascending flag)
    pub fn cmp_for_sort(a: &FieldValue, b: &FieldValue, ascending: bool) -> Ordering {
        use FieldValue::*;
        // NULLS LAST
        let ord = match (a, b) {
            (Null, Null) => return Ordering::Equal,
            (Null, _)    => return Ordering::Greater,      // null after non-null
            (_, Null)    => return Ordering::Less,
            // OrderedFloat places NaN above every number, keeping the order total
            (Number(x), Number(y)) => OrderedFloat(*x).cmp(&OrderedFloat(*y)),
            (Text(x), Text(y)) => x.cmp(y),
            (Raw(x), Raw(y)) => x.to_string().cmp(&y.to_string()),
            (lhs, rhs) => Self::type_rank(lhs).cmp(&Self::type_rank(rhs)),
        };
        if ascending { ord } else { ord.reverse() }
    }

    fn type_rank(v: &FieldValue) -> u8 {
        match v {
            FieldValue::Null => 0, FieldValue::Number(_) => 1, FieldValue::Text(_) => 2, FieldValue::Raw(_) => 3,
        }
    }
}
