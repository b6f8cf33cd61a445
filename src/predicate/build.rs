//! Optional-input condition builders.
//!
//! Absent input contributes nothing, and present-but-unusable input
//! degrades to nothing as well (fail-open): one malformed optional
//! filter must never abort a whole search. The fail-open outcome is an
//! explicit capability check (`Value::usable_for`), not caught failure.
//! Builders never error and never panic.

use crate::{
    predicate::{CompareOp, Field, Predicate},
    value::Value,
};

/// Build a comparison only when `value` is present and usable for `op`.
#[must_use]
pub fn compare_opt(
    field: Field,
    op: CompareOp,
    value: Option<impl Into<Value>>,
) -> Option<Predicate> {
    let value = value?.into();
    if !value.usable_for(op) {
        return None;
    }

    Some(Predicate { field, op, value })
}

/// Equality against `field`, or nothing when the input is absent.
///
/// Empty strings are present values, not absence markers; a caller that
/// wants blank-as-absent must check before building.
#[must_use]
pub fn eq_opt(field: Field, value: Option<impl Into<Value>>) -> Option<Predicate> {
    compare_opt(field, CompareOp::Eq, value)
}

/// Lower bound (`>=`) against `field`, or nothing when absent.
#[must_use]
pub fn gte_opt(field: Field, value: Option<impl Into<Value>>) -> Option<Predicate> {
    compare_opt(field, CompareOp::Gte, value)
}

/// Upper bound (`<=`) against `field`, or nothing when absent.
#[must_use]
pub fn lte_opt(field: Field, value: Option<impl Into<Value>>) -> Option<Predicate> {
    compare_opt(field, CompareOp::Lte, value)
}

/// Inclusive `[low, high]` range; each bound is independently optional.
#[must_use]
pub fn between_opt(
    field: Field,
    low: Option<impl Into<Value>>,
    high: Option<impl Into<Value>>,
) -> (Option<Predicate>, Option<Predicate>) {
    (gte_opt(field, low), lte_opt(field, high))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{between_opt, eq_opt, gte_opt, lte_opt};
    use crate::{
        predicate::{CompareOp, Field, Predicate},
        value::Value,
    };

    const AGE: Field = Field::primary("age");
    const USERNAME: Field = Field::primary("username");

    #[test]
    fn absent_input_contributes_nothing() {
        assert_eq!(eq_opt(USERNAME, None::<&str>), None);
        assert_eq!(gte_opt(AGE, None::<i64>), None);
        assert_eq!(lte_opt(AGE, None::<i64>), None);
    }

    #[test]
    fn present_input_contributes_exactly_one_predicate() {
        assert_eq!(
            eq_opt(USERNAME, Some("member1")),
            Some(Predicate::eq(USERNAME, "member1"))
        );
        assert_eq!(gte_opt(AGE, Some(35i64)), Some(Predicate::gte(AGE, 35i64)));
        assert_eq!(lte_opt(AGE, Some(40i64)), Some(Predicate::lte(AGE, 40i64)));
    }

    #[test]
    fn unusable_present_input_degrades_fail_open() {
        // Text cannot carry a numeric range bound; the builder stays silent.
        assert_eq!(gte_opt(AGE, Some("thirty-five")), None);
        assert_eq!(lte_opt(AGE, Some("forty")), None);
    }

    #[test]
    fn empty_string_is_a_present_equality_value() {
        let predicate = eq_opt(USERNAME, Some("")).unwrap();
        assert_eq!(predicate.op, CompareOp::Eq);
        assert_eq!(predicate.value, Value::Text(String::new()));
    }

    #[test]
    fn between_bounds_are_independently_optional() {
        let (low, high) = between_opt(AGE, Some(30i64), None::<i64>);
        assert!(low.is_some());
        assert!(high.is_none());

        let (low, high) = between_opt(AGE, Some(30i64), Some(40i64));
        assert_eq!(low, Some(Predicate::gte(AGE, 30i64)));
        assert_eq!(high, Some(Predicate::lte(AGE, 40i64)));
    }
}
