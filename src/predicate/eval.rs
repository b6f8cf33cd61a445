use crate::{
    predicate::{CompareOp, Field, Predicate},
    value::Value,
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of reading a field from a row during evaluation. Missing is
/// distinct from present: a left join reports joined-side fields as
/// missing when the joined record is absent.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that exposes fields by reference.
/// Decouples predicate evaluation from concrete record types.
///

pub trait Row {
    fn field(&self, field: &Field) -> FieldPresence;
}

/// Evaluate one predicate against one row.
///
/// Pure runtime evaluation: no planning, no validation. A missing field
/// or a cross-family comparison evaluates to `false`.
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match row.field(&predicate.field) {
        FieldPresence::Missing => false,
        FieldPresence::Present(value) => eval_compare(&value, predicate.op, &predicate.value),
    }
}

fn eval_compare(lhs: &Value, op: CompareOp, rhs: &Value) -> bool {
    match lhs.compare(rhs) {
        None => false,
        Some(ordering) => match op {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        },
    }
}

///
/// TESTS
///
