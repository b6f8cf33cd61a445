use crate::predicate::CompareOp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// ValueFamily
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueFamily {
    Text,
    Int,
}

///
/// Value
///
/// Scalar query input value. Values only compare within one family;
/// cross-family comparison is undefined and evaluates to no match.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl Value {
    #[must_use]
    pub const fn family(&self) -> ValueFamily {
        match self {
            Self::Text(_) => ValueFamily::Text,
            Self::Int(_) => ValueFamily::Int,
        }
    }

    /// Whether this value can participate in `op` comparisons.
    ///
    /// Equality is defined for every family; range bounds require the
    /// ordered numeric family. This is the capability check the
    /// condition builders use to degrade fail-open instead of erroring.
    #[must_use]
    pub const fn usable_for(&self, op: CompareOp) -> bool {
        match op {
            CompareOp::Eq => true,
            CompareOp::Gte | CompareOp::Lte => matches!(self, Self::Int(_)),
        }
    }

    /// Total ordering within one family; `None` across families.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(lhs), Self::Text(rhs)) => Some(lhs.cmp(rhs)),
            (Self::Int(lhs), Self::Int(rhs)) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{Value, ValueFamily};
    use crate::predicate::CompareOp;
    use std::cmp::Ordering;

    #[test]
    fn family_tags_match_variants() {
        assert_eq!(Value::from("a").family(), ValueFamily::Text);
        assert_eq!(Value::from(1i64).family(), ValueFamily::Int);
    }

    #[test]
    fn compare_within_family_only() {
        assert_eq!(
            Value::from(10i64).compare(&Value::from(20i64)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from("b").compare(&Value::from("a")),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::from("10").compare(&Value::from(10i64)), None);
    }

    #[test]
    fn range_ops_require_int_family() {
        assert!(Value::from(35i64).usable_for(CompareOp::Gte));
        assert!(Value::from(35i64).usable_for(CompareOp::Lte));
        assert!(!Value::from("35").usable_for(CompareOp::Gte));
        assert!(Value::from("35").usable_for(CompareOp::Eq));
    }

    #[test]
    fn empty_text_is_an_ordinary_value() {
        assert!(Value::from("").usable_for(CompareOp::Eq));
        assert_eq!(
            Value::from("").compare(&Value::from("")),
            Some(Ordering::Equal)
        );
    }
}
