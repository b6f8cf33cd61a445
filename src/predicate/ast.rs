use crate::value::Value;
use std::fmt;

///
/// Predicate vocabulary
///
/// Pure representation of single-field comparisons. No evaluation or
/// combination semantics live here: evaluation is in `eval`, AND
/// combination is owned by `ConditionSet`.
///

///
/// FieldSource
///
/// Which side of the join a field lives on. Joined-source fields force
/// the joined count strategy during paged search.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSource {
    Primary,
    Joined,
}

///
/// Field
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub source: FieldSource,
    pub name: &'static str,
}

impl Field {
    #[must_use]
    pub const fn primary(name: &'static str) -> Self {
        Self {
            source: FieldSource::Primary,
            name,
        }
    }

    #[must_use]
    pub const fn joined(name: &'static str) -> Self {
        Self {
            source: FieldSource::Joined,
            name,
        }
    }

    #[must_use]
    pub const fn is_joined(&self) -> bool {
        matches!(self.source, FieldSource::Joined)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            FieldSource::Primary => write!(f, "{}", self.name),
            FieldSource::Joined => write!(f, "joined.{}", self.name),
        }
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Gte,
    Lte,
}

///
/// Predicate
///
/// One boolean comparison of a named field against a scalar value.
/// Predicates are built fresh per search invocation and combined under
/// AND only; order within a set never changes the result.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Predicate {
    pub field: Field,
    pub op: CompareOp,
    pub value: Value,
}

impl Predicate {
    #[must_use]
    pub fn new(field: Field, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            field,
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn eq(field: Field, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn gte(field: Field, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Gte, value)
    }

    #[must_use]
    pub fn lte(field: Field, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Lte, value)
    }
}
