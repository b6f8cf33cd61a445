use crate::predicate::{Predicate, Row, eval};
use derive_more::{Deref, DerefMut, IntoIterator};

///
/// ConditionSet
///
/// Ordered active filter set for one search invocation, combined under
/// AND. The empty set is the match-all identity: combining zero
/// predicates places no restriction at all. Order never changes the
/// result set, only potential execution hints.
///
/// Built fresh per invocation; never cached or shared across requests.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, IntoIterator, PartialEq)]
pub struct ConditionSet(#[into_iterator(owned, ref)] Vec<Predicate>);

impl ConditionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a predicate when a builder produced one; absent builder
    /// output leaves the set untouched.
    pub fn push_opt(&mut self, predicate: Option<Predicate>) {
        if let Some(predicate) = predicate {
            self.0.push(predicate);
        }
    }

    /// AND of all predicates; the empty set matches every row.
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.0.iter().all(|predicate| eval(row, predicate))
    }

    /// Whether any active predicate reads a joined-source field.
    ///
    /// When this is false, counting does not need the join at all.
    #[must_use]
    pub fn touches_joined(&self) -> bool {
        self.0.iter().any(|predicate| predicate.field.is_joined())
    }
}

impl From<Vec<Predicate>> for ConditionSet {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self(predicates)
    }
}

impl FromIterator<Predicate> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TESTS
///
