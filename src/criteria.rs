use crate::{
    predicate::{ConditionSet, build},
    row::fields,
};
use serde::{Deserialize, Serialize};

///
/// SearchCriteria
///
/// Loosely structured per-request search input. Every field is
/// independently optional, and absent fields are omitted from the
/// generated filter entirely rather than encoded as tautological
/// clauses. Read-only during the search, discarded after.
///
/// Empty strings are present values, not absence markers.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i64>,
    pub age_loe: Option<i64>,
}

impl SearchCriteria {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            username: None,
            team_name: None,
            age_goe: None,
            age_loe: None,
        }
    }

    // ------------------------------------------------------------------
    // Fluent construction
    // ------------------------------------------------------------------

    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    #[must_use]
    pub const fn age_goe(mut self, age: i64) -> Self {
        self.age_goe = Some(age);
        self
    }

    #[must_use]
    pub const fn age_loe(mut self, age: i64) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Inclusive `[goe, loe]` age range.
    #[must_use]
    pub const fn age_between(self, goe: i64, loe: i64) -> Self {
        self.age_goe(goe).age_loe(loe)
    }

    // ------------------------------------------------------------------
    // Filter derivation
    // ------------------------------------------------------------------

    /// Derive the active filter set for one invocation.
    ///
    /// Each present field contributes exactly one predicate; absent
    /// fields contribute nothing at all.
    #[must_use]
    pub fn conditions(&self) -> ConditionSet {
        let mut set = ConditionSet::new();
        set.push_opt(build::eq_opt(fields::USERNAME, self.username.clone()));
        set.push_opt(build::eq_opt(fields::TEAM_NAME, self.team_name.clone()));
        set.push_opt(build::gte_opt(fields::AGE, self.age_goe));
        set.push_opt(build::lte_opt(fields::AGE, self.age_loe));

        set
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::SearchCriteria;
    use crate::predicate::Predicate;
    use crate::row::fields;

    #[test]
    fn empty_criteria_yields_match_all() {
        let conditions = SearchCriteria::new().conditions();
        assert!(conditions.is_empty());
    }

    #[test]
    fn each_present_field_contributes_one_predicate() {
        let conditions = SearchCriteria::new()
            .username("member1")
            .team_name("teamA")
            .age_between(30, 40)
            .conditions();

        assert_eq!(conditions.len(), 4);
        assert_eq!(
            conditions.as_slice(),
            &[
                Predicate::eq(fields::USERNAME, "member1"),
                Predicate::eq(fields::TEAM_NAME, "teamA"),
                Predicate::gte(fields::AGE, 30i64),
                Predicate::lte(fields::AGE, 40i64),
            ]
        );
    }

    #[test]
    fn absent_field_matches_omitting_the_builder_entirely() {
        // Running all four builders with three absent inputs must equal
        // running only the one builder with a present input.
        let with_absent = SearchCriteria::new().age_goe(35).conditions();

        let mut only_age = crate::predicate::ConditionSet::new();
        only_age.push_opt(crate::predicate::build::gte_opt(fields::AGE, Some(35i64)));

        assert_eq!(with_absent, only_age);
        assert_eq!(with_absent.len(), 1);
    }

    #[test]
    fn only_team_filter_touches_joined() {
        assert!(
            SearchCriteria::new()
                .team_name("teamA")
                .conditions()
                .touches_joined()
        );
        assert!(
            !SearchCriteria::new()
                .username("member1")
                .age_between(10, 40)
                .conditions()
                .touches_joined()
        );
    }
}
