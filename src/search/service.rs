use crate::{
    criteria::SearchCriteria,
    error::QueryError,
    executor::{JoinSpec, QueryExecutor},
    predicate::ConditionSet,
    row::MemberTeamRow,
    search::{Page, PageRequest, SortSpec},
};

///
/// SearchService
///
/// Combines the per-field condition builders into one ConditionSet and
/// routes execution through the injected boundary. Holds no cross-call
/// state and requires no locking; every invocation derives a fresh
/// filter set. Read-only against the data source.
///

pub struct SearchService<X> {
    executor: X,
}

impl<X> SearchService<X>
where
    X: QueryExecutor,
{
    #[must_use]
    pub const fn new(executor: X) -> Self {
        Self { executor }
    }

    #[must_use]
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    // ------------------------------------------------------------------
    // Unpaged execution
    // ------------------------------------------------------------------

    /// Execute the combined filter and return every matching row.
    ///
    /// Exactly one query execution per call. Entirely empty criteria
    /// return all joinable rows; members without a team survive because
    /// the join is left-style.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<MemberTeamRow>, QueryError> {
        let conditions = criteria.conditions();

        self.executor
            .execute(&conditions, JoinSpec::LeftJoinTeam, None)
            .map_err(QueryError::from)
    }

    /// Execute with an explicit ordering.
    pub fn search_sorted(
        &self,
        criteria: &SearchCriteria,
        sort: SortSpec,
    ) -> Result<Vec<MemberTeamRow>, QueryError> {
        let conditions = criteria.conditions();

        self.executor
            .execute(&conditions, JoinSpec::LeftJoinTeam, Some(&sort))
            .map_err(QueryError::from)
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    /// Count rows matching the full filter.
    pub fn count(&self, criteria: &SearchCriteria) -> Result<u64, QueryError> {
        let conditions = criteria.conditions();

        self.executor
            .count(&conditions, JoinSpec::LeftJoinTeam)
            .map_err(QueryError::from)
    }

    /// Whether at least one row matches.
    pub fn exists(&self, criteria: &SearchCriteria) -> Result<bool, QueryError> {
        Ok(self.count(criteria)? > 0)
    }

    // ------------------------------------------------------------------
    // Paged execution
    // ------------------------------------------------------------------

    /// One slice fetch plus one joined count.
    ///
    /// The total always reflects the full filter set, never the slice
    /// length, so callers can derive page arithmetic from it.
    pub fn search_page(
        &self,
        criteria: &SearchCriteria,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, QueryError> {
        self.page_with_count_join(criteria, request, |_| JoinSpec::LeftJoinTeam)
    }

    /// Like `search_page`, but counts without the join when no active
    /// predicate reads a joined-source field.
    ///
    /// The slice fetch still joins (the projection needs the team side);
    /// only the count gets the cheaper plan. With a joined-field filter
    /// active it falls back to the full joined count.
    pub fn search_page_optimized(
        &self,
        criteria: &SearchCriteria,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, QueryError> {
        self.page_with_count_join(criteria, request, |conditions| {
            if conditions.touches_joined() {
                JoinSpec::LeftJoinTeam
            } else {
                JoinSpec::PrimaryOnly
            }
        })
    }

    fn page_with_count_join(
        &self,
        criteria: &SearchCriteria,
        request: &PageRequest,
        choose_count_join: impl FnOnce(&ConditionSet) -> JoinSpec,
    ) -> Result<Page<MemberTeamRow>, QueryError> {
        let conditions = criteria.conditions();

        let items = self.executor.execute_slice(
            &conditions,
            JoinSpec::LeftJoinTeam,
            request.sort(),
            request.offset(),
            u64::from(request.size()),
        )?;
        let total = self
            .executor
            .count(&conditions, choose_count_join(&conditions))?;

        Ok(Page::new(items, request.page(), request.size(), total))
    }
}
