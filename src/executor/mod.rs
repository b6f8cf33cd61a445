//! Query-execution boundary consumed by the search service, plus the
//! in-memory reference backend.

mod memory;

pub use memory::MemoryExecutor;

use crate::{
    error::ExecutionError, predicate::ConditionSet, row::MemberTeamRow, search::SortSpec,
};

///
/// JoinSpec
///
/// Join dimension for one execution. The row projection always needs
/// the joined side; `PrimaryOnly` exists for counting, where a join-free
/// filter makes the join pure overhead.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoinSpec {
    PrimaryOnly,
    LeftJoinTeam,
}

///
/// QueryExecutor
///
/// The only boundary the search core calls into. One unpaged search maps
/// to exactly one `execute`; one paged search maps to one
/// `execute_slice` plus one `count`.
///
/// Counting contract: the member-to-team reference is many-to-one, so a
/// conforming left join cannot multiply rows. A backend whose join can
/// pair one primary row with several joined rows must count distinct
/// primary rows, or totals will disagree with slices.
///

pub trait QueryExecutor {
    /// Execute the filter and return every matching projected row, in
    /// the backend's natural order unless `sort` is given. No implicit
    /// sort guarantee exists without it.
    fn execute(
        &self,
        filter: &ConditionSet,
        join: JoinSpec,
        sort: Option<&SortSpec>,
    ) -> Result<Vec<MemberTeamRow>, ExecutionError>;

    /// Execute and return the `[offset, offset + limit)` window of the
    /// ordered result.
    fn execute_slice(
        &self,
        filter: &ConditionSet,
        join: JoinSpec,
        sort: Option<&SortSpec>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MemberTeamRow>, ExecutionError>;

    /// Count rows matching the filter under `join`.
    ///
    /// `PrimaryOnly` is only sound when the filter reads no
    /// joined-source field; the service checks `touches_joined` before
    /// choosing it.
    fn count(&self, filter: &ConditionSet, join: JoinSpec) -> Result<u64, ExecutionError>;
}
