//! In-memory reference executor.
//!
//! Its semantics double as the boundary contract for real backends:
//! the left join preserves teamless members, sort is stable with
//! missing values last, and slicing saturates instead of erroring.

use crate::{
    error::ExecutionError,
    executor::{JoinSpec, QueryExecutor},
    predicate::{ConditionSet, FieldPresence, Row},
    row::{JoinedRow, MemberRecord, MemberTeamRow, TeamRecord, fields},
    search::{Direction, SortSpec, compute_slice_window},
    trace::{QueryTraceEvent, QueryTraceSink, TracePhase},
    value::Value,
};
use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};

///
/// MemoryExecutor
///
/// Reference backend over in-memory record vectors. Natural return
/// order is member insertion order, which is stable across calls and
/// therefore safe to page over.
///

#[derive(Clone, Default)]
pub struct MemoryExecutor {
    members: Vec<MemberRecord>,
    teams: BTreeMap<u64, TeamRecord>,
    trace: Option<Arc<dyn QueryTraceSink>>,
}

impl MemoryExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an optional trace sink. Tracing never affects results.
    #[must_use]
    pub fn with_trace(mut self, sink: Arc<dyn QueryTraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn insert_team(&mut self, team: TeamRecord) {
        self.teams.insert(team.id, team);
    }

    pub fn insert_member(&mut self, member: MemberRecord) {
        self.members.push(member);
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn emit(&self, event: QueryTraceEvent) {
        if let Some(sink) = &self.trace {
            sink.on_event(event);
        }
    }

    /// Left-join pairing in member insertion order. A dangling team
    /// reference joins as no team, same as a missing reference.
    fn joined_rows(&self) -> impl Iterator<Item = JoinedRow<'_>> {
        self.members.iter().map(|member| JoinedRow {
            member,
            team: member.team_id.and_then(|id| self.teams.get(&id)),
        })
    }

    fn matching_rows(&self, filter: &ConditionSet) -> Vec<JoinedRow<'_>> {
        let rows: Vec<_> = self
            .joined_rows()
            .filter(|row| filter.matches(row))
            .collect();

        self.emit(QueryTraceEvent::Phase {
            phase: TracePhase::Filter,
            rows: count_u64(rows.len()),
        });

        rows
    }

    fn ordered_rows(
        &self,
        filter: &ConditionSet,
        sort: Option<&SortSpec>,
    ) -> Result<Vec<JoinedRow<'_>>, ExecutionError> {
        let mut rows = self.matching_rows(filter);

        if let Some(sort) = sort {
            if !fields::is_known(&sort.field) {
                return Err(ExecutionError::UnknownSortField {
                    field: sort.field.to_string(),
                });
            }

            rows.sort_by(|lhs, rhs| compare_for_sort(lhs, rhs, sort));
            self.emit(QueryTraceEvent::Phase {
                phase: TracePhase::Order,
                rows: count_u64(rows.len()),
            });
        }

        Ok(rows)
    }
}

impl QueryExecutor for MemoryExecutor {
    fn execute(
        &self,
        filter: &ConditionSet,
        join: JoinSpec,
        sort: Option<&SortSpec>,
    ) -> Result<Vec<MemberTeamRow>, ExecutionError> {
        self.emit(QueryTraceEvent::Start { join });

        let rows = self.ordered_rows(filter, sort)?;
        let out: Vec<_> = rows.iter().map(|row| project(row, join)).collect();

        self.emit(QueryTraceEvent::Finish {
            rows: count_u64(out.len()),
        });

        Ok(out)
    }

    fn execute_slice(
        &self,
        filter: &ConditionSet,
        join: JoinSpec,
        sort: Option<&SortSpec>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MemberTeamRow>, ExecutionError> {
        self.emit(QueryTraceEvent::Start { join });

        let rows = self.ordered_rows(filter, sort)?;
        let window = compute_slice_window(offset, limit, rows.len());
        let out: Vec<_> = rows[window.start..window.end]
            .iter()
            .map(|row| project(row, join))
            .collect();

        self.emit(QueryTraceEvent::Phase {
            phase: TracePhase::Page,
            rows: count_u64(out.len()),
        });
        self.emit(QueryTraceEvent::Finish {
            rows: count_u64(out.len()),
        });

        Ok(out)
    }

    fn count(&self, filter: &ConditionSet, join: JoinSpec) -> Result<u64, ExecutionError> {
        self.emit(QueryTraceEvent::Start { join });

        let matched = match join {
            // Join-free count: joined-source fields read as missing, so
            // this is only sound for filters that never touch them.
            JoinSpec::PrimaryOnly => self
                .members
                .iter()
                .map(|member| JoinedRow { member, team: None })
                .filter(|row| filter.matches(row))
                .count(),
            JoinSpec::LeftJoinTeam => self.joined_rows().filter(|row| filter.matches(row)).count(),
        };

        let total = count_u64(matched);
        self.emit(QueryTraceEvent::Finish { rows: total });

        Ok(total)
    }
}

fn project(row: &JoinedRow<'_>, join: JoinSpec) -> MemberTeamRow {
    match join {
        JoinSpec::LeftJoinTeam => MemberTeamRow::project(row.member, row.team),
        JoinSpec::PrimaryOnly => MemberTeamRow::project(row.member, None),
    }
}

fn count_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

fn sort_value(row: &JoinedRow<'_>, sort: &SortSpec) -> Option<Value> {
    match row.field(&sort.field) {
        FieldPresence::Present(value) => Some(value),
        FieldPresence::Missing => None,
    }
}

// Missing values order last under either direction; direction only
// applies between present pairs. `sort_by` is stable, so equal keys keep
// insertion order.
fn compare_for_sort(lhs: &JoinedRow<'_>, rhs: &JoinedRow<'_>, sort: &SortSpec) -> Ordering {
    match (sort_value(lhs, sort), sort_value(rhs, sort)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(lhs), Some(rhs)) => {
            let ordering = lhs.compare(&rhs).unwrap_or(Ordering::Equal);
            match sort.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        }
    }
}

///
/// TESTS
///
