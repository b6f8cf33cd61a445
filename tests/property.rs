//! Property suite: builder omission, single-field filter equivalence,
//! and page partitioning over arbitrary record sets.

use proptest::prelude::*;
use siftdb::{
    executor::MemoryExecutor,
    prelude::*,
    search::SearchService,
};

const TEAM_NAMES: [&str; 3] = ["teamA", "teamB", "teamC"];
const USERNAMES: [&str; 5] = ["member1", "member2", "member3", "member4", "member5"];

fn arb_username() -> impl Strategy<Value = String> {
    prop::sample::select(USERNAMES.as_slice()).prop_map(str::to_string)
}

fn arb_member(id: u64) -> impl Strategy<Value = MemberRecord> {
    (arb_username(), 0i64..=60, prop::option::of(1u64..=3)).prop_map(
        move |(username, age, team_id)| MemberRecord::new(id, username, age, team_id),
    )
}

fn arb_members() -> impl Strategy<Value = Vec<MemberRecord>> {
    (0u64..12).prop_flat_map(|len| (1..=len).map(arb_member).collect::<Vec<_>>())
}

fn arb_criteria() -> impl Strategy<Value = SearchCriteria> {
    (
        prop::option::of(arb_username()),
        prop::option::of(prop::sample::select(TEAM_NAMES.as_slice()).prop_map(str::to_string)),
        prop::option::of(0i64..=60),
        prop::option::of(0i64..=60),
    )
        .prop_map(|(username, team_name, age_goe, age_loe)| SearchCriteria {
            username,
            team_name,
            age_goe,
            age_loe,
        })
}

fn executor_with(members: &[MemberRecord]) -> MemoryExecutor {
    let mut executor = MemoryExecutor::new();
    for (id, name) in (1u64..).zip(TEAM_NAMES) {
        executor.insert_team(TeamRecord::new(id, name));
    }
    for member in members {
        executor.insert_member(member.clone());
    }

    executor
}

/// Re-derive the expected result from the projected full row set; this
/// is independent of the predicate machinery under test.
fn expected_rows(full: &[MemberTeamRow], criteria: &SearchCriteria) -> Vec<MemberTeamRow> {
    full.iter()
        .filter(|row| {
            criteria
                .username
                .as_ref()
                .is_none_or(|username| &row.username == username)
                && criteria
                    .team_name
                    .as_ref()
                    .is_none_or(|team| row.team_name.as_ref() == Some(team))
                && criteria.age_goe.is_none_or(|goe| row.age >= goe)
                && criteria.age_loe.is_none_or(|loe| row.age <= loe)
        })
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn empty_criteria_returns_all_members_exactly_once(members in arb_members()) {
        let service = SearchService::new(executor_with(&members));
        let rows = service.search(&SearchCriteria::new()).unwrap();

        let mut returned: Vec<u64> = rows.iter().map(|row| row.member_id).collect();
        let mut seeded: Vec<u64> = members.iter().map(|member| member.id).collect();
        returned.sort_unstable();
        seeded.sort_unstable();
        prop_assert_eq!(returned, seeded);
    }

    #[test]
    fn search_matches_independent_row_filtering(
        members in arb_members(),
        criteria in arb_criteria(),
    ) {
        let service = SearchService::new(executor_with(&members));
        let full = service.search(&SearchCriteria::new()).unwrap();
        let rows = service.search(&criteria).unwrap();

        prop_assert_eq!(rows, expected_rows(&full, &criteria));
    }

    #[test]
    fn condition_count_equals_present_field_count(criteria in arb_criteria()) {
        let present = usize::from(criteria.username.is_some())
            + usize::from(criteria.team_name.is_some())
            + usize::from(criteria.age_goe.is_some())
            + usize::from(criteria.age_loe.is_some());

        prop_assert_eq!(criteria.conditions().len(), present);
    }

    #[test]
    fn pages_partition_the_result(
        members in arb_members(),
        criteria in arb_criteria(),
        size in 1u32..=5,
    ) {
        let service = SearchService::new(executor_with(&members));
        let full = service.search(&criteria).unwrap();

        let mut collected = Vec::new();
        let mut total = None;
        let mut page_index = 0u32;
        loop {
            let request = PageRequest::of(page_index, size).unwrap();
            let page = service.search_page_optimized(&criteria, &request).unwrap();
            prop_assert!(page.len() <= size as usize);
            if let Some(total) = total {
                prop_assert_eq!(page.total(), total);
            }
            total = Some(page.total());

            let is_last = page.is_last();
            collected.extend(page.into_parts().0);
            if is_last {
                break;
            }
            page_index += 1;
        }

        prop_assert_eq!(total, Some(full.len() as u64));
        prop_assert_eq!(collected, full);
    }
}
