//! SiftDB: dynamic predicate composition and paged search over a joined
//! pair of typed record sets.
//!
//! The core turns independently-optional search inputs into an
//! AND-combined [`predicate::ConditionSet`] (absent inputs are truly
//! omitted, never encoded as tautologies), executes it through the
//! pluggable [`executor::QueryExecutor`] boundary, and optionally pages
//! the result with a total count computed under the full filter rather
//! than the slice.

pub mod criteria;
pub mod error;
pub mod executor;
pub mod predicate;
pub mod row;
pub mod search;
pub mod trace;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or trace types are re-exported here.
///

pub mod prelude {
    pub use crate::{
        criteria::SearchCriteria,
        predicate::{CompareOp, ConditionSet, Field, Predicate},
        row::{MemberRecord, MemberTeamRow, TeamRecord},
        search::{Direction, Page, PageRequest, SortSpec},
        value::Value,
    };
}
