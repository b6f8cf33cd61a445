//! Predicate layer: vocabulary, optional-input builders, row evaluation,
//! and the AND-combined condition set.

mod ast;
pub mod build;
mod eval;
mod set;

pub use ast::{CompareOp, Field, FieldSource, Predicate};
pub use eval::{FieldPresence, Row, eval};
pub use set::ConditionSet;
