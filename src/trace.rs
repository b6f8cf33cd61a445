//! Query tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! execution semantics.

use crate::executor::JoinSpec;

///
/// QueryTraceSink
///

pub trait QueryTraceSink: Send + Sync {
    fn on_event(&self, event: QueryTraceEvent);
}

///
/// TracePhase
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TracePhase {
    Filter,
    Order,
    Page,
}

///
/// QueryTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryTraceEvent {
    Start { join: JoinSpec },
    Phase { phase: TracePhase, rows: u64 },
    Finish { rows: u64 },
}
