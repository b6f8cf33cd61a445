use thiserror::Error as ThisError;

///
/// QueryError
///
/// Top-level search failure surfaced to callers. Predicate construction
/// never appears here: unusable optional inputs degrade fail-open inside
/// the condition builders and the caller only ever sees results or an
/// execution failure.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

///
/// IntentError
///
/// Request-shape problems detected before any execution is issued.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IntentError {
    #[error("page size must be at least 1")]
    PageSizeZero,
}

///
/// ExecutionError
///
/// Failures raised by the query-execution boundary. The search core has
/// no meaningful local recovery for these; they propagate verbatim.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ExecutionError {
    #[error("unknown sort field '{field}'")]
    UnknownSortField { field: String },

    #[error("backend failure: {message}")]
    Backend { message: String },
}
