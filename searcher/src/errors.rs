use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran dry without reaching a goal state.
    #[error("No solution found: the state space was exhausted")]
    NoSolution,

    /// Something asked the frontier for an entry it did not have.
    #[error("Attempted to extract from an empty frontier")]
    EmptyFrontier,

    /// The problem returned data which violates its own contract.
    #[error("Malformed problem: {0}")]
    MalformedProblem(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
