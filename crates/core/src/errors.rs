use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("candidate limit must be at least 1")]
    InvalidLimit,
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}
