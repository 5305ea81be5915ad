//! Domain error types.
//!
//! These errors represent trip requests that cannot be planned. They are
//! raised when constructing domain values, before any generation happens.

/// Domain-level errors for request validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Destination is empty or whitespace
    #[error("destination must not be empty")]
    EmptyDestination,

    /// Party size must be at least one traveler
    #[error("party size must be at least 1 (got {0})")]
    InvalidPartySize(u32),

    /// Budget must be a positive amount
    #[error("budget must be greater than zero")]
    InvalidBudget,

    /// Experience level outside 0-100
    #[error("experience level must be between 0 and 100 (got {0})")]
    InvalidExperienceLevel(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyDestination;
        assert_eq!(err.to_string(), "destination must not be empty");

        let err = DomainError::InvalidPartySize(0);
        assert_eq!(err.to_string(), "party size must be at least 1 (got 0)");

        let err = DomainError::InvalidBudget;
        assert_eq!(err.to_string(), "budget must be greater than zero");

        let err = DomainError::InvalidExperienceLevel(120);
        assert_eq!(
            err.to_string(),
            "experience level must be between 0 and 100 (got 120)"
        );
    }
}
