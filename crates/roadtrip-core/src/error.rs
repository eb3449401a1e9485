use thiserror::Error;

/// Errors raised while building a journey.
///
/// Reaching the final stop is not an error: [`crate::Advance::AlreadyAtFinalStop`]
/// reports it as an ordinary outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
    /// The stop list cannot describe a journey.
    #[error("Invalid journey configuration: {0}")]
    InvalidConfiguration(String),
}

impl JourneyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        JourneyError::InvalidConfiguration(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = JourneyError::invalid("stop list is empty");
        assert_eq!(
            err.to_string(),
            "Invalid journey configuration: stop list is empty"
        );
    }
}
