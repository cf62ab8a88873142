//! Error types for the Variant actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VariantError {
    /// The requested variant is not in the catalog.
    #[error("Variant not found: {0}")]
    NotFound(String),

    /// Two records in a seed batch share an id.
    #[error("Duplicate variant id: {0}")]
    DuplicateId(String),

    /// Price is negative, NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for VariantError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => VariantError::NotFound(id),
            FrameworkError::DuplicateId(id) => VariantError::DuplicateId(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<VariantError>() {
                Ok(err) => *err,
                Err(other) => VariantError::ActorCommunicationError(other.to_string()),
            },
            other => VariantError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_are_recovered() {
        let framework = FrameworkError::EntityError(Box::new(VariantError::InvalidPrice(-1.0)));
        assert_eq!(VariantError::from(framework), VariantError::InvalidPrice(-1.0));
    }

    #[test]
    fn plumbing_errors_become_communication_errors() {
        let err = VariantError::from(FrameworkError::ActorClosed);
        assert_eq!(err, VariantError::ActorCommunicationError("Actor closed".to_string()));
    }
}
