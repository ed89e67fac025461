//! # Framework Errors
//!
//! Common error types used throughout the actor runtime. Resource clients translate
//! these into their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover an entity's own error type from [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is a different variant or the
    /// boxed error is of another type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("bad price")]
    struct PriceError;

    #[test]
    fn test_downcast_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(PriceError));
        assert_eq!(err.downcast_entity::<PriceError>().unwrap(), PriceError);
    }

    #[test]
    fn test_downcast_entity_keeps_other_variants() {
        let err = FrameworkError::NotFound("7".to_string());
        match err.downcast_entity::<PriceError>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "7"),
            other => panic!("unexpected: {:?}", other),
        }

        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.downcast_entity::<PriceError>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
