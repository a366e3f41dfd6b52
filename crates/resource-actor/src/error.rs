//! # Store Errors
//!
//! Errors a [`ResourceClient`](crate::ResourceClient) call can return. Transport
//! failures (the actor is gone) are kept apart from request failures (unknown key,
//! rejected payload) so callers can tell "the store is unavailable" from "the store
//! said no".

/// Errors that can occur within the record store.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the request never got an answer from the actor.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }

    /// Returns the entity's own error if this is an [`EntityError`](Self::EntityError)
    /// of type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
