//! # Store Requests
//!
//! The messages a [`ResourceClient`](crate::ResourceClient) sends to a
//! [`ResourceActor`](crate::ResourceActor). Each carries a oneshot sender for the reply.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to the record store.
///
/// The variants are the four collection operations of a document store plus a
/// single-record read:
///
/// - **Create**: validate the payload, assign a key, insert. Replies with the key.
/// - **Get**: one record by key, `None` if absent.
/// - **List**: every record, in insertion order.
/// - **Update**: patch the record under a key. Replies with the patched record.
/// - **Delete**: remove the record under a key.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
