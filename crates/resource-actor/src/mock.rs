//! # Mock Store
//!
//! Test doubles for code that talks to a record store through a [`ResourceClient`].
//!
//! | | [`MockClient`] | [`create_mock_client`] | real [`ResourceActor`](crate::ResourceActor) |
//! |---|---|---|---|
//! | Replies | queued expectations | whatever the test sends | real state |
//! | Inspect payloads | no | yes | via `get`/`list` |
//! | Inject failures | `return_err` | send an `Err` | hard |
//!
//! ## Fluent expectations
//!
//! Queue the requests the code under test should make, in order, with the reply each
//! one gets. Keys passed to `expect_get`, `expect_update` and `expect_delete` are
//! checked against the request; a request that does not match the head of the queue
//! is recorded as a mismatch and its reply channel is dropped, so the caller sees
//! [`FrameworkError::ActorDropped`]. [`MockClient::verify`] panics on any mismatch or
//! on expectations that were never consumed.
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Shelf { key: u32 }
//! #[derive(Debug)] struct ShelfCreate;
//! #[derive(Debug)] struct ShelfUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("bad shelf")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32; type Create = ShelfCreate; type Update = ShelfUpdate;
//!     type Context = (); type Error = ShelfError;
//!     fn from_create_params(key: u32, _: ShelfCreate) -> Result<Self, ShelfError> { Ok(Self { key }) }
//!     async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), ShelfError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Shelf>::new();
//!     mock.expect_list().return_ok(vec![Shelf { key: 1 }]);
//!     mock.expect_delete(1).return_err(FrameworkError::NotFound("1".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(matches!(client.delete(1).await, Err(FrameworkError::NotFound(_))));
//!     mock.verify();
//! }
//! ```
//!
//! ## Receiver helpers
//!
//! [`create_mock_client`] returns the client together with the request receiver.
//! The `expect_*` functions pull the next request off the receiver, hand back its
//! payload and reply sender, and return `None` if the request was of another kind.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATIONS
// =============================================================================

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::Get { .. } => "get",
            Self::Create { .. } => "create",
            Self::List { .. } => "list",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Answers `request` from `expectation`. A mismatch is written to `mismatches`
/// before the reply channel is dropped, so the caller never observes the failure
/// ahead of `verify`.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    mismatches: &Mutex<Vec<String>>,
) {
    let record = |mismatch: String| mismatches.lock().unwrap().push(mismatch);

    fn keyed<I: PartialEq + std::fmt::Debug, R>(
        op: &str,
        got: I,
        want: I,
        respond_to: Response<R>,
        response: Result<R, FrameworkError>,
        record: impl Fn(String),
    ) {
        if got != want {
            record(format!("{op}: expected key {want:?}, got {got:?}"));
            return;
        }
        let _ = respond_to.send(response);
    }

    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            keyed("get", id, want, respond_to, response, record)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => keyed("update", id, want, respond_to, response, record),
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => keyed("delete", id, want, respond_to, response, record),
        (request, Some(expectation)) => record(format!(
            "expected {} request, got {}",
            expectation.name(),
            request_name(&request)
        )),
        (request, None) => record(format!("unexpected {} request", request_name(&request))),
    }
}

/// A [`ResourceClient`] backed by a queue of expectations instead of a running store.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty queue. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failures = mismatches.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &failures);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// A client whose requests are answered by this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Panics unless every request matched and every expectation was consumed.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Mock received unexpected requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// A client plus the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        key: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(key: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                key,
                label: params.label,
            })
        }

        async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
            self.label = update.label;
            Ok(())
        }
    }

    fn shelf(key: u32, label: &str) -> Shelf {
        Shelf {
            key,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_payloads() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let task = tokio::spawn(async move {
            client
                .update(
                    7,
                    ShelfUpdate {
                        label: "dairy".to_string(),
                    },
                )
                .await
        });

        let (key, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(key, 7);
        assert_eq!(update.label, "dairy");
        responder.send(Ok(shelf(7, "dairy"))).unwrap();

        let result = task.await.unwrap().unwrap();
        assert_eq!(result, shelf(7, "dairy"));
    }

    #[tokio::test]
    async fn test_create_payload_is_visible() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let task = tokio::spawn(async move {
            client
                .create(ShelfCreate {
                    label: "bakery".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.label, "bakery");
        responder.send(Ok(3)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![shelf(1, "frozen")]);
        mock.expect_get(1).return_ok(Some(shelf(1, "frozen")));

        let client = mock.client();
        let key = client
            .create(ShelfCreate {
                label: "frozen".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(key, 1);
        assert_eq!(client.list().await.unwrap(), vec![shelf(1, "frozen")]);
        assert!(client.get(1).await.unwrap().is_some());

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_key_is_reported_by_verify() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_delete(2).return_ok(());

        let client = mock.client();
        let result = client.delete(5).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_unconsumed_expectation_fails_verify() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_list().return_ok(Vec::new());
        mock.verify();
    }
}
