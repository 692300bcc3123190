//! Mock implementations of port traits
//!
//! `FlakyDocumentStore` forwards to another store and replays a queue of
//! scripted faults, one per call, before behaving normally again.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::OwnerId;
use crate::domain::ports::{Document, DocumentStore};
use crate::error::StoreError;

/// What to do with the next call
#[derive(Debug)]
pub enum Fault {
    /// Forward the call untouched
    Pass,
    /// Fail without touching the inner store
    Fail(StoreError),
    /// Apply the call to the inner store, then report a transient failure
    LostReply,
    /// Wait before forwarding the call
    Delay(Duration),
}

pub struct FlakyDocumentStore {
    inner: Arc<dyn DocumentStore>,
    faults: Mutex<VecDeque<Fault>>,
    calls: AtomicUsize,
}

impl FlakyDocumentStore {
    pub fn new(inner: Arc<dyn DocumentStore>) -> Self {
        Self {
            inner,
            faults: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a fault for a future call
    pub fn push_fault(&self, fault: Fault) {
        self.faults.lock().unwrap().push_back(fault);
    }

    /// Queue the same transient failure `n` times
    pub fn fail_times(&self, n: usize) {
        for _ in 0..n {
            self.push_fault(Fault::Fail(StoreError::Unavailable(
                "connection reset".to_string(),
            )));
        }
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_fault(&self) -> Option<Fault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.faults.lock().unwrap().pop_front()
    }
}

fn lost_reply() -> StoreError {
    StoreError::Unavailable("connection closed before reply".to_string())
}

/// Apply the next scripted fault around `$call`
macro_rules! faulty {
    ($self:ident, $call:expr) => {
        match $self.next_fault() {
            Some(Fault::Fail(e)) => Err(e),
            Some(Fault::LostReply) => {
                let _ = $call.await;
                Err(lost_reply())
            }
            Some(Fault::Delay(delay)) => {
                tokio::time::sleep(delay).await;
                $call.await
            }
            Some(Fault::Pass) | None => $call.await,
        }
    };
}

#[async_trait]
impl DocumentStore for FlakyDocumentStore {
    async fn add_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<Option<Document>, StoreError> {
        faulty!(self, self.inner.add_document(owner, collection, id, doc))
    }

    async fn get_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        faulty!(self, self.inner.get_document(owner, collection, id))
    }

    async fn get_all(
        &self,
        owner: &OwnerId,
        collection: &str,
    ) -> Result<Vec<Document>, StoreError> {
        faulty!(self, self.inner.get_all(owner, collection))
    }

    async fn update_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<bool, StoreError> {
        faulty!(self, self.inner.update_document(owner, collection, id, doc))
    }

    async fn delete_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<bool, StoreError> {
        faulty!(self, self.inner.delete_document(owner, collection, id))
    }
}
