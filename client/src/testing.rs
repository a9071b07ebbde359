//! In-memory store double for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ideaboard_common::{CreateRequest, Idea, IdeaId, NewIdea, StoreError};

use crate::store::IdeaStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewIdea),
    Like(IdeaId),
    ConfirmCreate(CreateRequest),
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    list_results: VecDeque<Result<Vec<Idea>, StoreError>>,
    write_failure: Option<StoreError>,
}

/// Records every call. List results are scripted in order; when the script
/// runs out, an empty list is returned.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Rc<RefCell<Inner>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Vec<Idea>, StoreError>) {
        self.inner.borrow_mut().list_results.push_back(result);
    }

    /// Make every write fail with `err`.
    pub fn fail_writes(&self, err: StoreError) {
        self.inner.borrow_mut().write_failure = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    fn record_write(&self, call: Call) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        match &inner.write_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl IdeaStore for MockStore {
    async fn list_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(Call::List);
        inner.list_results.pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create_idea(&self, idea: &NewIdea) -> Result<(), StoreError> {
        self.record_write(Call::Create(idea.clone()))
    }

    async fn increment_like(&self, id: IdeaId) -> Result<(), StoreError> {
        self.record_write(Call::Like(id))
    }

    async fn request_create(&self, request: &CreateRequest) -> Result<(), StoreError> {
        self.record_write(Call::ConfirmCreate(request.clone()))
    }
}

/// An idea with the given id and like count.
pub fn idea(id: u64, likes: u64) -> Idea {
    Idea {
        idea_id: IdeaId(id),
        username: format!("user{id}"),
        explanation_a: format!("idea number {id}"),
        explanation_b: String::new(),
        explanation_c: String::new(),
        description: String::new(),
        timestamp: "2025-07-04T09:00:00".into(),
        likes,
    }
}

/// `n` ideas with ids `n..=1`, newest first, the way the store lists them.
pub fn dense_feed(n: u64) -> Vec<Idea> {
    (1..=n).rev().map(|id| idea(id, 0)).collect()
}
