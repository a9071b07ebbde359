//! Fire-and-forget store writes.
//!
//! Likes and confirmation creates never surface failures to the user, but
//! they still run as explicit tasks: the host spawns [`WriteTask::run`] on
//! whatever executor it has, and anyone holding the [`WriteTicket`] can
//! observe that the call was made and how it ended.

use std::future::Future;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use ideaboard_common::{IdeaId, StoreError};
use tracing::{debug, error};

/// Which write a task performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOp {
    Like(IdeaId),
    ConfirmCreate(IdeaId),
}

/// How a write ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOutcome {
    pub op: WriteOp,
    pub result: Result<(), StoreError>,
}

/// A store write that has been decided on but not yet sent.
#[must_use = "a write task does nothing until run"]
pub struct WriteTask {
    op: WriteOp,
    call: LocalBoxFuture<'static, Result<(), StoreError>>,
    done: oneshot::Sender<WriteOutcome>,
}

/// Completion handle for a [`WriteTask`]. Dropping it is fine.
#[derive(Debug)]
pub struct WriteTicket {
    op: WriteOp,
    done: oneshot::Receiver<WriteOutcome>,
}

impl WriteTask {
    pub fn new(
        op: WriteOp,
        call: impl Future<Output = Result<(), StoreError>> + 'static,
    ) -> (Self, WriteTicket) {
        let (tx, rx) = oneshot::channel();
        let task = Self {
            op,
            call: call.boxed_local(),
            done: tx,
        };
        (task, WriteTicket { op, done: rx })
    }

    pub fn op(&self) -> WriteOp {
        self.op
    }

    /// Send the request. Failures are logged here and reported on the
    /// ticket, never returned.
    pub async fn run(self) {
        let result = self.call.await;
        match &result {
            Ok(()) => debug!(op = ?self.op, "Write completed"),
            Err(e) => error!(op = ?self.op, kind = e.kind(), "Write failed: {e}"),
        }
        // Nobody listening is the common case.
        let _ = self.done.send(WriteOutcome {
            op: self.op,
            result,
        });
    }
}

impl WriteTicket {
    pub fn op(&self) -> WriteOp {
        self.op
    }

    /// Wait for the task to finish. `None` if it was dropped without running.
    pub async fn outcome(self) -> Option<WriteOutcome> {
        self.done.await.ok()
    }

    /// Non-blocking check. `None` while pending or if the task was dropped.
    pub fn try_outcome(&mut self) -> Option<WriteOutcome> {
        self.done.try_recv().ok().flatten()
    }
}
