//! "Create this idea?" confirmation dialog and the background scroll lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ideaboard_common::{CreateRequest, IdeaId, DEFAULT_USERNAME};
use tracing::debug;

use crate::store::IdeaStore;
use crate::task::{WriteOp, WriteOutcome, WriteTask, WriteTicket};

/// Something whose scrolling can be suspended while a modal is open,
/// e.g. the page body.
pub trait ScrollTarget: Clone {
    fn set_suspended(&self, suspended: bool);
}

/// In-memory scroll flag, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct ScrollFlag(Arc<AtomicBool>);

impl ScrollFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suspended(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl ScrollTarget for ScrollFlag {
    fn set_suspended(&self, suspended: bool) {
        self.0.store(suspended, Ordering::SeqCst);
    }
}

/// Scroll suspended for as long as this lives.
#[must_use]
pub struct ScrollGuard<T: ScrollTarget> {
    target: T,
}

impl<T: ScrollTarget> ScrollGuard<T> {
    pub fn acquire(target: T) -> Self {
        target.set_suspended(true);
        Self { target }
    }
}

impl<T: ScrollTarget> Drop for ScrollGuard<T> {
    fn drop(&mut self) {
        self.target.set_suspended(false);
    }
}

/// How the dialog was closed without confirming. All of these take the
/// same path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    Backdrop,
    CloseButton,
    Cancel,
}

/// Owned state behind the confirmation modal.
///
/// The host decides when it opens and with which idea. Scroll is restored
/// on every way out: dismiss, confirm, or dropping the dialog.
pub struct ConfirmationDialog<T: ScrollTarget> {
    target: T,
    open: bool,
    selected: Option<IdeaId>,
    lock: Option<ScrollGuard<T>>,
}

impl<T: ScrollTarget> ConfirmationDialog<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            open: false,
            selected: None,
            lock: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<IdeaId> {
        self.selected
    }

    /// Show the dialog for `selected` and suspend background scroll.
    pub fn open(&mut self, selected: Option<IdeaId>) {
        self.selected = selected;
        self.open = true;
        if self.lock.is_none() {
            self.lock = Some(ScrollGuard::acquire(self.target.clone()));
        }
    }

    /// Hide the dialog and restore scroll, whatever state it was in.
    pub fn close(&mut self) {
        self.open = false;
        self.selected = None;
        self.lock = None;
        self.target.set_suspended(false);
    }

    pub fn dismiss(&mut self, reason: DismissReason) {
        debug!(?reason, "Confirmation dismissed");
        self.close();
    }

    /// Keyboard handler. Escape dismisses an open dialog; returns whether
    /// the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.dismiss(DismissReason::Escape);
            true
        } else {
            false
        }
    }

    /// The create request for the selected idea, if any. The dialog stays
    /// open; call [`close`](Self::close) once the task has run.
    pub fn begin_confirm<S: IdeaStore>(&self, store: &S) -> Option<(WriteTask, WriteTicket)> {
        let id = self.selected?;
        let request = CreateRequest {
            idea_id: id,
            username: DEFAULT_USERNAME.to_string(),
        };
        let store = store.clone();
        Some(WriteTask::new(WriteOp::ConfirmCreate(id), async move {
            store.request_create(&request).await
        }))
    }

    /// Send the create request, call `on_confirm` once it has been sent, then
    /// close. Store failures are logged, not surfaced; `on_confirm` runs
    /// either way. With nothing selected this only closes.
    pub async fn confirm<S, F>(&mut self, store: &S, on_confirm: F) -> Option<WriteOutcome>
    where
        S: IdeaStore,
        F: FnOnce(),
    {
        let outcome = match self.begin_confirm(store) {
            Some((task, ticket)) => {
                task.run().await;
                on_confirm();
                ticket.outcome().await
            }
            None => None,
        };
        self.close();
        outcome
    }
}

impl<T: ScrollTarget> Drop for ConfirmationDialog<T> {
    fn drop(&mut self) {
        self.lock = None;
        self.target.set_suspended(false);
    }
}
