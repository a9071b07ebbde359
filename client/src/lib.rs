//! Client-side state and store access for the idea board.
//!
//! Each screen's state is an owned object ([`FeedView`], [`CompositionView`],
//! [`ConfirmationDialog`], [`AppShell`]) that takes the store per call, so the
//! same logic drives the Dioxus app, the CLI, and the tests.

pub mod compose;
pub mod config;
pub mod confirm;
pub mod feed;
pub mod http;
pub mod shell;
pub mod store;
pub mod task;

#[cfg(test)]
mod testing;

pub use compose::CompositionView;
pub use config::ClientConfig;
pub use confirm::{ConfirmationDialog, DismissReason, ScrollFlag, ScrollTarget};
pub use feed::{FeedPhase, FeedState, FeedView};
pub use http::IdeaStoreClient;
pub use shell::{AppShell, RefreshSignal};
pub use store::IdeaStore;
pub use task::{WriteOp, WriteOutcome, WriteTask, WriteTicket};
