use std::future::Future;

use ideaboard_common::{CreateRequest, Idea, IdeaId, NewIdea, StoreError};

/// The remote idea store as seen by the views.
///
/// Views take the store per call instead of owning it, so the same state
/// objects run against the HTTP client, a test double, or the browser
/// fetch backend. Futures are not required to be `Send`: the browser build
/// drives them on the UI thread.
///
/// Implementations must not retry writes. `create_idea`, `increment_like`
/// and `request_create` each append on the store side.
pub trait IdeaStore: Clone + 'static {
    /// `GET /ideas`, in store order.
    fn list_ideas(&self) -> impl Future<Output = Result<Vec<Idea>, StoreError>>;

    /// `POST /post/idea`.
    fn create_idea(&self, idea: &NewIdea) -> impl Future<Output = Result<(), StoreError>>;

    /// `POST /ideas/{id}/like`.
    fn increment_like(&self, id: IdeaId) -> impl Future<Output = Result<(), StoreError>>;

    /// `POST /post/create`, from the confirmation dialog.
    fn request_create(
        &self,
        request: &CreateRequest,
    ) -> impl Future<Output = Result<(), StoreError>>;
}
