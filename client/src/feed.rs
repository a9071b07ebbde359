//! Feed of ideas: fetching, list state, and likes.

use std::collections::HashMap;

use ideaboard_common::{Idea, IdeaId, StoreError};
use tracing::warn;

use crate::shell::RefreshSignal;
use crate::store::IdeaStore;
use crate::task::{WriteOp, WriteTask, WriteTicket};

/// Where the feed is in its fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    /// Not fetched yet.
    Idle,
    Loading,
    Populated,
    Failed,
}

/// What the feed screen renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    pub ideas: Vec<Idea>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owned state behind the feed screen.
///
/// Fetch results are applied in the order they resolve. A slow fetch that
/// finishes after a newer one overwrites it; nothing is cancelled.
#[derive(Clone, Debug)]
pub struct FeedView {
    state: FeedState,
    phase: FeedPhase,
    /// Idea id to its slot in `state.ideas`, rebuilt on every successful fetch.
    positions: HashMap<IdeaId, usize>,
    seen: Option<RefreshSignal>,
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedView {
    pub fn new() -> Self {
        Self {
            state: FeedState::default(),
            phase: FeedPhase::Idle,
            positions: HashMap::new(),
            seen: None,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.state.ideas
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    /// Record `signal` and start a fetch if it differs from the last one
    /// seen. The first call always fetches (mount).
    ///
    /// Returns whether the caller should now run `list_ideas` and hand the
    /// result to [`apply_fetch`](Self::apply_fetch).
    pub fn observe(&mut self, signal: RefreshSignal) -> bool {
        if self.seen == Some(signal) {
            return false;
        }
        self.seen = Some(signal);
        self.begin_fetch();
        true
    }

    /// Enter `Loading`: clear the error, keep the current ideas on screen.
    pub fn begin_fetch(&mut self) {
        self.state.error = None;
        self.state.loading = true;
        self.phase = FeedPhase::Loading;
    }

    /// Apply a finished fetch. On failure the previous ideas stay as they were.
    pub fn apply_fetch(&mut self, result: Result<Vec<Idea>, StoreError>) {
        self.state.loading = false;
        match result {
            Ok(ideas) => {
                self.positions = index_positions(&ideas);
                self.state.ideas = ideas;
                self.phase = FeedPhase::Populated;
            }
            Err(err) => {
                self.state.error = Some(err.to_string());
                self.phase = FeedPhase::Failed;
            }
        }
    }

    /// Fetch unconditionally.
    pub async fn refresh<S: IdeaStore>(&mut self, store: &S) {
        self.begin_fetch();
        let result = store.list_ideas().await;
        self.apply_fetch(result);
    }

    /// Fetch if `signal` is new.
    pub async fn sync<S: IdeaStore>(&mut self, signal: RefreshSignal, store: &S) {
        if self.observe(signal) {
            let result = store.list_ideas().await;
            self.apply_fetch(result);
        }
    }

    /// Slot of `id` in the current list.
    pub fn position_of(&self, id: IdeaId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Count a like locally and return the request to send.
    ///
    /// The local increment is kept whatever the request's outcome. Every
    /// click produces its own request; nothing is coalesced. Unknown ids are
    /// ignored and send nothing.
    pub fn like<S: IdeaStore>(
        &mut self,
        id: IdeaId,
        store: &S,
    ) -> Option<(WriteTask, WriteTicket)> {
        let Some(pos) = self.position_of(id) else {
            warn!(%id, "Like for idea not in the feed, ignoring");
            return None;
        };
        let idea = &mut self.state.ideas[pos];
        idea.likes = idea.likes.saturating_add(1);

        let store = store.clone();
        Some(WriteTask::new(WriteOp::Like(id), async move {
            store.increment_like(id).await
        }))
    }
}

fn index_positions(ideas: &[Idea]) -> HashMap<IdeaId, usize> {
    let mut positions = HashMap::with_capacity(ideas.len());
    for (pos, idea) in ideas.iter().enumerate() {
        if positions.contains_key(&idea.idea_id) {
            warn!(id = %idea.idea_id, "Duplicate idea id in feed; likes go to the first");
            continue;
        }
        positions.insert(idea.idea_id, pos);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dense_feed, idea, Call, MockStore};

    fn populated(ideas: Vec<Idea>) -> FeedView {
        let mut feed = FeedView::new();
        feed.begin_fetch();
        feed.apply_fetch(Ok(ideas));
        feed
    }

    #[test]
    fn test_begin_fetch_resets_state() {
        let mut feed = FeedView::new();
        assert_eq!(feed.phase(), FeedPhase::Idle);
        feed.apply_fetch(Err(StoreError::Configuration));
        feed.begin_fetch();
        assert!(feed.is_loading());
        assert_eq!(feed.error(), None);
        assert_eq!(feed.phase(), FeedPhase::Loading);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_ideas() {
        let mut feed = populated(dense_feed(3));
        let before = feed.ideas().to_vec();

        feed.begin_fetch();
        feed.apply_fetch(Err(StoreError::Transport("connection refused".into())));

        assert_eq!(feed.ideas(), before.as_slice());
        assert!(!feed.is_loading());
        assert_eq!(feed.phase(), FeedPhase::Failed);
        assert!(feed.error().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_missing_base_url_surfaces_configuration_error() {
        let store = MockStore::new();
        store.push_list(Err(StoreError::Configuration));
        let mut feed = FeedView::new();
        feed.refresh(&store).await;

        assert_eq!(feed.error(), Some(StoreError::Configuration.to_string().as_str()));
        assert!(!feed.is_loading());
        assert!(feed.ideas().is_empty());
    }

    #[tokio::test]
    async fn test_first_observe_fetches() {
        let store = MockStore::new();
        store.push_list(Ok(dense_feed(2)));
        let mut feed = FeedView::new();
        feed.sync(RefreshSignal::default(), &store).await;
        assert_eq!(store.list_calls(), 1);
        assert_eq!(feed.phase(), FeedPhase::Populated);
        assert_eq!(feed.ideas().len(), 2);
    }

    #[test]
    fn test_observe_only_on_change() {
        let mut feed = FeedView::new();
        let signal = RefreshSignal::default();
        assert!(feed.observe(signal));
        assert!(!feed.observe(signal));
        assert!(feed.observe(signal.next()));
    }

    #[tokio::test]
    async fn test_like_increments_slot_n_minus_id() {
        let store = MockStore::new();
        let n = 5;
        for id in 1..=n {
            let mut feed = populated(dense_feed(n));
            let (task, _ticket) = feed.like(IdeaId(id), &store).unwrap();
            task.run().await;

            let slot = (n - id) as usize;
            for (pos, idea) in feed.ideas().iter().enumerate() {
                let expected = if pos == slot { 1 } else { 0 };
                assert_eq!(idea.likes, expected, "like on {id}, slot {pos}");
            }
        }
    }

    #[tokio::test]
    async fn test_like_kept_when_request_fails() {
        let store = MockStore::new();
        store.fail_writes(StoreError::Http {
            status: 500,
            body: "boom".into(),
        });
        let mut feed = populated(vec![idea(9, 4)]);

        let (task, ticket) = feed.like(IdeaId(9), &store).unwrap();
        task.run().await;

        let outcome = ticket.outcome().await.unwrap();
        assert!(outcome.result.is_err());
        assert_eq!(feed.ideas()[0].likes, 5);
        assert_eq!(feed.error(), None);
    }

    #[tokio::test]
    async fn test_like_uses_id_lookup_for_sparse_ids() {
        let store = MockStore::new();
        let mut feed = populated(vec![idea(42, 0), idea(7, 0), idea(100, 0)]);

        let (task, _) = feed.like(IdeaId(7), &store).unwrap();
        task.run().await;

        assert_eq!(
            feed.ideas().iter().map(|i| i.likes).collect::<Vec<_>>(),
            vec![0, 1, 0]
        );
        assert_eq!(store.calls(), vec![Call::Like(IdeaId(7))]);
    }

    #[tokio::test]
    async fn test_repeated_likes_each_send_a_request() {
        let store = MockStore::new();
        let mut feed = populated(dense_feed(2));

        let first = feed.like(IdeaId(2), &store).unwrap();
        let second = feed.like(IdeaId(2), &store).unwrap();
        second.0.run().await;
        first.0.run().await;

        assert_eq!(feed.ideas()[0].likes, 2);
        assert_eq!(
            store.calls(),
            vec![Call::Like(IdeaId(2)), Call::Like(IdeaId(2))]
        );
    }

    #[test]
    fn test_like_unknown_id_sends_nothing() {
        let store = MockStore::new();
        let mut feed = populated(dense_feed(2));
        assert!(feed.like(IdeaId(99), &store).is_none());
        assert!(store.calls().is_empty());
        assert!(feed.ideas().iter().all(|i| i.likes == 0));
    }

    #[test]
    fn test_overlapping_fetches_apply_in_resolution_order() {
        let mut feed = FeedView::new();
        assert!(feed.observe(RefreshSignal::default()));
        assert!(feed.observe(RefreshSignal::default().next()));

        // The newer fetch resolves first, the older one last.
        feed.apply_fetch(Ok(dense_feed(3)));
        feed.apply_fetch(Ok(dense_feed(2)));

        assert!(!feed.is_loading());
        assert!(matches!(feed.ideas().len(), 2 | 3));
        let last = feed.ideas()[0].idea_id;
        assert!(feed.position_of(last).is_some());
    }

    #[test]
    fn test_duplicate_ids_like_first_occurrence() {
        let feed = populated(vec![idea(1, 0), idea(1, 0)]);
        assert_eq!(feed.position_of(IdeaId(1)), Some(0));
    }
}
