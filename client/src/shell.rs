//! Refresh signal linking the compose form to the feed.

use tracing::debug;

/// Version counter telling the feed to re-fetch.
///
/// Only inequality matters. The feed remembers the last value it acted on
/// and fetches whenever it sees a different one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RefreshSignal(u64);

impl RefreshSignal {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Couples the compose form to the feed.
#[derive(Clone, Debug, Default)]
pub struct AppShell {
    refresh: RefreshSignal,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_signal(&self) -> RefreshSignal {
        self.refresh
    }

    /// Success callback for the compose form.
    pub fn notify_post_success(&mut self) {
        self.refresh = self.refresh.next();
        debug!(signal = ?self.refresh, "Post succeeded, refreshing feed");
    }
}
