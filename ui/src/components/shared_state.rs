use dioxus::prelude::*;

use ideaboard_client::{AppShell, ClientConfig, IdeaStoreClient};

/// Provide the store client and the shell at the top of the app.
///
/// The store URL is baked in at build time from `IDEA_API_URL`.
pub fn provide_shared_state() {
    use_context_provider(|| IdeaStoreClient::new(ClientConfig::from_build_env()));
    use_context_provider(|| Signal::new(AppShell::new()));
}

pub fn use_store() -> IdeaStoreClient {
    use_context::<IdeaStoreClient>()
}

/// Owner of the refresh signal linking the post form to the timeline.
pub fn use_app_shell() -> Signal<AppShell> {
    use_context::<Signal<AppShell>>()
}
