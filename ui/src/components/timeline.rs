use dioxus::prelude::*;

use ideaboard_client::{ConfirmationDialog, FeedPhase, FeedView, IdeaStore};

use super::create_modal::{BodyScroll, CreateModal};
use super::shared_state::{use_app_shell, use_store};

/// The feed of everyone's ideas.
///
/// Fetches on mount and again whenever the shell's refresh signal changes.
#[component]
pub fn Timeline() -> Element {
    let store = use_store();
    let shell = use_app_shell();
    let mut feed = use_signal(FeedView::new);
    let mut dialog = use_signal(|| ConfirmationDialog::new(BodyScroll));

    let fetch_store = store.clone();
    use_effect(move || {
        let signal = shell.read().refresh_signal();
        if !feed.write().observe(signal) {
            return;
        }
        let store = fetch_store.clone();
        spawn(async move {
            let result = store.list_ideas().await;
            feed.write().apply_fetch(result);
        });
    });

    let view = feed.read();
    let loading = matches!(view.phase(), FeedPhase::Idle | FeedPhase::Loading);
    let error = view.error().map(String::from);
    let ideas = view.ideas().to_vec();
    drop(view);

    rsx! {
        div { class: "timeline-screen",
            div { class: "container",
                if let Some(err) = error {
                    div { class: "bg-red-500 text-white p-3 rounded-lg mb-4", "{err}" }
                }
                main {
                    h2 { class: "timeline-title", "みんなのアイデア" }
                    if loading {
                        p { class: "loading-message", "読み込み中..." }
                    } else {
                        div { class: "timeline-list",
                            {ideas.into_iter().map(|idea| {
                                let id = idea.idea_id;
                                let initial = idea.avatar_initial();
                                let timestamp = idea.display_timestamp();
                                let likes = idea.likes;
                                let like_store = store.clone();
                                rsx! {
                                    div { class: "timeline-idea", key: "{id}",
                                        div { class: "idea-header",
                                            div { class: "idea-avatar", "{initial}" }
                                            div {
                                                p { class: "idea-username", "{idea.username}" }
                                                p { class: "idea-timestamp", "{timestamp}" }
                                            }
                                        }
                                        p { class: "idea-text", "{idea.explanation_a}" }
                                        p { class: "idea-text", "{idea.explanation_b}" }
                                        p { class: "idea-text", "{idea.explanation_c}" }
                                        div { class: "idea-likes-area",
                                            button {
                                                class: "idea-likes-button",
                                                onclick: move |_| {
                                                    if let Some((task, _ticket)) = feed.write().like(id, &like_store) {
                                                        spawn(task.run());
                                                    }
                                                },
                                                "いいね"
                                            }
                                            p { class: "idea-likes-counter", "{likes} likes" }
                                        }
                                        div { class: "idea-likes-area",
                                            button {
                                                class: "idea-create-button",
                                                onclick: move |_| dialog.write().open(Some(id)),
                                                "作ってみたい!!"
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
        CreateModal { dialog }
    }
}
