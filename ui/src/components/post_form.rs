use dioxus::prelude::*;

use ideaboard_client::{CompositionView, IdeaStore};
use ideaboard_common::draft::{CONTENT_MAX_CHARS, DESCRIPTION_MAX_CHARS, USERNAME_MAX_CHARS};
use ideaboard_common::idea::avatar_initial;

use super::shared_state::{use_app_shell, use_store};

#[component]
pub fn PostForm() -> Element {
    let store = use_store();
    let mut shell = use_app_shell();
    let mut compose = use_signal(CompositionView::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(idea) = compose.write().prepare() else {
            return;
        };
        let store = store.clone();
        spawn(async move {
            let result = store.create_idea(&idea).await;
            if compose.write().finish(result) {
                shell.write().notify_post_success();
            }
        });
    };

    let view = compose.read();
    let username = view.draft().username().to_string();
    let initial = avatar_initial(&username);
    let content = view.draft().content().to_string();
    let description = view.draft().description().to_string();
    let show_description = view.draft().description_visible();
    let near_limit = view.draft().description_near_limit();
    let content_counter = view.content_counter();
    let description_counter = view.description_counter();
    let toggle_label = view.toggle_label();
    let error = view.error().map(String::from);
    drop(view);

    rsx! {
        div { class: "post-screen",
            div { class: "post-container",
                div { class: "post-form",
                    form { onsubmit: submit,
                        div { class: "post-header",
                            div { class: "idea-avatar", "{initial}" }
                            textarea {
                                class: "post-namearea",
                                rows: "1",
                                placeholder: "ユーザー名",
                                maxlength: "{USERNAME_MAX_CHARS}",
                                value: "{username}",
                                oninput: move |evt| compose.write().set_username(&evt.value()),
                            }
                        }
                        div { class: "post-middlearea",
                            textarea {
                                class: "post-explanation-area",
                                rows: "3",
                                placeholder: "あなたのアイデアを教えて!!  (100文字以内)",
                                maxlength: "{CONTENT_MAX_CHARS}",
                                value: "{content}",
                                oninput: move |evt| compose.write().set_content(&evt.value()),
                            }
                            div { class: "count-area", "{content_counter}" }
                            button {
                                r#type: "button",
                                class: "post-toggle-button",
                                onclick: move |_| compose.write().toggle_description(),
                                "{toggle_label}"
                            }
                            if show_description {
                                div { class: "description-container",
                                    textarea {
                                        class: "post-deacription-area",
                                        rows: "3",
                                        placeholder: "詳細な説明も入力してみよう (2000文字以内)",
                                        maxlength: "{DESCRIPTION_MAX_CHARS}",
                                        value: "{description}",
                                        oninput: move |evt| compose.write().set_description(&evt.value()),
                                    }
                                    div {
                                        class: if near_limit { "character-count warning" } else { "character-count" },
                                        "{description_counter}"
                                    }
                                }
                            }
                            if let Some(err) = error {
                                div { class: "error-message-area", "{err}" }
                            }
                        }
                        div { class: "post-buttonarea",
                            button { r#type: "submit", class: "post-submit-button", "ツイート" }
                        }
                    }
                }
            }
        }
    }
}
