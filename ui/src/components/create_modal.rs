use dioxus::prelude::*;

use ideaboard_client::{ConfirmationDialog, DismissReason, ScrollTarget};

use super::shared_state::use_store;

/// The page body. Suspending it sets `overflow: hidden`; releasing always
/// sets `overflow: unset`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScroll;

impl ScrollTarget for BodyScroll {
    #[cfg(target_family = "wasm")]
    fn set_suspended(&self, suspended: bool) {
        let overflow = if suspended { "hidden" } else { "unset" };
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            if let Err(e) = body.style().set_property("overflow", overflow) {
                tracing::warn!("Failed to set body overflow: {:?}", e);
            }
        }
    }

    #[cfg(not(target_family = "wasm"))]
    fn set_suspended(&self, _suspended: bool) {}
}

/// "Create this idea?" modal. The host owns the dialog state and opens it;
/// this renders it and handles confirm and every dismiss path.
#[component]
pub fn CreateModal(
    mut dialog: Signal<ConfirmationDialog<BodyScroll>>,
    on_confirm: Option<EventHandler>,
) -> Element {
    let store = use_store();

    if !dialog.read().is_open() {
        return rsx! {};
    }

    let confirm = move |_| {
        let task = dialog.read().begin_confirm(&store);
        spawn(async move {
            if let Some((task, _ticket)) = task {
                task.run().await;
                if let Some(handler) = on_confirm {
                    handler.call(());
                }
            }
            dialog.write().close();
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                // Focus so Escape reaches the keydown handler.
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                dialog.write().handle_key(&evt.key().to_string());
            },
            onclick: move |_| dialog.write().dismiss(DismissReason::Backdrop),
            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "作成確認" }
                    button {
                        class: "close-button",
                        "aria-label": "閉じる",
                        onclick: move |_| dialog.write().dismiss(DismissReason::CloseButton),
                        "×"
                    }
                }
                div { class: "modal-body",
                    p { "このアイデアを作成しますか？" }
                }
                div { class: "modal-footer",
                    button { class: "confirm-button", onclick: confirm, "はい" }
                    button {
                        class: "cancel-button",
                        onclick: move |_| dialog.write().dismiss(DismissReason::Cancel),
                        "いいえ"
                    }
                }
            }
        }
    }
}
