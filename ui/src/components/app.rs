use dioxus::prelude::*;

use ideaboard_common::DEFAULT_USERNAME;

use super::post_form::PostForm;
use super::shared_state::provide_shared_state;
use super::timeline::Timeline;

#[component]
pub fn App() -> Element {
    provide_shared_state();

    rsx! {
        Header {}
        div { class: "main-screen",
            Timeline {}
            PostForm {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            div { class: "header-inner",
                a { class: "header-logo", href: "/",
                    img { src: "logo.png", alt: "Ideatter Logo" }
                }
                div { class: "userDisplay", "User: {DEFAULT_USERNAME}" }
            }
        }
    }
}
