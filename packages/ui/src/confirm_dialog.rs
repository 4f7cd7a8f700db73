use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no question shown over the page. Clicking the backdrop counts as cancel.
#[component]
pub fn ConfirmDialog(
    prompt: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_cancel,
            div {
                class: "confirm-dialog",
                p { class: "confirm-prompt", "{prompt}" }
                div {
                    class: "confirm-actions",
                    button {
                        class: "delete",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                    button {
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
