use dioxus::prelude::*;

use crate::t;

/// Overlay dialog. Both the close button and a backdrop click call `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let close_label = t!("modal-close");

    rsx! {
        div { class: "modal", role: "dialog", "aria-modal": "true",
            div { class: "modal__backdrop", onclick: move |_| on_close.call(()) }
            div { class: "modal__panel",
                div { class: "modal__header",
                    h2 { class: "modal__title", "{title}" }
                    button {
                        r#type: "button",
                        class: "modal__close",
                        aria_label: "{close_label}",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal__body", {children} }
            }
        }
    }
}
