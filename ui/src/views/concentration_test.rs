use dioxus::prelude::*;

use crate::history::HISTORY_PATH;
use crate::t;

/// Entry page of the concentration test flow.
#[component]
pub fn ConcentrationTest() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    let navigator = use_navigator();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-test",
            h1 { {t!("test-page-title")} }
            p { {t!("test-page-intro")} }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| {
                    navigator.push(HISTORY_PATH);
                },
                {t!("test-page-back")}
            }
        }
    }
}
