use api::ApiConfig;
use dioxus::prelude::*;
use tracing::debug;

use crate::chart::LineChart;
use crate::components::{Modal, WaysToImprove};
use crate::core::session::{default_source, CredentialSource};
use crate::history::{
    chart_options, AttachFlag, Completion, HistoryEffects, MountAction, RecentHistory,
    CHART_HEIGHT, CHART_WIDTH,
};
use crate::t;

/// Category handed to the "ways to improve" block.
const WAY_CATEGORY: &str = "집중력";

/// Recent concentration-test history: chart, tips modal and the way into the test.
#[component]
pub fn RecentConcentration() -> Element {
    // Subscribe to the global language code (if provided) so labels refresh on switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let credentials = try_use_context::<CredentialSource>();
    let config = try_use_context::<ApiConfig>();
    let effects = try_use_context::<HistoryEffects>();

    let mut state = use_signal(RecentHistory::new);
    let attached = use_hook(AttachFlag::default);

    // One-shot load on first mount; later renders never reread or refetch.
    use_hook({
        let attached = attached.clone();
        move || {
            let credential = credentials.unwrap_or_else(default_source).credential();
            let config = config.unwrap_or_else(ApiConfig::from_env);
            let effects = effects.unwrap_or_else(HistoryEffects::live);

            spawn(async move {
                let action = state.write().attach(credential);
                let MountAction::Fetch(credential) = action else {
                    return;
                };

                let envelope = effects.fetch(config, credential).await;
                if !attached.is_attached() {
                    debug!("history response arrived after unmount");
                    return;
                }

                let completion = state.write().complete(envelope);
                match completion {
                    Completion::Alert(message) => effects.alert(&message.text()),
                    Completion::Loaded(count) => debug!(count, "history loaded"),
                    Completion::Stale => {}
                }
            });
        }
    });

    use_drop(move || {
        attached.detach();
        if let Ok(mut state) = state.try_write() {
            state.detach();
        }
    });

    let (chart, modal_open, destination) = {
        let snapshot = state.read();
        (
            snapshot.chart_data(),
            snapshot.is_modal_open(),
            snapshot.take_test_destination(),
        )
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        div { class: "recent",
            div { class: "recent__top",
                div { class: "recent__title-box",
                    div { class: "recent__title", {t!("recent-title")} }
                    button {
                        r#type: "button",
                        class: "recent__info-button",
                        onclick: move |_| state.write().toggle_modal(),
                        {t!("recent-way-button")}
                        span { class: "recent__info-icon", aria_hidden: "true" }
                    }
                    if modal_open {
                        Modal {
                            title: t!("recent-way-modal-title"),
                            on_close: move |_| state.write().toggle_modal(),
                            WaysToImprove { category: WAY_CATEGORY.to_string() }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary button--middle",
                    onclick: move |_| {
                        navigator().push(destination);
                    },
                    {t!("recent-take-test")}
                }
            }
            div { class: "recent__chart-box",
                LineChart {
                    data: chart,
                    options: chart_options(),
                    width: CHART_WIDTH,
                    height: CHART_HEIGHT,
                }
            }
        }
    }
}
