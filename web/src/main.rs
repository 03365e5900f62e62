use api::ApiConfig;
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::session::default_source;
use ui::views::{ConcentrationTest, RecentConcentration};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    RecentConcentration {},
    #[route("/test/concentration")]
    ConcentrationTest {},
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_history(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::RecentConcentration {},
        "{label}"
    })
}
fn nav_test(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::ConcentrationTest {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        ui::i18n::init();
        ui::chart::register_defaults();
        register_nav(NavBuilder {
            history: nav_history,
            test: nav_test,
        });
    });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(default_source);
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        info!(base_url = %config.base_url, "api configured");
        config
    });

    rsx! {
        document::Style { "{THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Shared navbar with the web `Route` outlet underneath.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
