#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use api::ApiConfig;
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
use dioxus::desktop::Config;
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::session::default_source;
use ui::views::{ConcentrationTest, RecentConcentration};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    RecentConcentration {},
    #[route("/test/concentration")]
    ConcentrationTest {},
}

// Shared theme is embedded; desktop ships no separate stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }

    let resource_dir = resolve_resource_dir();

    // The history chart is fixed at 1132px; open wide enough to show it whole.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Focuslog – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 820.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

fn nav_history(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::RecentConcentration {}, "{label}" })
}
fn nav_test(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::ConcentrationTest {}, "{label}" })
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

    // AppNavbar writes the selected locale here; keying the router on it
    // remounts every view with fresh strings.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(default_source);
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        info!(base_url = %config.base_url, "api configured");
        config
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Shared navbar with the desktop `Route` outlet underneath.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}

        Outlet::<Route> {}
    }
}
