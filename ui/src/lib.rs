//! Shared UI crate for Focuslog: the recent concentration history view and
//! everything it is built from.

pub mod chart;
pub mod core;
pub mod history;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod modal;
    pub use modal::Modal;

    pub mod way;
    pub use way::{WayCategory, WaysToImprove};
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
