//! Side effects of the history view, swappable through Dioxus context.

use std::rc::Rc;

use api::{ApiConfig, Credential, ResponseEnvelope};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::core::platform::show_alert;

pub type FetchFuture = LocalBoxFuture<'static, Option<ResponseEnvelope>>;

/// The history fetch and the blocking alert.
///
/// Shells don't provide one; the view falls back to [`HistoryEffects::live`].
#[derive(Clone)]
pub struct HistoryEffects {
    fetch: Rc<dyn Fn(ApiConfig, Credential) -> FetchFuture>,
    alert: Rc<dyn Fn(&str)>,
}

impl HistoryEffects {
    pub fn new(
        fetch: impl Fn(ApiConfig, Credential) -> FetchFuture + 'static,
        alert: impl Fn(&str) + 'static,
    ) -> Self {
        Self {
            fetch: Rc::new(fetch),
            alert: Rc::new(alert),
        }
    }

    /// Real backend and platform alert.
    pub fn live() -> Self {
        Self::new(
            |config, credential| {
                async move { api::fetch_recent_history(&config, &credential).await }.boxed_local()
            },
            show_alert,
        )
    }

    pub fn fetch(&self, config: ApiConfig, credential: Credential) -> FetchFuture {
        (self.fetch)(config, credential)
    }

    pub fn alert(&self, message: &str) {
        (self.alert)(message)
    }
}
