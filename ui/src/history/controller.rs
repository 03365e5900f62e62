//! State behind the recent-history view.
//!
//! The view drives a [`RecentHistory`] through an explicit lifecycle:
//!
//! ```text
//! Constructed --attach--> Attached --complete(success)--> Loaded
//!      \                     \                              /
//!       `------------------ detach ------------------------'--> Detached
//! ```
//!
//! `attach` hands out the fetch decision exactly once. A completion is only
//! applied while `Attached`, so a late response after unmount (or a second
//! response) never touches state or raises an alert.

use std::cell::Cell;
use std::rc::Rc;

use api::{Credential, ResponseEnvelope};
use tracing::{debug, warn};

use crate::chart::ChartData;
use crate::t;

use super::{chart_data, HistoryList};

/// Route of the concentration test entry page.
pub const TEST_ENTRY_PATH: &str = "/test/concentration";

/// Route of the history view itself.
pub const HISTORY_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Attached,
    Loaded,
    Detached,
}

/// What the mount hook should do.
#[derive(Debug, Clone, PartialEq)]
pub enum MountAction {
    Fetch(Credential),
    NotLoggedIn,
    AlreadyMounted,
}

/// Messages for the blocking alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertMessage {
    ServerProblem,
    AuthFailed,
    /// Unrecognized status code; the dialog still blocks but carries no text.
    Unrecognized,
}

impl AlertMessage {
    pub fn text(&self) -> String {
        match self {
            Self::ServerProblem => t!("alert-server-problem"),
            Self::AuthFailed => t!("alert-auth-failed"),
            Self::Unrecognized => String::new(),
        }
    }
}

/// Outcome of feeding a response into [`RecentHistory::complete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// History replaced with this many records.
    Loaded(usize),
    /// Failure; state untouched, show the alert.
    Alert(AlertMessage),
    /// Arrived after detach or after a previous completion; ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentHistory {
    lifecycle: Lifecycle,
    history: HistoryList,
    modal_open: bool,
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentHistory {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Constructed,
            history: HistoryList::default(),
            modal_open: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Mount. Only the first call may request a fetch; a missing credential
    /// means "not logged in" and the history stays empty.
    pub fn attach(&mut self, credential: Option<Credential>) -> MountAction {
        if self.lifecycle != Lifecycle::Constructed {
            return MountAction::AlreadyMounted;
        }
        self.lifecycle = Lifecycle::Attached;

        match credential {
            Some(credential) => MountAction::Fetch(credential),
            None => {
                debug!("no credential; skipping history fetch");
                MountAction::NotLoggedIn
            }
        }
    }

    /// Apply the fetch result. `None` is a missing envelope.
    pub fn complete(&mut self, envelope: Option<ResponseEnvelope>) -> Completion {
        if self.lifecycle != Lifecycle::Attached {
            debug!(lifecycle = ?self.lifecycle, "dropping stale history response");
            return Completion::Stale;
        }

        match envelope {
            None | Some(ResponseEnvelope::DatabaseError) => {
                Completion::Alert(AlertMessage::ServerProblem)
            }
            Some(ResponseEnvelope::AuthFailure) => Completion::Alert(AlertMessage::AuthFailed),
            Some(ResponseEnvelope::Unknown(code)) => {
                warn!(%code, "unrecognized history response code");
                Completion::Alert(AlertMessage::Unrecognized)
            }
            Some(ResponseEnvelope::Success(records)) => {
                self.history = HistoryList::from_backend_order(records);
                self.lifecycle = Lifecycle::Loaded;
                Completion::Loaded(self.history.len())
            }
        }
    }

    pub fn detach(&mut self) {
        self.lifecycle = Lifecycle::Detached;
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    /// Destination of the "take the test" action; independent of history.
    pub fn take_test_destination(&self) -> &'static str {
        TEST_ENTRY_PATH
    }

    pub fn chart_data(&self) -> ChartData {
        chart_data(&self.history)
    }
}

/// Shared "still mounted" flag checked by the fetch task before it writes.
#[derive(Debug, Clone)]
pub struct AttachFlag(Rc<Cell<bool>>);

impl Default for AttachFlag {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl AttachFlag {
    pub fn is_attached(&self) -> bool {
        self.0.get()
    }

    pub fn detach(&self) {
        self.0.set(false);
    }
}
