//! src/router/policy.rs
//!
//! History policies and the outcomes reported by navigation calls.

use std::fmt;

use serde::Deserialize;

/// How navigation records history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryPolicy {
    /// Push the panel being left. History starts empty, self-navigation still
    /// pushes, and back pops straight into the previous panel.
    PushPrevious,

    /// Push the panel being entered. History starts as `[home]`, navigating
    /// to the current panel is ignored, and back discards the top then shows
    /// the new top, falling back to home when there is nothing left.
    #[default]
    PushTarget,
}

impl HistoryPolicy {
    /// Whether the home panel is recorded when the router is initialized.
    pub fn seeds_home(self) -> bool {
        matches!(self, HistoryPolicy::PushTarget)
    }
}

impl fmt::Display for HistoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryPolicy::PushPrevious => f.write_str("push-previous"),
            HistoryPolicy::PushTarget => f.write_str("push-target"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome<Id> {
    Moved { from: Id, to: Id },
    AlreadyThere,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackOutcome<Id> {
    /// Returned to this panel from history.
    Returned(Id),
    /// History ran out away from home; the router reset to home.
    ReturnedHome,
    /// Nothing to go back to; state unchanged.
    AtRoot,
}

impl<Id> BackOutcome<Id> {
    pub fn succeeded(&self) -> bool {
        !matches!(self, BackOutcome::AtRoot)
    }
}
