//! src/router.rs
//!
//! Panel router: shows exactly one panel of a fixed set and keeps a history
//! stack for back navigation.
//!
//! The router owns its panel handles and only ever toggles their visibility.
//! Every navigation runs a full sweep over the set (hide everything else, show
//! the target), which is linear in the panel count.
//!
//! How history is recorded depends on the [`HistoryPolicy`]:
//!
//! | call            | `PushPrevious`                 | `PushTarget`                              |
//! |-----------------|--------------------------------|-------------------------------------------|
//! | `initialize`    | history `[]`                   | history `[home]`                          |
//! | `navigate_to(t)`| push current, even if `t == current` | ignore `t == current`, else push `t` |
//! | `go_back`       | pop into current, or `AtRoot`  | drop top and show new top, else home, else `AtRoot` |
//! | `go_to_home`    | history `[home]`               | history `[home]`                          |

pub mod history;
pub mod panel_set;
pub mod policy;

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::RouterError;

pub use history::NavigationHistory;
pub use panel_set::{PanelHandle, PanelSet};
pub use policy::{BackOutcome, HistoryPolicy, NavOutcome};

pub struct PanelRouter<Id, P> {
    panels: PanelSet<Id, P>,
    home: Id,
    current: Id,
    history: NavigationHistory<Id>,
    policy: HistoryPolicy,
}

impl<Id, P> PanelRouter<Id, P>
where
    Id: Clone + Eq + fmt::Display,
    P: PanelHandle,
{
    /// Create a router over `panels`. Visibility is untouched until
    /// [`PanelRouter::initialize`] runs.
    pub fn new(panels: PanelSet<Id, P>, home: Id, policy: HistoryPolicy) -> Result<Self, RouterError> {
        if !panels.contains(&home) {
            return Err(RouterError::UnknownPanel(home.to_string()));
        }
        Ok(Self {
            panels,
            current: home.clone(),
            home,
            history: NavigationHistory::new(),
            policy,
        })
    }

    /// Hide every panel and show home. Also resets history to the policy's
    /// starting state.
    pub fn initialize(&mut self) {
        for id in self.panels.unassigned() {
            warn!(panel = %id, "panel has no handle; it will never be shown");
        }
        self.panels.hide_all();
        self.current = self.home.clone();
        self.history.clear();
        if self.policy.seeds_home() {
            self.history.push(self.home.clone());
        }
        self.show_current();
        info!(home = %self.home, policy = %self.policy, "router initialized");
    }

    pub fn navigate_to(&mut self, target: &Id) -> Result<NavOutcome<Id>, RouterError> {
        if !self.panels.contains(target) {
            return Err(RouterError::UnknownPanel(target.to_string()));
        }
        let from = self.current.clone();
        match self.policy {
            HistoryPolicy::PushPrevious => {
                self.history.push(from.clone());
            }
            HistoryPolicy::PushTarget => {
                if *target == self.current {
                    debug!(panel = %target, "already on panel");
                    return Ok(NavOutcome::AlreadyThere);
                }
                self.history.push(target.clone());
            }
        }
        self.current = target.clone();
        self.show_current();
        info!(from = %from, to = %target, depth = self.history.len(), "navigate");
        Ok(NavOutcome::Moved {
            from,
            to: target.clone(),
        })
    }

    pub fn go_to_home(&mut self) {
        self.history.reset_to(self.home.clone());
        self.current = self.home.clone();
        self.show_current();
        info!(home = %self.home, "go home");
    }

    pub fn go_back(&mut self) -> BackOutcome<Id> {
        let outcome = match self.policy {
            HistoryPolicy::PushPrevious => match self.history.pop() {
                Some(prev) => {
                    self.current = prev.clone();
                    self.show_current();
                    BackOutcome::Returned(prev)
                }
                None => BackOutcome::AtRoot,
            },
            HistoryPolicy::PushTarget => {
                if self.history.len() > 1 {
                    self.history.pop();
                    match self.history.peek().cloned() {
                        Some(prev) => {
                            self.current = prev.clone();
                            self.show_current();
                            BackOutcome::Returned(prev)
                        }
                        None => BackOutcome::AtRoot,
                    }
                } else if self.current != self.home {
                    self.history.reset_to(self.home.clone());
                    self.current = self.home.clone();
                    self.show_current();
                    BackOutcome::ReturnedHome
                } else {
                    BackOutcome::AtRoot
                }
            }
        };
        match &outcome {
            BackOutcome::Returned(id) => info!(to = %id, depth = self.history.len(), "back"),
            BackOutcome::ReturnedHome => info!(home = %self.home, "back: history exhausted, reset to home"),
            BackOutcome::AtRoot => debug!(
                current = %self.current,
                history_empty = self.history.is_empty(),
                "back: nothing to return to"
            ),
        }
        outcome
    }

    /// Back triggered by the secondary pointer button; ignored unless history
    /// holds more than one entry.
    pub fn go_back_from_pointer(&mut self) -> Option<BackOutcome<Id>> {
        if self.history.len() > 1 {
            Some(self.go_back())
        } else {
            None
        }
    }

    pub fn current(&self) -> &Id {
        &self.current
    }

    pub fn home(&self) -> &Id {
        &self.home
    }

    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// History bottom-to-top.
    pub fn history(&self) -> &[Id] {
        self.history.as_slice()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn panels(&self) -> &PanelSet<Id, P> {
        &self.panels
    }

    pub fn visible_ids(&self) -> Vec<&Id> {
        self.panels.visible_ids()
    }

    fn show_current(&mut self) {
        if !self.panels.show_only(&self.current) {
            warn!(panel = %self.current, "current panel has no handle; nothing is visible");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::panel_set::tests::Flag;
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Page {
        Home,
        A,
        B,
        C,
    }

    impl fmt::Display for Page {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    use Page::*;

    fn router(policy: HistoryPolicy) -> PanelRouter<Page, Flag> {
        let set = PanelSet::new(
            [Home, A, B, C]
                .into_iter()
                .map(|p| (p, Some(Flag(true))))
                .collect(),
        )
        .unwrap();
        let mut r = PanelRouter::new(set, Home, policy).unwrap();
        r.initialize();
        r
    }

    fn assert_only_current_visible(r: &PanelRouter<Page, Flag>) {
        assert_eq!(r.visible_ids(), vec![r.current()]);
    }

    #[test]
    fn new_rejects_home_outside_set() {
        let set = PanelSet::new(vec![(A, Some(Flag(false)))]).unwrap();
        let err = PanelRouter::new(set, Home, HistoryPolicy::PushTarget).err();
        assert_eq!(err, Some(RouterError::UnknownPanel("Home".into())));
    }

    #[test]
    fn initialize_shows_only_home() {
        for policy in [HistoryPolicy::PushPrevious, HistoryPolicy::PushTarget] {
            let r = router(policy);
            assert_eq!(*r.current(), Home);
            assert_only_current_visible(&r);
        }
        assert!(router(HistoryPolicy::PushPrevious).history().is_empty());
        assert_eq!(router(HistoryPolicy::PushTarget).history(), &[Home]);
    }

    #[test]
    fn initialize_twice_resets_state() {
        for policy in [HistoryPolicy::PushPrevious, HistoryPolicy::PushTarget] {
            let mut r = router(policy);
            r.navigate_to(&A).unwrap();
            r.navigate_to(&B).unwrap();
            r.initialize();
            assert_eq!(*r.current(), Home);
            assert_only_current_visible(&r);
            let expected: &[Page] = if policy.seeds_home() { &[Home] } else { &[] };
            assert_eq!(r.history(), expected);
            assert_eq!(r.history_depth(), expected.len());
        }
    }

    #[test]
    fn every_navigation_leaves_one_visible_panel() {
        for policy in [HistoryPolicy::PushPrevious, HistoryPolicy::PushTarget] {
            let mut r = router(policy);
            for target in [A, B, B, C, Home, A, C] {
                r.navigate_to(&target).unwrap();
                assert_eq!(*r.current(), target);
                assert_only_current_visible(&r);
            }
        }
    }

    #[test]
    fn push_previous_records_the_panel_left_behind() {
        let mut r = router(HistoryPolicy::PushPrevious);
        assert_eq!(
            r.navigate_to(&A).unwrap(),
            NavOutcome::Moved { from: Home, to: A }
        );
        assert_eq!(r.history(), &[Home]);
        r.navigate_to(&A).unwrap();
        assert_eq!(r.history(), &[Home, A]);
    }

    #[test]
    fn push_previous_back_pops_until_empty() {
        let mut r = router(HistoryPolicy::PushPrevious);
        r.navigate_to(&A).unwrap();
        r.navigate_to(&B).unwrap();

        assert_eq!(r.go_back(), BackOutcome::Returned(A));
        assert_eq!(*r.current(), A);
        assert_only_current_visible(&r);

        let back = r.go_back();
        assert!(back.succeeded());
        assert_eq!(back, BackOutcome::Returned(Home));
        assert!(r.history().is_empty());

        let back = r.go_back();
        assert!(!back.succeeded());
        assert_eq!(*r.current(), Home);
        assert_only_current_visible(&r);
    }

    #[test]
    fn push_previous_back_on_empty_history_changes_nothing() {
        let mut r = router(HistoryPolicy::PushPrevious);
        assert_eq!(r.go_back(), BackOutcome::AtRoot);
        assert_eq!(*r.current(), Home);
        assert!(r.history().is_empty());
    }

    #[test]
    fn push_target_ignores_self_navigation() {
        let mut r = router(HistoryPolicy::PushTarget);
        r.navigate_to(&A).unwrap();
        assert_eq!(r.navigate_to(&A).unwrap(), NavOutcome::AlreadyThere);
        assert_eq!(r.history(), &[Home, A]);
        assert_eq!(*r.current(), A);
    }

    #[test]
    fn push_target_back_peeks_new_top() {
        let mut r = router(HistoryPolicy::PushTarget);
        r.navigate_to(&A).unwrap();
        r.navigate_to(&B).unwrap();
        assert_eq!(r.history(), &[Home, A, B]);

        assert_eq!(r.go_back(), BackOutcome::Returned(A));
        assert_eq!(r.history(), &[Home, A]);
        assert_eq!(r.go_back(), BackOutcome::Returned(Home));
        assert_eq!(r.history(), &[Home]);
        assert_eq!(r.go_back(), BackOutcome::AtRoot);
        assert_eq!(*r.current(), Home);
        assert_only_current_visible(&r);
    }

    #[test]
    fn push_target_single_entry_away_from_home_falls_back_home() {
        let mut r = PanelRouter::new(
            PanelSet::new(vec![(Home, Some(Flag(false))), (A, Some(Flag(false)))]).unwrap(),
            Home,
            HistoryPolicy::PushTarget,
        )
        .unwrap();
        r.initialize();
        r.navigate_to(&A).unwrap();
        // history with a single entry that is not home
        r.history.reset_to(A);
        assert_eq!(r.go_back(), BackOutcome::ReturnedHome);
        assert_eq!(*r.current(), Home);
        assert_eq!(r.history(), &[Home]);
        assert_only_current_visible(&r);
    }

    #[test]
    fn go_to_home_resets_history_from_any_state() {
        for policy in [HistoryPolicy::PushPrevious, HistoryPolicy::PushTarget] {
            let mut r = router(policy);
            r.navigate_to(&A).unwrap();
            r.navigate_to(&B).unwrap();
            r.navigate_to(&C).unwrap();
            r.go_to_home();
            assert_eq!(*r.current(), Home);
            assert_eq!(r.history(), &[Home]);
            assert_only_current_visible(&r);
        }
    }

    #[test]
    fn pointer_back_requires_depth_above_one() {
        let mut r = router(HistoryPolicy::PushTarget);
        assert_eq!(r.go_back_from_pointer(), None);
        r.navigate_to(&A).unwrap();
        assert_eq!(r.go_back_from_pointer(), Some(BackOutcome::Returned(Home)));
        assert_eq!(r.go_back_from_pointer(), None);

        let mut r = router(HistoryPolicy::PushPrevious);
        r.navigate_to(&A).unwrap();
        assert_eq!(r.go_back_from_pointer(), None);
        r.navigate_to(&B).unwrap();
        assert_eq!(r.go_back_from_pointer(), Some(BackOutcome::Returned(A)));
    }

    #[test]
    fn unknown_target_leaves_state_alone() {
        let set = PanelSet::new(vec![(Home, Some(Flag(false))), (A, Some(Flag(false)))]).unwrap();
        let mut r = PanelRouter::new(set, Home, HistoryPolicy::PushPrevious).unwrap();
        r.initialize();
        assert_eq!(
            r.navigate_to(&C),
            Err(RouterError::UnknownPanel("C".into()))
        );
        assert_eq!(*r.current(), Home);
        assert!(r.history().is_empty());
    }

    #[test]
    fn unassigned_target_is_current_but_not_visible() {
        let set = PanelSet::new(vec![(Home, Some(Flag(false))), (A, None)]).unwrap();
        let mut r = PanelRouter::new(set, Home, HistoryPolicy::PushTarget).unwrap();
        r.initialize();
        r.navigate_to(&A).unwrap();
        assert_eq!(*r.current(), A);
        assert!(r.visible_ids().is_empty());
        r.go_back();
        assert_only_current_visible(&r);
    }
}
