//! src/router/panel_set.rs
//!
//! Fixed, ordered mapping from panel identifier to an optional panel handle.
//!
//! A slot without a handle stands for a panel reference that was never wired
//! up. Such slots are skipped whenever visibility is swept.

use std::fmt;

use crate::error::RouterError;

/// Anything the router can show or hide.
pub trait PanelHandle {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

pub struct PanelSlot<Id, P> {
    pub id: Id,
    pub handle: Option<P>,
}

pub struct PanelSet<Id, P> {
    slots: Vec<PanelSlot<Id, P>>,
}

impl<Id, P> PanelSet<Id, P>
where
    Id: Clone + Eq + fmt::Display,
    P: PanelHandle,
{
    /// Build the set, rejecting an empty list or a repeated identifier.
    pub fn new(slots: Vec<(Id, Option<P>)>) -> Result<Self, RouterError> {
        if slots.is_empty() {
            return Err(RouterError::EmptyPanelSet);
        }
        let mut out: Vec<PanelSlot<Id, P>> = Vec::with_capacity(slots.len());
        for (id, handle) in slots {
            if out.iter().any(|s| s.id == id) {
                return Err(RouterError::DuplicatePanel(id.to_string()));
            }
            out.push(PanelSlot { id, handle });
        }
        Ok(Self { slots: out })
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.slots.iter().any(|s| &s.id == id)
    }

    pub fn slots(&self) -> &[PanelSlot<Id, P>] {
        &self.slots
    }

    /// Identifiers of slots that have no handle.
    pub fn unassigned(&self) -> impl Iterator<Item = &Id> {
        self.slots
            .iter()
            .filter(|s| s.handle.is_none())
            .map(|s| &s.id)
    }

    pub fn hide_all(&mut self) {
        for slot in &mut self.slots {
            if let Some(h) = slot.handle.as_mut() {
                h.set_visible(false);
            }
        }
    }

    /// Full sweep: hide every panel except `target`, then show `target`.
    ///
    /// Returns `false` when `target` has no handle, in which case nothing ends
    /// up visible.
    pub fn show_only(&mut self, target: &Id) -> bool {
        let mut shown = false;
        for slot in &mut self.slots {
            let Some(h) = slot.handle.as_mut() else {
                continue;
            };
            if &slot.id == target {
                h.set_visible(true);
                shown = true;
            } else {
                h.set_visible(false);
            }
        }
        shown
    }

    pub fn visible_ids(&self) -> Vec<&Id> {
        self.slots
            .iter()
            .filter(|s| s.handle.as_ref().is_some_and(|h| h.is_visible()))
            .map(|s| &s.id)
            .collect()
    }
}
