//! src/router/history.rs
//!
//! LIFO record of visited panel identifiers used for back navigation.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationHistory<Id> {
    /// oldest at index 0, top of the stack at the end
    entries: Vec<Id>,
}

impl<Id> Default for NavigationHistory<Id> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<Id: Clone> NavigationHistory<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: Id) {
        self.entries.push(id);
    }

    pub fn pop(&mut self) -> Option<Id> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&Id> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop everything and leave `root` as the only entry.
    pub fn reset_to(&mut self, root: Id) {
        self.entries.clear();
        self.entries.push(root);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries bottom-to-top.
    pub fn as_slice(&self) -> &[Id] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_most_recent_first() {
        let mut h = NavigationHistory::new();
        h.push("a");
        h.push("b");
        assert_eq!(h.peek(), Some(&"b"));
        assert_eq!(h.pop(), Some("b"));
        assert_eq!(h.pop(), Some("a"));
        assert_eq!(h.pop(), None);
        assert!(h.is_empty());
    }

    #[test]
    fn reset_to_leaves_single_root() {
        let mut h = NavigationHistory::new();
        h.push(1);
        h.push(2);
        h.push(3);
        h.reset_to(0);
        assert_eq!(h.as_slice(), &[0]);
    }
}
