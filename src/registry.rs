//! Ordered list of giveaway entrants.
//!
//! Every stored name is non-empty after trimming. Duplicates are kept:
//! each occurrence is an independent entrant with its own odds.

/// Participant list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    names: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one trimmed name. Blank input is ignored.
    ///
    /// Returns `true` if a name was added.
    pub fn add_one(&mut self, text: &str) -> bool {
        let name = text.trim();
        if name.is_empty() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Append every non-blank line of `text`, trimmed, in order.
    ///
    /// Returns how many names were added.
    pub fn add_bulk(&mut self, text: &str) -> usize {
        let before = self.names.len();
        self.names.extend(
            text.lines()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        );
        self.names.len() - before
    }

    /// Remove the name at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() {
            return None;
        }
        Some(self.names.remove(index))
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_one_trims() {
        let mut registry = Registry::new();
        assert!(registry.add_one("  Uzi \t"));
        assert_eq!(registry.names(), ["Uzi"]);
    }

    #[test]
    fn add_one_ignores_blank() {
        let mut registry = Registry::new();
        assert!(!registry.add_one(""));
        assert!(!registry.add_one("   "));
        assert!(!registry.add_one("\n\t"));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn add_bulk_skips_blank_lines() {
        let mut registry = Registry::new();
        assert_eq!(registry.add_bulk("a\n\nb\n  \nc"), 3);
        assert_eq!(registry.names(), ["a", "b", "c"]);
    }

    #[test]
    fn add_bulk_handles_crlf() {
        let mut registry = Registry::new();
        registry.add_bulk("Uzi\r\nTanbir\r\n");
        assert_eq!(registry.names(), ["Uzi", "Tanbir"]);
    }

    #[test]
    fn add_bulk_blank_input_is_noop() {
        let mut registry = Registry::new();
        registry.add_one("keep");
        assert_eq!(registry.add_bulk(""), 0);
        assert_eq!(registry.add_bulk("\n \n\t\n"), 0);
        assert_eq!(registry.names(), ["keep"]);
    }

    #[test]
    fn duplicates_are_separate_entrants() {
        let mut registry = Registry::new();
        registry.add_one("Uzi");
        registry.add_bulk("Uzi\nUzi");
        assert_eq!(registry.count(), 3);
    }

    #[test]
    fn remove_at_in_range() {
        let mut registry = Registry::new();
        registry.add_bulk("a\nb\nc");
        assert_eq!(registry.remove_at(1).as_deref(), Some("b"));
        assert_eq!(registry.names(), ["a", "c"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut registry = Registry::new();
        registry.add_bulk("a\nb");
        assert_eq!(registry.remove_at(2), None);
        assert_eq!(registry.remove_at(usize::MAX), None);
        assert_eq!(registry.names(), ["a", "b"]);
    }

    #[test]
    fn clear_empties() {
        let mut registry = Registry::new();
        registry.add_bulk("a\nb");
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.count(), 0);
    }
}
