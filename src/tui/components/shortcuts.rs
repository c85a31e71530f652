//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k, g/G, PgUp/PgDn for navigation
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        self.shortcuts
            .push(Shortcut::new("PgUp/PgDn", "Page Up/Dn"));
        self
    }

    /// Add / for search
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self
    }

    /// Add n for new, e for edit
    pub fn with_edit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("n", "New"));
        self.shortcuts.push(Shortcut::new("e", "Edit"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_navigation().build();

        assert_eq!(shortcuts.len(), 3);
        assert!(shortcuts.iter().any(|s| s.key == "j/k"));
        assert!(shortcuts.iter().any(|s| s.key == "g/G"));
        assert!(shortcuts.iter().any(|s| s.key == "PgUp/PgDn"));
    }

    #[test]
    fn test_builder_keeps_order() {
        let shortcuts = ShortcutsBuilder::new()
            .with_edit()
            .add("r", "Reload")
            .with_quit()
            .build();

        let keys: Vec<&str> = shortcuts.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["n", "e", "r", "q"]);
    }

    #[test]
    fn test_empty_shortcuts() {
        assert!(ShortcutsBuilder::new().build().is_empty());
    }
}
