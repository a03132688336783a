use crate::platform::Platform;

/// In-memory record of successful searches, most recent first.
/// Cleared only by the user or process exit; never written to disk.
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a successful resolution. Returns the display text that was
    /// added so the caller can mirror it into the list widget.
    pub fn record(&mut self, platform: Platform, query: &str) -> &str {
        self.entries
            .insert(0, format!("{}: {}", platform.label(), query.trim()));
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_formats_platform_and_query() {
        let mut history = SearchHistory::new();
        let entry = history.record(Platform::Google, "cats");
        assert_eq!(entry, "Google: cats");
    }

    #[test]
    fn test_record_trims_query() {
        let mut history = SearchHistory::new();
        assert_eq!(history.record(Platform::GitHub, "  rust  "), "GitHub: rust");
    }

    #[test]
    fn test_newest_entry_is_first() {
        let mut history = SearchHistory::new();
        history.record(Platform::YouTube, "first");
        history.record(Platform::Wikipedia, "second");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0], "Wikipedia: second");
        assert_eq!(history.entries()[1], "YouTube: first");
    }

    #[test]
    fn test_each_record_adds_exactly_one_entry() {
        let mut history = SearchHistory::new();
        for i in 0..5 {
            let before = history.len();
            history.record(Platform::Instagram, &format!("query {}", i));
            assert_eq!(history.len(), before + 1);
        }
    }

    #[test]
    fn test_clear_empties_the_list() {
        let mut history = SearchHistory::new();
        history.record(Platform::WhatsApp, "hello");
        history.clear();
        assert!(history.is_empty());
    }
}
