//! Bounded paste history.

use std::collections::VecDeque;

/// Number of entries the ring keeps
pub const HISTORY_CAPACITY: usize = 15;
/// Characters shown per entry in the history picker
pub const DISPLAY_WIDTH: usize = 45;
/// Appended to picker labels that were cut short
pub const ELLIPSIS: &str = "...";

/// Most-recent-first list of distinct clipboard strings.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<String>,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Record `text` as the most recent entry.
    ///
    /// Empty strings are ignored; an existing equal entry moves to the front.
    pub fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(pos) = self.entries.iter().position(|e| e == text) {
            self.entries.remove(pos);
        }
        self.entries.push_front(text.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Picker labels, one per entry, in history order
    pub fn to_display_list(&self) -> Vec<String> {
        self.iter().map(display_label).collect()
    }
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line label for a history entry
fn display_label(entry: &str) -> String {
    let flat = entry.replace(['\n', '\r', '\t'], " ");
    if flat.chars().count() > DISPLAY_WIDTH {
        let mut label: String = flat.chars().take(DISPLAY_WIDTH).collect();
        label.push_str(ELLIPSIS);
        label
    } else {
        flat
    }
}
