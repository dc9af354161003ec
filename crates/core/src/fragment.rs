//! Fragments and the fragment store (the "virtual clipboard").

/// One captured piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    /// Captured from an empty selection as a whole line
    is_whole_line: bool,
}

impl Fragment {
    pub fn new(text: impl Into<String>, is_whole_line: bool) -> Self {
        Self {
            text: text.into(),
            is_whole_line,
        }
    }

    /// Fragment standing in for text another application put on the clipboard
    pub fn from_clipboard(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_whole_line(&self) -> bool {
        self.is_whole_line
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Collapse a capture to a single fragment when every fragment is identical.
///
/// Identity covers both text and the whole-line flag. The collapsed store
/// then broadcasts its one fragment to every paste target.
pub fn collapse_identical(fragments: &[Fragment]) -> Vec<Fragment> {
    match fragments.split_first() {
        Some((first, rest)) if rest.iter().all(|f| f == first) => vec![first.clone()],
        _ => fragments.to_vec(),
    }
}

/// Most recent set of copied fragments, in selection order.
#[derive(Debug, Clone, Default)]
pub struct FragmentStore {
    fragments: Vec<Fragment>,
}

impl FragmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replace the whole store
    pub fn replace(&mut self, fragments: Vec<Fragment>) {
        self.fragments = fragments;
    }

    /// Fragment texts joined with `separator`
    pub fn joined(&self, separator: &str) -> String {
        self.fragments
            .iter()
            .map(Fragment::text)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Total characters over all fragments
    pub fn char_count(&self) -> usize {
        self.fragments.iter().map(Fragment::char_len).sum()
    }

    /// Resynchronize with the system clipboard.
    ///
    /// If the clipboard no longer holds the fragments joined by `"\n"`, it was
    /// changed outside this store and becomes the single fragment. An empty
    /// store is seeded from the clipboard the same way. Returns `true` when
    /// the store was replaced.
    pub fn reconcile(&mut self, clipboard: &str) -> bool {
        if self.is_empty() || self.joined("\n") != clipboard {
            self.fragments = vec![Fragment::from_clipboard(clipboard)];
            return true;
        }
        false
    }
}
