// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

/// An ordered sequence of autocomplete candidates plus the suggestion cursor.
/// Insertion order is preserved and duplicates are kept. The cursor is
/// [`None`] when no suggestion is selected, otherwise an index into the
/// sequence; it never reaches `len()`.
///
/// `next`/`previous` wrap circularly over the FULL sequence, never over a
/// filtered subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    items: Vec<String>,
    selected_index: Option<usize>,
}

impl Suggestions {
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Suggestions {
            items: items.into_iter().map(Into::into).collect(),
            selected_index: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn items(&self) -> &[String] { &self.items }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> { self.selected_index }

    /// The currently selected suggestion text, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Select `index` if it is in range; out-of-range indices clear the
    /// selection (cursor invariant: never ≥ `len()`).
    pub fn select(&mut self, index: usize) {
        self.selected_index = (index < self.items.len()).then_some(index);
    }

    pub fn select_none(&mut self) { self.selected_index = None; }

    /// Advance the cursor circularly; with nothing selected, the first
    /// suggestion is selected. No-op when the sequence is empty.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(index) => (index + 1) % self.items.len(),
            None => 0,
        });
    }

    /// Retreat the cursor circularly; with nothing selected, the last
    /// suggestion is selected. No-op when the sequence is empty.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last_index = self.items.len() - 1;
        self.selected_index = Some(match self.selected_index {
            Some(0) | None => last_index,
            Some(index) => index - 1,
        });
    }
}
