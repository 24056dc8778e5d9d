// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

/// Comparison mode for [`PrefixSuggestionMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    CaseSensitive,
    #[default]
    IgnoreCase,
}

/// Strategy that finds the best suggestion for the current input. Pure: no
/// side effects, swappable at the [`crate::LineEditor`] seam.
pub trait SuggestionMatcher {
    /// Index of the best match, or [`None`] when `input` is empty or nothing
    /// matches.
    fn find_match(&self, input: &str, suggestions: &[String]) -> Option<usize>;
}

/// Default matcher: the first suggestion whose prefix equals `input` under
/// ordinal comparison (case-insensitive by default).
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixSuggestionMatcher {
    pub case_sensitivity: CaseSensitivity,
}

impl SuggestionMatcher for PrefixSuggestionMatcher {
    fn find_match(&self, input: &str, suggestions: &[String]) -> Option<usize> {
        if input.is_empty() {
            return None;
        }
        suggestions.iter().position(|candidate| match self.case_sensitivity {
            CaseSensitivity::CaseSensitive => candidate.starts_with(input),
            CaseSensitivity::IgnoreCase => {
                starts_with_ignore_case(candidate, input)
            }
        })
    }
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    let mut candidate_chars = candidate.chars();
    for prefix_char in prefix.chars() {
        match candidate_chars.next() {
            Some(candidate_char)
                if candidate_char.eq_ignore_ascii_case(&prefix_char) => {}
            _ => return false,
        }
    }
    true
}
