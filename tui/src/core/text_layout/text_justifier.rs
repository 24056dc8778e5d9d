// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::ChUnit;

/// How [`TextJustifier::justify`] pads each wrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left,
    Centre,
    Right,
    /// No padding at all: the trimmed text comes back as-is, interior
    /// spacing included.
    None,
}

/// Word-wraps then pads text. Stateless: every call recomputes its result from
/// scratch and returns a fresh vector, so repeated calls with the same inputs
/// are trivially idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextJustifier;

impl TextJustifier {
    /// Wrap `text` into lines no wider than `available_width`, then justify.
    /// For [`Justification::Left`], [`Justification::Centre`], and
    /// [`Justification::Right`] every produced line is exactly
    /// `available_width` long. For [`Justification::None`] the trimmed text
    /// comes back with its interior spacing intact, split into width-sized
    /// chunks only when it is wider than `available_width`.
    ///
    /// Words wider than `available_width` are hard-split. A zero width yields
    /// no lines.
    #[must_use]
    pub fn justify(
        text: &str,
        arg_available_width: impl Into<ChUnit>,
        justification: Justification,
    ) -> Vec<String> {
        let available_width = arg_available_width.into().as_usize();
        if available_width == 0 {
            return Vec::new();
        }

        if justification == Justification::None {
            return chunk_preserving_spacing(text.trim(), available_width);
        }

        wrap_words(text.trim(), available_width)
            .into_iter()
            .map(|line| pad_line(&line, available_width, justification))
            .collect()
    }
}

/// Unjustified text is not rewrapped at word boundaries; that would collapse
/// runs of interior spaces into single ones.
fn chunk_preserving_spacing(text: &str, available_width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let characters: Vec<char> = text.chars().collect();
    characters
        .chunks(available_width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn wrap_words(text: &str, available_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    let mut push_word = |word: &str, lines: &mut Vec<String>, current: &mut String| {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count()
            > available_width
        {
            lines.push(std::mem::take(current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    };

    for word in text.split_whitespace() {
        if word.chars().count() > available_width {
            // Hard-split an overlong word into width-sized fragments.
            let characters: Vec<char> = word.chars().collect();
            for fragment in characters.chunks(available_width) {
                let fragment: String = fragment.iter().collect();
                push_word(&fragment, &mut lines, &mut current);
                if current.chars().count() >= available_width {
                    lines.push(std::mem::take(&mut current));
                }
            }
        } else {
            push_word(word, &mut lines, &mut current);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn pad_line(line: &str, available_width: usize, justification: Justification) -> String {
    let line_len = line.chars().count();
    let slack = available_width.saturating_sub(line_len);
    match justification {
        Justification::None => line.to_string(),
        Justification::Left => format!("{line}{}", " ".repeat(slack)),
        Justification::Right => format!("{}{line}", " ".repeat(slack)),
        Justification::Centre => {
            let left = slack / 2;
            let right = slack - left;
            format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_exactly_available_width() {
        for justification in
            [Justification::Left, Justification::Centre, Justification::Right]
        {
            let lines =
                TextJustifier::justify("the quick brown fox", 10, justification);
            assert!(!lines.is_empty());
            for line in &lines {
                assert_eq!(line.chars().count(), 10, "{justification:?}: {line:?}");
            }
        }
    }

    #[test]
    fn test_none_returns_trimmed_unpadded_input() {
        let lines = TextJustifier::justify("  hello  ", 20, Justification::None);
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn test_none_preserves_interior_spacing() {
        let lines = TextJustifier::justify("a  b", 10, Justification::None);
        assert_eq!(lines, vec!["a  b"]);
    }

    #[test]
    fn test_none_chunks_wide_text_without_collapsing_spaces() {
        let lines = TextJustifier::justify("ab  cd", 4, Justification::None);
        assert_eq!(lines, vec!["ab  ", "cd"]);
    }

    #[test]
    fn test_left_centre_right_padding() {
        assert_eq!(
            TextJustifier::justify("hi", 6, Justification::Left),
            vec!["hi    "]
        );
        assert_eq!(
            TextJustifier::justify("hi", 6, Justification::Right),
            vec!["    hi"]
        );
        assert_eq!(
            TextJustifier::justify("hi", 6, Justification::Centre),
            vec!["  hi  "]
        );
    }

    #[test]
    fn test_overlong_word_is_hard_split() {
        let lines = TextJustifier::justify("abcdefgh", 3, Justification::Left);
        assert_eq!(lines, vec!["abc", "def", "gh "]);
    }

    #[test]
    fn test_zero_width_yields_no_lines() {
        assert!(TextJustifier::justify("abc", 0, Justification::Left).is_empty());
    }

    #[test]
    fn test_repeated_calls_produce_identical_results() {
        let first = TextJustifier::justify("a b c d", 3, Justification::Centre);
        let second = TextJustifier::justify("a b c d", 3, Justification::Centre);
        assert_eq!(first, second);
    }
}
