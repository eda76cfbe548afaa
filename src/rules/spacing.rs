//! Whitespace rules around brackets and punctuation.

use super::boundary::char_before;
use crate::counters::{Counter, RuleCounters};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Bracket pairs whose inner whitespace is trimmed.
pub const BRACKET_PAIRS: [(char, char); 5] =
    [('«', '»'), ('(', ')'), ('[', ']'), ('{', '}'), ('⟨', '⟩')];

/// Openers that get a separating space from the preceding word.
const OPENERS: [char; 3] = ['(', '[', '«'];

lazy_static! {
    /// One (pattern, replacement) per bracket side: after each opener, before each closer.
    static ref BRACKET_INNER: Vec<(Regex, String)> = BRACKET_PAIRS
        .iter()
        .flat_map(|&(open, close)| {
            let open = regex::escape(&open.to_string());
            let close = regex::escape(&close.to_string());
            [
                (Regex::new(&format!(r"({})\s+", open)).unwrap(), "$1".to_string()),
                (Regex::new(&format!(r"\s+({})", close)).unwrap(), "$1".to_string()),
            ]
        })
        .collect();

    static ref AROUND_PUNCT: Regex =
        Regex::new(r"(\s*)([،؛:؟!.»\]\)\}\(\[«])").unwrap();

    static ref BEFORE_CLOSING: Regex = Regex::new(r"\s+([،؛؟.\)»\]\}⟩])").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").unwrap();
}

/// Strip whitespace just inside `« »`, `( )`, `[ ]`, `{ }` and `⟨ ⟩`.
///
/// Each removed run counts once.
pub fn fix_spaces(text: &str, counters: &mut RuleCounters) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in BRACKET_INNER.iter() {
        let n = pattern.find_iter(&result).count();
        if n == 0 {
            continue;
        }
        counters.add(Counter::BracketInnerSpaces, n as u64);
        result = pattern.replace_all(&result, replacement.as_str()).into_owned();
    }
    result
}

/// Remove whitespace before punctuation and closers, and put a space before an
/// opener that is glued to the previous word.
///
/// An opener at the very start, one that already has whitespace before it, or
/// one nested directly inside another opening bracket is left alone. Only
/// actual edits are counted.
pub fn fix_space_before_punct(text: &str, counters: &mut RuleCounters) -> String {
    let mut n = 0u64;
    let result = AROUND_PUNCT.replace_all(text, |caps: &Captures| {
        let whole = caps.get(0).unwrap();
        let space = &caps[1];
        let punct = &caps[2];
        let is_opener = punct.chars().next().is_some_and(|c| OPENERS.contains(&c));

        if is_opener {
            let glued = space.is_empty()
                && char_before(text, whole.start())
                    .is_some_and(|c| !c.is_whitespace() && !is_opening_bracket(c));
            if glued {
                n += 1;
                format!(" {}", punct)
            } else {
                whole.as_str().to_string()
            }
        } else if space.is_empty() {
            punct.to_string()
        } else {
            n += 1;
            punct.to_string()
        }
    });
    counters.add(Counter::SpaceBeforePunctuation, n);
    result.into_owned()
}

fn is_opening_bracket(c: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(open, _)| open == c)
}

/// Drop whitespace before closing punctuation, then squeeze runs of plain spaces.
pub fn fix_extra_spaces(text: &str, counters: &mut RuleCounters) -> String {
    let before = BEFORE_CLOSING.find_iter(text).count();
    let mut result = if before > 0 {
        BEFORE_CLOSING.replace_all(text, "$1").into_owned()
    } else {
        text.to_string()
    };

    let runs = SPACE_RUN.find_iter(&result).count();
    if runs > 0 {
        result = SPACE_RUN.replace_all(&result, " ").into_owned();
    }

    counters.add(Counter::ExtraSpaces, (before + runs) as u64);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_spaces_trims_inside_brackets() {
        let mut counters = RuleCounters::new();
        let out = fix_spaces("« سلام » ( یک ) [ دو ] { سه } ⟨ چهار ⟩", &mut counters);
        assert_eq!(out, "«سلام» (یک) [دو] {سه} ⟨چهار⟩");
        assert_eq!(counters.get(Counter::BracketInnerSpaces), 10);
    }

    #[test]
    fn test_fix_spaces_counts_runs_not_chars() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_spaces("(   الف)", &mut counters), "(الف)");
        assert_eq!(counters.get(Counter::BracketInnerSpaces), 1);
    }

    #[test]
    fn test_space_before_punct_removed() {
        let mut counters = RuleCounters::new();
        let out = fix_space_before_punct("سلام ، خوبی ؟ بله .", &mut counters);
        assert_eq!(out, "سلام، خوبی؟ بله.");
        assert_eq!(counters.get(Counter::SpaceBeforePunctuation), 3);
    }

    #[test]
    fn test_space_inserted_before_glued_opener() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_space_before_punct("کتاب(جلد اول)", &mut counters), "کتاب (جلد اول)");
        assert_eq!(counters.get(Counter::SpaceBeforePunctuation), 1);
    }

    #[test]
    fn test_opener_at_start_or_spaced_untouched() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_space_before_punct("«سلام»", &mut counters), "«سلام»");
        assert_eq!(fix_space_before_punct("گفت «سلام»", &mut counters), "گفت «سلام»");
        assert!(counters.is_empty());
    }

    #[test]
    fn test_nested_opener_untouched() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_space_before_punct("او گفت «(بله)»", &mut counters), "او گفت «(بله)»");
        assert_eq!(fix_space_before_punct("((الف))", &mut counters), "((الف))");
        assert_eq!(fix_space_before_punct("x)(y", &mut counters), "x) (y");
        assert_eq!(counters.get(Counter::SpaceBeforePunctuation), 1);
    }

    #[test]
    fn test_extra_spaces() {
        let mut counters = RuleCounters::new();
        let out = fix_extra_spaces("یک   دو  سه ، چهار )", &mut counters);
        assert_eq!(out, "یک دو سه، چهار)");
        assert_eq!(counters.get(Counter::ExtraSpaces), 4);
    }

    #[test]
    fn test_extra_spaces_keeps_single_spaces() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_extra_spaces("یک دو سه", &mut counters), "یک دو سه");
        assert!(counters.is_empty());
    }
}
