//! Word boundaries for Persian text.
//!
//! A word character is a letter, a digit or `_`. ZWNJ and combining marks (the
//! ezafe kasre, tanvin, shadda) are not, so a ZWNJ-joined affix or a trailing
//! diacritic ends the word before it. The regex crate's `\b` counts both as word
//! characters, so rules anchor on these helpers instead.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WORD_CHAR: Regex = Regex::new(r"^[\p{L}\p{N}_]$").unwrap();
}

pub(crate) fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

pub(crate) fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

/// True when exactly one side of `pos` is a word character.
pub(crate) fn is_boundary(text: &str, pos: usize) -> bool {
    let before = char_before(text, pos).is_some_and(is_word_char);
    let after = text[pos..].chars().next().is_some_and(is_word_char);
    before != after
}

/// The furthest end in `text[from..to]`, at least one char past `from`, that
/// sits on a boundary. This is where a greedy run followed by `\b` settles.
pub(crate) fn last_boundary(text: &str, from: usize, to: usize) -> Option<usize> {
    text[from..to]
        .char_indices()
        .rev()
        .map(|(i, c)| from + i + c.len_utf8())
        .find(|&end| is_boundary(text, end))
}

/// What a rule makes of one candidate match.
pub(crate) enum Scan {
    /// Rewrite from the match start up to `end` and resume there.
    Replace { end: usize, with: String },
    /// A real match the rule declines; copy it through and resume at `end`.
    Keep { end: usize },
    /// No match at this start; search again from the next character.
    Retry,
}

/// Leftmost-first substitution where each candidate may be rejected, shortened
/// or rewritten by `decide`.
pub(crate) fn scan<F>(pattern: &Regex, text: &str, mut decide: F) -> String
where
    F: FnMut(&Captures<'_>) -> Scan,
{
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while search <= text.len() {
        let Some(caps) = pattern.captures_at(text, search) else {
            break;
        };
        let start = caps.get(0).map_or(search, |m| m.start());
        let next = match decide(&caps) {
            Scan::Replace { end, with } => {
                out.push_str(&text[copied..start]);
                out.push_str(&with);
                copied = end;
                end
            },
            Scan::Keep { end } => end,
            Scan::Retry => start,
        };
        search = if next > start {
            next
        } else {
            start + text[start..].chars().next().map_or(1, char::len_utf8)
        };
    }

    out.push_str(&text[copied..]);
    out
}
