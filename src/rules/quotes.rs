//! Quote pairing.

use crate::charmap::{self, CLOSE_GUILLEMET, OPEN_GUILLEMET};
use crate::counters::{Counter, RuleCounters};

/// Replace straight and curly quotes with alternating `«` and `»`.
///
/// Quote kinds are not distinguished; only position in the sequence matters.
/// With an odd number of quotes the last one emitted is forced to `»`. The
/// counter advances by the number of pairs.
pub fn fix_quotes(text: &str, counters: &mut RuleCounters) -> String {
    if !text.chars().any(charmap::is_quote) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut opens = true;
    let mut count = 0u64;
    let mut last_quote_at = 0;

    for ch in text.chars() {
        if charmap::is_quote(ch) {
            last_quote_at = result.len();
            result.push(if opens { OPEN_GUILLEMET } else { CLOSE_GUILLEMET });
            opens = !opens;
            count += 1;
        } else {
            result.push(ch);
        }
    }

    if count % 2 == 1 {
        // The unpaired quote was emitted as an opener.
        let end = last_quote_at + OPEN_GUILLEMET.len_utf8();
        result.replace_range(last_quote_at..end, &CLOSE_GUILLEMET.to_string());
    }

    counters.add(Counter::EnglishQuotes, count / 2);
    result
}
