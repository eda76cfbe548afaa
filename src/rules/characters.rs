//! Character-level rules: letters, digits, punctuation, ellipsis and fake ZWNJs.

use crate::charmap::{
    self, ARABIC_KAF, ARABIC_YEH, ELLIPSIS, PERSIAN_KAF, PERSIAN_YEH, PUNCTUATION, ZWNJ,
};
use crate::counters::{Counter, RuleCounters};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref ASCII_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
    static ref ARABIC_DIGIT: Regex = Regex::new(r"[\x{0660}-\x{0669}]").unwrap();
    static ref REPEATED_QUESTION: Regex = Regex::new(r"؟{2,}").unwrap();
    static ref REPEATED_EXCLAMATION: Regex = Regex::new(r"!{2,}").unwrap();
    static ref DOT_RUN: Regex = Regex::new(r"\.{3,}").unwrap();
}

/// Arabic KAF and YEH to their Persian forms. KAF is replaced first.
pub fn fix_k_y(text: &str, counters: &mut RuleCounters) -> String {
    let mut result = text.to_string();

    let kafs = result.matches(ARABIC_KAF).count();
    if kafs > 0 {
        counters.add(Counter::ArabicKaf, kafs as u64);
        result = result.replace(ARABIC_KAF, &PERSIAN_KAF.to_string());
    }

    let yehs = result.matches(ARABIC_YEH).count();
    if yehs > 0 {
        counters.add(Counter::ArabicYeh, yehs as u64);
        result = result.replace(ARABIC_YEH, &PERSIAN_YEH.to_string());
    }

    result
}

/// ASCII digits to Persian digits, counted per digit.
pub fn fix_numbers_en(text: &str, counters: &mut RuleCounters) -> String {
    translate_digits(
        &ASCII_DIGIT,
        charmap::persian_from_ascii_digit,
        Counter::EnglishDigits,
        text,
        counters,
    )
}

/// Arabic-Indic digits to Persian digits, counted per digit.
pub fn fix_numbers_ar(text: &str, counters: &mut RuleCounters) -> String {
    translate_digits(
        &ARABIC_DIGIT,
        charmap::persian_from_arabic_digit,
        Counter::ArabicDigits,
        text,
        counters,
    )
}

fn translate_digits(
    pattern: &Regex,
    map: fn(char) -> Option<char>,
    counter: Counter,
    text: &str,
    counters: &mut RuleCounters,
) -> String {
    let mut n = 0u64;
    let result = pattern.replace_all(text, |caps: &Captures| {
        let digit = &caps[0];
        n += 1;
        digit.chars().map(|c| map(c).unwrap_or(c)).collect::<String>()
    });
    counters.add(counter, n);
    result.into_owned()
}

/// ASCII `, ; ? $ %` to Persian, then collapse runs of `؟` and of `!`.
///
/// The rial sign is mapped but has no counter of its own. Each collapsed run
/// counts once.
pub fn fix_punct(text: &str, counters: &mut RuleCounters) -> String {
    let mut result = text.to_string();

    for (ascii, persian) in PUNCTUATION {
        let n = result.matches(ascii).count();
        if n == 0 {
            continue;
        }
        let counter = match ascii {
            ',' => Some(Counter::EnglishComma),
            ';' => Some(Counter::EnglishSemicolon),
            '?' => Some(Counter::EnglishQuestionMark),
            '%' => Some(Counter::EnglishPercent),
            _ => None,
        };
        if let Some(counter) = counter {
            counters.add(counter, n as u64);
        }
        result = result.replace(ascii, &persian.to_string());
    }

    let runs = REPEATED_QUESTION.find_iter(&result).count();
    if runs > 0 {
        counters.add(Counter::RepeatedQuestionMark, runs as u64);
        result = REPEATED_QUESTION.replace_all(&result, "؟").into_owned();
    }

    let runs = REPEATED_EXCLAMATION.find_iter(&result).count();
    if runs > 0 {
        counters.add(Counter::RepeatedExclamation, runs as u64);
        result = REPEATED_EXCLAMATION.replace_all(&result, "!").into_owned();
    }

    result
}

/// Three or more periods become one ellipsis glyph; each run counts once.
pub fn fix_ellipsis(text: &str, counters: &mut RuleCounters) -> String {
    let runs = DOT_RUN.find_iter(text).count();
    if runs == 0 {
        return text.to_string();
    }
    counters.add(Counter::Ellipsis, runs as u64);
    DOT_RUN
        .replace_all(text, ELLIPSIS.to_string().as_str())
        .into_owned()
}

/// Invisible and format characters typed in place of a ZWNJ become a real ZWNJ.
pub fn fix_fake_hyphens(text: &str, counters: &mut RuleCounters) -> String {
    let mut n = 0u64;
    let result: String = text
        .chars()
        .map(|c| {
            if charmap::is_fake_zwnj(c) {
                n += 1;
                ZWNJ
            } else {
                c
            }
        })
        .collect();
    counters.add(Counter::FakeZwnj, n);
    result
}
