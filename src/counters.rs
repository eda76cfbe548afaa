//! Per-run replacement counters.
//!
//! Every rule records what it changed into a [`RuleCounters`] bag. A bag starts at
//! zero, is only ever incremented, and can be merged with other bags so totals
//! can be accumulated across paragraphs or parallel shards.

use std::fmt;

/// Events counted by the rules. Labels are the Persian strings shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Counter {
    ArabicKaf,
    ArabicYeh,
    EnglishComma,
    EnglishSemicolon,
    EnglishQuestionMark,
    EnglishQuotes,
    EnglishDigits,
    ArabicDigits,
    EnglishPercent,
    Ezafe,
    RepeatedQuestionMark,
    RepeatedExclamation,
    VerbPrefixSpacing,
    PronounSuffixSpacing,
    PluralSuffixSpacing,
    ExtraSpaces,
    BracketInnerSpaces,
    SpaceBeforePunctuation,
    PrefixedVerbSpacing,
    Dictionary,
    Ellipsis,
    FakeZwnj,
}

impl Counter {
    /// Number of distinct counters.
    pub const COUNT: usize = 22;

    /// All counters in report order.
    pub const ALL: [Counter; Counter::COUNT] = [
        Counter::ArabicKaf,
        Counter::ArabicYeh,
        Counter::EnglishComma,
        Counter::EnglishSemicolon,
        Counter::EnglishQuestionMark,
        Counter::EnglishQuotes,
        Counter::EnglishDigits,
        Counter::ArabicDigits,
        Counter::EnglishPercent,
        Counter::Ezafe,
        Counter::RepeatedQuestionMark,
        Counter::RepeatedExclamation,
        Counter::VerbPrefixSpacing,
        Counter::PronounSuffixSpacing,
        Counter::PluralSuffixSpacing,
        Counter::ExtraSpaces,
        Counter::BracketInnerSpaces,
        Counter::SpaceBeforePunctuation,
        Counter::PrefixedVerbSpacing,
        Counter::Dictionary,
        Counter::Ellipsis,
        Counter::FakeZwnj,
    ];

    /// Human-readable report label.
    pub fn label(self) -> &'static str {
        match self {
            Counter::ArabicKaf => "کاف عربی",
            Counter::ArabicYeh => "ی عربی",
            Counter::EnglishComma => "ویرگول انگلیسی",
            Counter::EnglishSemicolon => "نقطه‌ویرگول انگلیسی",
            Counter::EnglishQuestionMark => "علامت سؤال انگلیسی",
            Counter::EnglishQuotes => "گیومهٔ انگلیسی",
            Counter::EnglishDigits => "اعداد انگلیسی",
            Counter::ArabicDigits => "اعداد عربی",
            Counter::EnglishPercent => "درصد انگلیسی",
            Counter::Ezafe => "کسرهٔ اضافه",
            Counter::RepeatedQuestionMark => "علامت پرسش تکراری",
            Counter::RepeatedExclamation => "علامت تعجب تکراری",
            Counter::VerbPrefixSpacing => "فاصلهٔ قبل از پیشوند افعال (مثل: می/نمی)",
            Counter::PronounSuffixSpacing => "فاصلهٔ قبل از ضمایر ملکی (مثل: رفته ام)",
            Counter::PluralSuffixSpacing => "فاصلهٔ قبل از نشانهٔ جمع (مثل: کتاب ها)",
            Counter::ExtraSpaces => "فاصلهٔ اضافه بین واژه‌ها",
            Counter::BracketInnerSpaces => "فاصلهٔ داخلی علائم سجاوندی",
            Counter::SpaceBeforePunctuation => "فاصلهٔ قبل از علائم سجاوندی",
            Counter::PrefixedVerbSpacing => "فاصلهٔ بین اجزاء افعال پیشوندی",
            Counter::Dictionary => "غلط‌های املایی (بانک)",
            Counter::Ellipsis => "سه‌نقطهٔ تعلیق",
            Counter::FakeZwnj => "نیم‌فاصلهٔ کاذب",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bag of counters, one slot per [`Counter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCounters {
    counts: [u64; Counter::COUNT],
}

impl RuleCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, counter: Counter, n: u64) {
        self.counts[counter.index()] += n;
    }

    pub fn incr(&mut self, counter: Counter) {
        self.add(counter, 1);
    }

    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter.index()]
    }

    /// Sum of every counter.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Add every count of `other` into `self`.
    pub fn merge(&mut self, other: &RuleCounters) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += *theirs;
        }
    }

    /// Non-zero counters in report order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::ALL
            .iter()
            .map(|&c| (c, self.get(c)))
            .filter(|&(_, n)| n > 0)
    }
}
