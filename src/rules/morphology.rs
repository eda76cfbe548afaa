//! Morpheme-boundary rules: ezafe, verb prefixes, prefixed verbs and suffixes.
//!
//! Word edges are checked with [`super::boundary`], where ZWNJ and combining
//! marks separate words. `کتاب‌ها` is two words to these rules.

use super::boundary::{Scan, char_before, is_boundary, last_boundary, scan};
use crate::charmap::{HAMZA_ABOVE, ZWNJ};
use crate::counters::{Counter, RuleCounters};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Simple verbs, stored as infinitives.
pub const SIMPLE_VERBS: [&str; 25] = [
    "آمدن", "آوردن", "انداختن", "بردن", "بستن", "بودن", "خواستن", "خواندن", "خوردن", "دادن",
    "داشتن", "دانستن", "دیدن", "رفتن", "زدن", "شدن", "شستن", "شکستن", "شنیدن", "کردن", "گرفتن",
    "گشتن", "گفتن", "نوشتن", "یافتن",
];

/// Person endings that mark the word after می/نمی as a verb.
const VERB_PERSON_SUFFIXES: [&str; 6] = ["م", "ی", "د", "یم", "ید", "ند"];

/// Stems accepted after می/نمی without a person ending.
const VERB_COMPOUND_STEMS: [&str; 6] = ["شده", "رفت", "آمد", "خورد", "گشت", "شد"];

/// Words that never join a verb prefix.
const PREFIX_BLOCK_WORDS: [&str; 5] = ["می", "نمی", "خواهد", "باید", "که"];

/// Plural-marker family, tried one after another over the whole text.
pub const PLURAL_SUFFIXES: [&str; 9] = [
    "ها", "های", "هایی", "هایم", "هایت", "هایش", "هایمان", "هایتان", "هایشان",
];

/// Single-letter enclitics that fuse with the stem without a ZWNJ.
const FUSED_SUFFIXES: [&str; 3] = ["م", "ت", "ش"];

lazy_static! {
    static ref EZAFE: Regex = Regex::new(r"(\S*ه)[\s\x{200C}]ی").unwrap();

    static ref VERB_PREFIX: Regex =
        Regex::new(r"(ن?می)\s*([\x{0600}-\x{06FF}]+)").unwrap();

    static ref PREFIXED_VERB: Regex =
        Regex::new(r"(بر|در|فرو|فرا|باز|وا|ورا|ور)\s+([آ-ی]+)").unwrap();

    static ref PLURAL_PATTERNS: Vec<Regex> = PLURAL_SUFFIXES
        .iter()
        .map(|suffix| Regex::new(&format!(r"(\S+)\s+({})", suffix)).unwrap())
        .collect();

    // Longer alternatives first.
    static ref PRONOUN_SUFFIX: Regex = Regex::new(
        r"(\S+)\s+(ترین|تر|ایم|اید|اند|ام|ات|اش|مان|تان|شان|م|ت|ش)"
    ).unwrap();
}

fn match_span(caps: &Captures) -> (usize, usize) {
    caps.get(0).map_or((0, 0), |m| (m.start(), m.end()))
}

/// Rewrite matches of `pattern` that end on a word boundary, leaving the rest.
fn replace_ending_on_boundary<F>(pattern: &Regex, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures) -> String,
{
    scan(pattern, text, |caps| {
        let (_, end) = match_span(caps);
        if is_boundary(text, end) {
            Scan::Replace { end, with: rewrite(caps) }
        } else {
            Scan::Retry
        }
    })
}

/// A word ending in HEH, a space or ZWNJ, then a lone `ی` becomes the word plus a
/// superscript hamza: `خانه ی من` → `خانهٔ من`.
pub fn fix_he_ye(text: &str, counters: &mut RuleCounters) -> String {
    let mut n = 0u64;
    let result = replace_ending_on_boundary(&EZAFE, text, |caps| {
        n += 1;
        format!("{}{}", &caps[1], HAMZA_ABOVE)
    });
    counters.add(Counter::Ezafe, n);
    result
}

/// Join می/نمی to the following verb with a ZWNJ.
///
/// The prefix must start a word and must not follow a ZWNJ. The pattern matches
/// more than it rewrites: a candidate is only joined when it ends in a person
/// suffix or is one of the compound stems. Anything else is left exactly as
/// matched.
pub fn fix_me_nemi(text: &str, counters: &mut RuleCounters) -> String {
    let mut n = 0u64;
    let result = scan(&VERB_PREFIX, text, |caps| {
        let (start, _) = match_span(caps);
        if char_before(text, start) == Some(ZWNJ) || !is_boundary(text, start) {
            return Scan::Retry;
        }
        let Some(run) = caps.get(2) else {
            return Scan::Retry;
        };
        let Some(end) = last_boundary(text, run.start(), run.end()) else {
            return Scan::Retry;
        };
        let word = &text[run.start()..end];
        if is_prefixable_verb(word) {
            n += 1;
            Scan::Replace { end, with: format!("{}{}{}", &caps[1], ZWNJ, word) }
        } else {
            Scan::Keep { end }
        }
    });
    counters.add(Counter::VerbPrefixSpacing, n);
    result
}

fn is_prefixable_verb(word: &str) -> bool {
    VERB_PERSON_SUFFIXES.iter().any(|s| word.ends_with(s)) || VERB_COMPOUND_STEMS.contains(&word)
}

/// Close the gap between a verbal prefix (بر، در، فرو، …) and a simple verb.
///
/// Membership is checked literally against [`SIMPLE_VERBS`], so only an
/// infinitive written after the prefix is joined.
pub fn fix_prefix_verbs(text: &str, counters: &mut RuleCounters) -> String {
    let mut n = 0u64;
    let result = scan(&PREFIXED_VERB, text, |caps| {
        let (start, end) = match_span(caps);
        if !is_boundary(text, start) {
            return Scan::Retry;
        }
        let word = &caps[2];
        if PREFIX_BLOCK_WORDS.contains(&word) || !SIMPLE_VERBS.contains(&word) {
            return Scan::Keep { end };
        }
        n += 1;
        Scan::Replace { end, with: format!("{}{}", &caps[1], word) }
    });
    counters.add(Counter::PrefixedVerbSpacing, n);
    result
}

/// Attach detached suffixes to the preceding word.
///
/// Plural markers are joined with a ZWNJ, one suffix form at a time, each pass
/// reading the previous one's output. Pronominal and comparative suffixes then
/// join with a ZWNJ, except the single-letter enclitics م، ت، ش which fuse
/// directly.
pub fn fix_suffixes(text: &str, counters: &mut RuleCounters) -> String {
    let mut result = text.to_string();

    let mut plurals = 0u64;
    for pattern in PLURAL_PATTERNS.iter() {
        result = replace_ending_on_boundary(pattern, &result, |caps| {
            plurals += 1;
            format!("{}{}{}", &caps[1], ZWNJ, &caps[2])
        });
    }
    counters.add(Counter::PluralSuffixSpacing, plurals);

    let mut pronouns = 0u64;
    result = replace_ending_on_boundary(&PRONOUN_SUFFIX, &result, |caps| {
        pronouns += 1;
        let (word, suffix) = (&caps[1], &caps[2]);
        if FUSED_SUFFIXES.contains(&suffix) {
            format!("{}{}", word, suffix)
        } else {
            format!("{}{}{}", word, ZWNJ, suffix)
        }
    });
    counters.add(Counter::PronounSuffixSpacing, pronouns);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_he_ye_with_space_and_zwnj() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_he_ye("خانه ی من", &mut counters), "خانهٔ من");
        assert_eq!(fix_he_ye("نامه\u{200C}ی او", &mut counters), "نامهٔ او");
        assert_eq!(counters.get(Counter::Ezafe), 2);
    }

    #[test]
    fn test_he_ye_requires_lone_yeh() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_he_ye("خانه یک", &mut counters), "خانه یک");
        assert_eq!(fix_he_ye("کتاب ی", &mut counters), "کتاب ی");
        assert!(counters.is_empty());
    }

    #[test]
    fn test_me_nemi_person_suffix() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_me_nemi("می روم", &mut counters), "می\u{200C}روم");
        assert_eq!(fix_me_nemi("نمی دانند", &mut counters), "نمی\u{200C}دانند");
        assert_eq!(fix_me_nemi("ما میخوریم", &mut counters), "ما می\u{200C}خوریم");
        assert_eq!(counters.get(Counter::VerbPrefixSpacing), 3);
    }

    #[test]
    fn test_me_nemi_compound_stem() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_me_nemi("می شد", &mut counters), "می\u{200C}شد");
        assert_eq!(counters.get(Counter::VerbPrefixSpacing), 1);
    }

    #[test]
    fn test_me_nemi_declines_non_verbs() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_me_nemi("میز بزرگ", &mut counters), "میز بزرگ");
        assert_eq!(fix_me_nemi("می رو", &mut counters), "می رو");
        assert!(counters.is_empty());
    }

    #[test]
    fn test_me_nemi_leaves_joined_and_embedded() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_me_nemi("می\u{200C}روم", &mut counters), "می\u{200C}روم");
        assert_eq!(fix_me_nemi("کمی روم", &mut counters), "کمی روم");
        assert_eq!(fix_me_nemi("کتاب\u{200C}می\u{200C}روم", &mut counters), "کتاب\u{200C}می\u{200C}روم");
        assert!(counters.is_empty());
    }

    #[test]
    fn test_prefix_verbs_joins_listed_infinitives() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_prefix_verbs("بر آمدن", &mut counters), "برآمدن");
        assert_eq!(fix_prefix_verbs("در رفتن", &mut counters), "دررفتن");
        assert_eq!(counters.get(Counter::PrefixedVerbSpacing), 2);
    }

    #[test]
    fn test_prefix_verbs_literal_membership() {
        let mut counters = RuleCounters::new();
        // bare stems are not in the infinitive list
        assert_eq!(fix_prefix_verbs("بر آمد", &mut counters), "بر آمد");
        assert_eq!(fix_prefix_verbs("در که", &mut counters), "در که");
        assert_eq!(fix_prefix_verbs("در خانه", &mut counters), "در خانه");
        assert!(counters.is_empty());
    }

    #[test]
    fn test_plural_suffixes() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_suffixes("کتاب ها", &mut counters), "کتاب\u{200C}ها");
        assert_eq!(fix_suffixes("خانه های ما", &mut counters), "خانه\u{200C}های ما");
        assert_eq!(fix_suffixes("دوست هایشان", &mut counters), "دوست\u{200C}هایشان");
        assert_eq!(counters.get(Counter::PluralSuffixSpacing), 3);
        assert_eq!(counters.get(Counter::PronounSuffixSpacing), 0);
    }

    #[test]
    fn test_pronoun_and_comparative_suffixes() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_suffixes("رفته ام", &mut counters), "رفته\u{200C}ام");
        assert_eq!(fix_suffixes("بزرگ ترین", &mut counters), "بزرگ\u{200C}ترین");
        assert_eq!(fix_suffixes("بزرگ تر", &mut counters), "بزرگ\u{200C}تر");
        assert_eq!(fix_suffixes("کتاب شان", &mut counters), "کتاب\u{200C}شان");
        assert_eq!(counters.get(Counter::PronounSuffixSpacing), 4);
    }

    #[test]
    fn test_single_letter_enclitics_fuse() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_suffixes("کتاب م", &mut counters), "کتابم");
        assert_eq!(fix_suffixes("دست ش را", &mut counters), "دستش را");
        assert_eq!(counters.get(Counter::PronounSuffixSpacing), 2);
    }

    #[test]
    fn test_suffix_requires_word_boundary() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_suffixes("من مادر", &mut counters), "من مادر");
        assert_eq!(fix_suffixes("این تریبون", &mut counters), "این تریبون");
        assert!(counters.is_empty());
    }

    #[test]
    fn test_me_nemi_before_zwnj_and_mark() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_me_nemi("می روم\u{200C}", &mut counters), "می\u{200C}روم\u{200C}");
        assert_eq!(fix_me_nemi("نمی روم\u{0650} و", &mut counters), "نمی\u{200C}روم\u{0650} و");
        assert_eq!(fix_me_nemi("می روم؟", &mut counters), "می\u{200C}روم؟");
        assert_eq!(counters.get(Counter::VerbPrefixSpacing), 3);
    }

    #[test]
    fn test_he_ye_before_zwnj() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_he_ye("خانه ی\u{200C}ام", &mut counters), "خانهٔ\u{200C}ام");
        assert_eq!(counters.get(Counter::Ezafe), 1);
    }

    #[test]
    fn test_suffix_before_zwnj_or_mark() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_suffixes("کتاب ها\u{200C}یی", &mut counters), "کتاب\u{200C}ها\u{200C}یی");
        assert_eq!(fix_suffixes("بزرگ تر\u{0650} من", &mut counters), "بزرگ\u{200C}تر\u{0650} من");
        assert_eq!(counters.get(Counter::PluralSuffixSpacing), 1);
        assert_eq!(counters.get(Counter::PronounSuffixSpacing), 1);
    }

    #[test]
    fn test_prefix_verbs_need_word_start() {
        let mut counters = RuleCounters::new();
        assert_eq!(fix_prefix_verbs("ابر آمدن", &mut counters), "ابر آمدن");
        assert!(counters.is_empty());
    }
}
