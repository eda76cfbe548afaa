//! Property tests for the pipeline and individual rules.

use proptest::prelude::*;
use rust_fa_clean::rules;
use rust_fa_clean::{Counter, Pipeline, ReplacementDictionary, Rule, RuleConfig, RuleCounters};

/// Characters that exercise every rule: Persian letters and affixes, foreign
/// digits and punctuation, quotes, brackets, dots and invisible characters.
const ALPHABET: &[char] = &[
    'ا', 'ب', 'ت', 'د', 'ر', 'س', 'ش', 'م', 'ن', 'و', 'ه', 'ی', 'ك', 'ي', 'ک', 'آ', ' ', ' ', ' ',
    '\t', '0', '7', '٣', '۵', ',', ';', '?', '؟', '!', '%', '$', '.', '"', '\'', '“', '”', '«', '»',
    '(', ')', '[', ']', '{', '}', '⟨', '⟩', '،', ':', '\u{200C}', '\u{200B}', '\u{00AD}', '\u{200D}',
];

fn persianish() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

fn apply_rule(rule: Rule, dict: &ReplacementDictionary, text: &str, c: &mut RuleCounters) -> String {
    match rule {
        Rule::KafYeh => rules::fix_k_y(text, c),
        Rule::EnglishDigits => rules::fix_numbers_en(text, c),
        Rule::ArabicDigits => rules::fix_numbers_ar(text, c),
        Rule::Punctuation => rules::fix_punct(text, c),
        Rule::Quotes => rules::fix_quotes(text, c),
        Rule::Ezafe => rules::fix_he_ye(text, c),
        Rule::VerbPrefix => rules::fix_me_nemi(text, c),
        Rule::PrefixedVerb => rules::fix_prefix_verbs(text, c),
        Rule::Suffixes => rules::fix_suffixes(text, c),
        Rule::Dictionary => dict.replace_words(text, c),
        Rule::BracketSpaces => rules::fix_spaces(text, c),
        Rule::SpaceBeforePunctuation => rules::fix_space_before_punct(text, c),
        Rule::ExtraSpaces => rules::fix_extra_spaces(text, c),
        Rule::Ellipsis => rules::fix_ellipsis(text, c),
        Rule::FakeZwnj => rules::fix_fake_hyphens(text, c),
    }
}

fn only(rules: &[Rule]) -> Pipeline {
    let config = rules
        .iter()
        .fold(RuleConfig::none_enabled(), |c, &r| c.with(r, true));
    Pipeline::new(config, ReplacementDictionary::empty())
}

proptest! {
    #[test]
    fn prop_apply_never_panics(s in any::<String>()) {
        let dict = ReplacementDictionary::from_pairs([("سلام", "درود")]);
        let pipeline = Pipeline::new(RuleConfig::all_enabled(), dict);
        let mut counters = RuleCounters::new();
        let _ = pipeline.apply(&s, &mut counters);
    }

    #[test]
    fn prop_persianish_never_panics(s in persianish()) {
        let mut counters = RuleCounters::new();
        let _ = Pipeline::new(RuleConfig::all_enabled(), ReplacementDictionary::empty())
            .apply(&s, &mut counters);
    }

    #[test]
    fn prop_ascii_digits_translate_in_place(s in persianish()) {
        let mut counters = RuleCounters::new();
        let out = only(&[Rule::EnglishDigits]).apply(&s, &mut counters);
        let input: Vec<char> = s.chars().collect();
        let output: Vec<char> = out.chars().collect();
        prop_assert_eq!(input.len(), output.len());
        let mut digits = 0u64;
        for (a, b) in input.iter().zip(output.iter()) {
            if let Some(d) = a.to_digit(10) {
                digits += 1;
                prop_assert_eq!(*b, rust_fa_clean::charmap::PERSIAN_DIGITS[d as usize]);
            } else {
                prop_assert_eq!(a, b);
            }
        }
        prop_assert_eq!(counters.get(Counter::EnglishDigits), digits);
    }

    #[test]
    fn prop_quotes_conserved(s in persianish()) {
        let s: String = s.chars().filter(|&c| c != '«' && c != '»').collect();
        let quotes = s.chars().filter(|&c| rust_fa_clean::charmap::is_quote(c)).count();
        let mut counters = RuleCounters::new();
        let out = rules::fix_quotes(&s, &mut counters);
        let opens = out.chars().filter(|&c| c == '«').count();
        let closes = out.chars().filter(|&c| c == '»').count();
        prop_assert_eq!(opens + closes, quotes);
        prop_assert_eq!(closes, quotes - quotes / 2);
        prop_assert_eq!(opens, quotes / 2);
        prop_assert_eq!(counters.get(Counter::EnglishQuotes), (quotes / 2) as u64);
    }

    #[test]
    fn prop_character_and_whitespace_rules_idempotent(s in persianish()) {
        let idempotent = [
            Rule::KafYeh,
            Rule::EnglishDigits,
            Rule::ArabicDigits,
            Rule::Punctuation,
            Rule::BracketSpaces,
            Rule::SpaceBeforePunctuation,
            Rule::ExtraSpaces,
            Rule::Ellipsis,
            Rule::FakeZwnj,
        ];
        for rule in idempotent {
            let pipeline = only(&[rule]);
            let mut counters = RuleCounters::new();
            let once = pipeline.apply(&s, &mut counters);
            let mut again = RuleCounters::new();
            let twice = pipeline.apply(&once, &mut again);
            prop_assert_eq!(&twice, &once, "{:?}", rule);
            prop_assert!(again.is_empty(), "{:?}", rule);
        }
    }

    #[test]
    fn prop_default_pipeline_stable_on_clean_prose(words in prop::collection::vec(
        prop::sample::select(&["کتاب", "خانه", "من", "رفتم", "می", "بزرگ", "۱۲", "و", "او"][..]), 1..12,
    )) {
        let text = words.join(" ");
        let pipeline = Pipeline::default();
        let mut counters = RuleCounters::new();
        let once = pipeline.apply(&text, &mut counters);
        let mut again = RuleCounters::new();
        prop_assert_eq!(pipeline.apply(&once, &mut again), once);
        prop_assert!(again.is_empty());
    }

    #[test]
    fn prop_default_pipeline_idempotent_with_brackets(words in prop::collection::vec(
        prop::sample::select(&[
            "کتاب", "من", "رفتم", "می", "او", "۱۲", "(بله)", "«او»", "«(بله)»", "[کتاب]",
            "((خانه))", "( بله )", "« (کتاب) »",
        ][..]),
        1..10,
    )) {
        let text = words.join(" ");
        let pipeline = Pipeline::default();
        let mut counters = RuleCounters::new();
        let once = pipeline.apply(&text, &mut counters);
        let mut again = RuleCounters::new();
        prop_assert_eq!(pipeline.apply(&once, &mut again), once);
        prop_assert!(again.is_empty());
    }

    #[test]
    fn prop_disabled_rule_is_identity_stage(s in persianish(), skip in 0..Rule::COUNT) {
        let skipped = Rule::ALL[skip];
        let dict = ReplacementDictionary::from_pairs([("سلام", "درود"), ("مت", "متن")]);
        let config = RuleConfig::all_enabled().with(skipped, false);
        let mut counters = RuleCounters::new();
        let out = Pipeline::new(config, dict.clone()).apply(&s, &mut counters);

        let mut expected_counters = RuleCounters::new();
        let mut expected = s.clone();
        if !s.is_empty() {
            for rule in Rule::ALL {
                if rule != skipped {
                    expected = apply_rule(rule, &dict, &expected, &mut expected_counters);
                }
            }
        }
        prop_assert_eq!(out, expected);
        prop_assert_eq!(counters, expected_counters);
    }
}
