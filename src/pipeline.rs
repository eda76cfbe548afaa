//! Ordered rule pipeline.
//!
//! A [`Pipeline`] is built once from a [`RuleConfig`] and a
//! [`ReplacementDictionary`] and then applied to any number of text units. The
//! rule order is fixed: letter and digit normalization come before the rules that
//! match Persian letters, joins and insertions come before the whitespace cleanup
//! that tidies after them, and the character-level ellipsis and ZWNJ passes run last.

use crate::config::{Rule, RuleConfig};
use crate::counters::RuleCounters;
use crate::dictionary::ReplacementDictionary;
use crate::rules;
use log::debug;
use rayon::prelude::*;

/// The enabled rules, in order, plus the word bank the dictionary rule reads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Rule>,
    dictionary: ReplacementDictionary,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RuleConfig::default(), ReplacementDictionary::empty())
    }
}

impl Pipeline {
    pub fn new(config: RuleConfig, dictionary: ReplacementDictionary) -> Self {
        let stages: Vec<Rule> = config.enabled_rules().collect();
        debug!(
            "Pipeline: {} of {} rules enabled, dictionary has {} entries",
            stages.len(),
            Rule::COUNT,
            dictionary.len()
        );
        Self { stages, dictionary }
    }

    /// Enabled rules in application order.
    pub fn stages(&self) -> &[Rule] {
        &self.stages
    }

    pub fn dictionary(&self) -> &ReplacementDictionary {
        &self.dictionary
    }

    /// Run every enabled rule over one text unit, each reading the previous one's output.
    pub fn apply(&self, text: &str, counters: &mut RuleCounters) -> String {
        run_stages(self.stages.iter().copied(), &self.dictionary, text, counters)
    }

    /// Process paragraphs independently and in parallel.
    ///
    /// Each paragraph gets its own counter bag; the bags are summed into the
    /// returned total. Output order matches input order.
    pub fn apply_document<S: AsRef<str> + Sync>(&self, paragraphs: &[S]) -> (Vec<String>, RuleCounters) {
        let results: Vec<(String, RuleCounters)> = paragraphs
            .par_iter()
            .map(|p| {
                let mut counters = RuleCounters::new();
                let fixed = self.apply(p.as_ref(), &mut counters);
                (fixed, counters)
            })
            .collect();

        let mut total = RuleCounters::new();
        let mut fixed = Vec::with_capacity(results.len());
        for (text, counters) in results {
            total.merge(&counters);
            fixed.push(text);
        }
        debug!(
            "Processed {} paragraphs, {} corrections",
            fixed.len(),
            total.total()
        );
        (fixed, total)
    }

    /// Split on newlines, treat each line as a paragraph, and join the results back.
    pub fn apply_text(&self, text: &str) -> (String, RuleCounters) {
        let paragraphs: Vec<&str> = text.split('\n').collect();
        let (fixed, counters) = self.apply_document(&paragraphs);
        (fixed.join("\n"), counters)
    }
}

/// Fold `stages` over one text unit. Empty input is returned untouched.
pub(crate) fn run_stages<I>(
    stages: I,
    dictionary: &ReplacementDictionary,
    text: &str,
    counters: &mut RuleCounters,
) -> String
where
    I: IntoIterator<Item = Rule>,
{
    if text.is_empty() {
        return String::new();
    }
    stages.into_iter().fold(text.to_string(), |current, rule| {
        apply_rule(rule, dictionary, &current, counters)
    })
}

fn apply_rule(
    rule: Rule,
    dictionary: &ReplacementDictionary,
    text: &str,
    counters: &mut RuleCounters,
) -> String {
    match rule {
        Rule::KafYeh => rules::fix_k_y(text, counters),
        Rule::EnglishDigits => rules::fix_numbers_en(text, counters),
        Rule::ArabicDigits => rules::fix_numbers_ar(text, counters),
        Rule::Punctuation => rules::fix_punct(text, counters),
        Rule::Quotes => rules::fix_quotes(text, counters),
        Rule::Ezafe => rules::fix_he_ye(text, counters),
        Rule::VerbPrefix => rules::fix_me_nemi(text, counters),
        Rule::PrefixedVerb => rules::fix_prefix_verbs(text, counters),
        Rule::Suffixes => rules::fix_suffixes(text, counters),
        Rule::Dictionary => dictionary.replace_words(text, counters),
        Rule::BracketSpaces => rules::fix_spaces(text, counters),
        Rule::SpaceBeforePunctuation => rules::fix_space_before_punct(text, counters),
        Rule::ExtraSpaces => rules::fix_extra_spaces(text, counters),
        Rule::Ellipsis => rules::fix_ellipsis(text, counters),
        Rule::FakeZwnj => rules::fix_fake_hyphens(text, counters),
    }
}
