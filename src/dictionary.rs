//! User-editable wrong→correct word bank.
//!
//! Two source formats are accepted:
//! - JSON: `{"words": [{"wrong": "...", "correct": "..."}]}`, or a bare array of
//!   the same objects.
//! - XML block-list, as written by office autocorrect lists:
//!   `<block-list:block block-list:abbreviated-name="wrong" block-list:name="correct"/>`.
//!
//! All keys are compiled into one alternation so the dictionary rule scans each
//! paragraph once, however many entries the bank holds. A hit only counts when
//! it starts and ends on a word boundary, where ZWNJ and diacritics separate
//! words.

use crate::counters::{Counter, RuleCounters};
use crate::error::{Error, Result};
use crate::rules::boundary::{Scan, is_boundary, scan};
use log::{info, warn};
use quick_xml::Reader;
use quick_xml::events::Event;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Compiled-size ceiling for the alternation; word banks run to tens of thousands of entries.
const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordList {
    Object {
        #[serde(default)]
        words: Vec<WordEntry>,
    },
    Array(Vec<WordEntry>),
}

#[derive(Debug, Deserialize)]
struct WordEntry {
    wrong: Option<String>,
    correct: Option<String>,
}

/// Wrong→correct replacements plus the matcher compiled from their keys.
#[derive(Debug, Clone, Default)]
pub struct ReplacementDictionary {
    entries: HashMap<String, String>,
    /// Keys, longest first.
    keys: Vec<String>,
    matcher: Option<Regex>,
}

impl ReplacementDictionary {
    /// A dictionary that replaces nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from pairs. Empty strings are skipped; a repeated key keeps its last value.
    pub fn try_from_pairs<I, W, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, C)>,
        W: Into<String>,
        C: Into<String>,
    {
        let mut entries = HashMap::new();
        for (wrong, correct) in pairs {
            let (wrong, correct) = (wrong.into(), correct.into());
            if wrong.is_empty() || correct.is_empty() {
                continue;
            }
            entries.insert(wrong, correct);
        }
        let keys = sorted_keys(&entries);
        let matcher = compile_matcher(&keys)?;
        Ok(Self { entries, keys, matcher })
    }

    /// Like [`ReplacementDictionary::try_from_pairs`], degrading to an empty
    /// dictionary if the keys cannot be compiled.
    pub fn from_pairs<I, W, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, C)>,
        W: Into<String>,
        C: Into<String>,
    {
        Self::try_from_pairs(pairs).unwrap_or_else(|e| {
            warn!("Replacement dictionary disabled: {}", e);
            Self::empty()
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let words = match serde_json::from_str::<WordList>(s)? {
            WordList::Object { words } => words,
            WordList::Array(words) => words,
        };
        Self::try_from_pairs(
            words
                .into_iter()
                .filter_map(|w| Some((w.wrong?, w.correct?))),
        )
    }

    /// Parse an autocorrect block-list. `abbreviated-name` is the wrong form and
    /// `name` the correct one; namespace prefixes are ignored.
    pub fn from_block_list_str(s: &str) -> Result<Self> {
        let mut reader = Reader::from_str(s);
        let mut pairs = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() != b"block" {
                        continue;
                    }
                    let mut wrong = None;
                    let mut correct = None;
                    for attr in e.attributes() {
                        let attr = attr.map_err(|err| Error::Xml {
                            position: reader.buffer_position(),
                            reason: err.to_string(),
                        })?;
                        let value = attr
                            .unescape_value()
                            .map_err(|err| Error::Xml {
                                position: reader.buffer_position(),
                                reason: err.to_string(),
                            })?
                            .into_owned();
                        match attr.key.local_name().as_ref() {
                            b"abbreviated-name" => wrong = Some(value),
                            b"name" => correct = Some(value),
                            _ => {},
                        }
                    }
                    if let (Some(w), Some(c)) = (wrong, correct) {
                        pairs.push((w, c));
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml {
                        position: reader.buffer_position(),
                        reason: e.to_string(),
                    });
                },
                _ => {},
            }
        }

        Self::try_from_pairs(pairs)
    }

    /// Parse either format, picking XML when the content starts with `<`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim_start_matches('\u{FEFF}');
        if s.trim_start().starts_with('<') {
            Self::from_block_list_str(s)
        } else {
            Self::from_json_str(s)
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let dict = Self::parse(&content)?;
        info!("Loaded replacement dictionary {}: {} entries", path.display(), dict.len());
        Ok(dict)
    }

    /// Load from `path`; any failure yields an empty dictionary and a warning.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dict) => dict,
            Err(e) => {
                warn!("Replacement dictionary unavailable: {}", e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, wrong: &str) -> Option<&str> {
        self.entries.get(wrong).map(String::as_str)
    }

    /// Replace whole-word occurrences of every key, counting each replacement.
    pub fn replace_words(&self, text: &str, counters: &mut RuleCounters) -> String {
        let Some(matcher) = &self.matcher else {
            return text.to_string();
        };
        let mut n = 0u64;
        let result = scan(matcher, text, |caps| {
            let Some(start) = caps.get(0).map(|m| m.start()) else {
                return Scan::Retry;
            };
            if !is_boundary(text, start) {
                return Scan::Retry;
            }
            let rest = &text[start..];
            let hit = self
                .keys
                .iter()
                .find(|key| rest.starts_with(key.as_str()) && is_boundary(text, start + key.len()));
            match hit.and_then(|key| self.entries.get(key).map(|c| (key, c))) {
                Some((key, correct)) => {
                    n += 1;
                    Scan::Replace { end: start + key.len(), with: correct.clone() }
                },
                None => Scan::Retry,
            }
        });
        counters.add(Counter::Dictionary, n);
        result
    }
}

/// Longest keys first so a longer entry wins over its own prefix.
fn sorted_keys(entries: &HashMap<String, String>) -> Vec<String> {
    let mut keys: Vec<String> = entries.keys().cloned().collect();
    keys.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    keys
}

/// One alternation over every key, used to find candidate positions.
fn compile_matcher(keys: &[String]) -> Result<Option<Regex>> {
    if keys.is_empty() {
        return Ok(None);
    }
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    let regex = RegexBuilder::new(&alternation)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?;
    Ok(Some(regex))
}
