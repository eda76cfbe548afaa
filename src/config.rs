//! Rule identifiers and the enabled-rule configuration.
//!
//! The persisted form is plain text, one `key=0|1` line per rule. Unknown keys are
//! ignored and missing keys fall back to their default. Every rule is on by
//! default except the dictionary lookup, which can be slow on large word banks.

use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// One rewriting rule. [`Rule::ALL`] lists them in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    KafYeh,
    EnglishDigits,
    ArabicDigits,
    Punctuation,
    Quotes,
    Ezafe,
    VerbPrefix,
    PrefixedVerb,
    Suffixes,
    Dictionary,
    BracketSpaces,
    SpaceBeforePunctuation,
    ExtraSpaces,
    Ellipsis,
    FakeZwnj,
}

impl Rule {
    pub const COUNT: usize = 15;

    /// Every rule, in the order the pipeline applies them.
    pub const ALL: [Rule; Rule::COUNT] = [
        Rule::KafYeh,
        Rule::EnglishDigits,
        Rule::ArabicDigits,
        Rule::Punctuation,
        Rule::Quotes,
        Rule::Ezafe,
        Rule::VerbPrefix,
        Rule::PrefixedVerb,
        Rule::Suffixes,
        Rule::Dictionary,
        Rule::BracketSpaces,
        Rule::SpaceBeforePunctuation,
        Rule::ExtraSpaces,
        Rule::Ellipsis,
        Rule::FakeZwnj,
    ];

    /// Key used in the persisted configuration.
    pub fn key(self) -> &'static str {
        match self {
            Rule::KafYeh => "fix_k_y",
            Rule::EnglishDigits => "fix_numbers_en",
            Rule::ArabicDigits => "fix_numbers_ar",
            Rule::Punctuation => "fix_punct",
            Rule::Quotes => "fix_quotes",
            Rule::Ezafe => "fix_he_ye",
            Rule::VerbPrefix => "fix_me_nemi",
            Rule::PrefixedVerb => "fix_prefix_verbs",
            Rule::Suffixes => "fix_suffixes",
            Rule::Dictionary => "fix_dict",
            Rule::BracketSpaces => "fix_spaces",
            Rule::SpaceBeforePunctuation => "fix_space_before_punct",
            Rule::ExtraSpaces => "fix_extra_spaces",
            Rule::Ellipsis => "fix_ellipsis",
            Rule::FakeZwnj => "fix_fake_hyphens",
        }
    }

    /// Persian description shown next to the option.
    pub fn description(self) -> &'static str {
        match self {
            Rule::KafYeh => "تبدیل حرف ي و ك عربی به فارسی",
            Rule::EnglishDigits => "اعداد انگلیسی",
            Rule::ArabicDigits => "اعداد عربی",
            Rule::Punctuation => "تبدیل علائم سجاوندی انگلیسی به فارسی",
            Rule::Quotes => "گیومهٔ انگلیسی",
            Rule::Ezafe => "کسرهٔ اضافه",
            Rule::VerbPrefix => "فاصلهٔ قبل از پیشوند افعال (مثل: می/نمی)",
            Rule::PrefixedVerb => "فاصلهٔ بین اجزاء افعال پیشوندی",
            Rule::Suffixes => "فاصلهٔ قبل از ضمایر ملکی (مثل: رفته ام)",
            Rule::Dictionary => "غلط‌های املایی (بانک)",
            Rule::BracketSpaces => "فاصلهٔ داخلی علائم سجاوندی",
            Rule::SpaceBeforePunctuation => "فاصلهٔ قبل از علائم سجاوندی (با استثناء)",
            Rule::ExtraSpaces => "فاصلهٔ اضافه بین واژه‌ها",
            Rule::Ellipsis => "سه‌نقطهٔ تعلیق",
            Rule::FakeZwnj => "تبدیل نیم‌فاصله‌های کاذب به نیم‌فاصلهٔ واقعی",
        }
    }

    pub fn default_enabled(self) -> bool {
        !matches!(self, Rule::Dictionary)
    }

    pub fn from_key(key: &str) -> Option<Rule> {
        Rule::ALL.iter().copied().find(|r| r.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which rules are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    enabled: [bool; Rule::COUNT],
}

impl Default for RuleConfig {
    fn default() -> Self {
        let mut enabled = [false; Rule::COUNT];
        for rule in Rule::ALL {
            enabled[rule.index()] = rule.default_enabled();
        }
        Self { enabled }
    }
}

impl RuleConfig {
    /// Every rule switched on, dictionary included.
    pub fn all_enabled() -> Self {
        Self {
            enabled: [true; Rule::COUNT],
        }
    }

    /// Every rule switched off.
    pub fn none_enabled() -> Self {
        Self {
            enabled: [false; Rule::COUNT],
        }
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        self.enabled[rule.index()]
    }

    pub fn set(&mut self, rule: Rule, enabled: bool) {
        self.enabled[rule.index()] = enabled;
    }

    /// Builder-style [`RuleConfig::set`].
    pub fn with(mut self, rule: Rule, enabled: bool) -> Self {
        self.set(rule, enabled);
        self
    }

    /// Enabled rules in pipeline order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(|&r| self.is_enabled(r))
    }

    /// Parse `key=0|1` lines on top of the defaults.
    ///
    /// Lines without `=` are skipped and unknown keys are ignored. A known key
    /// is enabled only by the value `1`; anything else disables it.
    pub fn from_conf_str(s: &str) -> Self {
        let mut config = Self::default();
        for line in s.lines() {
            let line = line.trim();
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let Some(rule) = Rule::from_key(key.trim()) else {
                debug!("Ignoring unknown configuration key: {}", key.trim());
                continue;
            };
            let value = value.trim();
            if value != "1" && value != "0" {
                debug!("Treating {}={} as disabled", rule.key(), value);
            }
            config.set(rule, value == "1");
        }
        config
    }

    /// Serialize as `key=0|1` lines in pipeline order.
    pub fn to_conf_string(&self) -> String {
        let mut out = String::new();
        for rule in Rule::ALL {
            out.push_str(rule.key());
            out.push('=');
            out.push(if self.is_enabled(rule) { '1' } else { '0' });
            out.push('\n');
        }
        out
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_conf_str(&content))
    }

    /// Load from `path`, falling back to the defaults.
    ///
    /// A missing file is the normal first-run case and is not logged; an
    /// unreadable one is.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default rule configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, self.to_conf_string()).map_err(|e| Error::io(path, e))
    }
}
