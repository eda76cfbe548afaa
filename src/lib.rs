//! Persian prose normalization.
//!
//! Converts foreign digits and punctuation to their Persian forms, places or removes
//! the zero-width non-joiner at morpheme boundaries, tidies whitespace, pairs
//! quotation marks and applies a wrong→correct word bank. Rules run in a fixed
//! order through a [`Pipeline`], and every change is tallied in [`RuleCounters`].
//!
//! ```
//! use rust_fa_clean::{Pipeline, RuleCounters};
//!
//! let pipeline = Pipeline::default();
//! let mut counters = RuleCounters::new();
//! assert_eq!(pipeline.apply("می روم", &mut counters), "می\u{200C}روم");
//! ```

pub mod charmap;
pub mod config;
pub mod counters;
pub mod dictionary;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod rules;

#[cfg(feature = "python")]
mod python;

pub use config::{Rule, RuleConfig};
pub use counters::{Counter, RuleCounters};
pub use dictionary::ReplacementDictionary;
pub use error::{Error, Result};
pub use pipeline::Pipeline;

/// Run the rules enabled in `config` over one text unit, borrowing the word bank.
pub fn apply(
    text: &str,
    config: &RuleConfig,
    dictionary: &ReplacementDictionary,
    counters: &mut RuleCounters,
) -> String {
    pipeline::run_stages(config.enabled_rules(), dictionary, text, counters)
}
