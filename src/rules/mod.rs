//! The rewriting rules.
//!
//! Every rule is a pure `(text, counters) -> text` function. The dictionary rule
//! lives on [`crate::dictionary::ReplacementDictionary::replace_words`] since it
//! needs the loaded word bank.

pub(crate) mod boundary;
pub mod characters;
pub mod morphology;
pub mod quotes;
pub mod spacing;

pub use characters::{
    fix_ellipsis, fix_fake_hyphens, fix_k_y, fix_numbers_ar, fix_numbers_en, fix_punct,
};
pub use morphology::{fix_he_ye, fix_me_nemi, fix_prefix_verbs, fix_suffixes};
pub use quotes::fix_quotes;
pub use spacing::{fix_extra_spaces, fix_space_before_punct, fix_spaces};
