//! Static character tables for Persian normalization.
//!
//! Digits, Arabic letter variants, punctuation, quote glyphs and the invisible
//! characters that stand in for a real ZWNJ.

/// Zero-width non-joiner.
pub const ZWNJ: char = '\u{200C}';

/// Arabic KAF (ك) and its Persian replacement (ک).
pub const ARABIC_KAF: char = '\u{0643}';
pub const PERSIAN_KAF: char = '\u{06A9}';

/// Arabic YEH (ي) and its Persian replacement (ی).
pub const ARABIC_YEH: char = '\u{064A}';
pub const PERSIAN_YEH: char = '\u{06CC}';

/// Superscript hamza written after a final HEH for the ezafe (ٔ).
pub const HAMZA_ABOVE: char = '\u{0654}';

pub const ELLIPSIS: char = '\u{2026}';

pub const OPEN_GUILLEMET: char = '«';
pub const CLOSE_GUILLEMET: char = '»';

/// Persian digits ۰-۹ indexed by value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// ASCII punctuation and its Persian counterpart.
pub const PUNCTUATION: [(char, char); 5] = [
    (',', '،'),
    (';', '؛'),
    ('?', '؟'),
    ('$', '\u{FDFC}'), // rial sign
    ('%', '٪'),
];

/// Straight and curly quotes, all treated alike by quote pairing.
pub const QUOTE_GLYPHS: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Format and spacing characters that are commonly typed in place of a ZWNJ.
pub const FAKE_ZWNJ: [char; 7] = [
    '\u{00AD}', // soft hyphen
    '\u{00AC}', // not sign
    '\u{200F}', // right-to-left mark
    '\u{2005}', // four-per-em space
    '\u{FEFF}', // zero width no-break space
    '\u{200B}', // zero width space
    '\u{200D}', // zero width joiner
];

/// Map an ASCII digit to its Persian digit.
pub fn persian_from_ascii_digit(c: char) -> Option<char> {
    c.to_digit(10).map(|d| PERSIAN_DIGITS[d as usize])
}

/// Map an Arabic-Indic digit (٠-٩, U+0660..U+0669) to its Persian digit.
pub fn persian_from_arabic_digit(c: char) -> Option<char> {
    match c {
        '\u{0660}'..='\u{0669}' => Some(PERSIAN_DIGITS[(c as u32 - 0x0660) as usize]),
        _ => None,
    }
}

/// Render any ASCII digits in `s` with Persian digits, leaving other characters alone.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| persian_from_ascii_digit(c).unwrap_or(c))
        .collect()
}

pub fn is_quote(c: char) -> bool {
    QUOTE_GLYPHS.contains(&c)
}

pub fn is_fake_zwnj(c: char) -> bool {
    FAKE_ZWNJ.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits() {
        assert_eq!(persian_from_ascii_digit('0'), Some('۰'));
        assert_eq!(persian_from_ascii_digit('9'), Some('۹'));
        assert_eq!(persian_from_ascii_digit('a'), None);
        // Arabic-Indic digits are not ASCII digits
        assert_eq!(persian_from_ascii_digit('٣'), None);
    }

    #[test]
    fn test_arabic_digits() {
        assert_eq!(persian_from_arabic_digit('٠'), Some('۰'));
        assert_eq!(persian_from_arabic_digit('٩'), Some('۹'));
        assert_eq!(persian_from_arabic_digit('۵'), None);
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("12 و 30"), "۱۲ و ۳۰");
    }

    #[test]
    fn test_zwnj_is_not_fake() {
        assert!(!is_fake_zwnj(ZWNJ));
        assert!(FAKE_ZWNJ.iter().all(|&c| is_fake_zwnj(c)));
    }
}
