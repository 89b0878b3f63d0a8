//! Field predicates used by the contact form rules.
//!
//! Each predicate is total: it accepts any string and never panics.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters a browser's `String.prototype.trim` strips: Unicode White_Space
/// without U+0085, plus the byte order mark U+FEFF.
const FORM_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Shape check for email addresses: `local@domain.tld`, no whitespace, one `@`.
///
/// This is deliberately permissive. It accepts some undeliverable addresses
/// (`a@b..c`) and rejects some valid exotic ones (quoted local parts with spaces).
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{FORM_WHITESPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// Smallest accepted digit count for a phone number.
pub const PHONE_MIN_DIGITS: usize = 10;

/// Largest accepted digit count for a phone number.
pub const PHONE_MAX_DIGITS: usize = 15;

/// True iff `c` is whitespace the way a browser form sees it.
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// True iff `value` contains something other than whitespace.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim_matches(is_form_whitespace).is_empty()
}

/// True iff `value` is at least `min` UTF-16 code units long.
///
/// This is the length a browser reports, so a character outside the Basic
/// Multilingual Plane counts as two. The full string is counted, including
/// leading and trailing whitespace.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

/// True iff `value` has the shape of an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// True iff `value` holds between 10 and 15 decimal digits once every other
/// character (spaces, `+`, parentheses, dashes, dots) is discarded.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = count_digits(value);
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

/// The ASCII decimal digits of `value`, in order.
pub fn ascii_digits(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().filter(char::is_ascii_digit)
}

/// Number of ASCII decimal digits in `value`.
pub fn count_digits(value: &str) -> usize {
    ascii_digits(value).count()
}
