//! Text-to-value conversions that report a malformed input as an absent
//! result instead of an error.

use std::str::FromStr;

/// Parses `text` with `T::from_str`, discarding the parse error.
pub fn parse_or_absent<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

/// Decimal integer conversion. No surrounding whitespace is accepted.
pub fn string_to_int(text: &str) -> Option<i32> {
    parse_or_absent(text)
}
