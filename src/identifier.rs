//! CPF identifier parsing and basic-format validation.
//!
//! Everything in this module is **basic-format-only**: a CPF is accepted when it
//! carries exactly 11 ASCII digits. The two check digits are never computed.
//! Callers rely on this permissive behavior, so it must stay that way even
//! though most 11-digit strings are not real CPF numbers.
//!
//! Two entry points exist because the HTTP surface treats input differently:
//!
//! - Path parameters may carry a mask (`793.491.719-88`). [`Cpf::parse`] strips
//!   every non-digit before checking the length.
//! - JSON payloads must already be bare digits. [`Cpf::parse_strict`] applies
//!   the `^[0-9]{11}$` shape and does not strip anything.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

static STRICT_CPF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{11}$").unwrap_or_else(|err| panic!("invalid CPF pattern: {err}"))
});

/// Remove every character that is not an ASCII digit.
///
/// ```
/// use cadastro::identifier::normalize_digits;
///
/// assert_eq!(normalize_digits("793.491.719-88"), "79349171988");
/// assert_eq!(normalize_digits("abc"), "");
/// ```
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// `true` when every digit of `digits` is the same (`"00000000000"`).
pub fn has_repeated_digits(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// Basic-format-only CPF check.
///
/// Valid iff the input has exactly 11 digits once non-digits are stripped and
/// those digits are not all identical. Check digits are not verified.
pub fn is_valid_basic_format(raw: &str) -> bool {
    let digits = normalize_digits(raw);
    digits.len() == CPF_LEN && !has_repeated_digits(&digits)
}

/// A CPF reduced to its 11 digits.
///
/// Construction only guarantees the shape; see the module docs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse a possibly masked CPF. Non-digits are dropped first.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let digits = normalize_digits(raw);
        if digits.len() != CPF_LEN {
            return Err(RegistryError::InvalidFormat);
        }
        Ok(Cpf(digits))
    }

    /// Parse a CPF that must already be exactly 11 digits, no mask allowed.
    pub fn parse_strict(raw: &str) -> Result<Self, RegistryError> {
        if !STRICT_CPF.is_match(raw) {
            return Err(RegistryError::InvalidFormat);
        }
        Ok(Cpf(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Cpf {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cpf::parse_strict(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_digits() {
        let cases = [
            ("79349171988", "79349171988"),
            ("793.491.719-88", "79349171988"),
            (" 793 491 719 88 ", "79349171988"),
            ("", ""),
            ("cpf", ""),
            // non-ASCII digits are not CPF digits
            ("٧٩٣", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_digits(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_basic_format_accepts_eleven_distinct_digits() {
        assert!(is_valid_basic_format("79349171988"));
        assert!(is_valid_basic_format("793.491.719-88"));
        // no check-digit arithmetic: an arbitrary sequence passes
        assert!(is_valid_basic_format("12345678900"));
        assert!(is_valid_basic_format("00000000001"));
    }

    #[test]
    fn test_basic_format_rejects_wrong_length() {
        for input in ["", "1234567890", "123456789012", "abc", "7934917198a"] {
            assert!(!is_valid_basic_format(input), "input: {input:?}");
        }
    }

    #[test]
    fn test_basic_format_rejects_repeated_digits() {
        for d in '0'..='9' {
            let input: String = std::iter::repeat(d).take(CPF_LEN).collect();
            assert!(!is_valid_basic_format(&input), "input: {input}");
        }
        assert!(!is_valid_basic_format("111.111.111-11"));
    }

    #[test]
    fn test_has_repeated_digits_empty() {
        assert!(!has_repeated_digits(""));
        assert!(has_repeated_digits("7"));
    }

    #[test]
    fn test_parse_strips_mask() {
        let cpf = Cpf::parse("793.491.719-88").unwrap();
        assert_eq!(cpf.as_str(), "79349171988");
        // repeated digits are still a well-formed identifier
        assert!(Cpf::parse("00000000000").is_ok());
        assert_eq!(Cpf::parse("123"), Err(RegistryError::InvalidFormat));
    }

    #[test]
    fn test_parse_strict_rejects_mask() {
        assert!(Cpf::parse_strict("79349171988").is_ok());
        for input in ["793.491.719-88", "7934917198", "793491719880", " 79349171988", ""] {
            assert_eq!(
                Cpf::parse_strict(input),
                Err(RegistryError::InvalidFormat),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_deserialize_uses_strict_shape() {
        let cpf: Cpf = serde_json::from_str("\"89540115604\"").unwrap();
        assert_eq!(cpf.to_string(), "89540115604");
        assert!(serde_json::from_str::<Cpf>("\"895.401.156-04\"").is_err());
        assert!(serde_json::from_str::<Cpf>("89540115604").is_err());
    }
}
