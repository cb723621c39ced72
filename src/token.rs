//! Fixed access token check.
//!
//! There is no token lifecycle: one expected value, compared for exact
//! equality. The comparison runs in constant time over equal-length inputs.

use subtle::ConstantTimeEq;

/// Token accepted when no other value is configured.
pub const DEFAULT_ACCESS_TOKEN: &str = "1234";

/// Compares submitted tokens against one expected value.
#[derive(Clone)]
pub struct TokenValidator {
    expected: String,
}

impl TokenValidator {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Exact, case-sensitive equality.
    pub fn verify(&self, submitted: &str) -> bool {
        self.expected.as_bytes().ct_eq(submitted.as_bytes()).into()
    }
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_TOKEN)
    }
}

// Never print the expected token.
impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("expected", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token() {
        let validator = TokenValidator::default();
        assert!(validator.verify("1234"));
        for wrong in ["0000", "", "12345", "123", " 1234", "1234 "] {
            assert!(!validator.verify(wrong), "token: {wrong:?}");
        }
    }

    #[test]
    fn test_custom_token() {
        let validator = TokenValidator::new("s3cr3t");
        assert!(validator.verify("s3cr3t"));
        assert!(!validator.verify("S3CR3T"));
        assert!(!validator.verify("1234"));
    }

    #[test]
    fn test_debug_redacts_expected() {
        let rendered = format!("{:?}", TokenValidator::new("s3cr3t"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
