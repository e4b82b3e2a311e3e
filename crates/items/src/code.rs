use std::sync::OnceLock;

use regex::Regex;

use catalog_core::{DomainError, DomainResult, ValueObject};

pub const CODE_FIELD: &str = "code";

/// Unique item code (SKU).
///
/// Always trimmed and upper-cased, and always matches `^[A-Z0-9_-]{3,50}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemCode(String);

impl ValueObject for ItemCode {}

impl ItemCode {
    /// Normalize raw input the way every code is stored: trimmed, upper-case.
    ///
    /// Does not validate; use this for lookups and existence checks.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(DomainError::validation(CODE_FIELD, "code is required"));
        }
        if !code_pattern().is_match(&normalized) {
            return Err(DomainError::validation(
                CODE_FIELD,
                "code may only contain upper-case letters, digits, '-' and '_' (3-50 characters)",
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn code_pattern() -> &'static Regex {
    static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Z0-9_-]{3,50}$").unwrap())
}
