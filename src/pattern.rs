//! Path patterns producing locale-qualified resource paths

use crate::error::{I18nError, I18nResult};
use std::fmt;

/// Placeholder substituted with a locale tag when a pattern is resolved.
pub const LOCALE_PLACEHOLDER: &str = "{locale}";

/// A template string producing one concrete resource path per locale tag.
///
/// Validated at construction: the pattern must contain exactly one
/// `{locale}` placeholder and must not be blank. A leading `/` is stripped
/// so paths stay relative to the resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern(String);

impl PathPattern {
    /// Validate and normalize a pattern such as `"lang/{locale}.properties"`.
    pub fn new(pattern: impl Into<String>) -> I18nResult<Self> {
        let pattern = pattern.into();
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(I18nError::BlankPattern);
        }
        if trimmed.matches(LOCALE_PLACEHOLDER).count() != 1 {
            return Err(I18nError::InvalidPattern {
                pattern: trimmed.to_string(),
            });
        }
        let normalized = trimmed.strip_prefix('/').unwrap_or(trimmed);
        Ok(Self(normalized.to_string()))
    }

    /// Substitute `tag` into the placeholder, yielding a concrete path.
    pub fn resolve(&self, tag: &str) -> String {
        self.0.replace(LOCALE_PLACEHOLDER, tag)
    }

    /// The normalized pattern string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
