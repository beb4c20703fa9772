//! Locale tags and normalization

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::{langid, LanguageIdentifier};

/// A language/region identifier driving translation selection.
///
/// Wraps a parsed BCP 47 language identifier. Two locales are equal iff
/// their canonical tags match, so `"en-us"` and `"en-US"` compare equal
/// after parsing. Serializes as the canonical tag string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// Parse a locale from a BCP 47 tag such as `"en-US"`.
    pub fn new(tag: &str) -> I18nResult<Self> {
        tag.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| I18nError::InvalidLocale {
                tag: tag.to_string(),
            })
    }

    /// Canonical tag for this locale, e.g. `"en-US"`.
    ///
    /// The undetermined language normalizes to an empty string.
    pub fn tag(&self) -> String {
        let tag = self.0.to_string();
        if tag.eq_ignore_ascii_case("und") {
            String::new()
        } else {
            tag
        }
    }

    /// Bare language subtag, e.g. `"en"`.
    ///
    /// Empty for the undetermined language.
    pub fn language(&self) -> String {
        let language = self.0.language.to_string();
        if language.eq_ignore_ascii_case("und") {
            String::new()
        } else {
            language
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(langid!("en-US"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::new(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0.to_string()
    }
}
