//! Message resolution over lang file dictionaries with locale fallback

use crate::dict::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::pattern::PathPattern;
use crate::resource::ResourceAccess;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Resolves locale-specific text for symbolic keys.
pub trait MessageSource: Send + Sync {
    /// Resolve `key` under `locale`, walking the fallback chain.
    ///
    /// A blank key short-circuits to `None` without touching storage. A
    /// `None` locale means the source's configured default locale.
    fn resolve(&self, key: &str, locale: Option<&Locale>) -> Option<String>;

    /// Like [`resolve`](Self::resolve), substituting `fallback` on a miss.
    fn get_or_default(&self, key: &str, locale: Option<&Locale>, fallback: &str) -> String {
        self.resolve(key, locale)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// [`MessageSource`] backed by `key=value` lang files reached through a
/// [`ResourceAccess`] backend.
///
/// One dictionary is loaded and cached per resolved path. Candidate paths
/// are walked pattern-major: every fallback tag for the first registered
/// pattern, then every tag for the second, and so on. [`reload`] clears the
/// cache so subsequent resolutions observe changed storage; in-flight
/// resolutions may still return values read from the old cache.
///
/// [`reload`]: LangFileMessageSource::reload
pub struct LangFileMessageSource {
    patterns: Vec<PathPattern>,
    default_locale: Locale,
    resources: Arc<dyn ResourceAccess>,
    cache: DashMap<String, Arc<Dictionary>>,
}

impl fmt::Debug for LangFileMessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LangFileMessageSource")
            .field("patterns", &self.patterns)
            .field("default_locale", &self.default_locale)
            .field("cached_paths", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl LangFileMessageSource {
    /// Create a source over `patterns`, tried in registration order.
    ///
    /// Fails when `patterns` is empty. Each pattern has already proven its
    /// placeholder invariant at construction.
    pub fn new(
        patterns: Vec<PathPattern>,
        default_locale: Locale,
        resources: Arc<dyn ResourceAccess>,
    ) -> I18nResult<Self> {
        if patterns.is_empty() {
            return Err(I18nError::NoPatterns);
        }
        Ok(Self {
            patterns,
            default_locale,
            resources,
            cache: DashMap::new(),
        })
    }

    /// The locale substituted when a caller supplies none.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Drop every cached dictionary; the next resolution reloads lazily.
    pub fn reload(&self) {
        self.cache.clear();
        debug!("cleared dictionary cache");
    }

    fn dictionary(&self, path: &str) -> Arc<Dictionary> {
        self.cache
            .entry(path.to_string())
            .or_insert_with(|| {
                Arc::new(Dictionary::load_or_empty(self.resources.open(path), path))
            })
            .clone()
    }

    /// Ordered locale tags to try: full tag, bare language, default tag.
    ///
    /// Duplicates collapse with first occurrence winning, so the default
    /// locale's dictionary is consulted at most once per pattern.
    fn fallback_tags(&self, locale: Option<&Locale>) -> Vec<String> {
        let locale = locale.unwrap_or(&self.default_locale);
        let mut tags = Vec::with_capacity(3);
        for tag in [locale.tag(), locale.language(), self.default_locale.tag()] {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    fn candidate_paths(&self, locale: Option<&Locale>) -> Vec<String> {
        let tags = self.fallback_tags(locale);
        let mut paths = Vec::with_capacity(self.patterns.len() * tags.len());
        for pattern in &self.patterns {
            for tag in &tags {
                paths.push(pattern.resolve(tag));
            }
        }
        paths
    }
}

impl MessageSource for LangFileMessageSource {
    fn resolve(&self, key: &str, locale: Option<&Locale>) -> Option<String> {
        if key.trim().is_empty() {
            return None;
        }
        for path in self.candidate_paths(locale) {
            let dict = self.dictionary(&path);
            if let Some(value) = dict.get(key) {
                return Some(value.to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::StaticResourceAccess;

    fn source_with_default(tag: &str, patterns: &[&str]) -> LangFileMessageSource {
        let patterns = patterns
            .iter()
            .map(|p| PathPattern::new(*p).unwrap())
            .collect();
        LangFileMessageSource::new(
            patterns,
            Locale::new(tag).unwrap(),
            Arc::new(StaticResourceAccess::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_fallback_tags_full_language_default() {
        let source = source_with_default("fr-FR", &["lang/{locale}.properties"]);
        let locale = Locale::new("en-US").unwrap();
        assert_eq!(
            source.fallback_tags(Some(&locale)),
            vec!["en-US", "en", "fr-FR"],
        );
    }

    #[test]
    fn test_fallback_tags_collapse_for_default_locale() {
        let source = source_with_default("fr", &["lang/{locale}.properties"]);
        let locale = Locale::new("fr").unwrap();
        assert_eq!(source.fallback_tags(Some(&locale)), vec!["fr"]);
    }

    #[test]
    fn test_fallback_tags_omitted_locale_uses_default() {
        let source = source_with_default("fr-FR", &["lang/{locale}.properties"]);
        assert_eq!(source.fallback_tags(None), vec!["fr-FR", "fr"]);
    }

    #[test]
    fn test_fallback_tags_language_shared_with_default() {
        let source = source_with_default("en", &["lang/{locale}.properties"]);
        let locale = Locale::new("en-US").unwrap();
        assert_eq!(source.fallback_tags(Some(&locale)), vec!["en-US", "en"]);
    }

    #[test]
    fn test_candidate_paths_pattern_major_order() {
        let source = source_with_default(
            "en",
            &["lang/{locale}.properties", "extra/{locale}.properties"],
        );
        let locale = Locale::new("en-US").unwrap();
        assert_eq!(
            source.candidate_paths(Some(&locale)),
            vec![
                "lang/en-US.properties",
                "lang/en.properties",
                "extra/en-US.properties",
                "extra/en.properties",
            ],
        );
    }

    #[test]
    fn test_empty_pattern_list_rejected() {
        let result = LangFileMessageSource::new(
            Vec::new(),
            Locale::default(),
            Arc::new(StaticResourceAccess::new()),
        );
        assert!(matches!(result, Err(I18nError::NoPatterns)));
    }
}
