//! Builder entry point for message sources

use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::pattern::PathPattern;
use crate::resource::{FsResourceAccess, ResourceAccess};
use crate::source::LangFileMessageSource;
use std::path::Path;
use std::sync::Arc;

/// Entry point for configuring message resolution.
pub struct I18n;

impl I18n {
    /// Start a builder with no patterns and the `en-US` default locale.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builder preconfigured with a filesystem backend rooted at `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Builder {
        Self::builder().filesystem(dir)
    }
}

/// Configures and builds a [`LangFileMessageSource`].
#[derive(Default)]
pub struct Builder {
    patterns: Vec<PathPattern>,
    default_locale: Locale,
    resources: Option<Arc<dyn ResourceAccess>>,
}

impl Builder {
    /// Register a lang file pattern, validated eagerly.
    ///
    /// Patterns are tried in registration order during resolution.
    pub fn add_pattern(mut self, pattern: impl Into<String>) -> I18nResult<Self> {
        self.patterns.push(PathPattern::new(pattern)?);
        Ok(self)
    }

    /// Locale used when a caller supplies none; defaults to `en-US`.
    pub fn default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Storage backend the resolver reads lang files through.
    pub fn resources(mut self, resources: impl ResourceAccess + 'static) -> Self {
        self.resources = Some(Arc::new(resources));
        self
    }

    /// Filesystem backend rooted at `dir`.
    pub fn filesystem<P: AsRef<Path>>(self, dir: P) -> Self {
        self.resources(FsResourceAccess::new(dir))
    }

    /// Build the message source.
    ///
    /// Fails when no patterns or no resource backend were supplied.
    pub fn build(self) -> I18nResult<LangFileMessageSource> {
        if self.patterns.is_empty() {
            return Err(I18nError::NoPatterns);
        }
        let resources = self.resources.ok_or(I18nError::NoResourceAccess)?;
        LangFileMessageSource::new(self.patterns, self.default_locale, resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::StaticResourceAccess;

    #[test]
    fn test_build_requires_patterns() {
        let result = I18n::builder().resources(StaticResourceAccess::new()).build();
        assert!(matches!(result, Err(I18nError::NoPatterns)));
    }

    #[test]
    fn test_build_requires_resources() {
        let result = I18n::builder()
            .add_pattern("lang/{locale}.properties")
            .unwrap()
            .build();
        assert!(matches!(result, Err(I18nError::NoResourceAccess)));
    }

    #[test]
    fn test_invalid_pattern_rejected_at_registration() {
        let result = I18n::builder().add_pattern("lang/messages.properties");
        assert!(matches!(result, Err(I18nError::InvalidPattern { .. })));
    }

    #[test]
    fn test_default_locale_defaults_to_en_us() {
        let source = I18n::builder()
            .add_pattern("lang/{locale}.properties")
            .unwrap()
            .resources(StaticResourceAccess::new())
            .build()
            .unwrap();
        assert_eq!(source.default_locale(), &Locale::new("en-US").unwrap());
    }
}
