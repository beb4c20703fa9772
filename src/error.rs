//! Error types for message resolution and enum key indexing

use thiserror::Error;

/// Errors raised while configuring message resolution or building an enum
/// key index.
///
/// Resolution misses and unreadable or malformed lang files never surface
/// here; they degrade to `None` / fallback values and empty dictionaries.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a locale tag
    #[error("Invalid locale tag: {tag}")]
    InvalidLocale {
        /// The tag that failed to parse.
        tag: String,
    },

    /// A path pattern was blank
    #[error("Path pattern cannot be blank")]
    BlankPattern,

    /// A path pattern did not contain exactly one locale placeholder
    #[error("Path pattern must contain exactly one {{locale}} placeholder: {pattern}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
    },

    /// A message source was built without any path patterns
    #[error("No lang file patterns configured. Use add_pattern(..) before build()")]
    NoPatterns,

    /// A message source was built without a resource access backend
    #[error("No resource access configured. Use resources(..) or filesystem(..) before build()")]
    NoResourceAccess,

    /// An enum constant supplied a blank lookup key
    #[error("Blank key in {type_name}: {variant}")]
    BlankEnumKey {
        /// Simple name of the enum type.
        type_name: &'static str,
        /// Debug rendering of the offending constant.
        variant: String,
    },

    /// Two constants within one enum type supplied the same lookup key
    #[error("Duplicate key in {type_name}: {key}")]
    DuplicateEnumKey {
        /// Simple name of the enum type.
        type_name: &'static str,
        /// The key supplied by more than one constant.
        key: String,
    },
}

/// Result type for fallible i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
