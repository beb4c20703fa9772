//! # msgsource
//!
//! Locale-aware message resolution from lang files, with enum label support.
//!
//! This crate resolves human-readable, locale-specific text for symbolic
//! keys by loading `key=value` dictionaries from pluggable storage and
//! walking a deterministic locale-fallback chain. It includes:
//!
//! - Locale tags with canonical-form normalization
//! - Path patterns producing one resource path per locale tag
//! - Dictionary loading and per-path caching with explicit reload
//! - Fallback across locale tags and across registered patterns
//! - Enum-to-label mapping with per-type key-index validation
//!
//! # Example
//!
//! ```rust
//! use msgsource::{I18n, Locale, MessageSource, StaticResourceAccess};
//!
//! # fn main() -> Result<(), msgsource::I18nError> {
//! let resources = StaticResourceAccess::new()
//!     .with_file("lang/en-US.properties", "greeting=Hello!\n")
//!     .with_file("lang/fr-FR.properties", "greeting=Bonjour!\n");
//!
//! let messages = I18n::builder()
//!     .add_pattern("lang/{locale}.properties")?
//!     .default_locale(Locale::new("en-US")?)
//!     .resources(resources)
//!     .build()?;
//!
//! let french = Locale::new("fr-FR")?;
//! assert_eq!(
//!     messages.resolve("greeting", Some(&french)),
//!     Some("Bonjour!".to_string()),
//! );
//! assert_eq!(messages.get_or_default("missing", Some(&french), "n/a"), "n/a");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod dict;
pub mod enums;
pub mod error;
pub mod locale;
pub mod localizer;
pub mod pattern;
pub mod resource;
pub mod source;

pub use builder::{Builder, I18n};
pub use dict::Dictionary;
pub use enums::{EnumIndex, EnumSupport, LocalizableEnum};
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use localizer::{DottedKeyStrategy, EnumLocalizer, KeyStrategy};
pub use pattern::{PathPattern, LOCALE_PLACEHOLDER};
pub use resource::{FsResourceAccess, ResourceAccess, StaticResourceAccess};
pub use source::{LangFileMessageSource, MessageSource};
