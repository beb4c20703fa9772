//! Enum label localization via key-derivation strategies

use crate::enums::LocalizableEnum;
use crate::locale::Locale;
use crate::source::MessageSource;
use std::fmt;
use std::sync::Arc;

/// Pure derivation of a message key from a type name and a raw constant key.
///
/// Implemented for any `Fn(&str, &str) -> String` closure, so custom
/// schemes do not need a named type.
pub trait KeyStrategy: Send + Sync {
    /// Derive the message key looked up in the message source.
    fn message_key(&self, type_name: &str, raw_key: &str) -> String;
}

impl<F> KeyStrategy for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn message_key(&self, type_name: &str, raw_key: &str) -> String {
        self(type_name, raw_key)
    }
}

/// Default strategy: joins the type name and raw key with a dot,
/// e.g. `Status.ACTIVE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedKeyStrategy;

impl KeyStrategy for DottedKeyStrategy {
    fn message_key(&self, type_name: &str, raw_key: &str) -> String {
        format!("{type_name}.{raw_key}")
    }
}

/// Turns enumerated constants into localized labels.
///
/// An unresolved constant degrades to its raw key rather than an error or a
/// blank string.
#[derive(Clone)]
pub struct EnumLocalizer {
    messages: Arc<dyn MessageSource>,
    strategy: Arc<dyn KeyStrategy>,
}

impl fmt::Debug for EnumLocalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumLocalizer").finish_non_exhaustive()
    }
}

impl EnumLocalizer {
    /// Localizer with the default dotted key strategy.
    pub fn new(messages: Arc<dyn MessageSource>) -> Self {
        Self::with_strategy(messages, DottedKeyStrategy)
    }

    /// Localizer with a custom key strategy.
    pub fn with_strategy(
        messages: Arc<dyn MessageSource>,
        strategy: impl KeyStrategy + 'static,
    ) -> Self {
        Self {
            messages,
            strategy: Arc::new(strategy),
        }
    }

    /// Label for the constant of `E` registered under `raw_key`.
    ///
    /// A blank raw key yields an empty string without consulting the
    /// message source; a missing translation yields `raw_key` itself.
    pub fn label<E: LocalizableEnum>(&self, raw_key: &str, locale: Option<&Locale>) -> String {
        if raw_key.trim().is_empty() {
            return String::new();
        }
        let message_key = self.strategy.message_key(E::NAME, raw_key);
        self.messages.get_or_default(&message_key, locale, raw_key)
    }

    /// Label for `value`; `None` yields an empty string.
    pub fn label_of<E: LocalizableEnum>(
        &self,
        value: Option<E>,
        locale: Option<&Locale>,
    ) -> String {
        match value {
            Some(value) => self.label::<E>(value.key(), locale),
            None => String::new(),
        }
    }
}
