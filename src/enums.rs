//! Enum key indexing and the process-wide index cache

use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::localizer::EnumLocalizer;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::sync::Arc;

/// Global index cache keyed by enum type identity.
///
/// A type's constant set is fixed for the process lifetime, so its index is
/// built at most once and shared by every support instance. A type that
/// fails the key contract caches nothing and fails again on every retry.
static KEY_INDEX_CACHE: Lazy<DashMap<TypeId, Arc<dyn Any + Send + Sync>>> =
    Lazy::new(DashMap::new);

/// An enumerated type whose constants carry stable lookup keys.
///
/// Constants register themselves through [`VARIANTS`](Self::VARIANTS) in
/// declaration order; there is no runtime reflection. Every constant must
/// supply a non-blank key, unique within the type.
pub trait LocalizableEnum: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Simple type name, consumed by key strategies.
    const NAME: &'static str;

    /// Every constant of the type, in declaration order.
    const VARIANTS: &'static [Self];

    /// Stable lookup key for this constant.
    fn key(&self) -> &'static str;
}

/// A validated key→constant index for one enumerated type.
///
/// Built on first use and cached process-wide; a blank or duplicate key is
/// a construction-time error for the whole type, not a per-lookup error.
#[derive(Debug)]
pub struct EnumIndex<E: LocalizableEnum> {
    by_key: HashMap<&'static str, E>,
}

impl<E: LocalizableEnum> EnumIndex<E> {
    /// Fetch the cached index for `E`, building it on first use.
    ///
    /// Concurrent first uses build at most once.
    pub fn of() -> I18nResult<Arc<Self>> {
        let shared = {
            let entry = KEY_INDEX_CACHE
                .entry(TypeId::of::<E>())
                .or_try_insert_with(|| {
                    Self::build().map(|index| Arc::new(index) as Arc<dyn Any + Send + Sync>)
                })?;
            Arc::clone(entry.value())
        };
        Ok(shared
            .downcast::<Self>()
            .unwrap_or_else(|_| unreachable!("index cache is keyed by TypeId")))
    }

    fn build() -> I18nResult<Self> {
        let mut by_key = HashMap::with_capacity(E::VARIANTS.len());
        for variant in E::VARIANTS {
            let key = variant.key();
            if key.trim().is_empty() {
                return Err(I18nError::BlankEnumKey {
                    type_name: E::NAME,
                    variant: format!("{variant:?}"),
                });
            }
            if by_key.insert(key, *variant).is_some() {
                return Err(I18nError::DuplicateEnumKey {
                    type_name: E::NAME,
                    key: key.to_string(),
                });
            }
        }
        Ok(Self { by_key })
    }

    /// Constant registered under `key`; blank keys yield `None`.
    pub fn by_key(&self, key: &str) -> Option<E> {
        if key.trim().is_empty() {
            return None;
        }
        self.by_key.get(key).copied()
    }

    /// All constants in declaration order.
    pub fn values(&self) -> &'static [E] {
        E::VARIANTS
    }
}

/// Localization support for one enumerated type: key lookups plus labels.
///
/// # Example
///
/// ```rust
/// use msgsource::{EnumLocalizer, EnumSupport, I18n, LocalizableEnum, StaticResourceAccess};
/// use std::sync::Arc;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Status {
///     Active,
///     Inactive,
/// }
///
/// impl LocalizableEnum for Status {
///     const NAME: &'static str = "Status";
///     const VARIANTS: &'static [Self] = &[Self::Active, Self::Inactive];
///
///     fn key(&self) -> &'static str {
///         match self {
///             Self::Active => "ACTIVE",
///             Self::Inactive => "INACTIVE",
///         }
///     }
/// }
///
/// # fn main() -> Result<(), msgsource::I18nError> {
/// let resources = StaticResourceAccess::new()
///     .with_file("lang/en-US.properties", "Status.ACTIVE=Active\n");
/// let messages = I18n::builder()
///     .add_pattern("lang/{locale}.properties")?
///     .resources(resources)
///     .build()?;
///
/// let statuses = EnumSupport::<Status>::new(EnumLocalizer::new(Arc::new(messages)))?;
/// assert_eq!(statuses.label("ACTIVE", None), "Active");
/// assert_eq!(statuses.label("INACTIVE", None), "INACTIVE");
/// assert_eq!(statuses.by_key("ACTIVE"), Some(Status::Active));
/// # Ok(())
/// # }
/// ```
pub struct EnumSupport<E: LocalizableEnum> {
    index: Arc<EnumIndex<E>>,
    localizer: EnumLocalizer,
}

impl<E: LocalizableEnum> fmt::Debug for EnumSupport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumSupport")
            .field("type_name", &E::NAME)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<E: LocalizableEnum> EnumSupport<E> {
    /// Build support for `E`, surfacing key-contract violations.
    pub fn new(localizer: EnumLocalizer) -> I18nResult<Self> {
        Ok(Self {
            index: EnumIndex::of()?,
            localizer,
        })
    }

    /// Constant registered under `key`; blank keys yield `None`.
    pub fn by_key(&self, key: &str) -> Option<E> {
        self.index.by_key(key)
    }

    /// Localized label for the constant registered under `key`.
    ///
    /// A missing translation degrades to the raw key itself.
    pub fn label(&self, key: &str, locale: Option<&Locale>) -> String {
        self.localizer.label::<E>(key, locale)
    }

    /// Localized label for `value`; `None` yields an empty string.
    pub fn label_of(&self, value: Option<E>, locale: Option<&Locale>) -> String {
        self.localizer.label_of(value, locale)
    }

    /// All constants in declaration order.
    pub fn values(&self) -> &'static [E] {
        self.index.values()
    }
}
