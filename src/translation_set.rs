//! Per-identifier mapping from language key to translated string.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;
use std::sync::Arc;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use crate::error::LookupError;
use crate::report::{
    Report,
    null_reporter,
};

/// Holds the translations of a single piece of text, one per language.
///
/// `Lang` is the language key (a string, an enum, ...), `Str` the stored
/// string type. Both default to [`String`]. Failed lookups are reported
/// through the injected [`Report`] hook and answered with a shared empty
/// sentinel instead of an error, so a missing translation never interrupts
/// rendering; use [`try_get`](Self::try_get) to branch on the failure
/// instead.
pub struct TranslationSet<Lang = String, Str = String> {
    entries: HashMap<Lang, Str>,
    /// Returned by reference whenever a lookup misses.
    empty: Str,
    reporter: Arc<dyn Report>,
}

impl<Lang, Str> TranslationSet<Lang, Str>
where
    Str: Default,
{
    /// Creates an empty set with the silent default reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(null_reporter())
    }

    /// Creates an empty set that notifies `reporter` on failed lookups.
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn Report>) -> Self {
        Self { entries: HashMap::new(), empty: Str::default(), reporter }
    }
}

impl<Lang, Str> TranslationSet<Lang, Str> {
    /// Replaces the failure reporter, e.g. after deserialization.
    pub fn set_reporter(&mut self, reporter: Arc<dyn Report>) {
        self.reporter = reporter;
    }

    /// Read-only view of the language → translation map.
    #[must_use]
    pub fn entries(&self) -> &HashMap<Lang, Str> {
        &self.entries
    }

    /// Number of languages with a translation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no translation is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Lang, Str> TranslationSet<Lang, Str>
where
    Lang: Eq + Hash,
{
    /// Adds a translation for `lang`, keeping the existing one if present.
    ///
    /// First write wins: adding a language twice is a silent no-op, not an
    /// error. Returns `&mut self` so calls can be chained.
    pub fn add(&mut self, lang: Lang, value: Str) -> &mut Self {
        self.entries.entry(lang).or_insert(value);
        self
    }

    /// Removes the translation for `lang`; a no-op when absent.
    pub fn remove<Q>(&mut self, lang: &Q) -> &mut Self
    where
        Lang: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.remove(lang);
        self
    }

    /// Returns true if a translation for `lang` is stored.
    #[must_use]
    pub fn has<Q>(&self, lang: &Q) -> bool
    where
        Lang: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(lang)
    }

    /// Looks up the translation for `lang`.
    ///
    /// Unlike [`get`](Self::get) this is silent: the reporter is not
    /// involved, the failure is returned to the caller.
    pub fn try_get<Q>(&self, lang: &Q) -> Result<&Str, LookupError>
    where
        Lang: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        self.entries
            .get(lang)
            .ok_or_else(|| LookupError::UnknownLanguage(format!("{lang:?}")))
    }

    /// Returns the translation for `lang`, or the empty sentinel.
    ///
    /// A miss is reported through the [`Report`] hook and answered with the
    /// shared empty value; callers that need to distinguish "empty string
    /// stored" from "language missing" must use [`has`](Self::has) or
    /// [`try_get`](Self::try_get).
    pub fn get<Q>(&self, lang: &Q) -> &Str
    where
        Lang: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        match self.try_get(lang) {
            Ok(value) => value,
            Err(err) => {
                self.reporter.report(&format!("Failed to get translation: {err}"));
                &self.empty
            }
        }
    }
}

/// Indexing shorthand, equivalent to [`TranslationSet::get`].
impl<Lang, Str, Q> Index<&Q> for TranslationSet<Lang, Str>
where
    Lang: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + fmt::Debug + ?Sized,
{
    type Output = Str;

    fn index(&self, lang: &Q) -> &Str {
        self.get(lang)
    }
}

impl<Lang, Str> Default for TranslationSet<Lang, Str>
where
    Str: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Lang, Str> Clone for TranslationSet<Lang, Str>
where
    Lang: Clone,
    Str: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            empty: self.empty.clone(),
            reporter: Arc::clone(&self.reporter),
        }
    }
}

impl<Lang, Str> fmt::Debug for TranslationSet<Lang, Str>
where
    Lang: fmt::Debug,
    Str: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationSet").field("entries", &self.entries).finish_non_exhaustive()
    }
}

/// Equality over the stored translations only; reporters are ignored.
impl<Lang, Str> PartialEq for TranslationSet<Lang, Str>
where
    Lang: Eq + Hash,
    Str: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Serializes as a plain language → translation map.
impl<Lang, Str> Serialize for TranslationSet<Lang, Str>
where
    Lang: Serialize + Eq + Hash,
    Str: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

/// Deserialized sets start with the silent default reporter; install a real
/// one afterwards with [`TranslationSet::set_reporter`].
impl<'de, Lang, Str> Deserialize<'de> for TranslationSet<Lang, Str>
where
    Lang: Deserialize<'de> + Eq + Hash,
    Str: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = HashMap::deserialize(deserializer)?;
        Ok(Self { entries, empty: Str::default(), reporter: null_reporter() })
    }
}
