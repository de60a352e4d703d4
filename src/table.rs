//! 識別子 → [`TranslationSet`] の集約テーブルと、差し替え可能なローダー。

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use crate::error::{
    LoadError,
    LookupError,
};
use crate::report::{
    Report,
    null_reporter,
};
use crate::translation_set::TranslationSet;

/// The loading strategy installed on a [`LocalizationTable`].
///
/// A loader receives the table it is installed on and the path it was asked
/// to load, populates the table through [`LocalizationTable::add`] as a side
/// effect, and returns whether the load succeeded. What the path means and
/// which format it holds is entirely up to the loader.
pub type LoaderFn<Id, Lang, Str> =
    Box<dyn FnMut(&mut LocalizationTable<Id, Lang, Str>, &Path) -> bool>;

/// Maps string identifiers to their per-language translations.
///
/// The table exclusively owns its [`TranslationSet`] values; sets created
/// through [`add`](Self::add) share the table's failure reporter. Loading is
/// delegated to a replaceable [`LoaderFn`]; the default loader does nothing
/// and reports success.
pub struct LocalizationTable<Id = String, Lang = String, Str = String> {
    table: HashMap<Id, TranslationSet<Lang, Str>>,
    /// `None` is the built-in no-op loader.
    loader: Option<LoaderFn<Id, Lang, Str>>,
    empty: Str,
    reporter: Arc<dyn Report>,
}

impl<Id, Lang, Str> LocalizationTable<Id, Lang, Str>
where
    Str: Default,
{
    /// Creates an empty table with the silent default reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(null_reporter())
    }

    /// Creates an empty table that notifies `reporter` on failures.
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn Report>) -> Self {
        Self { table: HashMap::new(), loader: None, empty: Str::default(), reporter }
    }
}

impl<Id, Lang, Str> LocalizationTable<Id, Lang, Str> {
    /// Installs `loader` as the loading strategy. Last write wins; there is
    /// no chaining.
    pub fn set_loader<F>(&mut self, loader: F)
    where
        F: FnMut(&mut Self, &Path) -> bool + 'static,
    {
        self.loader = Some(Box::new(loader));
    }

    /// Runs the installed loader with `path`.
    ///
    /// On loader failure the reporter receives the fixed message
    /// `Failed to load localization data` and `Err(LoadError)` is returned.
    /// Entries the loader added before failing are kept: partial loads are
    /// not rolled back, tolerating them is the loader's business.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        // デフォルトローダーは何もせず成功を報告する
        let Some(mut loader) = self.loader.take() else {
            return Ok(());
        };
        let ok = loader(self, path.as_ref());
        // ローダーが load 中に set_loader した場合はそちらを優先する
        if self.loader.is_none() {
            self.loader = Some(loader);
        }
        if ok {
            Ok(())
        } else {
            self.reporter.report(&LoadError.to_string());
            Err(LoadError)
        }
    }

    /// Removes every entry; the installed loader is untouched.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Read-only view of the identifier → translation-set map.
    #[must_use]
    pub fn entries(&self) -> &HashMap<Id, TranslationSet<Lang, Str>> {
        &self.table
    }

    /// Mutable view of the underlying map, bypassing [`add`](Self::add).
    ///
    /// Sets inserted this way do not share the table's reporter.
    #[must_use]
    pub fn entries_mut(&mut self) -> &mut HashMap<Id, TranslationSet<Lang, Str>> {
        &mut self.table
    }

    /// Number of identifiers in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table holds no identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Replaces the failure reporter on the table and on every contained
    /// translation set.
    pub fn set_reporter(&mut self, reporter: Arc<dyn Report>) {
        for set in self.table.values_mut() {
            set.set_reporter(Arc::clone(&reporter));
        }
        self.reporter = reporter;
    }
}

impl<Id, Lang, Str> LocalizationTable<Id, Lang, Str>
where
    Id: Eq + Hash,
    Lang: Eq + Hash,
{
    /// Adds a translation for `(id, lang)`, creating the identifier's set if
    /// needed. First write wins per `(id, lang)` pair.
    pub fn add(&mut self, id: Id, lang: Lang, value: Str)
    where
        Str: Default,
    {
        let reporter = Arc::clone(&self.reporter);
        self.table
            .entry(id)
            .or_insert_with(|| TranslationSet::with_reporter(reporter))
            .add(lang, value);
    }

    /// Two-level lookup returning the failure to the caller.
    ///
    /// Distinguishes a missing identifier ([`LookupError::UnknownId`]) from
    /// a missing language under a present identifier
    /// ([`LookupError::UnknownLanguage`]). The reporter is not involved.
    pub fn try_get<QI, QL>(&self, id: &QI, lang: &QL) -> Result<&Str, LookupError>
    where
        Id: Borrow<QI>,
        QI: Eq + Hash + fmt::Debug + ?Sized,
        Lang: Borrow<QL>,
        QL: Eq + Hash + fmt::Debug + ?Sized,
    {
        match self.table.get(id) {
            Some(set) => set.try_get(lang),
            None => Err(LookupError::UnknownId(format!("{id:?}"))),
        }
    }

    /// Returns the translation of `id` into `lang`, or the empty sentinel.
    ///
    /// Either level of miss is reported exactly once through the [`Report`]
    /// hook with a `Failed to get localization` message, then answered with
    /// the shared empty value.
    pub fn get<QI, QL>(&self, id: &QI, lang: &QL) -> &Str
    where
        Id: Borrow<QI>,
        QI: Eq + Hash + fmt::Debug + ?Sized,
        Lang: Borrow<QL>,
        QL: Eq + Hash + fmt::Debug + ?Sized,
    {
        match self.try_get(id, lang) {
            Ok(value) => value,
            Err(err) => {
                self.reporter.report(&format!("Failed to get localization: {err}"));
                &self.empty
            }
        }
    }
}

impl<Id, Lang, Str> Default for LocalizationTable<Id, Lang, Str>
where
    Str: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, Lang, Str> fmt::Debug for LocalizationTable<Id, Lang, Str>
where
    Id: fmt::Debug,
    Lang: fmt::Debug,
    Str: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationTable")
            .field("table", &self.table)
            .field("has_loader", &self.loader.is_some())
            .finish_non_exhaustive()
    }
}

/// Equality over the stored translations only; loaders and reporters are
/// ignored.
impl<Id, Lang, Str> PartialEq for LocalizationTable<Id, Lang, Str>
where
    Id: Eq + Hash,
    Lang: Eq + Hash,
    Str: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

/// Serializes as a plain identifier → (language → translation) map.
impl<Id, Lang, Str> Serialize for LocalizationTable<Id, Lang, Str>
where
    Id: Serialize + Eq + Hash,
    Lang: Serialize + Eq + Hash,
    Str: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.table.serialize(serializer)
    }
}

/// Deserialized tables start with the no-op loader and the silent default
/// reporter.
impl<'de, Id, Lang, Str> Deserialize<'de> for LocalizationTable<Id, Lang, Str>
where
    Id: Deserialize<'de> + Eq + Hash,
    Lang: Deserialize<'de> + Eq + Hash,
    Str: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let table = HashMap::deserialize(deserializer)?;
        Ok(Self { table, loader: None, empty: Str::default(), reporter: null_reporter() })
    }
}
