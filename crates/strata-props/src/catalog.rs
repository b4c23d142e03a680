//! The construction-time table of supported keywords.

use indexmap::IndexMap;
use strata_core::SupportedKeyword;

/// Immutable table mapping keyword name to its [`SupportedKeyword`]
/// descriptor.
///
/// Built once from a caller-supplied list; duplicate names in the input
/// overwrite earlier entries silently (last wins), since construction is
/// caller-controlled. The only post-construction mutation path is the
/// crate-private insertion reserved for the case assembler.
#[derive(Clone, Debug)]
pub struct KeywordCatalog<T> {
    entries: IndexMap<String, SupportedKeyword<T>>,
}

impl<T> KeywordCatalog<T> {
    /// Build a catalog from supported-keyword descriptors, last wins.
    pub fn new(supported: impl IntoIterator<Item = SupportedKeyword<T>>) -> Self {
        let mut entries = IndexMap::new();
        for keyword in supported {
            entries.insert(keyword.name().to_string(), keyword);
        }
        Self { entries }
    }

    /// Whether `name` is a supported keyword.
    pub fn is_supported(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up the descriptor for `name`.
    pub fn get(&self, name: &str) -> Option<&SupportedKeyword<T>> {
        self.entries.get(name)
    }

    /// Number of supported keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SupportedKeyword<T>> {
        self.entries.values()
    }

    /// Insert a descriptor after construction.
    ///
    /// Reserved for [`CaseProperties`](crate::CaseProperties), which
    /// registers one keyword whose default it derives from geometry
    /// outside the normal catalog-build step.
    pub(crate) fn insert(&mut self, keyword: SupportedKeyword<T>) {
        self.entries.insert(keyword.name().to_string(), keyword);
    }
}
