use indexmap::IndexMap;

use crate::error::EngineError;

/// Insertion-ordered mapping from source term to replacement text.
///
/// Order matters: the matcher breaks length ties by first-inserted-wins, and
/// the learned file round-trips in a stable order. Keys are never empty; keys
/// may overlap as substrings of one another ("フード丈" contains "丈").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermDictionary {
    entries: IndexMap<String, String>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a static pair table. Empty keys are dropped.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .filter(|(term, _)| !term.is_empty())
            .map(|(term, translation)| (term.to_string(), translation.to_string()))
            .collect();
        Self { entries }
    }

    /// Insert or overwrite an entry. Overwriting keeps the key's original
    /// position, so corrections do not change match precedence.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<(), EngineError> {
        let term = term.into();
        if term.is_empty() {
            return Err(EngineError::InvalidTerm);
        }
        self.entries.insert(term, translation.into());
        Ok(())
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, translation)| (term.as_str(), translation.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective dictionary: base entries in their order, overlay entries
    /// layered on top. Overlay wins on key collision.
    pub fn merged(base: &Self, overlay: &Self) -> Self {
        let mut entries = base.entries.clone();
        for (term, translation) in &overlay.entries {
            entries.insert(term.clone(), translation.clone());
        }
        Self { entries }
    }

}

impl From<IndexMap<String, String>> for TermDictionary {
    fn from(map: IndexMap<String, String>) -> Self {
        let entries = map.into_iter().filter(|(term, _)| !term.is_empty()).collect();
        Self { entries }
    }
}

/// Mutable dictionary state behind the per-pass snapshots.
///
/// Base entries are fixed at construction. Learned entries are appended
/// between passes and take precedence over base on collision. Care labels are
/// a disjoint dictionary consulted only for care-instruction segments.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    base: TermDictionary,
    learned: TermDictionary,
    care: TermDictionary,
}

impl DictionaryStore {
    pub fn new(base: TermDictionary, care: TermDictionary) -> Self {
        Self {
            base,
            learned: TermDictionary::new(),
            care,
        }
    }

    /// Seed the learned overlay, e.g. from the persisted learned file.
    pub fn with_learned(mut self, learned: TermDictionary) -> Self {
        self.learned = learned;
        self
    }

    /// Register a learned term and return the updated snapshot.
    pub fn learn(
        &mut self,
        term: &str,
        translation: &str,
    ) -> Result<DictionarySnapshot, EngineError> {
        self.learned.insert(term, translation)?;
        Ok(self.snapshot())
    }

    pub fn learned(&self) -> &TermDictionary {
        &self.learned
    }

    /// Immutable view used for one translation pass.
    pub fn snapshot(&self) -> DictionarySnapshot {
        DictionarySnapshot {
            general: TermDictionary::merged(&self.base, &self.learned),
            care: self.care.clone(),
        }
    }
}

/// Read-only dictionary view for the duration of one pass. Learning never
/// mutates an existing snapshot.
#[derive(Debug, Clone)]
pub struct DictionarySnapshot {
    general: TermDictionary,
    care: TermDictionary,
}

impl DictionarySnapshot {
    pub fn general(&self) -> &TermDictionary {
        &self.general
    }

    pub fn care(&self) -> &TermDictionary {
        &self.care
    }
}
