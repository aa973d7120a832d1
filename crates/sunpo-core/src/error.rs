/// Engine failure taxonomy.
///
/// Unmatched terms are not errors; they travel in
/// [`TranslationResult`](crate::translate::TranslationResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Attempted to register an empty term.
    #[error("cannot register an empty term")]
    InvalidTerm,

    /// The matcher produced an edit list that overlaps, runs backwards, or
    /// leaves the line. Invariant violation; the cell must not be rendered.
    #[error("malformed edit at byte {at}")]
    Overlap { at: usize },
}
