pub mod collect;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod matcher;
pub mod render;
pub mod split;
pub mod translate;

pub use collect::collect_unknown_terms;
pub use dictionary::{DictionarySnapshot, DictionaryStore, TermDictionary};
pub use error::EngineError;
pub use language::Script;
pub use matcher::{MatchEdit, UnmatchedSpan, match_line};
pub use render::render_line;
pub use split::{MaterialsSegment, SplitRules, split_materials};
pub use translate::{TranslationResult, translate_cell};

#[cfg(test)]
pub(crate) mod test_util;
