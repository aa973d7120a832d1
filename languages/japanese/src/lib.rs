pub mod care;
pub mod countries;
pub mod format;
pub mod script;
pub mod terms;

pub use care::CareLabelLoader;
pub use countries::COUNTRIES;
pub use format::format_output;
pub use script::JapaneseScript;
pub use terms::base_dictionary;
