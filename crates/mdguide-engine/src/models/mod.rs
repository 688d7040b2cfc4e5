pub mod document;
pub mod finding;
pub mod source;

pub use document::Document;
pub use finding::{Finding, RuleId, Severity};
pub use source::Source;
