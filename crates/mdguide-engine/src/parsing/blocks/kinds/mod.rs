//! Block-specific syntax. Each kind owns its delimiters and recognition
//! logic; the classifier only dispatches.

pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table_row;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::AtxHeading;
pub use list_item::ListMarker;
pub use table_row::PipeRow;
