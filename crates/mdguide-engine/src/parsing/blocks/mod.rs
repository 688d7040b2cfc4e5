//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! 1. **Line classification** (`classify`): each line gets a `LineClass` holding
//!    only local facts: blank, fence signature, heading, list marker, table row,
//!    standalone link or plain text.
//! 2. **Block construction** (`builder`): a `BlockBuilder` keeps the open leaf
//!    (paragraph, list item, fence) and emits `BlockNode`s as leaves close.
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Block positions are dense and follow source order
//! - An unterminated fence fails the whole document

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
