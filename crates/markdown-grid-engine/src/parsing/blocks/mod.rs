//! # Block Parsing
//!
//! Line-level structure: what kind of block each line belongs to and what
//! must happen at the boundary before it is laid out.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence, Heading, ...)
//! - **`classify`**: `LineClassifier` produces a `Line` with its `LineKind`
//! - **`boundary`**: `BoundaryPolicy` per kind and the fixed action order
//! - **`list_depth`**: list nesting depth from indentation
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: every line inside is a `CodeLine`
//! - A quoted line is never a table line

pub mod boundary;
pub mod classify;
pub mod kinds;
pub mod list_depth;

pub use boundary::{BoundaryAction, BoundaryPolicy, BoundaryTarget};
pub use classify::{Line, LineClassifier, LineKind};
pub use list_depth::ListLevel;
