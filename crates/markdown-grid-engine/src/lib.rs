//! # markdown-grid-engine
//!
//! Lays a Markdown-like document out on a spreadsheet-style grid: headings,
//! lists, quotes, code blocks and tables become styled cells, with list depth
//! mapped to columns.
//!
//! ## Modules
//!
//! - **`parsing`**: Line classification, list depth, inline bold/code and `<br>` handling
//! - **`render`**: The line-by-line layout engine
//! - **`sink`**: The grid the engine writes to, and style resolution
//! - **`snapshot`**: Text snapshots and invariant checks for tests
//! - **`io`**: Reading input files as line streams

pub mod io;
pub mod parsing;
pub mod render;
pub mod sink;
pub mod snapshot;

pub use io::*;
pub use render::{MarkdownRenderer, RenderError, RenderSummary, render_lines, render_str};
pub use sink::{CellRef, Grid, GridSink, LogicalStyle, StyleContext, StyleSheet, VerticalAlign};
