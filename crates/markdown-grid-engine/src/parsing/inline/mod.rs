//! # Inline Parsing
//!
//! Cursor-based scanning of a single line's text for `**bold**`, `` `code` ``
//! and explicit `<br>` line breaks.
//!
//! ## Modules
//!
//! - **`types`**: `FormattedRun` and `LineBreakSplit`
//! - **`kinds`**: Inline delimiters with their disambiguation rules (BoldMarker, CodeSpan)
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`segment`**: `segment_runs()` turns text into formatted runs
//! - **`breaks`**: `split_on_line_breaks()` splits text into output lines
//!
//! ## Raw Zone Precedence
//!
//! Inline code is a raw zone: inside backticks neither `**` nor `<br>` has any
//! effect. Bold does not suppress code.

pub mod breaks;
pub mod cursor;
pub mod kinds;
pub mod segment;
pub mod types;

pub use breaks::{has_line_break, join_breaks_as_space, split_on_line_breaks};
pub use segment::segment_runs;
pub use types::{FormattedRun, LineBreakSplit};
