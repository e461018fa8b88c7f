//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a rendered [`Grid`](crate::sink::Grid) into a stable
//!   text form, one line per row, for `insta` snapshots
//! - **`invariants`**: Checks every rendered grid must pass (columns inside the
//!   merge width, no `<br>` left outside code, rows materialised in order)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
