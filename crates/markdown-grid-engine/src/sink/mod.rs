//! # Grid Sink
//!
//! The boundary between the layout engine and whatever stores the cells.
//!
//! ## Modules
//!
//! - **`cell`**: Cell and row handles, A1 addressing
//! - **`logical`**: The named styles the engine asks for
//! - **`style`**: Turning named styles into fonts, fills and borders
//! - **`grid`**: In-memory sink used by the CLI and the tests

pub mod cell;
pub mod grid;
pub mod logical;
pub mod style;

pub use cell::{CellRef, RowRef, col_to_name};
pub use grid::{Cell, Grid};
pub use logical::{FrameMask, LogicalStyle};
pub use style::{StyleContext, StyleSheet, VerticalAlign};

use crate::parsing::FormattedRun;

/// Where rendered cells go.
///
/// Creating a cell that already exists returns the existing one with its
/// content intact, so the engine may address a cell as often as it likes.
pub trait GridSink {
    /// Returns the cell at `(row, col)`, materialising its row if needed.
    fn create_or_get_cell(&mut self, row: usize, col: usize) -> CellRef;

    /// Replaces the cell's text and sets its style.
    fn set_formatted_text(&mut self, cell: CellRef, runs: Vec<FormattedRun>, style: LogicalStyle);

    /// Appends runs to the cell's text, keeping earlier run formatting.
    ///
    /// With `with_leading_space`, one space is inserted first if the cell
    /// already holds text.
    fn append_formatted_text(
        &mut self,
        cell: CellRef,
        runs: Vec<FormattedRun>,
        style: LogicalStyle,
        with_leading_space: bool,
    );

    /// Sets the style only; text is untouched.
    fn apply_style(&mut self, cell: CellRef, style: LogicalStyle);

    /// Materialises `row` if it does not exist yet.
    fn row_handle_for(&mut self, row: usize) -> RowRef;

    fn has_row(&self, row: usize) -> bool;
}
