use crate::sink::{CellRef, LogicalStyle};

/// A `<br>` at the end of an input line that the next line may continue.
///
/// At most one is armed at a time. It is taken when the next line arrives and
/// either consumed or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingBreak {
    /// Continues a heading on new rows at column 0.
    Heading { level: usize, carry: String },
    /// Continues a list item's detail in the column right of the item.
    List {
        col: usize,
        /// The detail cell later lines append to, once one exists.
        cell: Option<CellRef>,
        style: LogicalStyle,
        carry: String,
    },
    /// Continues a block quote in its column.
    Quote { col: usize, carry: String },
    /// Continues plain text in the same column.
    SameColumn {
        col: usize,
        style: LogicalStyle,
        carry: String,
    },
}

impl PendingBreak {
    pub fn name(&self) -> &'static str {
        match self {
            PendingBreak::Heading { .. } => "heading",
            PendingBreak::List { .. } => "list",
            PendingBreak::Quote { .. } => "quote",
            PendingBreak::SameColumn { .. } => "same-column",
        }
    }
}
