//! Rendering state carried from one input line to the next.
//!
//! Handlers read the fields freely, but after writing they report what they
//! did as a [`Transition`] and [`RenderState::apply`] performs the update.

use crate::{
    parsing::{
        blocks::{
            ListLevel,
            list_depth::{depth_for_indent, parent_depth_for_child_paragraph},
        },
        scan::TAB_WIDTH,
    },
    sink::CellRef,
};

use super::pending::PendingBreak;

/// What the most recently materialised row holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowType {
    #[default]
    None,
    Blank,
    Heading,
    HorizontalRule,
    Other,
}

/// What was last written to a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    #[default]
    None,
    Normal,
    Bullet,
    Number,
    Code,
    Heading,
    Other,
}

/// Which kind of content wants a row, for blank-row reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowReuse {
    HorizontalRule,
    BlockQuote,
    BulletItem,
    NumberItem,
    CodeLine,
    TableRow,
}

/// The numbered item that indented lines may append to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedNumber {
    pub indent: usize,
    pub col: usize,
}

/// The last plain-text write, for same-indent appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalAnchor {
    pub row: usize,
    pub indent: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlockExtent {
    /// Indentation of the opening fence.
    pub fence_indent: usize,
    /// Indentation of the first code line; sets how much every line loses.
    pub base_indent: Option<usize>,
    /// First and last written rows.
    pub rows: Option<(usize, usize)>,
    pub col: usize,
}

impl CodeBlockExtent {
    fn reset_rows(&mut self) {
        self.base_indent = None;
        self.rows = None;
        self.col = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableExtent {
    pub start_col: usize,
    pub header_row: Option<usize>,
    /// First and last body rows.
    pub body_rows: Option<(usize, usize)>,
    pub end_col: Option<usize>,
}

impl TableExtent {
    pub fn record_row(&mut self, row: usize, last_col: Option<usize>) {
        if self.header_row.is_none() {
            self.header_row = Some(row);
            self.body_rows = None;
            self.end_col = last_col;
        } else {
            let first = self.body_rows.map_or(row, |(first, _)| first);
            self.body_rows = Some((first, row));
            self.end_col = self.end_col.max(last_col);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteExtent {
    pub first_row: usize,
    pub last_row: usize,
    pub col: usize,
    /// The cell later quote text is appended to.
    pub cell: CellRef,
}

/// What a handler just wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    MarkdownBlank { row: usize },
    MarkdownBlankNoRow,
    AutoBlank,
    HorizontalRule,
    Heading,
    TableSeparator,
    TableRow { col: usize },
    CodeLine { col: usize },
    BulletItem { at: CellRef },
    NumberedItem { indent: usize, col: usize },
    BlockQuoteLine { at: CellRef },
    BlockQuoteAppend,
    NormalIntoOpenQuote { at: CellRef },
    NormalAppend { at: CellRef, indent: usize },
    NormalText { at: CellRef, indent: usize, list_note: bool },
}

#[derive(Debug, Clone)]
pub struct RenderState {
    pub merge_cols: usize,
    /// Next row to materialise.
    pub row_index: usize,
    pub list_stack: Vec<ListLevel>,
    pub last_row_type: RowType,
    pub in_code_block: bool,
    pub last_line_was_table: bool,

    pub last_blank_from_markdown: bool,
    pub last_blank_row: Option<usize>,
    pub last_blank_after_table: bool,

    pub nested_number: Option<NestedNumber>,

    pub last_content: ContentType,
    pub last_content_col: usize,
    pub last_content_was_table: bool,

    pub code_block: CodeBlockExtent,
    pub table: TableExtent,

    pub in_heading_paragraph: bool,
    pub in_list_block: bool,
    pub last_normal: Option<NormalAnchor>,

    pub quote: Option<QuoteExtent>,
    pub last_was_block_quote: bool,

    pub bullet_detail: Option<CellRef>,

    pub pending: Option<PendingBreak>,
}

impl RenderState {
    /// Fresh state for one document; at least one column is always available.
    pub fn new(merge_cols: usize) -> Self {
        Self {
            merge_cols: merge_cols.max(1),
            row_index: 0,
            list_stack: vec![],
            last_row_type: RowType::default(),
            in_code_block: false,
            last_line_was_table: false,
            last_blank_from_markdown: false,
            last_blank_row: None,
            last_blank_after_table: false,
            nested_number: None,
            last_content: ContentType::default(),
            last_content_col: 0,
            last_content_was_table: false,
            code_block: CodeBlockExtent::default(),
            table: TableExtent::default(),
            in_heading_paragraph: false,
            in_list_block: false,
            last_normal: None,
            quote: None,
            last_was_block_quote: false,
            bullet_detail: None,
            pending: None,
        }
    }

    pub fn last_col_index(&self) -> usize {
        self.merge_cols - 1
    }

    pub fn clamp_col(&self, col: usize) -> usize {
        col.min(self.last_col_index())
    }

    /// A blank row written for an input blank line is the previous row.
    fn blank_row_is_last(&self) -> bool {
        self.last_row_type == RowType::Blank && self.last_blank_from_markdown && self.row_index > 0
    }

    /// The literal blank row directly above, if `kind` may take it over.
    pub fn reusable_blank_row(&self, kind: RowReuse) -> Option<usize> {
        if self.last_blank_after_table || !self.blank_row_is_last() {
            return None;
        }
        let allowed = match kind {
            RowReuse::HorizontalRule => true,
            RowReuse::BlockQuote => {
                self.last_content != ContentType::Heading && !self.last_was_block_quote
            }
            RowReuse::BulletItem | RowReuse::NumberItem => {
                self.last_content != ContentType::Heading
            }
            RowReuse::CodeLine | RowReuse::TableRow => matches!(
                self.last_content,
                ContentType::Bullet | ContentType::Number | ContentType::Normal
            ),
        };
        allowed.then(|| self.row_index - 1)
    }

    /// Whether the row above is a literal blank line that plain text may fill.
    pub fn blank_after_literal_line(&self) -> bool {
        self.last_row_type == RowType::Blank
            && self.last_blank_from_markdown
            && self.last_blank_row.is_some()
    }

    /// Whether an input blank line should be swallowed without a row.
    pub fn blank_line_adds_no_row(&self) -> bool {
        matches!(self.last_row_type, RowType::Blank | RowType::HorizontalRule)
    }

    /// Leading width to strip from a code line indented by `indent`.
    pub fn code_trim_width(&mut self, indent: usize) -> usize {
        let base = *self.code_block.base_indent.get_or_insert(indent);
        indent.min(base)
    }

    pub fn record_code_line(&mut self, row: usize, col: usize) {
        let code = &mut self.code_block;
        match code.rows {
            Some((first, _)) => code.rows = Some((first, row)),
            None => {
                code.rows = Some((row, row));
                code.col = col;
            }
        }
    }

    /// Flips in/out of a code block, forgetting the rows of the previous one.
    pub fn toggle_code_block(&mut self, fence_indent: usize) {
        if !self.in_code_block {
            self.code_block.fence_indent = fence_indent;
        }
        self.in_code_block = !self.in_code_block;
        self.last_line_was_table = false;
        self.code_block.reset_rows();
    }

    pub fn reset_on_block_boundary(&mut self) {
        self.bullet_detail = None;
        self.last_normal = None;
        self.in_heading_paragraph = false;
        self.pending = None;
    }

    /// Leaves list context. The stack itself is kept for later indent lookups.
    pub fn clear_list_context(&mut self) {
        self.in_list_block = false;
        self.nested_number = None;
    }

    fn wrote_other_row(&mut self, table: bool) {
        self.last_row_type = RowType::Other;
        self.last_line_was_table = table;
        self.clear_blank_tracking();
    }

    fn clear_blank_tracking(&mut self) {
        self.last_blank_from_markdown = false;
        self.last_blank_row = None;
        self.last_blank_after_table = false;
    }

    fn cut_paragraph_linking(&mut self) {
        self.bullet_detail = None;
        self.last_normal = None;
    }

    fn content(&mut self, kind: ContentType, col: usize) {
        self.last_content = kind;
        self.last_content_col = col;
        self.last_content_was_table = false;
    }

    pub(crate) fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::MarkdownBlank { row } => {
                self.last_row_type = RowType::Blank;
                self.last_line_was_table = false;
                self.last_blank_from_markdown = true;
                self.last_blank_row = Some(row);
                self.last_blank_after_table = self.last_content_was_table;
            }
            Transition::MarkdownBlankNoRow => {
                self.last_blank_from_markdown = true;
                if self.last_row_type == RowType::Blank && self.row_index > 0 {
                    self.last_blank_row = Some(self.row_index - 1);
                }
                self.last_blank_after_table = self.last_content_was_table;
            }
            Transition::AutoBlank => {
                self.last_row_type = RowType::Blank;
                self.last_line_was_table = false;
                self.clear_blank_tracking();
                self.last_was_block_quote = false;
            }
            Transition::HorizontalRule => {
                self.last_row_type = RowType::HorizontalRule;
                self.last_line_was_table = false;
                self.clear_blank_tracking();
                self.last_was_block_quote = false;
                self.last_content_was_table = false;
            }
            Transition::Heading => {
                self.last_row_type = RowType::Heading;
                self.last_line_was_table = false;
                self.clear_blank_tracking();
                self.content(ContentType::Heading, 0);
                self.in_heading_paragraph = true;
                self.cut_paragraph_linking();
                self.last_was_block_quote = false;
            }
            Transition::TableSeparator => {
                self.wrote_other_row(true);
                self.last_was_block_quote = false;
                self.last_content_was_table = true;
            }
            Transition::TableRow { col } => {
                self.wrote_other_row(true);
                self.last_content = ContentType::Other;
                self.last_content_col = col;
                self.last_content_was_table = true;
                self.last_was_block_quote = false;
            }
            Transition::CodeLine { col } => {
                self.wrote_other_row(false);
                self.content(ContentType::Code, col);
                self.last_was_block_quote = false;
                self.cut_paragraph_linking();
            }
            Transition::BulletItem { at } => {
                self.wrote_other_row(false);
                self.nested_number = None;
                self.content(ContentType::Bullet, at.col);
                self.bullet_detail = Some(at);
                self.in_list_block = true;
                self.last_normal = None;
                self.last_was_block_quote = false;
            }
            Transition::NumberedItem { indent, col } => {
                self.wrote_other_row(false);
                self.bullet_detail = None;
                self.nested_number = Some(NestedNumber { indent, col });
                self.content(ContentType::Number, col);
                self.in_list_block = true;
                self.last_normal = None;
                self.last_was_block_quote = false;
            }
            Transition::BlockQuoteLine { at } => {
                self.wrote_other_row(false);
                let quote = self.quote.get_or_insert(QuoteExtent {
                    first_row: at.row,
                    last_row: at.row,
                    col: at.col,
                    cell: at,
                });
                quote.last_row = at.row;
                quote.cell = at;
                self.content(ContentType::Normal, at.col);
                self.last_was_block_quote = true;
                self.cut_paragraph_linking();
            }
            Transition::BlockQuoteAppend => {
                self.wrote_other_row(false);
                let col = self.quote.map_or(self.last_content_col, |q| q.cell.col);
                self.content(ContentType::Normal, col);
                self.last_was_block_quote = true;
                self.cut_paragraph_linking();
            }
            Transition::NormalIntoOpenQuote { at } => {
                self.wrote_other_row(false);
                self.content(ContentType::Normal, at.col);
                self.last_normal = Some(NormalAnchor {
                    row: at.row,
                    indent: 0,
                });
                self.in_heading_paragraph = false;
            }
            Transition::NormalAppend { at, indent } => {
                self.wrote_other_row(false);
                self.content(ContentType::Normal, at.col);
                if indent == 0 {
                    self.last_normal = Some(NormalAnchor {
                        row: at.row,
                        indent: 0,
                    });
                    self.bullet_detail = None;
                }
            }
            Transition::NormalText {
                at,
                indent,
                list_note,
            } => {
                self.wrote_other_row(false);
                self.content(ContentType::Normal, at.col);
                self.last_normal = Some(NormalAnchor {
                    row: at.row,
                    indent,
                });
                self.last_was_block_quote = false;
                if list_note {
                    self.in_list_block = false;
                }
                if indent == 0 {
                    self.bullet_detail = None;
                }
            }
        }
    }

    /// Where a plain-text line should go when it does not append anywhere.
    pub fn placement_for_normal(&self, indent: usize) -> NormalPlacement {
        let blank_before = self.blank_after_literal_line();
        let heading_paragraph = self.in_heading_paragraph && indent == 0 && !self.in_list_block;
        let list_note = self.in_list_block && indent == 0 && blank_before;
        let list_child = self.in_list_block && indent > 0 && blank_before;

        let col = if heading_paragraph || list_note {
            0
        } else if list_child {
            2 + parent_depth_for_child_paragraph(&self.list_stack)
        } else if indent == 0 {
            0
        } else if !self.list_stack.is_empty() {
            1 + depth_for_indent(&self.list_stack, indent)
        } else {
            1 + indent / 2
        };

        let between_paragraphs = indent == 0
            && blank_before
            && !self.in_list_block
            && matches!(self.last_content, ContentType::Normal | ContentType::Code);
        let reuse_blank =
            !self.last_blank_after_table && (list_note || list_child || between_paragraphs);

        NormalPlacement {
            col: self.clamp_col(col),
            list_note,
            reuse_blank,
        }
    }
}

/// Column and row choice for a plain-text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalPlacement {
    pub col: usize,
    pub list_note: bool,
    pub reuse_blank: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Indentation width of a code line's leading whitespace, in columns.
fn whitespace_width(c: char) -> Option<usize> {
    match c {
        ' ' => Some(1),
        '\t' => Some(TAB_WIDTH),
        _ => None,
    }
}

/// Drops up to `width` columns of leading indentation, never splitting a tab.
pub fn strip_indent(raw: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in raw.char_indices() {
        match whitespace_width(c) {
            Some(w) if used + w <= width => used += w,
            _ => return &raw[i..],
        }
    }
    ""
}
