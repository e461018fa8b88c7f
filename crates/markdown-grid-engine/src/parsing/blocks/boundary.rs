//! Block boundary actions and the per-kind policies that select them.
//!
//! Actions always run in [`BoundaryAction::ORDER`], whichever subset a policy
//! selects. Closing a quote must precede the paragraph-linkage reset, for
//! example, and keeping the order in one place means no handler re-derives it.

/// One step taken at a block boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryAction {
    CloseTable,
    CloseBlockQuote,
    AutoBlankIfPrevHeading,
    ResetParagraph,
    ClearListContext,
}

impl BoundaryAction {
    /// The only execution order of boundary actions.
    pub const ORDER: [BoundaryAction; 5] = [
        BoundaryAction::CloseTable,
        BoundaryAction::CloseBlockQuote,
        BoundaryAction::AutoBlankIfPrevHeading,
        BoundaryAction::ResetParagraph,
        BoundaryAction::ClearListContext,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of boundary actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPolicy(u8);

impl BoundaryPolicy {
    pub const NONE: Self = Self::of(&[]);
    pub const CODE_FENCE: Self = Self::of(&[
        BoundaryAction::CloseTable,
        BoundaryAction::CloseBlockQuote,
        BoundaryAction::ResetParagraph,
    ]);
    pub const MARKDOWN_BLANK: Self =
        Self::of(&[BoundaryAction::CloseBlockQuote, BoundaryAction::ResetParagraph]);
    pub const HORIZONTAL_RULE: Self = Self::of(&[
        BoundaryAction::CloseTable,
        BoundaryAction::CloseBlockQuote,
        BoundaryAction::ResetParagraph,
        BoundaryAction::ClearListContext,
    ]);
    pub const HEADING: Self = Self::HORIZONTAL_RULE;
    pub const BULLET_ITEM: Self =
        Self::of(&[BoundaryAction::CloseBlockQuote, BoundaryAction::ResetParagraph]);
    pub const NUMBER_ITEM: Self = Self::of(&[
        BoundaryAction::CloseBlockQuote,
        BoundaryAction::AutoBlankIfPrevHeading,
        BoundaryAction::ResetParagraph,
    ]);
    pub const TABLE_LINE: Self =
        Self::of(&[BoundaryAction::CloseBlockQuote, BoundaryAction::ResetParagraph]);

    const fn of(actions: &[BoundaryAction]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < actions.len() {
            bits |= actions[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub fn contains(self, action: BoundaryAction) -> bool {
        self.0 & action.bit() != 0
    }

    /// Selected actions in execution order.
    pub fn actions(self) -> impl Iterator<Item = BoundaryAction> {
        BoundaryAction::ORDER
            .into_iter()
            .filter(move |&a| self.contains(a))
    }
}

/// Whatever owns the open blocks a boundary can close.
pub trait BoundaryTarget {
    fn in_table(&self) -> bool;
    fn close_table(&mut self);
    fn close_block_quote(&mut self);
    fn auto_blank_if_prev_heading(&mut self);
    fn reset_paragraph(&mut self);
    fn clear_list_context(&mut self);
}

/// Runs the policy's actions against `target` in the fixed order.
pub fn apply(policy: BoundaryPolicy, target: &mut impl BoundaryTarget) {
    for action in policy.actions() {
        match action {
            BoundaryAction::CloseTable => target.close_table(),
            BoundaryAction::CloseBlockQuote => target.close_block_quote(),
            BoundaryAction::AutoBlankIfPrevHeading => target.auto_blank_if_prev_heading(),
            BoundaryAction::ResetParagraph => target.reset_paragraph(),
            BoundaryAction::ClearListContext => target.clear_list_context(),
        }
    }
}

/// Closes an open table as soon as a line that is not table-like arrives.
pub fn close_table_if_leaving(is_table_like: bool, target: &mut impl BoundaryTarget) {
    if target.in_table() && !is_table_like {
        target.close_table();
    }
}
