//! Nesting depth of list items from their indentation.
//!
//! The stack is a plain `Vec<ListLevel>`, outermost first, with strictly
//! increasing indents. [`update_depth`] is the only mutator; the other two
//! functions are read-only queries for lines that sit inside a list.

/// One open list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLevel {
    pub indent: usize,
    pub ordered: bool,
}

/// Records a list item at `indent` and returns its depth.
///
/// A deeper indent opens a level. Otherwise levels deeper than `indent` are
/// popped and the level landed on takes the item's indent and ordering.
pub fn update_depth(stack: &mut Vec<ListLevel>, indent: usize, ordered: bool) -> usize {
    let level = ListLevel { indent, ordered };
    let Some(innermost) = stack.last() else {
        stack.push(level);
        return 0;
    };

    if indent > innermost.indent {
        stack.push(level);
        return stack.len() - 1;
    }

    let mut depth = stack.len() - 1;
    while depth > 0 && indent < stack[depth].indent {
        stack.pop();
        depth -= 1;
    }
    stack[depth] = level;
    depth
}

/// Number of levels `indent` is nested under, without touching the stack.
pub fn depth_for_indent(stack: &[ListLevel], indent: usize) -> usize {
    stack.iter().take_while(|l| indent > l.indent).count()
}

/// Depth of the innermost ordered level, else of the innermost level.
pub fn parent_depth_for_child_paragraph(stack: &[ListLevel]) -> usize {
    stack
        .iter()
        .rposition(|l| l.ordered)
        .unwrap_or(stack.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn level(indent: usize, ordered: bool) -> ListLevel {
        ListLevel { indent, ordered }
    }

    fn depths(items: &[(usize, bool)]) -> (Vec<usize>, Vec<ListLevel>) {
        let mut stack = vec![];
        let d = items
            .iter()
            .map(|&(indent, ordered)| update_depth(&mut stack, indent, ordered))
            .collect();
        (d, stack)
    }

    #[test]
    fn first_item_is_depth_zero_at_any_indent() {
        let (d, stack) = depths(&[(4, false)]);
        assert_eq!(d, vec![0]);
        assert_eq!(stack, vec![level(4, false)]);
    }

    #[test]
    fn deeper_indent_opens_a_level() {
        let (d, _) = depths(&[(0, false), (2, false), (4, true)]);
        assert_eq!(d, vec![0, 1, 2]);
    }

    #[test]
    fn returning_pops_back_to_matching_level() {
        let (d, stack) = depths(&[(0, false), (2, false), (4, false), (2, true)]);
        assert_eq!(d, vec![0, 1, 2, 1]);
        assert_eq!(stack, vec![level(0, false), level(2, true)]);
    }

    #[test]
    fn indent_between_levels_lands_on_the_outer_one() {
        // 2 is shallower than the level at 4, so that level is popped and the
        // root level is rewritten with the new indent.
        let (d, stack) = depths(&[(0, false), (4, false), (2, false)]);
        assert_eq!(d, vec![0, 1, 0]);
        assert_eq!(stack, vec![level(2, false)]);
    }

    #[test]
    fn shallower_than_root_stays_at_root() {
        let (d, stack) = depths(&[(2, false), (4, false), (0, true)]);
        assert_eq!(d, vec![0, 1, 0]);
        assert_eq!(stack, vec![level(0, true)]);
    }

    #[test]
    fn same_depth_switches_list_type() {
        let (_, stack) = depths(&[(0, false), (0, true)]);
        assert_eq!(stack, vec![level(0, true)]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(3, 2)]
    #[case(10, 3)]
    fn depth_for_indent_counts_enclosing_levels(#[case] indent: usize, #[case] expected: usize) {
        let stack = vec![level(0, false), level(2, true), level(4, false)];
        assert_eq!(depth_for_indent(&stack, indent), expected);
    }

    #[test]
    fn depth_for_indent_on_empty_stack() {
        assert_eq!(depth_for_indent(&[], 8), 0);
    }

    #[test]
    fn child_paragraph_parent_prefers_ordered() {
        let stack = vec![level(0, true), level(2, false)];
        assert_eq!(parent_depth_for_child_paragraph(&stack), 0);
        let stack = vec![level(0, false), level(2, false)];
        assert_eq!(parent_depth_for_child_paragraph(&stack), 1);
        assert_eq!(parent_depth_for_child_paragraph(&[]), 0);
    }

    #[test]
    fn popping_restores_reentered_level() {
        let mut stack = vec![];
        update_depth(&mut stack, 0, true);
        update_depth(&mut stack, 2, false);
        update_depth(&mut stack, 4, false);
        assert_eq!(update_depth(&mut stack, 0, true), 0);
        assert_eq!(stack, vec![level(0, true)]);
    }
}
