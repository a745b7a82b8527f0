//! Visual column arithmetic under tab expansion.
//!
//! Columns are 0-based and counted in screen cells: every character occupies
//! one cell except the tab, which jumps to the next multiple of [`TAB_WIDTH`].

/// Width of a tab stop in visual columns.
pub const TAB_WIDTH: usize = 8;

/// Compute the visual column of the character at `char_offset` within `line`.
///
/// Scans from the start of the line; a tab advances to the next tab stop
/// strictly greater than the current column. Offsets past the end of the line
/// yield the column one past the last character.
pub fn visual_column(line: &str, char_offset: usize) -> usize {
    let mut column = 0;
    for c in line.chars().take(char_offset) {
        if c == '\t' {
            column = column - (column % TAB_WIDTH) + TAB_WIDTH;
        } else {
            column += 1;
        }
    }
    column
}

/// Char offset of the first non-whitespace character of `line`.
///
/// Returns `None` for a blank line or a line consisting only of whitespace:
/// such a line has no text start.
pub fn text_start_offset(line: &str) -> Option<usize> {
    line.chars().position(|c| !c.is_whitespace())
}

/// Visual column of the first non-whitespace character of `line`, if any.
pub fn text_start_column(line: &str) -> Option<usize> {
    text_start_offset(line).map(|offset| visual_column(line, offset))
}

/// Whether the leading whitespace run of `line` contains a tab.
///
/// Decides which character set is used when the line's indentation is
/// rewritten.
pub fn indentation_contains_tab(line: &str) -> bool {
    for c in line.chars() {
        if c == '\t' {
            return true;
        }
        if !c.is_whitespace() {
            break;
        }
    }
    false
}

/// Build an indentation run spanning exactly `width` visual columns.
///
/// Tab style emits as many tabs as fit and pads the remainder with spaces;
/// space style emits spaces only.
pub fn make_indentation(width: usize, tabs: bool) -> String {
    if tabs {
        let mut indent = "\t".repeat(width / TAB_WIDTH);
        indent.push_str(&" ".repeat(width % TAB_WIDTH));
        indent
    } else {
        " ".repeat(width)
    }
}
