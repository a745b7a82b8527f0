//! Substitution with parenthesis realignment.
//!
//! Replacing a call-site name changes its length, which breaks the column
//! alignment of continuation lines that were hand-aligned to the opening
//! parenthesis:
//!
//! ```text
//! function_call (param1,
//!                param2,
//!                param3);
//! ```
//!
//! For every occurrence of the search text, the engine looks for an opening
//! parenthesis further on the same line, then walks the following lines while
//! their first non-whitespace character sits exactly on the parenthesis
//! column, rewriting each such line's leading whitespace to absorb the length
//! delta of the replacement. A line indented with tabs keeps tabs; a line
//! indented with spaces keeps spaces. Lines indented to any other column stop
//! the walk and are left untouched, so irregular continuation styles are
//! never rewritten.
//!
//! The input is assumed to be consistently aligned already; the engine
//! adjusts alignment, it does not repair broken alignment.

use crate::column::{
    indentation_contains_tab, make_indentation, text_start_column, text_start_offset,
    visual_column,
};
use crate::error::{AlignError, AlignResult};
use crate::model::{Position, TextMatch, TextModel};
use crate::search::find_next;

/// A validated search/replacement pair.
#[derive(Debug, Clone)]
pub struct Substitution {
    search: String,
    replacement: String,
    /// Length change in chars introduced by each replacement.
    delta: isize,
}

/// Counts from one substitution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Number of occurrences replaced.
    pub replacements: usize,
    /// Number of continuation lines whose indentation was rewritten.
    pub lines_realigned: usize,
}

impl Substitution {
    /// Create a substitution. The search text must not be empty; an empty
    /// replacement deletes every occurrence.
    pub fn new(search: impl Into<String>, replacement: impl Into<String>) -> AlignResult<Self> {
        let search = search.into();
        let replacement = replacement.into();
        if search.is_empty() {
            return Err(AlignError::EmptySearchText);
        }
        let delta = replacement.chars().count() as isize - search.chars().count() as isize;
        Ok(Self {
            search,
            replacement,
            delta,
        })
    }

    /// Replace every occurrence in `model`, realigning continuation lines.
    ///
    /// Occurrences are processed strictly in order; each search resumes after
    /// the previous replacement, so the text inserted by a replacement is
    /// never matched again. Any error leaves the model in an unspecified
    /// state and must abort the run without saving.
    pub fn apply(&self, model: &mut TextModel) -> AlignResult<SubstitutionReport> {
        let mut report = SubstitutionReport::default();
        let mut cursor = Position::new(0, 0);

        while let Some(occurrence) = find_next(model, cursor, &self.search)? {
            cursor = self.replace_occurrence(model, occurrence, &mut report)?;
            report.replacements += 1;
        }

        tracing::debug!(
            replacements = report.replacements,
            lines_realigned = report.lines_realigned,
            "substitution pass finished"
        );
        Ok(report)
    }

    /// Process one occurrence: probe, replace, cascade. Returns the position
    /// the outer search resumes from.
    fn replace_occurrence(
        &self,
        model: &mut TextModel,
        occurrence: TextMatch,
        report: &mut SubstitutionReport,
    ) -> AlignResult<Position> {
        // Probe before replacing: the column found past the match is already
        // the target column, since the replacement lands on the same line
        // before the parenthesis.
        let paren_column = parenthesis_column(model, occurrence.end);

        let mark = model.create_mark(occurrence.end)?;
        model.replace(occurrence.start, occurrence.end, &self.replacement)?;

        // A zero delta leaves every aligned line correct; skipping the walk
        // keeps the output byte-for-byte identical.
        if let Some(target) = paren_column
            && self.delta != 0
        {
            let anchor_line = model
                .mark_position(mark)
                .map(|pos| pos.line)
                .unwrap_or(occurrence.start.line);
            self.cascade(model, anchor_line, target, report)?;
        }

        Ok(model.remove_mark(mark))
    }

    /// Walk the lines after `anchor_line`, realigning every line whose text
    /// starts exactly on `target` until one deviates.
    fn cascade(
        &self,
        model: &mut TextModel,
        anchor_line: usize,
        target: usize,
        report: &mut SubstitutionReport,
    ) -> AlignResult<()> {
        // Realignment never adds or removes lines, so the line count taken
        // here stays valid for the whole walk.
        for line_index in anchor_line + 1..model.line_count() {
            let line = match model.line(line_index) {
                Some(line) => line,
                None => break,
            };
            if text_start_column(line) != Some(target) {
                break;
            }
            self.realign_line(model, line_index)?;
            report.lines_realigned += 1;
        }
        Ok(())
    }

    /// Rewrite the leading whitespace of one qualifying line so its text
    /// start shifts by the replacement's length delta, preserving the line's
    /// own tab or space style.
    fn realign_line(&self, model: &mut TextModel, line_index: usize) -> AlignResult<()> {
        let line = model.line(line_index).ok_or(AlignError::OutOfBounds {
            line: line_index,
            column: 0,
        })?;
        let start_offset = text_start_offset(line).ok_or(AlignError::OutOfBounds {
            line: line_index,
            column: 0,
        })?;
        let old_width = visual_column(line, start_offset);
        let tabs = indentation_contains_tab(line);

        let new_width = old_width as isize + self.delta;
        if new_width < 0 {
            return Err(AlignError::alignment_violation(line_index, new_width));
        }

        model.replace(
            Position::new(line_index, 0),
            Position::new(line_index, start_offset),
            &make_indentation(new_width as usize, tabs),
        )?;
        Ok(())
    }
}

/// Visual column just after the first `(` between `from` and the end of its
/// line, or `None` when the line has no parenthesis past `from`.
fn parenthesis_column(model: &TextModel, from: Position) -> Option<usize> {
    let line = model.line(from.line)?;
    let offset = line
        .chars()
        .enumerate()
        .skip(from.column)
        .find(|&(_, c)| c == '(')
        .map(|(offset, _)| offset)?;
    Some(visual_column(line, offset + 1))
}

/// Replace every occurrence of `search` in `text` with `replacement`,
/// keeping continuation lines aligned. Pure; no I/O.
pub fn transform(text: &str, search: &str, replacement: &str) -> AlignResult<String> {
    let mut model = TextModel::from_text(text);
    Substitution::new(search, replacement)?.apply(&mut model)?;
    Ok(model.to_text())
}
