//! Literal forward search over a text model.

use crate::error::{AlignError, AlignResult};
use crate::model::{Position, TextMatch, TextModel};

/// Find the first occurrence of `needle` at or after `from`.
///
/// The scan is exact and case sensitive; the buffer is read as a char stream
/// with `\n` between lines, so a needle containing newlines matches across
/// line boundaries. Returns `Ok(None)` when no occurrence remains. An empty
/// needle is rejected.
///
/// Callers wanting every non-overlapping occurrence resume from the end of
/// the previous match.
pub fn find_next(
    model: &TextModel,
    from: Position,
    needle: &str,
) -> AlignResult<Option<TextMatch>> {
    if needle.is_empty() {
        return Err(AlignError::EmptySearchText);
    }

    let needle: Vec<char> = needle.chars().collect();
    let mut start = from;
    loop {
        if let Some(end) = match_at(model, start, &needle) {
            return Ok(Some(TextMatch { start, end }));
        }
        match model.next_position(start) {
            Some(next) => start = next,
            None => return Ok(None),
        }
    }
}

/// If `needle` occurs at `start`, return the position one past it.
fn match_at(model: &TextModel, start: Position, needle: &[char]) -> Option<Position> {
    let mut pos = start;
    for (i, &expected) in needle.iter().enumerate() {
        if model.char_at(pos)? != expected {
            return None;
        }
        if i + 1 < needle.len() {
            pos = model.next_position(pos)?;
        }
    }
    model
        .next_position(pos)
        .or(Some(Position::new(pos.line, pos.column + 1)))
}
