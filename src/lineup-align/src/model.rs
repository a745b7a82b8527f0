//! In-memory text buffer addressed by line and character column.
//!
//! The buffer is a vector of lines split on `\n` and joined back with `\n`,
//! so any input round-trips byte-for-byte (carriage returns are ordinary line
//! content). All addressing is in Unicode scalar values, never bytes, so no
//! edit can split a character.
//!
//! Marks are right-gravity tracking handles: an edit before a mark shifts it,
//! an insertion exactly at a mark pushes it past the inserted text, and a
//! deletion covering a mark collapses it to the start of the deleted range.

use crate::error::{AlignError, AlignResult};

/// An exact location in the buffer: line index plus char offset in that line.
///
/// A column equal to the line's char count addresses the line boundary (the
/// implicit `\n`, or the end of the buffer on the last line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line index.
    pub line: usize,
    /// 0-based char offset within the line.
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One occurrence of the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatch {
    /// First character of the occurrence.
    pub start: Position,
    /// One past the last character of the occurrence.
    pub end: Position,
}

/// Handle to a tracking mark registered with a [`TextModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkId(usize);

/// Mutable, line-addressable text buffer.
#[derive(Debug, Clone)]
pub struct TextModel {
    lines: Vec<String>,
    marks: Vec<Option<Position>>,
}

impl TextModel {
    /// Build a model from text. `""` becomes a single empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            marks: Vec::new(),
        }
    }

    /// Serialize the buffer back to text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines in the buffer (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The text of a line, without its terminating newline.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Char count of a line. Panics if the line does not exist.
    fn line_len(&self, index: usize) -> usize {
        self.lines[index].chars().count()
    }

    /// Whether `pos` addresses a character or a line boundary in the buffer.
    pub fn contains(&self, pos: Position) -> bool {
        pos.line < self.lines.len() && pos.column <= self.line_len(pos.line)
    }

    fn check(&self, pos: Position) -> AlignResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(AlignError::OutOfBounds {
                line: pos.line,
                column: pos.column,
            })
        }
    }

    /// The character at `pos`: a line boundary reads as `'\n'`, the very end
    /// of the buffer as `None`.
    pub fn char_at(&self, pos: Position) -> Option<char> {
        let line = self.lines.get(pos.line)?;
        match line.chars().nth(pos.column) {
            Some(c) => Some(c),
            None if pos.column == self.line_len(pos.line) && pos.line + 1 < self.lines.len() => {
                Some('\n')
            }
            None => None,
        }
    }

    /// The position one character after `pos`, or `None` at the buffer end.
    pub fn next_position(&self, pos: Position) -> Option<Position> {
        if pos.column < self.line_len(pos.line) {
            Some(Position::new(pos.line, pos.column + 1))
        } else if pos.line + 1 < self.lines.len() {
            Some(Position::new(pos.line + 1, 0))
        } else {
            None
        }
    }

    /// Byte offset of char `column` within line `line_index`.
    fn byte_offset(&self, line_index: usize, column: usize) -> usize {
        let line = &self.lines[line_index];
        line.char_indices()
            .nth(column)
            .map(|(byte, _)| byte)
            .unwrap_or(line.len())
    }

    /// Register a right-gravity mark at `pos`.
    pub fn create_mark(&mut self, pos: Position) -> AlignResult<MarkId> {
        self.check(pos)?;
        self.marks.push(Some(pos));
        Ok(MarkId(self.marks.len() - 1))
    }

    /// Current position of a live mark.
    pub fn mark_position(&self, mark: MarkId) -> Option<Position> {
        self.marks.get(mark.0).copied().flatten()
    }

    /// Unregister a mark, returning its final position.
    pub fn remove_mark(&mut self, mark: MarkId) -> Position {
        self.marks[mark.0].take().expect("mark already removed")
    }

    /// Insert `text` at `pos`, returning the position one past the inserted
    /// text. Marks at or after `pos` shift forward.
    pub fn insert(&mut self, pos: Position, text: &str) -> AlignResult<Position> {
        self.check(pos)?;

        let byte = self.byte_offset(pos.line, pos.column);
        let tail = self.lines[pos.line].split_off(byte);

        let mut segments = text.split('\n');
        // split always yields at least one segment
        let first = segments.next().unwrap_or("");
        self.lines[pos.line].push_str(first);

        let mut end = Position::new(pos.line, pos.column + first.chars().count());
        for segment in segments {
            end = Position::new(end.line + 1, segment.chars().count());
            self.lines.insert(end.line, segment.to_string());
        }
        self.lines[end.line].push_str(&tail);

        let newlines = end.line - pos.line;
        for slot in self.marks.iter_mut().flatten() {
            if *slot >= pos {
                if slot.line == pos.line {
                    let past = slot.column - pos.column;
                    *slot = Position::new(end.line, end.column + past);
                } else {
                    slot.line += newlines;
                }
            }
        }

        Ok(end)
    }

    /// Delete the range `[start, end)`. Marks inside the range collapse to
    /// `start`; marks after it shift back.
    pub fn delete(&mut self, start: Position, end: Position) -> AlignResult<()> {
        self.check(start)?;
        self.check(end)?;
        if end < start {
            return Err(AlignError::OutOfBounds {
                line: end.line,
                column: end.column,
            });
        }

        let start_byte = self.byte_offset(start.line, start.column);
        if start.line == end.line {
            let end_byte = self.byte_offset(end.line, end.column);
            self.lines[start.line].replace_range(start_byte..end_byte, "");
        } else {
            let end_byte = self.byte_offset(end.line, end.column);
            let tail = self.lines[end.line].split_off(end_byte);
            self.lines[start.line].truncate(start_byte);
            self.lines[start.line].push_str(&tail);
            self.lines.drain(start.line + 1..=end.line);
        }

        let removed_lines = end.line - start.line;
        for slot in self.marks.iter_mut().flatten() {
            if *slot <= start {
                continue;
            }
            if *slot <= end {
                *slot = start;
            } else if slot.line == end.line {
                *slot = Position::new(start.line, start.column + (slot.column - end.column));
            } else {
                slot.line -= removed_lines;
            }
        }

        Ok(())
    }

    /// Replace the range `[start, end)` with `text`, returning the position
    /// one past the inserted text.
    pub fn replace(&mut self, start: Position, end: Position, text: &str) -> AlignResult<Position> {
        self.delete(start, end)?;
        self.insert(start, text)
    }
}
