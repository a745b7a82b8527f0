//! Lineup Align - Literal substitution that keeps parameters lined up.
//!
//! Replaces every occurrence of a search text in a source file while
//! re-indenting the continuation lines of parenthesized argument lists that
//! were aligned on the opening parenthesis, so hand-aligned call sites stay
//! aligned after the name changes length. Tabs and spaces are both handled;
//! each line keeps its own indentation style.
//!
//! The search is case sensitive, literal (no regular expressions), and not
//! word-boundary aware. The input is assumed to be consistently aligned
//! already; broken alignment is not repaired.
//!
//! # Example
//!
//! ```
//! use lineup_align::transform;
//!
//! let input = "\
//! function_call (param1,
//!                param2);
//! ";
//! let output = transform(input, "function_call", "renamed").unwrap();
//! assert_eq!(output, "\
//! renamed (param1,
//!          param2);
//! ");
//! ```

mod column;
mod error;
mod model;
mod realign;
mod search;
mod source;

pub use column::{TAB_WIDTH, text_start_column, visual_column};
pub use error::{AlignError, AlignResult};
pub use model::{MarkId, Position, TextMatch, TextModel};
pub use realign::{Substitution, SubstitutionReport, transform};
pub use search::find_next;
pub use source::{load, save};

use std::path::Path;

/// Replace every occurrence of `search` in the file at `path`, realigning
/// continuation lines, and write the result back in place.
///
/// The file is only written when the whole pass succeeded, and the write is
/// atomic, so an error never leaves a partially substituted file.
pub fn substitute_file(
    path: &Path,
    search: &str,
    replacement: &str,
) -> AlignResult<SubstitutionReport> {
    let substitution = Substitution::new(search, replacement)?;
    let mut model = load(path)?;
    let report = substitution.apply(&mut model)?;
    save(&model, path)?;
    Ok(report)
}
