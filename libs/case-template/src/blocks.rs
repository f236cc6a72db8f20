//! # Structural Blocks
//!
//! Wholesale replacement of the body of a bracketed block that follows a
//! marker, e.g. everything between the braces of `refinementRegions { .. }`.
//! Runs before token substitution, so replacements may contain tokens.

use crate::error::{TemplateError, TemplateResult};
use std::ops::Range;

/// Supported bracket pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `( )`
    Paren,
    /// `[ ]`
    Bracket,
    /// `{ }`
    Brace,
}

impl Delimiter {
    pub fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }

    /// Looks up the pair by its opening character.
    pub fn from_open(open: char) -> Option<Self> {
        match open {
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Bracket),
            '{' => Some(Delimiter::Brace),
            _ => None,
        }
    }
}

/// One block to replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRule {
    pub marker: String,
    pub delimiter: Delimiter,
    pub replacement: String,
}

impl BlockRule {
    pub fn new(
        marker: impl Into<String>,
        delimiter: Delimiter,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            marker: marker.into(),
            delimiter,
            replacement: replacement.into(),
        }
    }
}

/// Finds the body of the block following the first occurrence of `marker`.
///
/// Scans from the first opening delimiter after the marker, counting
/// nesting of that bracket kind only. The returned byte range lies strictly
/// between the delimiters, without leading and trailing whitespace.
/// Returns `None` when the marker does not occur.
///
/// # Example
///
/// ```rust
/// use case_template::{find_balanced, Delimiter};
///
/// let text = "levels ( (1 2) ) ;";
/// let range = find_balanced(text, "levels", Delimiter::Paren).unwrap().unwrap();
/// assert_eq!(&text[range], "(1 2)");
/// ```
pub fn find_balanced(
    text: &str,
    marker: &str,
    delimiter: Delimiter,
) -> TemplateResult<Option<Range<usize>>> {
    let Some(marker_at) = text.find(marker) else {
        return Ok(None);
    };
    let unbalanced = || TemplateError::Unbalanced {
        marker: marker.to_string(),
        delimiter: delimiter.open(),
    };

    let after_marker = marker_at + marker.len();
    let open_at = text[after_marker..]
        .find(delimiter.open())
        .map(|offset| after_marker + offset)
        .ok_or_else(unbalanced)?;

    let mut depth = 0usize;
    let mut close_at = None;
    for (offset, c) in text[open_at..].char_indices() {
        if c == delimiter.open() {
            depth += 1;
        } else if c == delimiter.close() {
            depth -= 1;
            if depth == 0 {
                close_at = Some(open_at + offset);
                break;
            }
        }
    }
    let close_at = close_at.ok_or_else(unbalanced)?;

    let body_start = open_at + delimiter.open().len_utf8();
    let body = &text[body_start..close_at];
    let start = body_start + (body.len() - body.trim_start().len());
    let end = (close_at - (body.len() - body.trim_end().len())).max(start);
    Ok(Some(start..end))
}

/// Applies every rule in order. Rules whose marker is absent are skipped.
pub fn replace_blocks(text: &str, rules: &[BlockRule]) -> TemplateResult<String> {
    let mut out = text.to_string();
    for rule in rules {
        if let Some(range) = find_balanced(&out, &rule.marker, rule.delimiter)? {
            out.replace_range(range, &rule.replacement);
        }
    }
    Ok(out)
}
