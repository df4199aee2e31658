use super::types::{LineKind, ScanState};

pub const COMMENT_MARKER: char = '#';
const DIRECTIVE_PREFIX: &str = "#!";
const ESCAPE: char = '\\';

/// Classify a line by its trimmed content.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.starts_with(DIRECTIVE_PREFIX) {
        LineKind::Directive
    } else if trimmed.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else if line.contains(COMMENT_MARKER) {
        LineKind::TrailingComment
    } else {
        LineKind::Code
    }
}

impl ScanState {
    /// Step over `ch`. `prev` is the character right before it on the line.
    pub fn advance(self, ch: char, prev: Option<char>) -> Self {
        if !is_quote(ch) || prev == Some(ESCAPE) {
            return self;
        }
        match self {
            ScanState::OutsideLiteral => ScanState::InsideLiteral(ch),
            ScanState::InsideLiteral(open) if open == ch => ScanState::OutsideLiteral,
            inside => inside,
        }
    }

    pub fn in_literal(self) -> bool {
        matches!(self, ScanState::InsideLiteral(_))
    }
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// Byte offset of the first comment marker that sits outside a string literal.
///
/// Only single-line `'...'` and `"..."` literals are understood; triple-quoted
/// strings spanning several lines will confuse the scan.
pub fn find_comment_start(line: &str) -> Option<usize> {
    let mut state = ScanState::default();
    let mut prev = None;

    for (idx, ch) in line.char_indices() {
        if ch == COMMENT_MARKER && !state.in_literal() {
            return Some(idx);
        }
        state = state.advance(ch, prev);
        prev = Some(ch);
    }

    None
}
