/// Position of the scanner relative to string literals on the current line.
///
/// State never carries over to the next line, so a literal that is left open at
/// the end of a line is simply forgotten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    OutsideLiteral,
    /// Inside a literal opened by the given quote character.
    InsideLiteral(char),
}

/// Classification of a raw source line, decided on its trimmed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#!` interpreter directive. Kept verbatim.
    Directive,
    /// Line made only of a comment. Dropped.
    Comment,
    /// Code with a `#` somewhere after it; needs a literal-aware scan.
    TrailingComment,
    /// No comment marker at all.
    Code,
}
