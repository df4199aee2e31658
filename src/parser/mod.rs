mod scanner;
mod stripper;
mod types;

pub use scanner::{classify, find_comment_start, COMMENT_MARKER};
pub use stripper::{collapse_blank_lines, strip_comments};
pub use types::{LineKind, ScanState};
