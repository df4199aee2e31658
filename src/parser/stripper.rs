use super::scanner::{classify, find_comment_start};
use super::types::LineKind;

/// Remove comments from a cell's source lines.
///
/// Whole-line comments are dropped, trailing comments are cut off (unless the
/// `#` sits inside a quoted literal) and runs of blank lines are collapsed to
/// one. `#!` directive lines are left untouched.
pub fn strip_comments<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let kept = lines.iter().filter_map(|line| strip_line(line.as_ref()));
    collapse_blank_lines(kept)
}

fn strip_line(line: &str) -> Option<String> {
    match classify(line) {
        LineKind::Comment => None,
        LineKind::Directive | LineKind::Code => Some(line.to_string()),
        LineKind::TrailingComment => match find_comment_start(line) {
            None => Some(line.to_string()),
            Some(idx) => {
                let code = line[..idx].trim_end();
                if code.is_empty() {
                    None
                } else {
                    Some(format!("{code}\n"))
                }
            }
        },
    }
}

/// Drop every blank line that directly follows another blank line.
pub fn collapse_blank_lines<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut prev_blank = false;

    for line in lines {
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        prev_blank = blank;
        out.push(line);
    }

    out
}
