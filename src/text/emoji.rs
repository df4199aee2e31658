use once_cell::sync::Lazy;
use regex::Regex;

/// Pictographs, misc symbols, dingbats, emoticons, transport and flags.
static EMOJI_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F300}-\x{1F9FF}",
        r"\x{2600}-\x{26FF}",
        r"\x{2700}-\x{27BF}",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}",
        "]+"
    ))
    .unwrap()
});

/// Markdown cells also lose the emoji presentation selector left behind by `⚠️`.
static MARKDOWN_DECORATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}\x{FE0F}]").unwrap()
});

/// Symbols that carry meaning and get an ASCII stand-in instead of vanishing.
pub const SYMBOL_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2705}", "[OK]"),
    ("\u{274C}", "[X]"),
    ("\u{26A0}", "[!]"),
    ("\u{2713}", "[x]"),
    ("\u{2714}", "[x]"),
    ("\u{2717}", "[ ]"),
    ("\u{2718}", "[ ]"),
    ("\u{2606}", "*"),
    ("\u{2605}", "*"),
    ("\u{2192}", "-->"),
    ("\u{FE0F}", ""),
];

pub fn strip_emojis(text: &str) -> String {
    EMOJI_RUN.replace_all(text, "").into_owned()
}

pub fn replace_symbols(text: &str) -> String {
    SYMBOL_REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Swap known symbols for ASCII tags, then drop whatever emoji is left.
///
/// The replaced symbols live inside the stripped ranges, so the order matters.
pub fn remove_emojis(text: &str) -> String {
    strip_emojis(&replace_symbols(text))
}

/// Clean one markdown source line: decoration goes, arrows become `->`.
pub fn clean_markdown_line(line: &str) -> String {
    MARKDOWN_DECORATION
        .replace_all(line, "")
        .replace('\u{2192}', "->")
}
