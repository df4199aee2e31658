//! Plain-text cleanup passes shared by the notebook commands.

mod emoji;
mod substitutions;

pub use emoji::{
    clean_markdown_line, remove_emojis, replace_symbols, strip_emojis, SYMBOL_REPLACEMENTS,
};
pub use substitutions::{
    apply_substitutions, default_substitutions, parse_substitution, tidy_substitutions,
    Substitution, SubstitutionError, DEFAULT_SUBSTITUTIONS,
};

/// Decode file bytes as UTF-8, falling back to Latin-1.
///
/// Returns the text and whether the fallback was needed.
pub fn decode_text(bytes: Vec<u8>) -> (String, bool) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(err) => {
            let text = err.into_bytes().iter().map(|&b| b as char).collect();
            (text, true)
        }
    }
}
