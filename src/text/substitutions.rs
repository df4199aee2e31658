use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("substitution `{value}` is not valid shell-quoted text")]
    Unparsable { value: String },
    #[error("substitution `{value}` must have exactly two parts (FROM TO), found {found}")]
    WrongArity { value: String, found: usize },
    #[error("substitution pattern must not be empty")]
    EmptyPattern,
}

/// A literal `from` -> `to` text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

impl Substitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self, SubstitutionError> {
        let from = from.into();
        if from.is_empty() {
            return Err(SubstitutionError::EmptyPattern);
        }
        Ok(Self { from, to: to.into() })
    }
}

/// Tidy-ups for print output and headings left behind after emoji removal.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("print(\" Libraries", "print(\"Libraries"),
    (
        "print(\"Libraries imported successfully\")",
        "print(\"Libraries loaded\")",
    ),
    ("print(\" Data", "print(\"Data"),
    ("print(\" Loaded", "print(\"Loaded"),
    ("print(\" Model", "print(\"Model"),
    ("print(\" Optimal", "print(\"Optimal"),
    ("print(\" Timestamp", "print(\"Timestamp"),
    ("print(f\" ", "print(f\""),
    ("[OK] Libraries", "Libraries"),
    ("[OK] Data", "Data"),
    ("[OK] Loaded", "Loaded"),
    ("[OK] Model", "Model"),
    ("Note: KEY", "KEY"),
    ("COMPLETE [OK]", "COMPLETE"),
    ("Status: COMPLETE *", "Status: COMPLETE"),
    ("#  PHASE", "# PHASE"),
    ("##  ", "## "),
];

pub fn default_substitutions() -> Vec<Substitution> {
    DEFAULT_SUBSTITUTIONS
        .iter()
        .map(|(from, to)| Substitution {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect()
}

/// Assemble the `tidy` table: built-in pairs (unless `no_defaults`), then
/// configured pairs, then pairs given on the command line.
pub fn tidy_substitutions(
    no_defaults: bool,
    configured: &[Substitution],
    extra: Vec<Substitution>,
) -> Vec<Substitution> {
    let mut subs = if no_defaults {
        Vec::new()
    } else {
        default_substitutions()
    };
    subs.extend(configured.iter().cloned());
    subs.extend(extra);
    subs
}

/// Apply every substitution in order, each over the whole text.
pub fn apply_substitutions(text: &str, subs: &[Substitution]) -> String {
    subs.iter()
        .filter(|sub| !sub.from.is_empty())
        .fold(text.to_string(), |acc, sub| acc.replace(&sub.from, &sub.to))
}

/// Parse a `"FROM" "TO"` pair written with shell quoting.
pub fn parse_substitution(value: &str) -> Result<Substitution, SubstitutionError> {
    let parts = shlex::split(value).ok_or_else(|| SubstitutionError::Unparsable {
        value: value.to_string(),
    })?;

    match <[String; 2]>::try_from(parts) {
        Ok([from, to]) => Substitution::new(from, to),
        Err(parts) => Err(SubstitutionError::WrongArity {
            value: value.to_string(),
            found: parts.len(),
        }),
    }
}
