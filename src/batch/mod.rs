//! Apply one cleanup pass to every notebook in a directory.

mod io;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::AppError;
use crate::notebook::{clean_notebook_text, tidy_notebook_text, NotebookError};
use crate::text::{remove_emojis, Substitution};

pub use io::{discover, read_text, write_text};

/// One transformation over a notebook file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pass {
    /// Comment stripping for code cells, decoration removal for markdown.
    Clean,
    /// Emoji removal over the raw file text.
    RemoveEmojis,
    /// Literal substitutions over every string in the notebook.
    Tidy(Vec<Substitution>),
}

impl Pass {
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Clean => "clean",
            Pass::RemoveEmojis => "remove-emojis",
            Pass::Tidy(_) => "tidy",
        }
    }

    pub fn apply(&self, text: &str) -> Result<String, NotebookError> {
        match self {
            Pass::Clean => clean_notebook_text(text),
            Pass::RemoveEmojis => Ok(remove_emojis(text)),
            Pass::Tidy(subs) => tidy_notebook_text(text, subs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub dir: PathBuf,
    pub extension: String,
    /// Report what would change without writing.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Changed,
    Unchanged,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub changed: Vec<PathBuf>,
}

impl BatchReport {
    fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        if outcome == FileOutcome::Changed {
            self.changed.push(path.clone());
        }
        self.processed.push(path);
    }
}

/// Run `pass` over every matching file, stopping at the first failure.
pub fn run_pass(pass: &Pass, options: &BatchOptions) -> Result<BatchReport, AppError> {
    let files = discover(&options.dir, &options.extension)?;
    info!(
        pass = pass.name(),
        dir = %options.dir.display(),
        files = files.len(),
        dry_run = options.dry_run,
        "starting pass"
    );

    let mut report = BatchReport::default();
    for path in files {
        debug!(path = %path.display(), "processing");
        let original = read_text(&path)?;
        let updated = pass
            .apply(&original)
            .map_err(|source| AppError::Notebook {
                path: path.clone(),
                source,
            })?;

        let outcome = if updated == original {
            FileOutcome::Unchanged
        } else {
            if !options.dry_run {
                write_text(&path, &updated)?;
            }
            FileOutcome::Changed
        };

        info!(path = %path.display(), ?outcome, "processed");
        report.record(path, outcome);
    }

    Ok(report)
}
