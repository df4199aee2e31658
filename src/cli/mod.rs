use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::text::{parse_substitution, Substitution};

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "nbscrub",
    version,
    about = "Scrub comments, emojis and noisy output from Jupyter notebooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase logging verbosity (-v, -vv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Strip comments from code cells and emoji decoration from markdown cells.
    Clean(TargetArgs),
    /// Remove emojis from the whole notebook text, keeping ASCII tags for known symbols.
    RemoveEmojis(TargetArgs),
    /// Apply literal substitutions that tidy printed output and headings.
    Tidy(TidyArgs),
}

impl Commands {
    pub fn target(&self) -> &TargetArgs {
        match self {
            Commands::Clean(target) | Commands::RemoveEmojis(target) => target,
            Commands::Tidy(args) => &args.target,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Directory holding the notebooks (defaults to the configured `notebooks_dir`).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Report which notebooks would change without writing them.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TidyArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// Extra replacement written as two shell-quoted words: '"FROM" "TO"'.
    #[arg(long = "substitute", value_name = "PAIR", value_parser = parse_substitution)]
    pub substitutions: Vec<Substitution>,
    /// Skip the built-in substitution table.
    #[arg(long)]
    pub no_defaults: bool,
}
