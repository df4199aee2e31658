// tests/cli_parsing.rs
// Command-line parsing for the three passes

use clap::Parser;
use nbscrub::cli::{Cli, Commands};

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_clean_with_dir_and_dry_run() {
        let cli = Cli::try_parse_from(["nbscrub", "clean", "--dir", "nbs", "--dry-run"]).unwrap();
        let target = cli.command.target();
        assert_eq!(target.dir.as_deref(), Some(std::path::Path::new("nbs")));
        assert!(target.dry_run);
        assert!(matches!(cli.command, Commands::Clean(_)));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["nbscrub", "remove-emojis", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.target().dir.is_none());
    }

    #[test]
    fn test_tidy_collects_substitutions() {
        let cli = Cli::try_parse_from([
            "nbscrub",
            "tidy",
            "--no-defaults",
            "--substitute",
            "'Note: ' ''",
            "--substitute",
            r#""[OK] " """#,
        ])
        .unwrap();

        let Commands::Tidy(args) = cli.command else {
            panic!("expected tidy");
        };
        assert!(args.no_defaults);
        assert_eq!(args.substitutions.len(), 2);
        assert_eq!(args.substitutions[0].from, "Note: ");
        assert_eq!(args.substitutions[1].from, "[OK] ");
        assert_eq!(args.substitutions[1].to, "");
    }

    #[test]
    fn test_bad_substitution_is_rejected() {
        assert!(Cli::try_parse_from(["nbscrub", "tidy", "--substitute", "one two three"]).is_err());
        assert!(Cli::try_parse_from(["nbscrub", "tidy", "--substitute", "'' x"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["nbscrub"]).is_err());
    }
}
