use std::process;

use nbscrub::batch::{run_pass, BatchOptions, Pass};
use nbscrub::cli::{Cli, Commands};
use nbscrub::error::AppError;
use nbscrub::text::tidy_substitutions;
use tracing_subscriber::{filter::LevelFilter, fmt};

fn main() {
    let cli = Cli::parse();
    init_tracing(determine_log_level(&cli));

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn determine_log_level(cli: &Cli) -> LevelFilter {
    match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = nbscrub::config::load()?;
    let target = cli.command.target();
    let options = BatchOptions {
        dir: target
            .dir
            .clone()
            .unwrap_or_else(|| settings.notebooks_dir.clone()),
        extension: settings.extension.clone(),
        dry_run: target.dry_run,
    };

    let pass = match cli.command {
        Commands::Clean(_) => Pass::Clean,
        Commands::RemoveEmojis(_) => Pass::RemoveEmojis,
        Commands::Tidy(args) => Pass::Tidy(tidy_substitutions(
            args.no_defaults,
            &settings.substitutions,
            args.substitutions,
        )),
    };

    let report = run_pass(&pass, &options)?;
    let verb = if options.dry_run { "would change" } else { "changed" };
    println!(
        "{}: {verb} {} of {} notebooks in {}",
        pass.name(),
        report.changed.len(),
        report.processed.len(),
        options.dir.display()
    );
    Ok(())
}
