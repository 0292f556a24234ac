// Command-line front end: mine a transaction file, write the generators.

use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use talky_g::{read_database_file, save_generators, talky_g, ReaderConfig};

#[derive(Parser)]
#[command(name = "talky-g")]
#[command(about = "Mine frequent generator itemsets with diffsets", long_about = None)]
struct Cli {
    /// Minimum support, as an absolute transaction count
    min_sup: usize,

    /// Transaction database, one `label;item;item;...` line per transaction
    input: PathBuf,

    /// Where to write the generators
    output: PathBuf,

    /// Field delimiter of the database
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,

    /// Leading label fields to skip on every line
    #[arg(short, long, default_value_t = 1)]
    skip_fields: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        // clap only prints usage for some error kinds
        if err.kind() == ErrorKind::ValueValidation {
            let _ = err.print();
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(2);
        }
        err.exit()
    });

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ReaderConfig {
        delimiter: cli.delimiter,
        skip_fields: cli.skip_fields,
    };
    let database = read_database_file(&cli.input, &config).context("failed to read database")?;
    info!(
        transactions = database.len(),
        path = %cli.input.display(),
        "database read"
    );

    let started = Instant::now();
    let index = talky_g(&database, cli.min_sup);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        generators = index.len(),
        "Talky-G finished"
    );

    save_generators(&cli.output, &index).context("failed to save results")?;
    info!(path = %cli.output.display(), "results saved");
    Ok(())
}
