use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use expense_tracker::{
    domain::{IdGenerator, SequentialIds, TimestampIds, UuidIds},
    run, ExpenseError,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IdKind {
    Sequential,
    Uuid,
    Timestamp,
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", version)]
struct Args {
    /// CSV script of add/update/remove rows.
    file: PathBuf,
    /// Only list records whose title contains this text (totals are unaffected).
    #[arg(long, env = "EXPENSE_TRACKER_SEARCH", default_value = "")]
    search: String,
    /// How ids of new records are generated.
    #[arg(long, env = "EXPENSE_TRACKER_IDS", value_enum, default_value_t = IdKind::Sequential)]
    ids: IdKind,
    /// Date preset in the form (YYYY-MM-DD), defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Log level written to stderr.
    #[arg(long, env = "EXPENSE_TRACKER_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("expense_tracker={}", args.log_level))
        .with_writer(io::stderr)
        .init();

    let mut ids: Box<dyn IdGenerator> = match args.ids {
        IdKind::Sequential => Box::new(SequentialIds::new()),
        IdKind::Uuid => Box::new(UuidIds),
        IdKind::Timestamp => Box::new(TimestampIds::default()),
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    match run(&args.file, &args.search, ids.as_mut(), today, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, io::stderr());
            ExitCode::FAILURE
        }
    }
}

// Reaches stderr whatever the log level.
fn report_failure<W: Write>(err: &ExpenseError, mut out: W) {
    tracing::error!("{err}");
    let _ = writeln!(out, "expense_tracker: {err}");
}
