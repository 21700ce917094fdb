use std::env;
use std::io;
use std::process::ExitCode;

use btc_amount::Denomination;
use btc_amount::csv::{read_amounts, write_amounts};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: btc-amount <amounts.csv> [denomination]");
        return ExitCode::from(2);
    };

    let denomination = match args.next().map(|arg| arg.parse::<Denomination>()) {
        None => None,
        Some(Ok(denomination)) => Some(denomination),
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let rows = match read_amounts(&path) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let records: Vec<_> = rows
        .filter_map(|result| result.inspect_err(|e| warn!("{e}")).ok())
        .collect();
    info!(count = records.len(), "amounts read");

    if let Err(e) = write_amounts(io::stdout().lock(), &records, denomination) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
