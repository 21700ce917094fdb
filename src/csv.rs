use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{Amount, Denomination, ParseError};

/// Errors that can occur when reading or writing amount rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: invalid amount: {source}")]
    Amount { line: usize, source: ParseError },

    #[error("failed to write output: {0}")]
    Write(#[from] csv::Error),
}

/// A labelled amount read from an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRecord {
    pub label: String,
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
struct InputRow {
    label: String,
    amount: String,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    label: &'a str,
    sats: i64,
    btc: String,
    display: String,
}

/// Read `label,amount` rows from a csv file
pub fn read_amounts(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<AmountRecord, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let amount = row
                .amount
                .parse()
                .map_err(|source| CsvError::Amount { line, source })?;
            Ok(AmountRecord {
                label: row.label,
                amount,
            })
        }))
}

/// Write normalised amount rows in csv format.
///
/// `display` uses the automatic unit unless a denomination is given.
pub fn write_amounts<'a>(
    writer: impl io::Write,
    records: impl IntoIterator<Item = &'a AmountRecord>,
    denomination: Option<Denomination>,
) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);

    for record in records {
        let display = match denomination {
            Some(denomination) => record.amount.format_in(denomination),
            None => record.amount.to_string(),
        };
        writer.serialize(OutputRow {
            label: &record.label,
            sats: record.amount.to_sat(),
            btc: record.amount.marshal_text(),
            display,
        })?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
