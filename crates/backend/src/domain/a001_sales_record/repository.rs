use contracts::domain::a001_sales_record::{SalesRecord, SalesRow, CSV_COLUMNS};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::errors::DatasetError;

/// Reads the sales CSV and derives `hora_dia` / `dia_semana` for every row.
///
/// The header must contain exactly the six known columns (any order). Any bad
/// record fails the whole load.
pub fn load_rows(path: &Path) -> Result<Vec<SalesRow>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records_from(file, path)?;
    tracing::info!(
        "Loaded {} sales records from {}",
        records.len(),
        path.display()
    );
    Ok(records.into_iter().map(SalesRow::from_record).collect())
}

pub fn read_records_from<R: Read>(source: R, path: &Path) -> Result<Vec<SalesRecord>, DatasetError> {
    let csv_error = |source: csv::Error| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_error)?.clone();
    validate_headers(&headers, path)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<SalesRecord>() {
        records.push(result.map_err(csv_error)?);
    }
    Ok(records)
}

fn validate_headers(headers: &csv::StringRecord, path: &Path) -> Result<(), DatasetError> {
    let found: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let found_set: HashSet<&str> = found.iter().map(String::as_str).collect();
    let expected_set: HashSet<&str> = CSV_COLUMNS.iter().copied().collect();

    if found.len() != CSV_COLUMNS.len() || found_set != expected_set {
        return Err(DatasetError::SchemaMismatch {
            path: path.to_path_buf(),
            expected: CSV_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found,
        });
    }
    Ok(())
}

/// Writes records to `path`, replacing whatever was there.
///
/// No temp file, no backup: a missing parent directory is an error.
pub fn write_records(path: &Path, records: &[SalesRecord]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_records_to(file, records, path)
}

pub fn write_records_to<W: Write>(
    sink: W,
    records: &[SalesRecord],
    path: &Path,
) -> Result<(), DatasetError> {
    let csv_error = |source: csv::Error| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Header is written explicitly so an empty dataset still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(CSV_COLUMNS).map_err(csv_error)?;
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
