use std::path::PathBuf;
use thiserror::Error;

/// Ошибки чтения/записи файла продаж. Все они фатальны для текущей операции.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unexpected columns in {path}: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}
