pub mod aggregate;
pub mod timestamp_format;

pub use aggregate::{SalesRecord, SalesRow, CSV_COLUMNS};
