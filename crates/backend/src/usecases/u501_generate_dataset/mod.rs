//! u501: synthetic sales dataset generation

pub mod executor;
pub mod generator;

pub use executor::{GenerateRequest, GenerationSummary};
pub use generator::{generate_sales_records, GeneratedDataset};
