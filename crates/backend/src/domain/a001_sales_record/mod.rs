pub mod errors;
pub mod repository;

pub use errors::DatasetError;
